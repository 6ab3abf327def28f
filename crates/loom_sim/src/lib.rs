pub mod field;
pub mod paint;
pub mod pipeline;
pub mod scheduler;
pub mod state;
