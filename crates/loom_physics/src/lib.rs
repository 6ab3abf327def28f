pub mod connections;
pub mod forces;
pub mod procgen;
