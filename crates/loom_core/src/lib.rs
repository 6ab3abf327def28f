pub mod config;
pub mod constants;
pub mod tier;
pub mod types;

pub use config::{LoomConfig, PointerPolicy};
pub use constants::*;
pub use tier::*;
pub use types::*;
