pub mod canvas;
pub mod loading;
pub mod page;
pub mod plugin;
