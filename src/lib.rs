pub mod console_interface;
pub mod core;
pub mod generator;
pub mod levels;
pub mod models;
