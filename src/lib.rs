pub mod config;
pub mod input;
pub mod stick;
pub mod ui;
