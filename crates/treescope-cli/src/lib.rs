mod args;
mod commands;
pub mod config;
mod keymap;
pub mod types;
mod ui;

pub use args::Cli;
pub use commands::run;
