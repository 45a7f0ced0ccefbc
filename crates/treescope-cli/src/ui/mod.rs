mod components;
mod draw;
pub mod tui;
