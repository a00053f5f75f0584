//! CLI module - argument parsing, menu choices, and interactive prompts

pub mod args;
pub mod menu;
pub mod prompts;

pub use args::Cli;
pub use menu::*;
pub use prompts::*;
