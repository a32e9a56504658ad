// Utility Module
// Console input helpers

pub mod console;

pub use console::{prompt_line, read_line, PROMPT};
