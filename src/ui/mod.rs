//! UI utilities for terminal output
//!
//! Progress spinners and interactive prompts.

mod prompt;
mod spinner;

pub use prompt::prompt_password;
pub use spinner::{create_spinner, finish_spinner};
