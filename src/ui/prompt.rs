//! Interactive prompts

use dialoguer::{theme::ColorfulTheme, Password};

/// Ask for a password on the terminal without echoing it
pub fn prompt_password(username: &str) -> dialoguer::Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Password for {}", username))
        .interact()
}
