#![doc = include_str!("../README.md")]

mod color;

pub use color::{Color, install_color_eyre};
use inquire::{Password, PasswordDisplayMode, error::InquireResult};

/// Prompt the user for a secret if the value is None. Input is masked and not confirmed.
pub fn password_prompt_when_none(prompt: &str, val: Option<String>) -> InquireResult<String> {
    Ok(if let Some(val) = val {
        val
    } else {
        Password::new(prompt)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?
    })
}
