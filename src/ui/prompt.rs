//! Interactive prompts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use inquire::validator::Validation;
use inquire::{Confirm, PasswordDisplayMode, Select};

use crate::secret::Password;
use crate::types::ProcessorMode;

/// Rejects empty passwords; the engine accepts them, the front end does not.
pub fn check_password(password: &str) -> Result<()> {
    ensure!(!password.is_empty(), "please enter a password");
    Ok(())
}

fn password_prompt(message: &str) -> inquire::Password<'_> {
    inquire::Password::new(message).with_display_mode(PasswordDisplayMode::Masked).with_validator(|input: &str| {
        Ok::<_, inquire::CustomUserError>(match check_password(input) {
            Ok(()) => Validation::Valid,
            Err(e) => Validation::Invalid(e.to_string().into()),
        })
    })
}

/// Asks for a new password twice.
pub fn get_encryption_password() -> Result<Password> {
    password_prompt("Enter encryption password:")
        .with_custom_confirmation_message("Confirm password:")
        .with_custom_confirmation_error_message("passwords do not match")
        .prompt()
        .map(Password::from_string)
        .context("password input failed")
}

/// Asks for an existing password once; a mistake surfaces as an authentication failure.
pub fn get_decryption_password() -> Result<Password> {
    password_prompt("Enter decryption password:").without_confirmation().prompt().map(Password::from_string).context("password input failed")
}

pub fn get_password(mode: ProcessorMode) -> Result<Password> {
    match mode {
        ProcessorMode::Encrypt => get_encryption_password(),
        ProcessorMode::Decrypt => get_decryption_password(),
    }
}

pub fn get_processing_mode() -> Result<ProcessorMode> {
    Select::new("Select operation:", vec![ProcessorMode::Encrypt, ProcessorMode::Decrypt]).prompt().context("mode selection failed")
}

pub fn choose_file(files: &[PathBuf]) -> Result<PathBuf> {
    ensure!(!files.is_empty(), "no files available for selection");

    let names: Vec<String> = files.iter().map(|path| path.display().to_string()).collect();
    let selection = Select::new("Select file:", names).raw_prompt().context("file selection failed")?;

    Ok(files[selection.index].clone())
}

pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    confirm(&format!("Output file {} already exists. Overwrite?", path.display()))
}

pub fn confirm_removal(path: &Path, file_type: &str) -> Result<bool> {
    confirm(&format!("Delete {file_type} file {}?", path.display()))
}

fn confirm(message: &str) -> Result<bool> {
    Confirm::new(message).with_default(false).prompt().context("confirmation failed")
}
