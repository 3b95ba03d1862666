//! Display utilities for file information and status messages.

use std::path::Path;

use anyhow::{Context, Result};
use bytesize::ByteSize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, Table};
use console::{Term, style};

use crate::config::APP_NAME;
use crate::types::{FileInfo, ProcessorMode};

/// Longest file name shown before truncation.
const MAX_DISPLAY_NAME: usize = 40;

/// Builds the table listing discovered files.
pub fn file_table(files: &[FileInfo]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(vec!["No", "Name", "Size", "Status"]);

    for (i, file) in files.iter().enumerate() {
        let status = if file.is_encrypted { Cell::new("encrypted").fg(Color::Cyan) } else { Cell::new("unencrypted").fg(Color::Green) };

        table.add_row(vec![Cell::new(i + 1), Cell::new(display_name(&file.path)), Cell::new(ByteSize(file.size)), status]);
    }

    table
}

fn display_name(path: &Path) -> String {
    let name = path.display().to_string();
    if name.chars().count() > MAX_DISPLAY_NAME {
        let head: String = name.chars().take(MAX_DISPLAY_NAME - 3).collect();
        format!("{head}...")
    } else {
        name
    }
}

pub fn show_file_info(files: &[FileInfo]) {
    if files.is_empty() {
        println!("{}", style("No files found").yellow());
        return;
    }

    println!();
    println!("{} {}", style("✓").green(), style(format!("Found {} file(s):", files.len())).bold());
    println!("{}", file_table(files));
    println!();
}

pub fn show_success(mode: ProcessorMode, input: &Path, output: &Path) {
    println!("{} {}", style("✓").green(), style(format!("File {} successfully: {} -> {}", mode.past_tense(), input.display(), output.display())).bold());
}

pub fn show_failure(input: &Path, error: &anyhow::Error) {
    eprintln!("{} {}: {error:#}", style("✗").red(), input.display());
}

pub fn show_source_deleted(path: &Path) {
    println!("{} {}", style("✓").green(), style(format!("Source file deleted: {}", path.display())).bold());
}

pub fn clear_screen() -> Result<()> {
    Term::stdout().clear_screen().context("failed to clear screen")
}

pub fn print_banner() {
    println!("{}", style(APP_NAME).cyan().bold());
    println!("{}", style("Client-side file encryption. Your files never leave your device.").dim());
    println!();
}
