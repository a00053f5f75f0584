//! Interactive prompts using dialoguer
//!
//! All prompts render on stdout and read until a newline. Ctrl-C during a
//! prompt surfaces as an `Interrupted` I/O error, which the entry point
//! turns into a clean exit.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::{style, Term};
use dialoguer::Input;

use crate::cli::menu::{parse_menu_action, parse_transform_choice, MenuAction};
use crate::pipeline::Transform;
use crate::utils::WARNING;

/// Read one line from the user, allowing an empty answer.
fn read_line(prompt: &str) -> Result<String> {
    let line = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text_on(&Term::stdout())?;
    Ok(line)
}

/// Show the top-level menu and read a choice, re-showing the options after
/// each invalid answer.
pub fn prompt_menu_action() -> Result<MenuAction> {
    loop {
        println!();
        println!("Options:");
        println!("  {} Process a file", style("1.").cyan().bold());
        println!("  {} Exit", style("2.").cyan().bold());

        let line = read_line("Enter your choice (1-2)")?;
        match parse_menu_action(&line) {
            Ok(action) => return Ok(action),
            Err(e) => println!("{}", e),
        }
    }
}

/// Show the modification menu once and read a choice, re-prompting until a
/// valid one is entered.
pub fn prompt_transform() -> Result<Transform> {
    println!();
    println!("Select modification type:");
    for (i, transform) in Transform::ALL.iter().enumerate() {
        println!(
            "  {} {}",
            style(format!("{}.", i + 1)).cyan().bold(),
            transform.menu_label()
        );
    }

    loop {
        let line = read_line("Enter choice (1-5)")?;
        match parse_transform_choice(&line) {
            Ok(transform) => return Ok(transform),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt until a non-empty filename is entered. Leading `~` is expanded.
pub fn prompt_filename() -> Result<PathBuf> {
    loop {
        let entered = read_line("Enter the filename to read")?;
        let trimmed = entered.trim();
        if trimmed.is_empty() {
            println!("Please enter a filename.");
            continue;
        }
        return Ok(PathBuf::from(shellexpand::tilde(trimmed).as_ref()));
    }
}

/// Ask whether an existing output file may be overwritten.
///
/// Only an answer of "y" (any case) accepts; anything else refuses.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let answer = read_line(&format!(
        "{}'{}' already exists. Overwrite? (y/n)",
        WARNING,
        path.display()
    ))?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Prompt for a replacement output filename after a refused overwrite.
///
/// Asked once, taken as-is apart from trimming and `~` expansion; the
/// writer rejects an empty result.
pub fn prompt_replacement_filename() -> Result<PathBuf> {
    let entered = read_line("Enter new filename")?;
    Ok(PathBuf::from(shellexpand::tilde(entered.trim()).as_ref()))
}
