//! Retext: Text File Processing CLI Tool
//!
//! An interactive command-line tool that reads a text file, applies a
//! user-chosen transformation, and writes the result to a derived
//! output file.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use cli::{
    confirm_overwrite, prompt_filename, prompt_menu_action, prompt_replacement_filename,
    prompt_transform, Cli, MenuAction,
};
use pipeline::{derive_output_path, read_file, write_file, ReadError, WriteError, OUTPUT_SUFFIX};
use report::ProcessingSummary;
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_error, print_hint,
    print_info, print_preview, print_step_header, print_success,
};

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_interrupted(&e) => {
            println!();
            println!("Program interrupted by user. Goodbye!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Top-level menu loop. Returns when the user chooses to exit.
fn run() -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    loop {
        match prompt_menu_action()? {
            MenuAction::Process => process_file()?,
            MenuAction::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

/// One full read, transform, write iteration.
///
/// Read and write failures are reported and end the iteration; only
/// prompt failures propagate.
fn process_file() -> Result<()> {
    let started = Instant::now();

    // Step 1: Read the input file
    print_step_header(1, "Read File");
    let input = prompt_filename()?;

    let spinner = create_spinner("Reading file...");
    let content = match read_file(&input) {
        Ok(content) => content,
        Err(e) => {
            spinner.finish_and_clear();
            report_read_error(&e);
            return Ok(());
        }
    };
    let chars_read = content.chars().count();
    finish_with_success(
        &spinner,
        &format!("Read {} characters from '{}'", chars_read, input.display()),
    );

    print_preview(&content);

    // Step 2: Choose and apply a transformation
    print_step_header(2, "Select Transformation");
    let (modified, transformation) = if content.is_empty() {
        print_info("File is empty, nothing to transform");
        (content, None)
    } else {
        let transform = prompt_transform()?;
        let modified = transform.apply(&content);
        print_success(transform.applied_message());
        (modified, Some(transform.menu_label()))
    };

    // Step 3: Write the output file
    print_step_header(3, "Write Output");
    let mut output = derive_output_path(&input, OUTPUT_SUFFIX);
    if output.exists() && !confirm_overwrite(&output)? {
        output = prompt_replacement_filename()?;
    }

    let spinner = create_spinner("Writing file...");
    if let Err(e) = write_file(&output, &modified) {
        spinner.finish_and_clear();
        report_write_error(&e);
        return Ok(());
    }
    let chars_written = modified.chars().count();
    finish_with_success(
        &spinner,
        &format!(
            "Wrote {} characters to '{}'",
            chars_written,
            output.display()
        ),
    );

    let summary = ProcessingSummary {
        input,
        output,
        transformation,
        chars_read,
        chars_written,
        elapsed: started.elapsed(),
    };
    summary.display();

    print_completion();
    Ok(())
}

fn report_read_error(err: &ReadError) {
    print_error(err.label(), &err.to_string());
    if matches!(err, ReadError::Encoding { .. }) {
        print_hint("Try a different encoding or check if it's a binary file");
    }
}

fn report_write_error(err: &WriteError) {
    print_error(err.label(), &err.to_string());
}

/// True when the error chain bottoms out in a Ctrl-C interrupt from a prompt.
fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::Interrupted)
}
