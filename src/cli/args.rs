//! Command-line argument definitions using clap

use clap::Parser;

/// Retext - Read a text file, apply a transformation, write the result
///
/// The program is fully interactive: filenames and choices are prompted
/// for, so there are no options beyond the standard help and version
/// flags.
#[derive(Parser, Debug)]
#[command(name = "retext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
