//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};

/// Number of characters shown in a file preview before truncation.
pub const PREVIEW_CHAR_LIMIT: usize = 200;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██████╗ ███████╗████████╗███████╗██╗  ██╗████████╗
    ██╔══██╗██╔════╝╚══██╔══╝██╔════╝╚██╗██╔╝╚══██╔══╝
    ██████╔╝█████╗     ██║   █████╗   ╚███╔╝    ██║
    ██╔══██╗██╔══╝     ██║   ██╔══╝   ██╔██╗    ██║
    ██║  ██║███████╗   ██║   ███████╗██╔╝ ██╗   ██║
    ╚═╝  ╚═╝╚══════╝   ╚═╝   ╚══════╝╚═╝  ╚═╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("✎").magenta().bold(),
        style("Transform text files from your terminal").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print an error message under a short heading such as "File Error"
pub fn print_error(label: &str, message: &str) {
    println!(
        "    {} {}",
        style(format!("{}:", label)).red().bold(),
        style(message).red()
    );
}

/// Print a dim remediation hint below an error message
pub fn print_hint(message: &str) {
    println!("      {}", style(message).dim());
}

/// Print a preview of file content, truncated to [`PREVIEW_CHAR_LIMIT`]
pub fn print_preview(content: &str) {
    println!();
    println!("    {}", style("File preview:").white().bold());
    println!("    {}", style("─".repeat(40)).dim());
    for line in preview_snippet(content).split('\n') {
        println!("    {}", line);
    }
    println!("    {}", style("─".repeat(40)).dim());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("File processing complete!").green().bold()
    );
    println!();
}

/// First [`PREVIEW_CHAR_LIMIT`] characters of `content`, with "..." appended
/// when the content is longer.
pub fn preview_snippet(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
