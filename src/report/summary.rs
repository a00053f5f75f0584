//! Processing summary report generation

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of one completed file processing run
#[derive(Debug)]
pub struct ProcessingSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Menu label of the applied transformation, or `None` when the file
    /// was empty and written through unchanged.
    pub transformation: Option<&'static str>,
    pub chars_read: usize,
    pub chars_written: usize,
    pub elapsed: Duration,
}

impl ProcessingSummary {
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PROCESSING SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📂 Input"), Cell::new(self.input.display())]);

        table.add_row(vec![
            Cell::new("💾 Output"),
            Cell::new(self.output.display()),
        ]);

        table.add_row(vec![
            Cell::new("🔧 Transformation"),
            Cell::new(self.transformation.unwrap_or("(none)")),
        ]);

        table.add_row(vec![
            Cell::new("📖 Characters read"),
            Cell::new(self.chars_read),
        ]);

        table.add_row(vec![
            Cell::new("✅ Characters written"),
            Cell::new(self.chars_written)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2?}", self.elapsed)),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
