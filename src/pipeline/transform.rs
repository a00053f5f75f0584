//! Text transformations applied to file contents.
//!
//! Each transformation is a pure function from content to modified content.
//! Line-based transformations split on `'\n'` directly rather than using
//! `str::lines()`, so a trailing newline contributes a final empty line.

use chrono::{DateTime, Local};

/// A text transformation selectable from the modification menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Prefix each line with a right-aligned line number.
    NumberLines,
    /// Convert the entire content to uppercase.
    Uppercase,
    /// Prepend a header recording when the file was processed.
    TimestampHeader,
    /// Reverse the order of lines.
    ReverseLines,
    /// Prepend a summary block with line, word, and character counts.
    WordCountSummary,
}

impl Transform {
    /// All transformations in menu order (choice 1 through 5).
    pub const ALL: [Transform; 5] = [
        Transform::NumberLines,
        Transform::Uppercase,
        Transform::TimestampHeader,
        Transform::ReverseLines,
        Transform::WordCountSummary,
    ];

    /// Label shown in the modification menu.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Transform::NumberLines => "Add line numbers",
            Transform::Uppercase => "Convert to uppercase",
            Transform::TimestampHeader => "Add timestamp header",
            Transform::ReverseLines => "Reverse lines",
            Transform::WordCountSummary => "Count words and add summary",
        }
    }

    /// Confirmation message printed after the transformation is applied.
    pub fn applied_message(&self) -> &'static str {
        match self {
            Transform::NumberLines => "Added line numbers",
            Transform::Uppercase => "Converted to uppercase",
            Transform::TimestampHeader => "Added timestamp header",
            Transform::ReverseLines => "Reversed line order",
            Transform::WordCountSummary => "Added word count summary",
        }
    }

    /// Apply this transformation to `content`, returning the modified text.
    ///
    /// The timestamp header uses the local wall-clock time at the moment of
    /// the call; everything else is a pure function of the content.
    pub fn apply(&self, content: &str) -> String {
        match self {
            Transform::NumberLines => number_lines(content),
            Transform::Uppercase => uppercase(content),
            Transform::TimestampHeader => timestamp_header(content, Local::now()),
            Transform::ReverseLines => reverse_lines(content),
            Transform::WordCountSummary => word_count_summary(content),
        }
    }
}

/// Basic statistics over file content.
///
/// Counts follow the same conventions as the transformations themselves:
/// lines are `'\n'`-separated segments (a trailing newline yields a final
/// empty line), words are whitespace-delimited tokens, and characters are
/// Unicode scalar values rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl ContentStats {
    pub fn of(content: &str) -> Self {
        Self {
            lines: content.split('\n').count(),
            words: content.split_whitespace().count(),
            chars: content.chars().count(),
        }
    }
}

/// Prefix each line with its 1-based number, right-aligned to width 3.
pub fn number_lines(content: &str) -> String {
    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("{:3}: {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert the entire content to uppercase.
pub fn uppercase(content: &str) -> String {
    content.to_uppercase()
}

/// Prepend a processing timestamp header to the content.
///
/// The timestamp is taken as a parameter so callers control the clock;
/// `Transform::apply` passes the current local time.
pub fn timestamp_header(content: &str, when: DateTime<Local>) -> String {
    format!(
        "=== File processed on {} ===\n\n{}",
        when.format("%Y-%m-%d %H:%M:%S"),
        content
    )
}

/// Reverse the order of lines, keeping each line's characters intact.
pub fn reverse_lines(content: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();
    lines.reverse();
    lines.join("\n")
}

/// Prepend a summary block with line, word, and character counts.
pub fn word_count_summary(content: &str) -> String {
    let stats = ContentStats::of(content);
    format!(
        "=== SUMMARY ===\nLines: {}\nWords: {}\nCharacters: {}\n=== END SUMMARY ===\n\n{}",
        stats.lines, stats.words, stats.chars, content
    )
}
