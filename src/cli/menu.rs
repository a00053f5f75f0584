//! Menu choice parsing.
//!
//! Both menus read one line and expect an integer choice. Parsing is kept
//! separate from the prompts so the accepted/rejected inputs can be tested
//! without a terminal.

use thiserror::Error;

use crate::pipeline::Transform;

/// Action selected from the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Run one read, transform, write iteration.
    Process,
    /// Leave the menu loop.
    Exit,
}

/// A menu line that could not be turned into a choice.
///
/// The display strings are the exact messages shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// The entered line is not an integer.
    #[error("Please enter a valid number")]
    NotANumber,

    /// The entered integer is not one of the offered choices.
    #[error("Please enter {expected}")]
    OutOfRange { expected: &'static str },
}

/// Parse a top-level menu line into an action.
pub fn parse_menu_action(line: &str) -> Result<MenuAction, InvalidInput> {
    let choice: i64 = line
        .trim()
        .parse()
        .map_err(|_| InvalidInput::NotANumber)?;
    match choice {
        1 => Ok(MenuAction::Process),
        2 => Ok(MenuAction::Exit),
        _ => Err(InvalidInput::OutOfRange { expected: "1 or 2" }),
    }
}

/// Parse a modification menu line into a transformation.
pub fn parse_transform_choice(line: &str) -> Result<Transform, InvalidInput> {
    let choice: i64 = line
        .trim()
        .parse()
        .map_err(|_| InvalidInput::NotANumber)?;
    if (1..=5).contains(&choice) {
        Ok(Transform::ALL[(choice - 1) as usize])
    } else {
        Err(InvalidInput::OutOfRange {
            expected: "a number between 1 and 5",
        })
    }
}
