//! Command-line parsing.
//!
//! Turns a line such as `add /name Alex Yeo /nric S1234567A ...` into a
//! [`Command`]. Field values are validated here with the same value objects the
//! storage layer uses, so a bad value produces the same message whether it was
//! typed or read from disk.

pub mod add_command;
pub mod cli_syntax;
pub mod tokenizer;

pub use add_command::{parse_add, ADD_USAGE};
pub use cli_syntax::Prefix;
pub use tokenizer::{tokenize, ArgumentMultimap};

use crate::commands::Command;
use crate::error::{ParseError, ParseResult};

/// Parse a full command line.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let input = input.trim();
    let (word, args) = input.split_once(char::is_whitespace).unwrap_or((input, ""));

    match word {
        "add" => Ok(Command::Add(parse_add(args)?)),
        "list" => Ok(Command::List),
        "help" | "" => Ok(Command::Help),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
