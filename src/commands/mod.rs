//! Commands that act on the staff book.

use crate::error::CommandResult;
use crate::models::{Person, Roster};
use crate::parser::ADD_USAGE;

pub const HELP_MESSAGE: &str = "Commands: add, list, help";

/// A parsed command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a person to the roster.
    Add(Person),
    /// Show every person.
    List,
    /// Show usage.
    Help,
}

/// What running a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Text to show the user.
    pub feedback: String,
    /// The new roster, if the command changed it.
    pub roster: Option<Roster>,
}

impl CommandOutcome {
    fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            roster: None,
        }
    }
}

impl Command {
    /// Run the command against `roster`. The input roster is never modified.
    pub fn execute(self, roster: &Roster) -> CommandResult<CommandOutcome> {
        match self {
            Command::Add(person) => {
                let feedback = format!("New person added: {}", summary(&person));
                let roster = roster.with_person(person)?;
                Ok(CommandOutcome {
                    feedback,
                    roster: Some(roster),
                })
            }
            Command::List => {
                if roster.is_empty() {
                    return Ok(CommandOutcome::message("The staff book is empty."));
                }
                let lines: Vec<String> = roster
                    .persons()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| format!("{}. {}", i + 1, summary(p)))
                    .collect();
                Ok(CommandOutcome::message(lines.join("\n")))
            }
            Command::Help => Ok(CommandOutcome::message(format!(
                "{}\n{}",
                HELP_MESSAGE, ADD_USAGE
            ))),
        }
    }
}

fn summary(person: &Person) -> String {
    let mut text = format!(
        "{}; NRIC: {}; Phone: {}; Email: {}; Address: {}; Hired: {}",
        person.name(),
        person.nric(),
        person.phone(),
        person.email(),
        person.address(),
        person.hire()
    );
    if !person.tags().is_empty() {
        text.push_str(&format!("; Tags: {}", person.tags()));
    }
    text
}
