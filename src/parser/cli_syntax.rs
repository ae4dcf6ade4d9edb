//! Field prefixes understood by the command parser.

use std::fmt;

/// A marker such as `/name` that introduces a field value in a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("/name");
pub const PREFIX_NRIC: Prefix = Prefix::new("/nric");
pub const PREFIX_PHONE: Prefix = Prefix::new("/phone");
pub const PREFIX_EMAIL: Prefix = Prefix::new("/email");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("/address");
pub const PREFIX_HIRE: Prefix = Prefix::new("/hire");
pub const PREFIX_TAG: Prefix = Prefix::new("/tag");
