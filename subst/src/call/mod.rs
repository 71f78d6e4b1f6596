mod arguments;
mod ledger;

use std::fmt;

pub use arguments::*;
pub use ledger::*;

/// One call made to a substitute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CallRecord {
    pub(crate) function: String,
    pub(crate) arguments: Arguments,
    pub(crate) sequence: usize,
}

impl CallRecord {
    /// Name of the called function or property.
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Position of the call in the ledger, starting at 0.
    pub fn sequence(&self) -> usize {
        self.sequence
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}{}", self.sequence, self.function, self.arguments)
    }
}
