mod matcher;
mod times;

use std::fmt;

pub use matcher::*;
pub use times::*;

use crate::{CallLedger, CallRecord};

/// Selects the calls of one function, optionally restricted by arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallFilter {
    function: String,
    arguments: ArgsFilter,
}

impl CallFilter {
    pub fn new(function: impl Into<String>, arguments: impl Into<ArgsFilter>) -> Self {
        Self {
            function: function.into(),
            arguments: arguments.into(),
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn arguments(&self) -> &ArgsFilter {
        &self.arguments
    }

    pub fn matches(&self, record: &CallRecord) -> bool {
        record.function == self.function && self.arguments.matches(&record.arguments)
    }
}

impl fmt::Display for CallFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.function, self.arguments)
    }
}

/// Number of calls in the ledger selected by the filter.
pub fn count_matching(ledger: &CallLedger, filter: &CallFilter) -> usize {
    ledger.count(|record| filter.matches(record))
}

/// Whether the number of calls selected by the filter is within `times`.
pub fn was_called(ledger: &CallLedger, filter: &CallFilter, times: Times) -> bool {
    times.contains(count_matching(ledger, filter))
}
