use crate::{Arguments, CallFilter, CallRecord};

/// Append-only history of the calls made to one substitute.
///
/// Records are never removed; a test that needs a clean history creates a new substitute.
#[derive(Debug, Default)]
pub struct CallLedger(Vec<CallRecord>);

impl CallLedger {
    /// Appends a record and returns its sequence index.
    pub(crate) fn append(&mut self, function: impl Into<String>, arguments: Arguments) -> usize {
        let sequence = self.0.len();
        self.0.push(CallRecord {
            function: function.into(),
            arguments,
            sequence,
        });
        sequence
    }

    pub fn iter(&self) -> impl Iterator<Item = &CallRecord> + '_ {
        self.0.iter()
    }

    pub fn count(&self, predicate: impl Fn(&CallRecord) -> bool) -> usize {
        self.0.iter().filter(|record| predicate(record)).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn filter_matches(&self, filter: &CallFilter) -> Vec<CallRecord> {
        self.0
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    pub(crate) fn records(&self) -> Vec<CallRecord> {
        self.0.clone()
    }
}
