use std::panic::Location;

use crate::{Any, ArgsFilter, CallFilter, CallRecord, Substitute, Times};

/// Entry point of the expectation builder. Captures the caller's location for diagnostics.
///
/// ```
/// use subst::{args, expect, Arguments, Substitute};
///
/// let cat = Substitute::new("Cat");
/// cat.call_void("meow", Arguments::new().with("count", 2usize));
///
/// let meow = expect(&cat).function("meow").with(args![2usize]);
/// assert!(meow.to_have_been_called(1));
/// meow.assert_called(1);
/// ```
#[track_caller]
pub fn expect(substitute: &Substitute) -> ExpectationBuilder<'_> {
    ExpectationBuilder {
        substitute,
        location: Location::caller(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExpectationBuilder<'a> {
    substitute: &'a Substitute,
    location: &'static Location<'static>,
}

impl<'a> ExpectationBuilder<'a> {
    pub fn function(&self, name: impl Into<String>) -> FunctionExpectation<'a> {
        FunctionExpectation {
            substitute: self.substitute,
            function: name.into(),
            location: self.location,
        }
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

#[derive(Debug, Clone)]
pub struct FunctionExpectation<'a> {
    substitute: &'a Substitute,
    function: String,
    location: &'static Location<'static>,
}

impl FunctionExpectation<'_> {
    /// Collects the calls with matching arguments.
    pub fn with(&self, arguments: impl Into<ArgsFilter>) -> Expectation {
        let filter = CallFilter::new(self.function.as_str(), arguments);
        let records = self.substitute.ledger().filter_matches(&filter);
        Expectation {
            filter,
            records,
            location: self.location,
        }
    }

    /// Collects the calls regardless of their arguments.
    pub fn any(&self) -> Expectation {
        self.with(Any)
    }
}

/// Matched calls of one function, handed to an assertion library.
#[derive(Debug, Clone, PartialEq)]
pub struct Expectation {
    filter: CallFilter,
    records: Vec<CallRecord>,
    location: &'static Location<'static>,
}

impl Expectation {
    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    pub fn filter(&self) -> &CallFilter {
        &self.filter
    }

    /// Where the expectation was built.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Whether the number of matched calls is within `times`. [`Any`] means at least once.
    pub fn to_have_been_called(&self, times: impl Into<Times>) -> bool {
        times.into().contains(self.records.len())
    }

    /// Diagnostic describing why the expectation does not hold, if it does not.
    pub fn failure_message(&self, times: impl Into<Times>) -> Option<String> {
        let times = times.into();
        let actual = self.records.len();
        if times.contains(actual) {
            return None;
        }
        Some(format!(
            "Expected {} to be called {} times, but it was called {} times ({}:{})",
            self.filter,
            times,
            actual,
            self.location.file(),
            self.location.line(),
        ))
    }

    /// Panics with [`Expectation::failure_message`] if the expectation does not hold.
    pub fn assert_called(&self, times: impl Into<Times>) {
        if let Some(message) = self.failure_message(times) {
            panic!("{message}");
        }
    }
}
