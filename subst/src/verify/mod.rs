mod expectation;

pub use expectation::*;

use crate::{setter_name, was_called, Any, ArgsFilter, CallFilter, Substitute, Times};

/// Entry point of the fluent verifier.
///
/// ```
/// use subst::{args, verify, Arguments, Substitute};
///
/// let cat = Substitute::new("Cat");
/// cat.call_void("meow", Arguments::new().with("count", 2usize));
///
/// let meow = verify(&cat).function("meow");
/// assert!(meow.called());
/// assert!(meow.called_with(args![2usize]));
/// assert!(!meow.called_with(args![3usize]));
/// ```
pub fn verify(substitute: &Substitute) -> Verifier<'_> {
    Verifier { substitute }
}

#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a> {
    substitute: &'a Substitute,
}

impl<'a> Verifier<'a> {
    pub fn function(&self, name: impl Into<String>) -> FunctionVerifier<'a> {
        FunctionVerifier {
            substitute: self.substitute,
            function: name.into(),
        }
    }

    /// Verifier of the reads of a property.
    pub fn property(&self, name: &str) -> FunctionVerifier<'a> {
        self.function(name)
    }

    /// Verifier of the writes to a property.
    pub fn setter(&self, property: &str) -> FunctionVerifier<'a> {
        self.function(setter_name(property))
    }
}

/// Answers questions about the calls of one function with `bool`s.
#[derive(Debug, Clone)]
pub struct FunctionVerifier<'a> {
    substitute: &'a Substitute,
    function: String,
}

impl FunctionVerifier<'_> {
    /// Called at least once, with any arguments.
    pub fn called(&self) -> bool {
        self.called_times(Any, Any)
    }

    /// Called at least once with matching arguments.
    pub fn called_with(&self, arguments: impl Into<ArgsFilter>) -> bool {
        self.called_times(arguments, Any)
    }

    pub fn called_times(&self, arguments: impl Into<ArgsFilter>, times: impl Into<Times>) -> bool {
        was_called(
            &self.substitute.ledger(),
            &CallFilter::new(self.function.as_str(), arguments),
            times.into(),
        )
    }
}
