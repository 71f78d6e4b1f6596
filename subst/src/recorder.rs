use std::cell::{Ref, RefCell};

use crate::{
    was_called, Arguments, ArgsFilter, CallFilter, CallLedger, CallRecord, FromValue, Result,
    StubStore, SubstituteError, Times, Value,
};

/// Lifecycle of a substitute. There is no way back to `Fresh`; create a new substitute instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstituteState {
    /// Nothing has been called yet.
    Fresh,
    /// At least one call has been recorded.
    InUse,
}

#[derive(Clone, Copy)]
enum Lookup {
    ReturnValue,
    Property,
}

/// Name under which writes to a property are recorded.
pub fn setter_name(property: &str) -> String {
    format!("set_{property}")
}

/// Records calls made to a contract implementation and answers them with configured stubs.
///
/// Forwarding code calls [`Substitute::call`], [`Substitute::call_void`] and friends with the
/// member name and a snapshot of the arguments; tests configure stubs beforehand and query the
/// recorded calls afterwards through [`Substitute::called`], [`crate::verify`] and
/// [`crate::expect`].
///
/// A substitute is meant to be owned by a single test. It uses interior mutability without
/// locking and is not `Sync`.
#[derive(Debug, Default)]
pub struct Substitute {
    name: String,
    ledger: RefCell<CallLedger>,
    stubs: RefCell<StubStore>,
}

impl Substitute {
    /// Creates a substitute whose diagnostics mention `name`, usually the contract name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configures the value returned by calls to `function`.
    pub fn set_return_value(&mut self, function: impl Into<String>, value: impl Into<Value>) {
        self.stubs.get_mut().set_return_value(function, value);
    }

    /// Configures the value of a property without recording a setter call.
    pub fn set_property_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.stubs.get_mut().set_property(name, value);
    }

    /// Records a call and returns the configured return value.
    ///
    /// The call is recorded even when the lookup fails. Without a configured value this fails
    /// with [`SubstituteError::StubNotConfigured`] if `requires_value` is set and returns
    /// `Ok(None)` otherwise.
    pub fn record(
        &self,
        function: &str,
        arguments: Arguments,
        requires_value: bool,
    ) -> Result<Option<Value>> {
        self.record_and_lookup(function, arguments, Lookup::ReturnValue, requires_value)
    }

    /// Records a call to a member returning `T` and converts the configured value.
    pub fn try_call<T: FromValue>(&self, function: &str, arguments: Arguments) -> Result<T> {
        match self.record(function, arguments, true)? {
            Some(value) => self.convert(function, value),
            None => Err(self.not_configured(function)),
        }
    }

    /// Like [`Substitute::try_call`] but fails the test on error.
    #[track_caller]
    pub fn call<T: FromValue>(&self, function: &str, arguments: Arguments) -> T {
        match self.try_call(function, arguments) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Records a call to a member that does not require a stub. Returns `None` when nothing is
    /// configured or the configured value is nil.
    pub fn try_call_optional<T: FromValue>(
        &self,
        function: &str,
        arguments: Arguments,
    ) -> Result<Option<T>> {
        match self.record(function, arguments, false)? {
            Some(value) => self.convert::<Option<T>>(function, value),
            None => Ok(None),
        }
    }

    #[track_caller]
    pub fn call_optional<T: FromValue>(&self, function: &str, arguments: Arguments) -> Option<T> {
        match self.try_call_optional(function, arguments) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Records a call to a member without a result. A configured value is ignored.
    pub fn call_void(&self, function: &str, arguments: Arguments) {
        // cannot fail without requires_value
        let _ = self.record(function, arguments, false);
    }

    /// Records a read of a property and returns its value.
    pub fn try_get_property<T: FromValue>(&self, name: &str) -> Result<T> {
        match self.record_and_lookup(name, Arguments::new(), Lookup::Property, true)? {
            Some(value) => self.convert(name, value),
            None => Err(self.not_configured(name)),
        }
    }

    #[track_caller]
    pub fn get_property<T: FromValue>(&self, name: &str) -> T {
        match self.try_get_property(name) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Records a write to a property under [`setter_name`] and stores the value.
    pub fn set_property(&self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        let setter = setter_name(name);
        {
            let mut ledger = self.ledger.borrow_mut();
            tracing::debug!(
                substitute = %self.name,
                property = name,
                sequence = ledger.len(),
                %value,
                "property written"
            );
            ledger.append(setter, Arguments::new().with("value", value.clone()));
        }
        self.stubs.borrow_mut().set_property(name, value);
    }

    /// Whether `function` was called with matching arguments a matching number of times.
    ///
    /// Pass [`crate::Any`] as `arguments` to ignore arguments and as `times` to accept any
    /// non-zero count.
    pub fn called(
        &self,
        function: &str,
        arguments: impl Into<ArgsFilter>,
        times: impl Into<Times>,
    ) -> bool {
        was_called(
            &self.ledger(),
            &CallFilter::new(function, arguments),
            times.into(),
        )
    }

    /// Number of calls to `function` with matching arguments.
    pub fn count(&self, function: &str, arguments: impl Into<ArgsFilter>) -> usize {
        crate::count_matching(&self.ledger(), &CallFilter::new(function, arguments))
    }

    /// Total number of recorded calls, property reads and writes included.
    pub fn call_count(&self) -> usize {
        self.ledger().len()
    }

    /// A copy of every recorded call in order.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.ledger().records()
    }

    pub fn state(&self) -> SubstituteState {
        if self.ledger().is_empty() {
            SubstituteState::Fresh
        } else {
            SubstituteState::InUse
        }
    }

    pub(crate) fn ledger(&self) -> Ref<'_, CallLedger> {
        self.ledger.borrow()
    }

    fn record_and_lookup(
        &self,
        function: &str,
        arguments: Arguments,
        lookup: Lookup,
        requires_value: bool,
    ) -> Result<Option<Value>> {
        {
            let mut ledger = self.ledger.borrow_mut();
            tracing::debug!(
                substitute = %self.name,
                function,
                sequence = ledger.len(),
                %arguments,
                "call recorded"
            );
            ledger.append(function, arguments);
        }

        let stubs = self.stubs.borrow();
        let value = match lookup {
            Lookup::ReturnValue => stubs.return_value(function),
            Lookup::Property => stubs.property(function),
        };
        tracing::trace!(function, found = value.is_some(), "stub lookup");
        match value {
            Some(value) => Ok(Some(value.clone())),
            None if requires_value => Err(self.not_configured(function)),
            None => Ok(None),
        }
    }

    fn convert<T: FromValue>(&self, function: &str, value: Value) -> Result<T> {
        let actual = value.kind();
        T::from_value(value).ok_or_else(|| {
            tracing::warn!(
                substitute = %self.name,
                function,
                expected = T::expected(),
                actual,
                "stub has an incompatible type"
            );
            SubstituteError::StubTypeMismatch {
                function: self.qualified(function),
                expected: T::expected(),
                actual,
            }
        })
    }

    fn not_configured(&self, function: &str) -> SubstituteError {
        SubstituteError::StubNotConfigured {
            function: self.qualified(function),
        }
    }

    fn qualified(&self, function: &str) -> String {
        if self.name.is_empty() {
            function.to_string()
        } else {
            format!("{}::{}", self.name, function)
        }
    }
}
