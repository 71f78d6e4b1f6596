//! A call-recording substitute engine for tests.
//!
//! A [`Substitute`] stands in for a collaborator: every call made to it is appended to a ledger
//! together with its arguments, and answered with a value configured beforehand. Tests then ask
//! what was called through [`Substitute::called`], the fluent [`verify`] surface or the
//! [`expect`] builder, which all share the same matching rules.
//!
//! Forwarding implementations of a trait are generated with [`substitute`].
mod call;
mod error;
mod query;
mod recorder;
mod stubs;
mod value;
mod verify;

pub use call::*;
pub use error::*;
pub use query::*;
pub use recorder::*;
pub use stubs::*;
pub use subst_macros::substitute;
pub use value::*;
pub use verify::*;
