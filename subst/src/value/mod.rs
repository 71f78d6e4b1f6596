mod canonical;
mod convert;

use std::any::Any;
use std::fmt::{self, Debug};
use std::rc::Rc;

pub use convert::*;

/// A dynamically typed argument or stub value.
///
/// Arguments recorded by a substitute and the values it returns are stored as `Value`s so that
/// calls to members with unrelated signatures can live in one ledger. Primitive kinds have their
/// own variants, everything else goes through [`Value::Boxed`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    /// An explicitly absent value. A stub configured with `Nil` is still a configured stub.
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    /// Any other `'static` value, compared by its `Debug` output.
    Boxed(Boxed),
}

impl Value {
    /// Boxes a value that has no dedicated variant.
    pub fn boxed<T: Any + Debug>(value: T) -> Self {
        Value::Boxed(Boxed::new(value))
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Name of the kind of this value, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Boxed(boxed) => boxed.type_name(),
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

/// Two values are equal when they have the same kind and the same canonical form.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.canonical() == other.canonical()
    }
}

/// A type-erased value tagged with its type name.
///
/// The `Debug` output is captured when the value is boxed and serves as its canonical form.
#[derive(Clone)]
pub struct Boxed {
    type_name: &'static str,
    repr: String,
    inner: Rc<dyn Any>,
}

impl Boxed {
    pub fn new<T: Any + Debug>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            repr: format!("{value:?}"),
            inner: Rc::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn repr(&self) -> &str {
        &self.repr
    }

    /// Returns a clone of the boxed value if it is a `T`.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.inner.downcast_ref::<T>().cloned()
    }
}

impl Debug for Boxed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Boxed {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.repr)
    }
}
