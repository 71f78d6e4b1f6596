use std::fmt;

use super::Value;

impl Value {
    /// Canonical representation used to compare recorded arguments.
    ///
    /// The encoding is deliberately loose: signed and unsigned integers of the same numeric value
    /// render the same, bytes render like a list of integers, and a boxed value renders as its
    /// `Debug` output, so a boxed value can collide with a value of another kind. Matching by
    /// canonical form can therefore report false positives for values whose representations
    /// coincide.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::UInt(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value:?}"),
            Value::Char(value) => write!(f, "{value:?}"),
            Value::Str(value) => write!(f, "{value:?}"),
            Value::Bytes(bytes) => write!(f, "{bytes:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Boxed(boxed) => f.write_str(boxed.repr()),
        }
    }
}
