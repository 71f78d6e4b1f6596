use std::fmt;

use crate::Value;

/// A named argument captured at call time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

/// Arguments of one call in call-site order.
///
/// Names are kept for diagnostics only; matching looks at the values by position.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arguments(Vec<Argument>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an argument, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push(Argument {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.0.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.0.iter().map(|argument| &argument.value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|argument| argument.name == name)
            .map(|argument| &argument.value)
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| Argument {
                    name: name.into(),
                    value: value.into(),
                })
                .collect(),
        )
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, argument) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", argument.name, argument.value)?;
        }
        f.write_str(")")
    }
}
