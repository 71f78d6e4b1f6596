use std::fmt;

use crate::{Arguments, Value};

/// Wildcard accepted wherever an argument, an argument list or a call count is expected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

/// What a single argument is expected to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    /// Any value
    Any,
    /// A value with the same canonical representation
    Eq(Value),
}

impl Matcher {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Eq(expected) => expected.canonical() == value.canonical(),
        }
    }
}

impl From<Any> for Matcher {
    fn from(_: Any) -> Self {
        Matcher::Any
    }
}

impl From<Value> for Matcher {
    fn from(value: Value) -> Self {
        Matcher::Eq(value)
    }
}

macro_rules! eq_matchers {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Matcher {
                fn from(value: $ty) -> Self {
                    Matcher::Eq(value.into())
                }
            }
        )*
    };
}

eq_matchers!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, &str,
    &String, ()
);

impl<T: Into<Value>> From<Option<T>> for Matcher {
    fn from(value: Option<T>) -> Self {
        Matcher::Eq(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Matcher {
    fn from(value: Vec<T>) -> Self {
        Matcher::Eq(value.into())
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Any => f.write_str("_"),
            Matcher::Eq(value) => write!(f, "{value}"),
        }
    }
}

/// What the argument list of a call is expected to be.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArgsFilter {
    /// Matches calls regardless of their arguments.
    #[default]
    Any,
    /// Matches calls with exactly these arguments, compared by position.
    Args(Vec<Matcher>),
}

impl ArgsFilter {
    pub fn matches(&self, arguments: &Arguments) -> bool {
        match self {
            ArgsFilter::Any => true,
            ArgsFilter::Args(matchers) => {
                matchers.len() == arguments.len()
                    && matchers
                        .iter()
                        .zip(arguments.values())
                        .all(|(matcher, value)| matcher.matches(value))
            }
        }
    }
}

impl From<Any> for ArgsFilter {
    fn from(_: Any) -> Self {
        ArgsFilter::Any
    }
}

impl From<Vec<Matcher>> for ArgsFilter {
    fn from(matchers: Vec<Matcher>) -> Self {
        ArgsFilter::Args(matchers)
    }
}

/// Named arguments filter by value; the names are ignored.
impl From<Arguments> for ArgsFilter {
    fn from(arguments: Arguments) -> Self {
        ArgsFilter::Args(arguments.values().cloned().map(Matcher::Eq).collect())
    }
}

impl fmt::Display for ArgsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsFilter::Any => f.write_str("(..)"),
            ArgsFilter::Args(matchers) => {
                f.write_str("(")?;
                for (index, matcher) in matchers.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{matcher}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Builds an [`ArgsFilter`] from values of any supported type and [`Any`] wildcards.
///
/// ```
/// use subst::{args, Any, ArgsFilter};
///
/// let filter = args!["Tama", 2usize, Any];
/// assert_eq!(filter.to_string(), r#"("Tama", 2, _)"#);
/// assert_eq!(args![], ArgsFilter::Args(vec![]));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        $crate::ArgsFilter::Args(::std::vec![$($crate::Matcher::from($arg)),*])
    };
}
