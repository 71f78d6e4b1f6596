use std::fmt;
use std::ops::{Bound, Range, RangeBounds, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};

use crate::Any;

/// How many matching calls a query expects.
///
/// Built from a count (`2`), a range (`1..3`, `2..`, `..=4`) or [`Any`], which stands for "at
/// least once".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    Exact(usize),
    Range((Bound<usize>, Bound<usize>)),
}

impl Times {
    /// At least one call.
    pub const AT_LEAST_ONCE: Times = Times::Range((Bound::Included(1), Bound::Unbounded));

    pub fn contains(&self, count: usize) -> bool {
        match self {
            Times::Exact(n) => count == *n,
            Times::Range(range) => range.contains(&count),
        }
    }
}

impl Default for Times {
    fn default() -> Self {
        Times::AT_LEAST_ONCE
    }
}

impl From<Any> for Times {
    fn from(_: Any) -> Self {
        Times::AT_LEAST_ONCE
    }
}

impl From<usize> for Times {
    fn from(times: usize) -> Self {
        Times::Exact(times)
    }
}

macro_rules! ranges {
    ($($range:ty),*) => {
        $(
            impl From<$range> for Times {
                fn from(range: $range) -> Self {
                    Times::Range((range.start_bound().cloned(), range.end_bound().cloned()))
                }
            }
        )*
    };
}

ranges!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>
);

/// Renders as the count itself or as a bound expression on `x`, e.g. `1<=x<3`.
impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = match self {
            Times::Exact(n) => return write!(f, "{n}"),
            Times::Range(bounds) => bounds,
        };
        match lower {
            Bound::Included(n) => write!(f, "{n}<=x")?,
            Bound::Excluded(n) => write!(f, "{n}<x")?,
            Bound::Unbounded => f.write_str("x")?,
        }
        match upper {
            Bound::Included(n) => write!(f, "<={n}"),
            Bound::Excluded(n) => write!(f, "<{n}"),
            Bound::Unbounded => Ok(()),
        }
    }
}
