use super::Value;

/// Conversion from a stored [`Value`] into the type a call site expects.
///
/// Returns `None` when the value has an incompatible shape. Integers convert across widths and
/// signedness as long as the number fits.
pub trait FromValue: Sized {
    /// Type name reported when the conversion fails.
    fn expected() -> &'static str {
        std::any::type_name::<Self>()
    }

    fn from_value(value: Value) -> Option<Self>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Option<Self> {
        value.is_nil().then_some(())
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }
}

macro_rules! integers {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $wide)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Int(value) => <$ty>::try_from(value).ok(),
                        Value::UInt(value) => <$ty>::try_from(value).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integers!(Int as i64: i8, i16, i32, i64, isize);
integers!(UInt as u64: u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(value) => Some(value as f32),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Char(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Nil => Some(None),
            value => T::from_value(value).map(Some),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            Value::Bytes(bytes) => bytes
                .into_iter()
                .map(|byte| T::from_value(Value::UInt(byte as u64)))
                .collect(),
            _ => None,
        }
    }
}

/// Makes a type usable as an argument, argument matcher and stub value by boxing it.
///
/// The type must be `Clone + Debug + 'static`. Its `Debug` output is what argument matching
/// compares.
///
/// ```
/// #[derive(Clone, Debug)]
/// struct Cat {
///     name: String,
/// }
///
/// subst::value_type!(Cat);
///
/// let value = subst::Value::from(Cat { name: "Tama".into() });
/// assert_eq!(value.canonical(), r#"Cat { name: "Tama" }"#);
/// ```
#[macro_export]
macro_rules! value_type {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::convert::From<$ty> for $crate::Value {
                fn from(value: $ty) -> Self {
                    $crate::Value::boxed(value)
                }
            }

            impl ::std::convert::From<$ty> for $crate::Matcher {
                fn from(value: $ty) -> Self {
                    $crate::Matcher::Eq($crate::Value::boxed(value))
                }
            }

            impl $crate::FromValue for $ty {
                fn from_value(value: $crate::Value) -> ::std::option::Option<Self> {
                    match value {
                        $crate::Value::Boxed(boxed) => boxed.downcast::<$ty>(),
                        _ => ::std::option::Option::None,
                    }
                }
            }
        )+
    };
}
