//! Value enum for heterogeneous cell content

use std::fmt;

/// A scalar that can be placed in a table.
///
/// Every value has a canonical display string, produced by [`Value::format`].
///
/// # Type Mapping
///
/// | Rust type | Variant | Displayed as |
/// |-----------|---------|--------------|
/// | `&str`, `String`, `char` | `Text` | itself |
/// | `bool` | `Bool` | `true` / `false` |
/// | `i8`..`i64`, `isize` | `Int` | base-10 digits |
/// | `u8`..`u64`, `usize` | `UInt` | base-10 digits |
/// | `f32`, `f64` | `Float` | fixed point, 2 decimals |
/// | any `Display` via [`Value::display`] | `Custom` | its `Display` output |
/// | `None` | `Null` | empty string |
///
/// # Example
///
/// ```
/// use termtables::Value;
///
/// assert_eq!(Value::from("hey").format(), "hey");
/// assert_eq!(Value::from(1234).format(), "1234");
/// assert_eq!(Value::from(3.1456788).format(), "3.15");
/// assert_eq!(Value::from(None::<i32>).format(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value; displays as an empty string.
    #[default]
    Null,
    Text(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Pre-rendered text of some other displayable type.
    Custom(String),
}

impl Value {
    /// Captures the `Display` output of an arbitrary type.
    pub fn display(v: &impl fmt::Display) -> Self {
        Value::Custom(v.to_string())
    }

    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The canonical display string. Never fails.
    pub fn format(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) | Value::Custom(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::UInt(u) => u.to_string(),
            Value::Float(f) => format!("{f:.2}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::UInt(v as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
