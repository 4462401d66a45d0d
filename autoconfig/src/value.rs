//! Untyped values exchanged between the collection and apply passes.
//!
//! A [`ConfigValue`] is what a leaf field contributes to a
//! [`crate::SymbolTable`]. The [`Leaf`] trait describes how a concrete Rust
//! type turns itself into a [`ConfigValue`] and how it accepts one back. Only
//! text, boolean, and integer kinds are writable; floating point leaves are
//! collected but never assigned.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Dynamic kind of a collected value or a destination leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// UTF-8 text.
    Text,
    /// `true` or `false`.
    Boolean,
    /// Signed or unsigned integer up to 64 bits wide.
    Integer,
    /// Floating point number.
    Float,
}

impl ValueKind {
    /// Returns `true` when values of this kind can be assigned to a
    /// destination leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoconfig::ValueKind;
    ///
    /// assert!(ValueKind::Text.is_writable());
    /// assert!(!ValueKind::Float.is_writable());
    /// ```
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Text | Self::Boolean | Self::Integer)
    }

    /// Lower-case name used in diagnostics and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer payload, normalised so values that fit `i64` are always
/// [`IntegerValue::Signed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntegerValue {
    /// Value within the `i64` range.
    Signed(i64),
    /// Value above `i64::MAX`.
    Unsigned(u64),
}

impl IntegerValue {
    /// Builds a normalised integer from a wide intermediate.
    ///
    /// Returns `None` when `value` lies outside both the `i64` and `u64`
    /// ranges.
    #[must_use]
    pub fn from_wide(value: i128) -> Option<Self> {
        if let Ok(signed) = i64::try_from(value) {
            return Some(Self::Signed(signed));
        }
        u64::try_from(value).ok().map(Self::Unsigned)
    }

    /// Widens the value so it can be compared or narrowed losslessly.
    #[must_use]
    pub fn widen(self) -> i128 {
        match self {
            Self::Signed(v) => i128::from(v),
            Self::Unsigned(v) => i128::from(v),
        }
    }

    /// Narrows the value into `T`, returning `None` when it does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoconfig::IntegerValue;
    ///
    /// assert_eq!(IntegerValue::Signed(200).narrow::<u8>(), Some(200));
    /// assert_eq!(IntegerValue::Signed(-1).narrow::<u8>(), None);
    /// ```
    #[must_use]
    pub fn narrow<T: TryFrom<i128>>(self) -> Option<T> {
        T::try_from(self.widen()).ok()
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
        }
    }
}

/// Untyped value stored in a symbol table.
///
/// Human-readable formats see plain scalars, so a persisted table reads as a
/// flat JSON object. Compact binary formats, which cannot guess a variant
/// from the input, get an explicitly tagged encoding instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Boolean leaf.
    Boolean(bool),
    /// Integer leaf of any width up to 64 bits.
    Integer(IntegerValue),
    /// Floating point leaf; collected but never written.
    Float(f64),
    /// Text leaf.
    Text(String),
}

impl ConfigValue {
    /// Dynamic kind of the stored value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Borrows the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_integer(&self) -> Option<IntegerValue> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(IntegerValue::Signed(value))
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Integer(IntegerValue::Unsigned(value)), Self::from)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PlainValue {
    Boolean(bool),
    Integer(IntegerValue),
    Float(f64),
    Text(String),
}

#[derive(Serialize)]
enum TaggedRef<'a> {
    Boolean(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(&'a str),
}

#[derive(Deserialize)]
enum Tagged {
    Boolean(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl From<PlainValue> for ConfigValue {
    fn from(value: PlainValue) -> Self {
        match value {
            PlainValue::Boolean(b) => Self::Boolean(b),
            PlainValue::Integer(i) => Self::Integer(i),
            PlainValue::Float(x) => Self::Float(x),
            PlainValue::Text(s) => Self::Text(s),
        }
    }
}

impl From<Tagged> for ConfigValue {
    fn from(value: Tagged) -> Self {
        match value {
            Tagged::Boolean(b) => Self::Boolean(b),
            Tagged::Signed(v) => Self::from(v),
            Tagged::Unsigned(v) => Self::from(v),
            Tagged::Float(x) => Self::Float(x),
            Tagged::Text(s) => Self::Text(s),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            return match self {
                Self::Boolean(b) => serializer.serialize_bool(*b),
                Self::Integer(i) => i.serialize(serializer),
                Self::Float(x) => serializer.serialize_f64(*x),
                Self::Text(s) => serializer.serialize_str(s),
            };
        }
        let tagged = match self {
            Self::Boolean(b) => TaggedRef::Boolean(*b),
            Self::Integer(IntegerValue::Signed(v)) => TaggedRef::Signed(*v),
            Self::Integer(IntegerValue::Unsigned(v)) => TaggedRef::Unsigned(*v),
            Self::Float(x) => TaggedRef::Float(*x),
            Self::Text(s) => TaggedRef::Text(s),
        };
        tagged.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            return PlainValue::deserialize(deserializer).map(Self::from);
        }
        Tagged::deserialize(deserializer).map(Self::from)
    }
}

/// Reason a stored value could not be written into a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionFailure {
    /// The stored value has a different kind from the destination.
    KindMismatch {
        /// Kind declared by the destination leaf.
        expected: ValueKind,
        /// Kind of the stored value.
        actual: ValueKind,
    },
    /// The stored integer does not fit the destination width.
    OutOfRange {
        /// Stored integer.
        value: IntegerValue,
        /// Destination Rust type.
        target: &'static str,
    },
    /// The destination kind is never written.
    Unsupported {
        /// Kind declared by the destination leaf.
        kind: ValueKind,
    },
}

impl CoercionFailure {
    /// Builds a [`CoercionFailure::KindMismatch`] for `value`.
    #[must_use]
    pub const fn mismatch(expected: ValueKind, value: &ConfigValue) -> Self {
        Self::KindMismatch {
            expected,
            actual: value.kind(),
        }
    }
}

/// A scalar field that can take part in collection and application.
///
/// Implementations exist for `String`, `bool`, the primitive integers up to
/// 64 bits, `f32`, `f64`, and `Option<T>` of any of those.
///
/// # Examples
///
/// ```
/// use autoconfig::{ConfigValue, Leaf};
///
/// let mut port: u16 = 0;
/// port.assign(&ConfigValue::from(8080_i64)).expect("fits in u16");
/// assert_eq!(port, 8080);
/// assert!(port.assign(&ConfigValue::from("8080")).is_err());
/// ```
pub trait Leaf {
    /// Kind this leaf accepts on write.
    const KIND: ValueKind;

    /// Converts the current value for collection.
    ///
    /// Returns `None` when the leaf holds nothing worth recording.
    fn to_value(&self) -> Option<ConfigValue>;

    /// Assigns `value` to the leaf.
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionFailure`] when the value's kind differs from
    /// [`Leaf::KIND`], when an integer does not fit, or when the leaf kind is
    /// not writable. The leaf is left untouched on failure.
    fn assign(&mut self, value: &ConfigValue) -> Result<(), CoercionFailure>;
}

impl Leaf for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Option<ConfigValue> {
        Some(ConfigValue::Text(self.clone()))
    }

    fn assign(&mut self, value: &ConfigValue) -> Result<(), CoercionFailure> {
        let ConfigValue::Text(text) = value else {
            return Err(CoercionFailure::mismatch(Self::KIND, value));
        };
        self.clone_from(text);
        Ok(())
    }
}

impl Leaf for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn to_value(&self) -> Option<ConfigValue> {
        Some(ConfigValue::Boolean(*self))
    }

    fn assign(&mut self, value: &ConfigValue) -> Result<(), CoercionFailure> {
        let ConfigValue::Boolean(flag) = value else {
            return Err(CoercionFailure::mismatch(Self::KIND, value));
        };
        *self = *flag;
        Ok(())
    }
}

macro_rules! integer_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl Leaf for $ty {
            const KIND: ValueKind = ValueKind::Integer;

            fn to_value(&self) -> Option<ConfigValue> {
                i128::try_from(*self)
                    .ok()
                    .and_then(IntegerValue::from_wide)
                    .map(ConfigValue::Integer)
            }

            fn assign(&mut self, value: &ConfigValue) -> Result<(), CoercionFailure> {
                let ConfigValue::Integer(int) = value else {
                    return Err(CoercionFailure::mismatch(Self::KIND, value));
                };
                *self = int.narrow::<$ty>().ok_or(CoercionFailure::OutOfRange {
                    value: *int,
                    target: stringify!($ty),
                })?;
                Ok(())
            }
        }
    )*};
}

integer_leaf!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl Leaf for $ty {
            const KIND: ValueKind = ValueKind::Float;

            fn to_value(&self) -> Option<ConfigValue> {
                Some(ConfigValue::Float(f64::from(*self)))
            }

            fn assign(&mut self, _value: &ConfigValue) -> Result<(), CoercionFailure> {
                Err(CoercionFailure::Unsupported { kind: Self::KIND })
            }
        }
    )*};
}

float_leaf!(f32, f64);

impl<T: Leaf + Default> Leaf for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Option<ConfigValue> {
        self.as_ref().and_then(Leaf::to_value)
    }

    fn assign(&mut self, value: &ConfigValue) -> Result<(), CoercionFailure> {
        if let Some(inner) = self {
            return inner.assign(value);
        }
        let mut inner = T::default();
        inner.assign(value)?;
        *self = Some(inner);
        Ok(())
    }
}
