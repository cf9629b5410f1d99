//! Values carried by `sx` shorthand objects.

use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single style value: a string or a number.
///
/// Numbers print the way a browser would read them from script: integral
/// values have no fractional part, so `Scalar::from(2)` displays as `2`,
/// very large or small magnitudes use exponent form (`1e+21`, `1e-7`), and
/// non-finite values print as `Infinity`, `-Infinity` and `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Str(String),
    Number(f64),
}

impl Scalar {
    /// Truthiness as used by the `bgcolor` shorthand.
    ///
    /// Empty strings, zero and NaN are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Str(s) => !s.is_empty(),
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Number(n) => f.write_str(&number_to_string(*n)),
        }
    }
}

/// Formats a number using the shortest digits that round-trip, placed the
/// way script engines print numbers.
fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits = mantissa.replace('.', "");
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, exponent.abs())
        }
    };
    format!("{}{}", sign, body)
}

/// A value inside an [`SxProps`] object.
///
/// `Unset` stands for a key that is present but carries no value. Such keys
/// are skipped during expansion. JSON `null` decodes to `Unset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SxValue {
    Scalar(Scalar),
    Nested(SxProps),
    Unset,
    /// Any other JSON shape, such as a boolean or an array. Never styled.
    Other(serde_json::Value),
}

impl SxValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, SxValue::Unset)
    }

    pub fn as_nested(&self) -> Option<&SxProps> {
        match self {
            SxValue::Nested(n) => Some(n),
            _ => None,
        }
    }
}

macro_rules! scalar_from {
    ($($t:ty => $conv:expr),* $(,)?) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    $conv(value)
                }
            }

            impl From<$t> for SxValue {
                fn from(value: $t) -> Self {
                    SxValue::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_from! {
    &str => |v: &str| Scalar::Str(v.to_string()),
    String => Scalar::Str,
    i32 => |v: i32| Scalar::Number(f64::from(v)),
    i64 => |v: i64| Scalar::Number(v as f64),
    u32 => |v: u32| Scalar::Number(f64::from(v)),
    usize => |v: usize| Scalar::Number(v as f64),
    f32 => |v: f32| Scalar::Number(f64::from(v)),
    f64 => Scalar::Number,
}

impl From<Scalar> for SxValue {
    fn from(value: Scalar) -> Self {
        SxValue::Scalar(value)
    }
}

impl From<SxProps> for SxValue {
    fn from(value: SxProps) -> Self {
        SxValue::Nested(value)
    }
}

impl<T: Into<SxValue>> From<Option<T>> for SxValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SxValue::Unset, Into::into)
    }
}

/// An `sx` style object: shorthand keys, CSS property names and
/// pseudo-class blocks, in insertion order.
///
/// Keys are not unique across shorthand families; `p` and `px` may both
/// be present and are reconciled by [`expand`](crate::sx::expand).
///
/// # Example
///
/// ```rust
/// use tomato_box::SxProps;
///
/// let sx = SxProps::new()
///     .add("p", 2)
///     .add("bgcolor", "#fafafa")
///     .add("&:hover", SxProps::new().add("bgcolor", "#eee"));
///
/// assert_eq!(sx.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SxProps {
    entries: IndexMap<String, SxValue>,
}

impl SxProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated object for chaining.
    ///
    /// Re-adding an existing key replaces its value but keeps its position.
    pub fn add<V: Into<SxValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<V: Into<SxValue>>(&mut self, name: &str, value: V) {
        self.entries.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SxValue> {
        self.entries.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> Iter<'_, String, SxValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SxProps {
    type Item = (&'a String, &'a SxValue);
    type IntoIter = Iter<'a, String, SxValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<SxValue>> FromIterator<(K, V)> for SxProps {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
