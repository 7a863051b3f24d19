//! Dynamic cell values held by table records.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dynamic value stored under one field of a [`Record`](crate::Record).
///
/// Deserializes untagged, so a JSON object such as
/// `{"name": "Ann", "age": 25, "score": 4.5, "active": true, "note": null}`
/// loads without annotations. `Decimal` is never produced by JSON input; it
/// exists for callers that hold exact amounts.
///
/// ```
/// use calmtable::Value;
///
/// let name = Value::from("Ann");
/// let age = Value::from(25);
/// assert_eq!(age.display_text(), "25");
/// assert!(Value::from(None::<i64>).is_null());
/// # let _ = name;
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null or absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text value.
    String(String),
    /// Exact decimal number.
    Decimal(Decimal),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Decimal(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Decimal(_) => "decimal",
        }
    }

    /// Textual form used for searching and for cells without a transform.
    /// `Null` renders as empty text.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(value) => value.to_string(),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => float_text(*value),
            Value::String(value) => value.clone(),
            Value::Decimal(value) => value.normalize().to_string(),
        }
    }

    /// Natural ordering between two values. This is a total order.
    ///
    /// Values are first grouped by kind: numbers, then strings, then
    /// booleans, then `Null`. Numbers compare by exact numeric value across
    /// `Int`, `Float` and `Decimal`, with `NaN` after every other number.
    /// Strings compare lexicographically and booleans with `false < true`.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        self.kind_rank()
            .cmp(&other.kind_rank())
            .then_with(|| match (self, other) {
                (Value::String(left), Value::String(right)) => left.cmp(right),
                (Value::Bool(left), Value::Bool(right)) => left.cmp(right),
                (left, right) => match (left.as_number(), right.as_number()) {
                    (Some(left), Some(right)) => left.cmp(right),
                    _ => Ordering::Equal,
                },
            })
    }

    fn kind_rank(&self) -> u8 {
        match self {
            _ if self.is_numeric() => 0,
            Value::String(_) => 1,
            Value::Bool(_) => 2,
            _ => 3,
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(value) => Some(Number::Exact(Decimal::from(*value))),
            Value::Decimal(value) => Some(Number::Exact(*value)),
            Value::Float(value) => Some(Number::Float(*value)),
            _ => None,
        }
    }
}

/// Numeric view of a value. `Int` widens to `Decimal` without loss.
#[derive(Clone, Copy)]
enum Number {
    Exact(Decimal),
    Float(f64),
}

impl Number {
    fn cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Exact(left), Number::Exact(right)) => left.cmp(&right),
            (Number::Float(left), Number::Float(right)) => cmp_floats(left, right),
            (Number::Float(left), Number::Exact(right)) => cmp_float_exact(left, right),
            (Number::Exact(left), Number::Float(right)) => {
                cmp_float_exact(right, left).reverse()
            }
        }
    }
}

fn cmp_floats(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

fn float_sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

fn decimal_sign(value: Decimal) -> i8 {
    if value.is_zero() {
        0
    } else if value.is_sign_negative() {
        -1
    } else {
        1
    }
}

/// Exact comparison of a float against a decimal, without rounding either.
fn cmp_float_exact(float: f64, exact: Decimal) -> Ordering {
    if float.is_nan() {
        return Ordering::Greater;
    }
    if float.is_infinite() {
        return if float > 0.0 { Ordering::Greater } else { Ordering::Less };
    }
    let sign = float_sign(float);
    let exact_sign = decimal_sign(exact);
    if sign != exact_sign || sign == 0 {
        return sign.cmp(&exact_sign);
    }
    let magnitude = cmp_magnitudes(float.abs(), exact);
    if sign > 0 { magnitude } else { magnitude.reverse() }
}

/// Compares `|float|` with `|exact|`, both non-zero.
///
/// With `float = m * 2^e` and `exact = n / 10^s`, this compares
/// `m * 5^s * 2^(e + s)` against `n` in 128-bit integers.
fn cmp_magnitudes(float: f64, exact: Decimal) -> Ordering {
    let bits = float.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };

    let scale = exact.scale();
    let scaled = u128::from(mantissa) * 5_u128.pow(scale);
    let shift = exponent + scale as i32;
    let digits = exact.mantissa().unsigned_abs();
    if shift >= 0 {
        cmp_shifted(scaled, shift.unsigned_abs(), digits)
    } else {
        cmp_shifted(digits, shift.unsigned_abs(), scaled).reverse()
    }
}

/// Compares `value << shift` with `other` for a non-zero `value`.
fn cmp_shifted(value: u128, shift: u32, other: u128) -> Ordering {
    if shift >= u128::BITS || value > u128::MAX >> shift {
        return Ordering::Greater;
    }
    (value << shift).cmp(&other)
}

fn float_text(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
