//! Dynamic values for callers that do not have a domain item type.
//!
//! [`Scalar`] covers the usual primary/aux domains (integer codes, exact
//! rational durations, measurements, labels) and [`Element`] is a bare or
//! paired scalar, the runtime equivalent of the "`(value, aux)` pair or bare
//! value" convention the [`Defaults`](crate::extract::Defaults) extractor
//! understands.

use crate::arith::Arithmetic;
use crate::error::{Result, VariationError};
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedSub};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Exact rational value (durations, offsets in fractional steps)
pub type Exact = Ratio<i64>;

/// Helper to create an exact ratio n/d
#[inline]
pub fn ratio(n: i64, d: i64) -> Exact {
    Ratio::new(n, d)
}

/// A dynamically typed value.
///
/// Numeric kinds compare and combine across each other: `Int(1)`,
/// `Ratio(1/1)` and `Float(1.0)` are equal, and arithmetic promotes
/// int → ratio → float. Text only supports equality.
#[derive(Debug, Clone)]
pub enum Scalar {
    Int(i64),
    Ratio(Exact),
    Float(f64),
    Text(String),
}

/// Numeric view used for cross-kind comparison and arithmetic
enum Numeric {
    Exact(Exact),
    Float(f64),
}

impl Scalar {
    pub fn text(s: impl Into<String>) -> Self {
        Scalar::Text(s.into())
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Scalar::Text(_))
    }

    /// Normalize an exact ratio: whole numbers become `Int`
    pub fn from_ratio(r: Exact) -> Self {
        if r.is_integer() {
            Scalar::Int(r.to_integer())
        } else {
            Scalar::Ratio(r)
        }
    }

    fn numeric(&self) -> Option<Numeric> {
        match self {
            Scalar::Int(n) => Some(Numeric::Exact(Ratio::from_integer(*n))),
            Scalar::Ratio(r) => Some(Numeric::Exact(*r)),
            Scalar::Float(x) => Some(Numeric::Float(*x)),
            Scalar::Text(_) => None,
        }
    }

    fn combine(&self, rhs: &Self, op: Op) -> Result<Self> {
        if let (Scalar::Int(a), Scalar::Int(b)) = (self, rhs) {
            return op
                .integer(*a, *b)
                .map(Scalar::Int)
                .ok_or_else(|| VariationError::overflow(op.symbol(), a, b));
        }

        let (lhs_num, rhs_num) = match (self.numeric(), rhs.numeric()) {
            (Some(l), Some(r)) => (l, r),
            (None, _) => return Err(VariationError::unsupported(op.verb(), self.quoted())),
            (_, None) => return Err(VariationError::unsupported(op.verb(), rhs.quoted())),
        };

        match (lhs_num, rhs_num) {
            (Numeric::Exact(a), Numeric::Exact(b)) => op
                .exact(&a, &b)
                .map(Scalar::from_ratio)
                .ok_or_else(|| VariationError::overflow(op.symbol(), self, rhs)),
            (a, b) => Ok(Scalar::Float(op.float(a.as_f64(), b.as_f64()))),
        }
    }

    fn quoted(&self) -> String {
        match self {
            Scalar::Text(s) => format!("{:?}", s),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
}

impl Op {
    fn verb(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "subtract",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
        }
    }

    fn integer(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Op::Add => i64::checked_add(a, b),
            Op::Sub => i64::checked_sub(a, b),
        }
    }

    fn exact(self, a: &Exact, b: &Exact) -> Option<Exact> {
        match self {
            Op::Add => CheckedAdd::checked_add(a, b),
            Op::Sub => CheckedSub::checked_sub(a, b),
        }
    }

    fn float(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
        }
    }
}

impl Numeric {
    fn as_f64(&self) -> f64 {
        match self {
            Numeric::Exact(r) => *r.numer() as f64 / *r.denom() as f64,
            Numeric::Float(x) => *x,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            _ => match (self.numeric(), other.numeric()) {
                (Some(Numeric::Exact(a)), Some(Numeric::Exact(b))) => a == b,
                (Some(a), Some(b)) => a.as_f64() == b.as_f64(),
                _ => false,
            },
        }
    }
}

impl Arithmetic for Scalar {
    fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.combine(rhs, Op::Add)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.combine(rhs, Op::Sub)
    }

    fn to_f64(&self) -> Option<f64> {
        self.numeric().map(|n| n.as_f64())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Ratio(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a literal: `60`, `-3`, `1/2`, `0.5`, anything else is text.
impl FromStr for Scalar {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Scalar::Int(n));
        }
        if let Some((n, d)) = s.split_once('/') {
            if let (Ok(n), Ok(d)) = (n.trim().parse::<i64>(), d.trim().parse::<i64>()) {
                // i64::MIN cannot be negated while normalizing the sign
                if d != 0 && n != i64::MIN && d != i64::MIN {
                    return Ok(Scalar::from_ratio(Ratio::new(n, d)));
                }
            }
        }
        if let Ok(x) = s.parse::<f64>() {
            if x.is_finite() {
                return Ok(Scalar::Float(x));
            }
        }
        Ok(Scalar::Text(s.to_string()))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<Exact> for Scalar {
    fn from(r: Exact) -> Self {
        Scalar::from_ratio(r)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// An item made of scalars: a bare value or a `(value, aux)` pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Element {
    Pair(Scalar, Scalar),
    Bare(Scalar),
}

impl Element {
    pub fn pair(value: impl Into<Scalar>, aux: impl Into<Scalar>) -> Self {
        Element::Pair(value.into(), aux.into())
    }

    pub fn bare(value: impl Into<Scalar>) -> Self {
        Element::Bare(value.into())
    }

    pub fn value(&self) -> &Scalar {
        match self {
            Element::Pair(v, _) | Element::Bare(v) => v,
        }
    }

    pub fn aux(&self) -> Option<&Scalar> {
        match self {
            Element::Pair(_, a) => Some(a),
            Element::Bare(_) => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Pair(v, a) => write!(f, "{}:{}", v, a),
            Element::Bare(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! Scalars travel as plain JSON numbers and strings; exact ratios are
    //! written as `"n/d"` strings and parsed back by the same literal rules.

    use super::Scalar;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Scalar {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Scalar::Int(n) => serializer.serialize_i64(*n),
                Scalar::Float(x) => serializer.serialize_f64(*x),
                Scalar::Ratio(_) | Scalar::Text(_) => serializer.collect_str(self),
            }
        }
    }

    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Scalar;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
            Ok(Scalar::Int(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
            i64::try_from(v)
                .map(Scalar::Int)
                .map_err(|_| E::custom(format!("integer {} out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
            if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                // JS numbers arrive as f64 even when integral
                Ok(Scalar::Int(v as i64))
            } else {
                Ok(Scalar::Float(v))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
            match v.parse::<Scalar>() {
                Ok(s) => Ok(s),
                Err(never) => match never {},
            }
        }
    }

    impl<'de> Deserialize<'de> for Scalar {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Scalar, D::Error> {
            deserializer.deserialize_any(ScalarVisitor)
        }
    }
}
