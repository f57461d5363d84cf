//! Condition value definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value inside a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Empty text counts as "no value" for required checks.
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            // Whole numbers print without a trailing ".0"
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// The value of a filter condition.
///
/// Which variant is appropriate is dictated by the operator's
/// [`ValueShape`](crate::ValueShape); a mismatch is reported by validation,
/// not prevented at construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ConditionValue {
    #[default]
    Absent,
    Scalar(Scalar),
    List(Vec<Scalar>),
    Range(Scalar, Scalar),
}

impl ConditionValue {
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        ConditionValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn range(from: impl Into<Scalar>, to: impl Into<Scalar>) -> Self {
        ConditionValue::Range(from.into(), to.into())
    }

    /// True for an absent value or empty text.
    pub fn is_missing(&self) -> bool {
        match self {
            ConditionValue::Absent => true,
            ConditionValue::Scalar(scalar) => scalar.is_empty(),
            _ => false,
        }
    }

    pub fn is_non_empty_list(&self) -> bool {
        matches!(self, ConditionValue::List(items) if !items.is_empty())
    }

    pub fn is_range(&self) -> bool {
        matches!(self, ConditionValue::Range(..))
    }
}

macro_rules! scalar_condition_value {
    ($($source:ty),*) => {
        $(
            impl From<$source> for ConditionValue {
                fn from(value: $source) -> Self {
                    ConditionValue::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_condition_value!(Scalar, &str, String, f64, i64, bool);

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Absent => write!(f, "-"),
            ConditionValue::Scalar(scalar) => write!(f, "{}", scalar),
            ConditionValue::List(items) => {
                let items: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            ConditionValue::Range(from, to) => write!(f, "{} .. {}", from, to),
        }
    }
}
