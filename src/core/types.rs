use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// One cell of a tabular dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum CellValue {
    #[default]
    Null,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the numeric payload, if this cell holds a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Hashable projection used for first-seen maps and grouping keys.
    #[must_use]
    pub fn key(&self) -> ValueKey {
        match self {
            Self::Null => ValueKey::Null,
            Self::Number(value) => ValueKey::Number(OrderedFloat(*value)),
            Self::Text(value) => ValueKey::Text(value.clone()),
            Self::Bool(value) => ValueKey::Bool(*value),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKey {
    Null,
    Number(OrderedFloat<f64>),
    Text(String),
    Bool(bool),
}

/// Three-way comparison result that keeps "no information" apart from "equal".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueOrdering {
    Less,
    Equal,
    Greater,
    /// The comparator cannot order the operands (mixed types, unknown values).
    Incomparable,
}

impl ValueOrdering {
    #[must_use]
    pub fn as_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Incomparable => None,
        }
    }

    /// Collapses `Incomparable` to `Equal` so the result can drive a stable sort.
    #[must_use]
    pub fn to_ordering_or_equal(self) -> Ordering {
        self.as_ordering().unwrap_or(Ordering::Equal)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            other => other,
        }
    }

    #[must_use]
    pub fn is_incomparable(self) -> bool {
        matches!(self, Self::Incomparable)
    }
}

impl From<Ordering> for ValueOrdering {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// Closed numeric interval used to size an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Range reported when no column or value qualifies.
    pub const EMPTY: Self = Self { min: 0.0, max: 0.0 };

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Running min/max accumulator; finishes to [`ValueRange::EMPTY`] when nothing was seen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RangeAccumulator {
    min: f64,
    max: f64,
}

impl RangeAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub(crate) fn push(&mut self, value: f64) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    pub(crate) fn finish(self) -> ValueRange {
        if self.min.is_finite() && self.max.is_finite() {
            ValueRange::new(self.min, self.max)
        } else {
            ValueRange::EMPTY
        }
    }
}
