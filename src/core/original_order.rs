use indexmap::IndexMap;
use tracing::debug;

use crate::core::comparator::ValueComparator;
use crate::core::dataset::TabularDataset;
use crate::core::types::{CellValue, ValueKey, ValueOrdering};

/// Restores the first-seen order of a categorical column after a sort.
///
/// Only value identity matters; numeric magnitude is never compared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginalOrderComparator {
    order: IndexMap<ValueKey, usize>,
}

impl OriginalOrderComparator {
    /// Captures the order of `column` in `dataset`; an unknown column captures nothing.
    #[must_use]
    pub fn from_dataset(dataset: &dyn TabularDataset, column: &str) -> Self {
        let Some(col) = dataset.column_index(column) else {
            debug!(column, "original order column not found");
            return Self::default();
        };
        Self::from_values((0..dataset.row_count()).map(|row| dataset.value(col, row)))
    }

    /// First occurrence wins; duplicates keep their first index.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = CellValue>,
    {
        let mut order = IndexMap::new();
        for value in values {
            let next = order.len();
            order.entry(value.key()).or_insert(next);
        }
        Self { order }
    }

    /// First-seen index of `value`.
    #[must_use]
    pub fn rank(&self, value: &CellValue) -> Option<usize> {
        self.order.get(&value.key()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Index difference `rank(left) - rank(right)`, if both are known.
    #[must_use]
    pub fn rank_difference(&self, left: &CellValue, right: &CellValue) -> Option<isize> {
        let left = self.rank(left)?;
        let right = self.rank(right)?;
        Some(left as isize - right as isize)
    }

    /// Primitive numbers carry no categorical identity here; always `Equal`.
    #[must_use]
    pub fn compare_numbers(&self, _left: f64, _right: f64) -> ValueOrdering {
        ValueOrdering::Equal
    }
}

impl ValueComparator for OriginalOrderComparator {
    fn compare(&self, left: &CellValue, right: &CellValue) -> ValueOrdering {
        match self.rank_difference(left, right) {
            Some(diff) => diff.cmp(&0).into(),
            None => ValueOrdering::Incomparable,
        }
    }
}
