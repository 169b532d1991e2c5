use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::dataset::TabularDataset;
use crate::core::stack_range::StackGroup;
use crate::core::types::{RangeAccumulator, ValueRange};

/// Decides which rows contribute to a range calculation.
pub trait RowSelector {
    fn accepts(&self, dataset: &dyn TabularDataset, row: usize) -> bool;
}

/// Selector accepting every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllRows;

impl RowSelector for AllRows {
    fn accepts(&self, _dataset: &dyn TabularDataset, _row: usize) -> bool {
        true
    }
}

impl<F> RowSelector for F
where
    F: Fn(&dyn TabularDataset, usize) -> bool,
{
    fn accepts(&self, dataset: &dyn TabularDataset, row: usize) -> bool {
        self(dataset, row)
    }
}

/// Half-open `[start, end)` row window restricting one measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowBounds {
    pub start: usize,
    #[serde(default)]
    pub end: Option<usize>,
}

impl RowBounds {
    #[must_use]
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }
}

/// Explicit inputs shared by every range strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeSettings {
    /// Use `|value|` instead of the signed value.
    #[serde(default)]
    pub absolute_value: bool,
    /// Per-measure row windows; measures not listed use every row.
    #[serde(default)]
    pub measure_bounds: IndexMap<String, RowBounds>,
}

impl RangeSettings {
    #[must_use]
    pub fn with_absolute_value(mut self, absolute_value: bool) -> Self {
        self.absolute_value = absolute_value;
        self
    }

    #[must_use]
    pub fn with_measure_bounds(mut self, measure: impl Into<String>, bounds: RowBounds) -> Self {
        self.measure_bounds.insert(measure.into(), bounds);
        self
    }

    /// Measures with an explicit row window.
    pub fn measures(&self) -> impl Iterator<Item = &str> {
        self.measure_bounds.keys().map(String::as_str)
    }

    #[must_use]
    pub fn start_row(&self, measure: &str) -> usize {
        self.measure_bounds
            .get(measure)
            .map_or(0, |bounds| bounds.start)
    }

    /// Exclusive end row, clamped to `row_count`.
    #[must_use]
    pub fn end_row(&self, measure: &str, row_count: usize) -> usize {
        self.measure_bounds
            .get(measure)
            .and_then(|bounds| bounds.end)
            .map_or(row_count, |end| end.min(row_count))
    }

    pub(crate) fn rows(&self, measure: &str, row_count: usize) -> std::ops::Range<usize> {
        let end = self.end_row(measure, row_count);
        self.start_row(measure).min(end)..end
    }

    pub(crate) fn adjust(&self, value: f64) -> f64 {
        if self.absolute_value {
            value.abs()
        } else {
            value
        }
    }
}

/// Computes the numeric domain an axis needs to show a set of columns.
///
/// Columns missing from the dataset are ignored. When nothing qualifies the
/// result is [`ValueRange::EMPTY`].
pub trait ScaleRange: fmt::Debug {
    fn calculate(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
    ) -> ValueRange;

    /// Like `calculate`, with extra stack groups applied for this call only.
    ///
    /// Ranges that do not stack ignore the groups.
    fn calculate_with_stack_groups(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
        _extra_groups: &[StackGroup],
    ) -> ValueRange {
        self.calculate(dataset, columns, selector)
    }

    fn is_stacking(&self) -> bool {
        false
    }

    fn settings(&self) -> &RangeSettings;

    fn settings_mut(&mut self) -> &mut RangeSettings;
}

/// Plain min/max over every qualifying cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearRange {
    settings: RangeSettings,
}

impl LinearRange {
    #[must_use]
    pub fn new(settings: RangeSettings) -> Self {
        Self { settings }
    }
}

impl ScaleRange for LinearRange {
    fn calculate(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
    ) -> ValueRange {
        let mut acc = RangeAccumulator::new();
        let row_count = dataset.row_count();
        for column in columns {
            let Some(col) = dataset.column_index(column) else {
                continue;
            };
            for row in self.settings.rows(column, row_count) {
                if !selector.accepts(dataset, row) {
                    continue;
                }
                if let Some(value) = dataset.value(col, row).as_f64() {
                    acc.push(self.settings.adjust(value));
                }
            }
        }
        let range = acc.finish();
        trace!(columns = columns.len(), min = range.min, max = range.max, "linear range");
        range
    }

    fn settings(&self) -> &RangeSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut RangeSettings {
        &mut self.settings
    }
}
