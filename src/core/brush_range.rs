use tracing::debug;

use crate::core::brush_columns::{ColumnRole, is_sum_column};
use crate::core::dataset::TabularDataset;
use crate::core::range::{RangeSettings, RowSelector, ScaleRange};
use crate::core::stack_range::StackGroup;
use crate::core::types::ValueRange;

/// Range wrapper for brushed charts.
///
/// Sum/waterfall columns never size the axis. When the wrapped range stacks and
/// measures are not stacked together, every `__all__X` column stacks with `X`:
/// brushed values under negative numbers can exceed the complete-set extent, so
/// the two must share stack offsets instead of being max-ed independently.
#[derive(Debug)]
pub struct BrushRange {
    inner: Box<dyn ScaleRange>,
    stack_measures: bool,
}

impl BrushRange {
    #[must_use]
    pub fn new(inner: Box<dyn ScaleRange>) -> Self {
        Self {
            inner,
            stack_measures: false,
        }
    }

    /// Whether the chart stacks all measures together.
    #[must_use]
    pub fn with_stack_measures(mut self, stack_measures: bool) -> Self {
        self.stack_measures = stack_measures;
        self
    }

    #[must_use]
    pub fn stack_measures(&self) -> bool {
        self.stack_measures
    }

    #[must_use]
    pub fn inner(&self) -> &dyn ScaleRange {
        self.inner.as_ref()
    }

    #[must_use]
    pub fn start_row(&self, measure: &str) -> usize {
        self.inner.settings().start_row(measure)
    }

    #[must_use]
    pub fn end_row(&self, measure: &str, row_count: usize) -> usize {
        self.inner.settings().end_row(measure, row_count)
    }
}

/// `{__all__X, X}` stack groups for every complete-set column in `columns`.
#[must_use]
pub fn brush_stack_groups(columns: &[String]) -> Vec<StackGroup> {
    columns
        .iter()
        .filter_map(|name| match ColumnRole::classify(name) {
            ColumnRole::CompleteSet(base) => Some(StackGroup::new([name.as_str(), base])),
            _ => None,
        })
        .collect()
}

impl ScaleRange for BrushRange {
    fn calculate(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
    ) -> ValueRange {
        let kept: Vec<String> = columns
            .iter()
            .filter(|name| !is_sum_column(name))
            .cloned()
            .collect();
        if kept.len() != columns.len() {
            debug!(
                dropped = columns.len() - kept.len(),
                "brush range ignores sum columns"
            );
        }
        if kept.is_empty() {
            return ValueRange::EMPTY;
        }

        if self.inner.is_stacking() && !self.stack_measures {
            let groups = brush_stack_groups(&kept);
            return self
                .inner
                .calculate_with_stack_groups(dataset, &kept, selector, &groups);
        }
        self.inner.calculate(dataset, &kept, selector)
    }

    fn is_stacking(&self) -> bool {
        self.inner.is_stacking()
    }

    fn settings(&self) -> &RangeSettings {
        self.inner.settings()
    }

    fn settings_mut(&mut self) -> &mut RangeSettings {
        self.inner.settings_mut()
    }
}
