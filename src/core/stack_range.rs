use std::collections::HashMap;

use indexmap::IndexSet;
use tracing::trace;

use crate::core::dataset::TabularDataset;
use crate::core::range::{RangeSettings, RowSelector, ScaleRange};
use crate::core::types::{RangeAccumulator, ValueKey, ValueRange};

/// Column names whose values stack on top of each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackGroup {
    fields: IndexSet<String>,
}

impl StackGroup {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Range of stacked values.
///
/// Rows sharing the same `group_fields` values form one stack position (with no
/// group field every row is its own position). Within a position, the columns of
/// one stack group accumulate. Without registered groups all columns stack
/// together; once groups exist, a column outside every group stacks alone.
#[derive(Debug, Clone, PartialEq)]
pub struct StackRange {
    settings: RangeSettings,
    stack_negative: bool,
    group_fields: Vec<String>,
    stack_groups: Vec<StackGroup>,
}

impl Default for StackRange {
    fn default() -> Self {
        Self::new(RangeSettings::default())
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct StackTotals {
    positive: f64,
    negative: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StackPosition {
    Row(usize),
    Values(Vec<ValueKey>),
}

impl StackRange {
    #[must_use]
    pub fn new(settings: RangeSettings) -> Self {
        Self {
            settings,
            stack_negative: true,
            group_fields: Vec::new(),
            stack_groups: Vec::new(),
        }
    }

    /// When on (the default), negative values stack downward from zero
    /// independently of positive values.
    #[must_use]
    pub fn with_stack_negative(mut self, stack_negative: bool) -> Self {
        self.stack_negative = stack_negative;
        self
    }

    #[must_use]
    pub fn stack_negative(&self) -> bool {
        self.stack_negative
    }

    /// Dimension columns whose values identify one stack position.
    #[must_use]
    pub fn with_group_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Registers fields that stack together. Registering the same set twice is a no-op.
    pub fn add_stack_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_group(&mut self.stack_groups, StackGroup::new(fields));
    }

    #[must_use]
    pub fn stack_groups(&self) -> &[StackGroup] {
        &self.stack_groups
    }

    pub(crate) fn calculate_stacked(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
        extra_groups: &[StackGroup],
        stack_negative: bool,
    ) -> ValueRange {
        let present: Vec<(&str, usize)> = columns
            .iter()
            .filter_map(|name| {
                dataset
                    .column_index(name)
                    .map(|col| (name.as_str(), col))
            })
            .collect();
        if present.is_empty() {
            return ValueRange::EMPTY;
        }

        let mut groups = self.stack_groups.clone();
        for group in extra_groups {
            push_group(&mut groups, group.clone());
        }
        let assignment = assign_groups(&present, &groups);

        let group_cols: Vec<usize> = self
            .group_fields
            .iter()
            .filter_map(|field| dataset.column_index(field))
            .collect();

        let row_count = dataset.row_count();
        let mut totals: HashMap<(usize, StackPosition), StackTotals> = HashMap::new();
        let mut acc = RangeAccumulator::new();
        for row in 0..row_count {
            if !selector.accepts(dataset, row) {
                continue;
            }
            let position = if group_cols.is_empty() {
                StackPosition::Row(row)
            } else {
                StackPosition::Values(
                    group_cols
                        .iter()
                        .map(|&col| dataset.value(col, row).key())
                        .collect(),
                )
            };
            for (&(name, col), &group) in present.iter().zip(&assignment) {
                if !self.settings.rows(name, row_count).contains(&row) {
                    continue;
                }
                let Some(value) = dataset.value(col, row).as_f64() else {
                    continue;
                };
                let value = self.settings.adjust(value);
                if !value.is_finite() {
                    continue;
                }
                let entry = totals.entry((group, position.clone())).or_default();
                if stack_negative && value < 0.0 {
                    entry.negative += value;
                    acc.push(entry.negative);
                } else {
                    entry.positive += value;
                    acc.push(entry.positive);
                }
            }
        }

        let range = acc.finish();
        trace!(
            columns = present.len(),
            groups = groups.len(),
            stack_negative,
            min = range.min,
            max = range.max,
            "stack range"
        );
        range
    }
}

fn push_group(groups: &mut Vec<StackGroup>, group: StackGroup) {
    if !group.is_empty() && !groups.contains(&group) {
        groups.push(group);
    }
}

/// Group index per column: the first registered group containing it, a shared
/// index when nothing is registered, otherwise a fresh singleton index.
fn assign_groups(columns: &[(&str, usize)], groups: &[StackGroup]) -> Vec<usize> {
    if groups.is_empty() {
        return vec![0; columns.len()];
    }
    let mut next_singleton = groups.len();
    columns
        .iter()
        .map(|(name, _)| {
            groups
                .iter()
                .position(|group| group.contains(name))
                .unwrap_or_else(|| {
                    next_singleton += 1;
                    next_singleton - 1
                })
        })
        .collect()
}

impl ScaleRange for StackRange {
    fn calculate(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
    ) -> ValueRange {
        self.calculate_stacked(dataset, columns, selector, &[], self.stack_negative)
    }

    fn calculate_with_stack_groups(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
        extra_groups: &[StackGroup],
    ) -> ValueRange {
        self.calculate_stacked(dataset, columns, selector, extra_groups, self.stack_negative)
    }

    fn is_stacking(&self) -> bool {
        true
    }

    fn settings(&self) -> &RangeSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut RangeSettings {
        &mut self.settings
    }
}
