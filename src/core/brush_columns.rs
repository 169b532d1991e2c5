//! Reserved column-name prefixes for brushed and derived columns.
//!
//! A brushed chart carries, next to each measure `X`, synthetic columns such as
//! `__all__X` (the complete-set copy of `X`) or `__sum__X` (a waterfall total).
//! Stripping the prefixes always yields a column of the same dataset.

use smallvec::SmallVec;

use crate::core::dataset::TabularDataset;
use crate::error::{ChartError, ChartResult};

/// Complete-set (unbrushed) duplicate of a measure.
pub const ALL_PREFIX: &str = "__all__";
/// Sum/waterfall column derived from a measure.
pub const SUM_PREFIX: &str = "__sum__";
/// Upper bound of an interval measure.
pub const INTERVAL_TOP_PREFIX: &str = "__top__";

const PREFIXES: [&str; 3] = [ALL_PREFIX, SUM_PREFIX, INTERVAL_TOP_PREFIX];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole<'a> {
    /// A plain column.
    Base,
    /// `__all__X`, carrying `X`.
    CompleteSet(&'a str),
    /// `__sum__X`, carrying `X`.
    Sum(&'a str),
    /// `__top__X`, carrying `X`.
    IntervalTop(&'a str),
}

impl<'a> ColumnRole<'a> {
    /// Classifies a column by its outermost prefix.
    #[must_use]
    pub fn classify(name: &'a str) -> Self {
        if let Some(rest) = name.strip_prefix(ALL_PREFIX) {
            Self::CompleteSet(rest)
        } else if let Some(rest) = name.strip_prefix(SUM_PREFIX) {
            Self::Sum(rest)
        } else if let Some(rest) = name.strip_prefix(INTERVAL_TOP_PREFIX) {
            Self::IntervalTop(rest)
        } else {
            Self::Base
        }
    }

    #[must_use]
    pub fn is_derived(self) -> bool {
        !matches!(self, Self::Base)
    }
}

#[must_use]
pub fn is_sum_column(name: &str) -> bool {
    matches!(ColumnRole::classify(name), ColumnRole::Sum(_))
}

#[must_use]
pub fn is_complete_set_column(name: &str) -> bool {
    matches!(ColumnRole::classify(name), ColumnRole::CompleteSet(_))
}

/// Strips every reserved prefix, e.g. `__top____all__Sales` -> `Sales`.
#[must_use]
pub fn original_name(name: &str) -> &str {
    let mut current = name;
    loop {
        match PREFIXES
            .iter()
            .find_map(|prefix| current.strip_prefix(prefix))
        {
            Some(rest) => current = rest,
            None => return current,
        }
    }
}

#[must_use]
pub fn complete_set_name(name: &str) -> String {
    format!("{ALL_PREFIX}{name}")
}

#[must_use]
pub fn interval_top_name(name: &str) -> String {
    format!("{INTERVAL_TOP_PREFIX}{name}")
}

/// Every synthetic name under which a measure may appear in a brushed chart.
///
/// Interval variants, including both prefix orders, are only produced when
/// `interval` is set.
#[must_use]
pub fn derived_names(name: &str, interval: bool) -> SmallVec<[String; 4]> {
    let mut names = SmallVec::new();
    names.push(complete_set_name(name));
    if interval {
        names.push(interval_top_name(name));
        names.push(interval_top_name(&complete_set_name(name)));
        names.push(complete_set_name(&interval_top_name(name)));
    }
    names
}

/// Checks that every prefixed column resolves to an unprefixed column.
pub fn validate_brush_columns(dataset: &dyn TabularDataset) -> ChartResult<()> {
    for col in 0..dataset.column_count() {
        let Some(name) = dataset.column_name(col) else {
            continue;
        };
        if !ColumnRole::classify(name).is_derived() {
            continue;
        }
        let original = original_name(name);
        if original.is_empty() || dataset.column_index(original).is_none() {
            return Err(ChartError::InvalidData(format!(
                "derived column `{name}` has no base column `{original}`"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ColumnRole, derived_names, original_name};

    #[test]
    fn classify_reads_outermost_prefix() {
        assert_eq!(ColumnRole::classify("Sales"), ColumnRole::Base);
        assert_eq!(
            ColumnRole::classify("__all__Sales"),
            ColumnRole::CompleteSet("Sales")
        );
        assert_eq!(
            ColumnRole::classify("__sum____all__Sales"),
            ColumnRole::Sum("__all__Sales")
        );
    }

    #[test]
    fn original_name_strips_nested_prefixes() {
        assert_eq!(original_name("__top____all__Sales"), "Sales");
        assert_eq!(original_name("Sales"), "Sales");
    }

    #[test]
    fn derived_names_cover_interval_cross_product() {
        assert_eq!(derived_names("m", false).as_slice(), ["__all__m"]);
        assert_eq!(
            derived_names("m", true).as_slice(),
            ["__all__m", "__top__m", "__top____all__m", "__all____top__m"]
        );
    }
}
