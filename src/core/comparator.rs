use std::fmt;
use std::sync::Arc;

use crate::core::types::{CellValue, ValueOrdering};

/// Column-level comparator supplied by a dataset.
///
/// Implementations must accept `CellValue::Null` operands.
pub trait ValueComparator: fmt::Debug + Send + Sync {
    fn compare(&self, left: &CellValue, right: &CellValue) -> ValueOrdering;
}

pub type SharedComparator = Arc<dyn ValueComparator>;

/// Translates raw stored values into the values a chart displays and sorts by.
pub trait ValueMapper: fmt::Debug + Send + Sync {
    fn map_value(&self, column: &str, value: &CellValue) -> CellValue;
}

pub type SharedMapper = Arc<dyn ValueMapper>;

/// Orders values of the same type naturally; nulls sort first.
///
/// Values of different non-null types are `Incomparable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalComparator;

impl ValueComparator for NaturalComparator {
    fn compare(&self, left: &CellValue, right: &CellValue) -> ValueOrdering {
        match (left, right) {
            (CellValue::Null, CellValue::Null) => ValueOrdering::Equal,
            (CellValue::Null, _) => ValueOrdering::Less,
            (_, CellValue::Null) => ValueOrdering::Greater,
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b).into(),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b).into(),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b).into(),
            _ => ValueOrdering::Incomparable,
        }
    }
}

/// Transparent comparator adapter.
///
/// Keeps the wrapped comparator reachable (`inner`, `replace_inner`) after it has
/// been handed to a sort. When a mapper is attached, both operands are mapped
/// before they reach the wrapped comparator.
#[derive(Debug, Clone)]
pub struct ComparatorWrapper {
    inner: SharedComparator,
    mapping: Option<(SharedMapper, String)>,
}

impl ComparatorWrapper {
    #[must_use]
    pub fn new(inner: SharedComparator) -> Self {
        Self {
            inner,
            mapping: None,
        }
    }

    /// Wraps `inner` so it compares `mapper`-translated values of `column`.
    #[must_use]
    pub fn mapped(
        inner: SharedComparator,
        mapper: SharedMapper,
        column: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            mapping: Some((mapper, column.into())),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &SharedComparator {
        &self.inner
    }

    pub fn replace_inner(&mut self, inner: SharedComparator) -> SharedComparator {
        std::mem::replace(&mut self.inner, inner)
    }

    #[must_use]
    pub fn mapper(&self) -> Option<&SharedMapper> {
        self.mapping.as_ref().map(|(mapper, _)| mapper)
    }
}

impl ValueComparator for ComparatorWrapper {
    fn compare(&self, left: &CellValue, right: &CellValue) -> ValueOrdering {
        match &self.mapping {
            Some((mapper, column)) => {
                let left = mapper.map_value(column, left);
                let right = mapper.map_value(column, right);
                self.inner.compare(&left, &right)
            }
            None => self.inner.compare(left, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{ComparatorWrapper, NaturalComparator, ValueComparator, ValueMapper};
    use crate::core::types::{CellValue, ValueOrdering};

    #[derive(Debug)]
    struct Negate;

    impl ValueMapper for Negate {
        fn map_value(&self, _column: &str, value: &CellValue) -> CellValue {
            match value {
                CellValue::Number(v) => CellValue::Number(-v),
                other => other.clone(),
            }
        }
    }

    #[test]
    fn natural_comparator_orders_nulls_first_and_rejects_mixed_types() {
        let cmp = NaturalComparator;
        assert_eq!(
            cmp.compare(&CellValue::Null, &CellValue::from(1.0)),
            ValueOrdering::Less
        );
        assert_eq!(
            cmp.compare(&CellValue::from("a"), &CellValue::from(1.0)),
            ValueOrdering::Incomparable
        );
    }

    #[test]
    fn wrapper_passes_nulls_through_and_applies_mapping() {
        let plain = ComparatorWrapper::new(Arc::new(NaturalComparator));
        assert_eq!(
            plain.compare(&CellValue::Null, &CellValue::Null),
            ValueOrdering::Equal
        );

        let mapped = ComparatorWrapper::mapped(Arc::new(NaturalComparator), Arc::new(Negate), "v");
        assert_eq!(
            mapped.compare(&CellValue::from(1.0), &CellValue::from(2.0)),
            ValueOrdering::Greater
        );
    }

    #[test]
    fn replace_inner_returns_previous_comparator() {
        let mut wrapper = ComparatorWrapper::new(Arc::new(NaturalComparator));
        let previous = wrapper.replace_inner(Arc::new(NaturalComparator));
        assert!(format!("{previous:?}").contains("NaturalComparator"));
        assert!(wrapper.mapper().is_none());
    }
}
