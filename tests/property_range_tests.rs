use chart_brush::core::{
    AllRows, CellValue, DatasetUnion, LinearRange, MemoryDataset, ParetoRange, ScaleRange,
    StackRange, TabularDataset, ValueRange,
};
use proptest::prelude::*;

fn dataset(rows: &[(f64, f64)]) -> MemoryDataset {
    let mut ds = MemoryDataset::new(["a", "b"]).expect("unique columns");
    for &(a, b) in rows {
        ds.push_row(vec![CellValue::from(a), CellValue::from(b)])
            .expect("two cells");
    }
    ds
}

proptest! {
    #[test]
    fn pareto_range_is_union_of_stack_and_linear(
        rows in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..24)
    ) {
        let ds = dataset(&rows);
        let cols = vec!["a".to_owned(), "b".to_owned()];

        let stack = StackRange::default()
            .with_stack_negative(false)
            .calculate(&ds, &cols, &AllRows);
        let linear = LinearRange::default().calculate(&ds, &cols, &AllRows);
        let pareto = ParetoRange::default().calculate(&ds, &cols, &AllRows);

        let expected = ValueRange::new(stack.min.min(linear.min), stack.max.max(linear.max));
        prop_assert_eq!(pareto, expected);
        prop_assert!(pareto.min <= pareto.max);
    }

    #[test]
    fn registering_a_stack_pair_twice_never_changes_the_range(
        rows in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..16)
    ) {
        let ds = dataset(&rows);
        let cols = vec!["a".to_owned(), "b".to_owned()];

        let mut once = StackRange::default();
        once.add_stack_fields(["a", "b"]);
        let mut twice = once.clone();
        twice.add_stack_fields(["b", "a"]);

        prop_assert_eq!(
            once.calculate(&ds, &cols, &AllRows),
            twice.calculate(&ds, &cols, &AllRows)
        );
    }

    #[test]
    fn union_addresses_base_then_extension_rows(
        base_rows in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 0..12),
        extension_rows in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 0..12)
    ) {
        let base = dataset(&base_rows);
        let extension = dataset(&extension_rows);
        let union = DatasetUnion::new(Box::new(base.clone()), Box::new(extension.clone()));
        let b = base_rows.len();

        prop_assert_eq!(union.row_count(), b + extension_rows.len());
        for row in 0..union.row_count() {
            for col in 0..2 {
                if row < b {
                    prop_assert_eq!(union.base_row(row), Some(row));
                    prop_assert_eq!(union.value(col, row), base.value(col, row));
                } else {
                    prop_assert_eq!(union.base_row(row), None);
                    prop_assert_eq!(union.value(col, row), extension.value(col, row - b));
                }
            }
        }
    }
}
