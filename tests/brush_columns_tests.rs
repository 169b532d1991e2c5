use chart_brush::ChartError;
use chart_brush::core::{
    ColumnRole, MemoryDataset, original_name, validate_brush_columns,
};

#[test]
fn prefixed_columns_with_base_column_validate() {
    let ds = MemoryDataset::new(["Sales", "__all__Sales", "__sum__Sales", "__top____all__Sales"])
        .expect("unique columns");
    validate_brush_columns(&ds).expect("every derived column has a base");
}

#[test]
fn orphan_prefixed_column_is_rejected() {
    let ds = MemoryDataset::new(["Sales", "__all__Profit"]).expect("unique columns");
    let error = validate_brush_columns(&ds).expect_err("orphan derived column");
    assert!(matches!(error, ChartError::InvalidData(_)));
    assert!(error.to_string().contains("__all__Profit"));
}

#[test]
fn bare_prefix_is_rejected() {
    let ds = MemoryDataset::new(["__all__"]).expect("unique columns");
    assert!(validate_brush_columns(&ds).is_err());
}

#[test]
fn duplicate_column_names_are_rejected_at_construction() {
    let error = MemoryDataset::new(["Sales", "Sales"]).expect_err("duplicate column");
    assert!(matches!(error, ChartError::DuplicateColumn { ref name } if name == "Sales"));
}

#[test]
fn roles_and_original_names() {
    assert_eq!(ColumnRole::classify("__top__Sales"), ColumnRole::IntervalTop("Sales"));
    assert!(!ColumnRole::classify("Sales").is_derived());
    assert_eq!(original_name("__all____top__Sales"), "Sales");
    assert_eq!(original_name("__sum__Sales"), "Sales");
}
