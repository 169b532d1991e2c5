pub mod brush_columns;
pub mod brush_range;
pub mod comparator;
pub mod dataset;
pub mod dataset_union;
pub mod original_order;
pub mod pareto_range;
pub mod percentage_rebaser;
pub mod range;
pub mod stack_range;
pub mod types;

pub use brush_columns::{
    ALL_PREFIX, ColumnRole, INTERVAL_TOP_PREFIX, SUM_PREFIX, original_name,
    validate_brush_columns,
};
pub use brush_range::{BrushRange, brush_stack_groups};
pub use comparator::{
    ComparatorWrapper, NaturalComparator, SharedComparator, SharedMapper, ValueComparator,
    ValueMapper,
};
pub use dataset::{Hyperlink, MappedDataset, MemoryDataset, SubsetDataset, TabularDataset};
pub use dataset_union::DatasetUnion;
pub use original_order::OriginalOrderComparator;
pub use pareto_range::ParetoRange;
pub use percentage_rebaser::{GrandFormula, PercentageKind, PercentageRebaser, SummaryTable};
pub use range::{AllRows, LinearRange, RangeSettings, RowBounds, RowSelector, ScaleRange};
pub use stack_range::{StackGroup, StackRange};
pub use types::{CellValue, ValueKey, ValueOrdering, ValueRange};
