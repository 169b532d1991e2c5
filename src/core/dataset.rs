use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::comparator::{SharedComparator, SharedMapper};
use crate::core::types::CellValue;
use crate::error::{ChartError, ChartResult};

/// Link target attached to a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    pub target: String,
    #[serde(default)]
    pub tooltip: Option<String>,
}

impl Hyperlink {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Read-only, row-addressable columnar data consumed by the composition layer.
///
/// Views over other datasets forward capability queries (`value_mapper`,
/// `supports_links`) to their source so callers never have to unwrap a view
/// chain themselves.
pub trait TabularDataset: fmt::Debug + Send + Sync {
    fn column_count(&self) -> usize;

    fn column_name(&self, col: usize) -> Option<&str>;

    fn row_count(&self) -> usize;

    /// Row count ignoring any projection/cropping applied by the dataset.
    fn row_count_unprojected(&self) -> usize {
        self.row_count()
    }

    /// Cell value; `CellValue::Null` when `col` or `row` is out of range.
    fn value(&self, col: usize, row: usize) -> CellValue;

    fn column_index(&self, name: &str) -> Option<usize> {
        (0..self.column_count()).find(|&col| self.column_name(col) == Some(name))
    }

    fn value_by_name(&self, name: &str, row: usize) -> CellValue {
        self.column_index(name)
            .map_or(CellValue::Null, |col| self.value(col, row))
    }

    fn comparator(&self, _col: usize) -> Option<SharedComparator> {
        None
    }

    /// Whether this dataset carries hyperlink metadata at all.
    fn supports_links(&self) -> bool {
        false
    }

    fn hyperlink(&self, _col: usize, _row: usize) -> Option<Hyperlink> {
        None
    }

    fn drill_hyperlinks(&self, _col: usize, _row: usize) -> Vec<Hyperlink> {
        Vec::new()
    }

    /// Mapper translating raw values to display values, if any dataset in the
    /// view chain applies one.
    fn value_mapper(&self) -> Option<SharedMapper> {
        None
    }

    /// Deep copy of this dataset and everything it wraps.
    fn box_clone(&self) -> Box<dyn TabularDataset>;

    fn dispose(&mut self) {}

    fn is_disposed(&self) -> bool {
        false
    }
}

impl Clone for Box<dyn TabularDataset> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Owned, row-major in-memory dataset.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataset {
    columns: IndexSet<String>,
    rows: Vec<Vec<CellValue>>,
    comparators: IndexMap<usize, SharedComparator>,
    links: IndexMap<usize, Hyperlink>,
    drill_links: IndexMap<usize, Vec<Hyperlink>>,
    links_supported: bool,
    disposed: bool,
}

impl MemoryDataset {
    /// Creates an empty dataset; column names must be unique.
    pub fn new<I, S>(columns: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = IndexSet::new();
        for column in columns {
            let column = column.into();
            if names.contains(&column) {
                return Err(ChartError::DuplicateColumn { name: column });
            }
            names.insert(column);
        }
        Ok(Self {
            columns: names,
            ..Self::default()
        })
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) -> ChartResult<()> {
        if row.len() != self.columns.len() {
            return Err(ChartError::RowWidthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn with_row<I, V>(mut self, row: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.push_row(row.into_iter().map(Into::into).collect())?;
        Ok(self)
    }

    pub fn with_comparator(
        mut self,
        column: &str,
        comparator: SharedComparator,
    ) -> ChartResult<Self> {
        let col = self.require_column(column)?;
        self.comparators.insert(col, comparator);
        Ok(self)
    }

    /// Attaches a column-wide link; also marks the dataset as link-capable.
    pub fn with_hyperlink(mut self, column: &str, link: Hyperlink) -> ChartResult<Self> {
        let col = self.require_column(column)?;
        self.links.insert(col, link);
        self.links_supported = true;
        Ok(self)
    }

    pub fn with_drill_hyperlinks(
        mut self,
        column: &str,
        links: Vec<Hyperlink>,
    ) -> ChartResult<Self> {
        let col = self.require_column(column)?;
        self.drill_links.insert(col, links);
        self.links_supported = true;
        Ok(self)
    }

    #[must_use]
    pub fn with_links_supported(mut self, supported: bool) -> Self {
        self.links_supported = supported;
        self
    }

    fn require_column(&self, column: &str) -> ChartResult<usize> {
        self.columns
            .get_index_of(column)
            .ok_or_else(|| ChartError::UnknownColumn(column.to_owned()))
    }
}

impl TabularDataset for MemoryDataset {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.columns.get_index(col).map(String::as_str)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn value(&self, col: usize, row: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .cloned()
            .unwrap_or_default()
    }

    fn comparator(&self, col: usize) -> Option<SharedComparator> {
        self.comparators.get(&col).cloned()
    }

    fn supports_links(&self) -> bool {
        self.links_supported
    }

    fn hyperlink(&self, col: usize, row: usize) -> Option<Hyperlink> {
        if row >= self.rows.len() {
            return None;
        }
        self.links.get(&col).cloned()
    }

    fn drill_hyperlinks(&self, col: usize, row: usize) -> Vec<Hyperlink> {
        if row >= self.rows.len() {
            return Vec::new();
        }
        self.drill_links.get(&col).cloned().unwrap_or_default()
    }

    fn box_clone(&self) -> Box<dyn TabularDataset> {
        Box::new(self.clone())
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Dataset whose raw values must be passed through a [`ValueMapper`] before
/// they are compared or displayed.
///
/// [`ValueMapper`]: crate::core::ValueMapper
#[derive(Debug)]
pub struct MappedDataset {
    source: Box<dyn TabularDataset>,
    mapper: SharedMapper,
}

impl MappedDataset {
    #[must_use]
    pub fn new(source: Box<dyn TabularDataset>, mapper: SharedMapper) -> Self {
        Self { source, mapper }
    }

    /// Display value of a cell.
    #[must_use]
    pub fn mapped_value(&self, col: usize, row: usize) -> CellValue {
        let raw = self.source.value(col, row);
        match self.source.column_name(col) {
            Some(name) => self.mapper.map_value(name, &raw),
            None => raw,
        }
    }
}

impl TabularDataset for MappedDataset {
    fn column_count(&self) -> usize {
        self.source.column_count()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.source.column_name(col)
    }

    fn row_count(&self) -> usize {
        self.source.row_count()
    }

    fn row_count_unprojected(&self) -> usize {
        self.source.row_count_unprojected()
    }

    fn value(&self, col: usize, row: usize) -> CellValue {
        self.source.value(col, row)
    }

    fn comparator(&self, col: usize) -> Option<SharedComparator> {
        self.source.comparator(col)
    }

    fn supports_links(&self) -> bool {
        self.source.supports_links()
    }

    fn hyperlink(&self, col: usize, row: usize) -> Option<Hyperlink> {
        self.source.hyperlink(col, row)
    }

    fn drill_hyperlinks(&self, col: usize, row: usize) -> Vec<Hyperlink> {
        self.source.drill_hyperlinks(col, row)
    }

    fn value_mapper(&self) -> Option<SharedMapper> {
        Some(self.mapper.clone())
    }

    fn box_clone(&self) -> Box<dyn TabularDataset> {
        Box::new(Self {
            source: self.source.box_clone(),
            mapper: self.mapper.clone(),
        })
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.source.is_disposed()
    }
}

/// Row-subset view over a source dataset, e.g. the rows selected by a brush.
#[derive(Debug)]
pub struct SubsetDataset {
    source: Box<dyn TabularDataset>,
    rows: Vec<usize>,
}

impl SubsetDataset {
    /// Keeps `rows` of `source`, in the given order; out-of-range rows are dropped.
    #[must_use]
    pub fn new(source: Box<dyn TabularDataset>, rows: Vec<usize>) -> Self {
        let row_count = source.row_count();
        let rows = rows.into_iter().filter(|&row| row < row_count).collect();
        Self { source, rows }
    }

    /// Keeps the rows of `source` accepted by `predicate`.
    #[must_use]
    pub fn filtered<F>(source: Box<dyn TabularDataset>, predicate: F) -> Self
    where
        F: Fn(&dyn TabularDataset, usize) -> bool,
    {
        let rows = (0..source.row_count())
            .filter(|&row| predicate(source.as_ref(), row))
            .collect();
        Self { source, rows }
    }

    /// Row in the source dataset backing `row` of this view.
    #[must_use]
    pub fn source_row(&self, row: usize) -> Option<usize> {
        self.rows.get(row).copied()
    }
}

impl TabularDataset for SubsetDataset {
    fn column_count(&self) -> usize {
        self.source.column_count()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.source.column_name(col)
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn value(&self, col: usize, row: usize) -> CellValue {
        self.source_row(row)
            .map_or(CellValue::Null, |source_row| self.source.value(col, source_row))
    }

    fn comparator(&self, col: usize) -> Option<SharedComparator> {
        self.source.comparator(col)
    }

    fn supports_links(&self) -> bool {
        self.source.supports_links()
    }

    fn hyperlink(&self, col: usize, row: usize) -> Option<Hyperlink> {
        self.source_row(row)
            .and_then(|source_row| self.source.hyperlink(col, source_row))
    }

    fn drill_hyperlinks(&self, col: usize, row: usize) -> Vec<Hyperlink> {
        self.source_row(row)
            .map(|source_row| self.source.drill_hyperlinks(col, source_row))
            .unwrap_or_default()
    }

    fn value_mapper(&self) -> Option<SharedMapper> {
        self.source.value_mapper()
    }

    fn box_clone(&self) -> Box<dyn TabularDataset> {
        Box::new(Self {
            source: self.source.box_clone(),
            rows: self.rows.clone(),
        })
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.source.is_disposed()
    }
}
