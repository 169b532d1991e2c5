use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::comparator::{
    ComparatorWrapper, NaturalComparator, SharedComparator, SharedMapper,
};
use crate::core::dataset::{Hyperlink, TabularDataset};
use crate::core::types::CellValue;

/// Concatenation of a base dataset and an extension (brushed) dataset.
///
/// Rows `[0, B)` come from `base`, rows `[B, B + E)` from `extension`. The
/// column set is the base's; extension columns are resolved by name.
#[derive(Debug)]
pub struct DatasetUnion {
    base: Box<dyn TabularDataset>,
    extension: Box<dyn TabularDataset>,
    links: IndexMap<usize, Hyperlink>,
    drill_links: IndexMap<usize, Vec<Hyperlink>>,
}

enum RowSource<'a> {
    Base(&'a dyn TabularDataset, usize),
    Extension(&'a dyn TabularDataset, usize),
}

impl DatasetUnion {
    #[must_use]
    pub fn new(base: Box<dyn TabularDataset>, extension: Box<dyn TabularDataset>) -> Self {
        debug!(
            base_rows = base.row_count(),
            extension_rows = extension.row_count(),
            columns = base.column_count(),
            "create dataset union"
        );
        Self {
            base,
            extension,
            links: IndexMap::new(),
            drill_links: IndexMap::new(),
        }
    }

    /// Overrides the link of every cell in `col`.
    #[must_use]
    pub fn with_hyperlink(mut self, col: usize, link: Hyperlink) -> Self {
        self.links.insert(col, link);
        self
    }

    #[must_use]
    pub fn with_drill_hyperlinks(mut self, col: usize, links: Vec<Hyperlink>) -> Self {
        self.drill_links.insert(col, links);
        self
    }

    #[must_use]
    pub fn base(&self) -> &dyn TabularDataset {
        self.base.as_ref()
    }

    #[must_use]
    pub fn extension(&self) -> &dyn TabularDataset {
        self.extension.as_ref()
    }

    #[must_use]
    pub fn base_row_count(&self) -> usize {
        self.base.row_count()
    }

    /// Row of the base dataset backing `row`, or `None` for extension rows.
    #[must_use]
    pub fn base_row(&self, row: usize) -> Option<usize> {
        (row < self.base.row_count()).then_some(row)
    }

    fn resolve_row(&self, row: usize) -> Option<RowSource<'_>> {
        let base_rows = self.base.row_count();
        if row < base_rows {
            Some(RowSource::Base(self.base.as_ref(), row))
        } else if row - base_rows < self.extension.row_count() {
            Some(RowSource::Extension(self.extension.as_ref(), row - base_rows))
        } else {
            None
        }
    }

    fn extension_col(&self, col: usize) -> Option<usize> {
        let name = self.base.column_name(col)?;
        self.extension.column_index(name)
    }
}

impl TabularDataset for DatasetUnion {
    fn column_count(&self) -> usize {
        self.base.column_count()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.base.column_name(col)
    }

    fn row_count(&self) -> usize {
        self.base.row_count() + self.extension.row_count()
    }

    fn row_count_unprojected(&self) -> usize {
        self.row_count()
    }

    fn value(&self, col: usize, row: usize) -> CellValue {
        match self.resolve_row(row) {
            Some(RowSource::Base(base, row)) => base.value(col, row),
            Some(RowSource::Extension(extension, row)) => self
                .extension_col(col)
                .map_or(CellValue::Null, |col| extension.value(col, row)),
            None => CellValue::Null,
        }
    }

    /// Base comparator, wrapped to compare mapped values when the extension
    /// applies a value mapping.
    fn comparator(&self, col: usize) -> Option<SharedComparator> {
        let inner = self.base.comparator(col);
        let Some(mapper) = self.extension.value_mapper() else {
            return inner;
        };
        let column = self.base.column_name(col)?;
        let inner = inner.unwrap_or_else(|| Arc::new(NaturalComparator));
        Some(Arc::new(ComparatorWrapper::mapped(inner, mapper, column)))
    }

    fn supports_links(&self) -> bool {
        true
    }

    fn hyperlink(&self, col: usize, row: usize) -> Option<Hyperlink> {
        if let Some(link) = self.links.get(&col) {
            return Some(link.clone());
        }
        match self.resolve_row(row)? {
            RowSource::Base(base, row) if base.supports_links() => base.hyperlink(col, row),
            RowSource::Extension(extension, row) if extension.supports_links() => {
                extension.hyperlink(self.extension_col(col)?, row)
            }
            _ => None,
        }
    }

    fn drill_hyperlinks(&self, col: usize, row: usize) -> Vec<Hyperlink> {
        if let Some(links) = self.drill_links.get(&col).filter(|links| !links.is_empty()) {
            return links.clone();
        }
        match self.resolve_row(row) {
            Some(RowSource::Base(base, row)) if base.supports_links() => {
                base.drill_hyperlinks(col, row)
            }
            Some(RowSource::Extension(extension, row)) if extension.supports_links() => self
                .extension_col(col)
                .map(|col| extension.drill_hyperlinks(col, row))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn value_mapper(&self) -> Option<SharedMapper> {
        self.base
            .value_mapper()
            .or_else(|| self.extension.value_mapper())
    }

    fn box_clone(&self) -> Box<dyn TabularDataset> {
        Box::new(Self {
            base: self.base.box_clone(),
            extension: self.extension.box_clone(),
            links: self.links.clone(),
            drill_links: self.drill_links.clone(),
        })
    }

    fn dispose(&mut self) {
        debug!("dispose dataset union sources");
        self.base.dispose();
        self.extension.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.base.is_disposed() || self.extension.is_disposed()
    }
}
