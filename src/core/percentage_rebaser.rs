use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::comparator::{SharedComparator, SharedMapper};
use crate::core::dataset::{Hyperlink, TabularDataset};
use crate::core::types::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PercentageKind {
    /// Plain aggregate, not a percentage.
    #[default]
    None,
    /// Percentage of the table's grand total.
    GrandTotal,
    /// Percentage of the enclosing group's total.
    Group,
}

/// Grand-total aggregate of one measure in a summarized table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandFormula {
    pub measure: String,
    #[serde(default)]
    pub percentage: PercentageKind,
    /// Rendered aggregate value.
    #[serde(default)]
    pub value: Option<f64>,
    /// Aggregate before percentage normalization.
    #[serde(default)]
    pub original_result: Option<f64>,
}

impl GrandFormula {
    #[must_use]
    pub fn new(measure: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            measure: measure.into(),
            percentage: PercentageKind::None,
            value,
            original_result: None,
        }
    }

    /// Percentage-of-grand-total formula whose grand total is `total`.
    #[must_use]
    pub fn grand_percentage(measure: impl Into<String>, total: Option<f64>) -> Self {
        Self {
            measure: measure.into(),
            percentage: PercentageKind::GrandTotal,
            value: Some(1.0),
            original_result: total,
        }
    }

    #[must_use]
    pub fn with_percentage(mut self, percentage: PercentageKind) -> Self {
        self.percentage = percentage;
        self
    }

    #[must_use]
    pub fn is_grand_percentage(&self) -> bool {
        self.percentage == PercentageKind::GrandTotal
    }

    /// The measure's grand total. Percentage formulas only know it through their
    /// un-normalized result.
    #[must_use]
    pub fn grand_total(&self) -> Option<f64> {
        let total = match self.percentage {
            PercentageKind::None => self.original_result.or(self.value),
            PercentageKind::GrandTotal | PercentageKind::Group => self.original_result,
        };
        total.filter(|total| total.is_finite())
    }
}

/// Summarized (grouped) table with its grand-total formulas.
///
/// The first `grouping_count + 1` columns are headers; the remaining columns map
/// one-to-one, in order, onto `grand_formulas`.
#[derive(Debug)]
pub struct SummaryTable {
    table: Box<dyn TabularDataset>,
    grouping_count: usize,
    grand_formulas: Vec<GrandFormula>,
}

impl SummaryTable {
    #[must_use]
    pub fn new(
        table: Box<dyn TabularDataset>,
        grouping_count: usize,
        grand_formulas: Vec<GrandFormula>,
    ) -> Self {
        Self {
            table,
            grouping_count,
            grand_formulas,
        }
    }

    #[must_use]
    pub fn grouping_count(&self) -> usize {
        self.grouping_count
    }

    /// Index of the first measure column.
    #[must_use]
    pub fn measure_offset(&self) -> usize {
        self.grouping_count + 1
    }

    #[must_use]
    pub fn grand_formulas(&self) -> &[GrandFormula] {
        &self.grand_formulas
    }

    #[must_use]
    pub fn table(&self) -> &dyn TabularDataset {
        self.table.as_ref()
    }
}

impl TabularDataset for SummaryTable {
    fn column_count(&self) -> usize {
        self.table.column_count()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.table.column_name(col)
    }

    fn row_count(&self) -> usize {
        self.table.row_count()
    }

    fn row_count_unprojected(&self) -> usize {
        self.table.row_count_unprojected()
    }

    fn value(&self, col: usize, row: usize) -> CellValue {
        self.table.value(col, row)
    }

    fn comparator(&self, col: usize) -> Option<SharedComparator> {
        self.table.comparator(col)
    }

    fn supports_links(&self) -> bool {
        self.table.supports_links()
    }

    fn hyperlink(&self, col: usize, row: usize) -> Option<Hyperlink> {
        self.table.hyperlink(col, row)
    }

    fn drill_hyperlinks(&self, col: usize, row: usize) -> Vec<Hyperlink> {
        self.table.drill_hyperlinks(col, row)
    }

    fn value_mapper(&self) -> Option<SharedMapper> {
        self.table.value_mapper()
    }

    fn box_clone(&self) -> Box<dyn TabularDataset> {
        Box::new(Self {
            table: self.table.box_clone(),
            grouping_count: self.grouping_count,
            grand_formulas: self.grand_formulas.clone(),
        })
    }

    fn dispose(&mut self) {
        self.table.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.table.is_disposed()
    }
}

/// View over a brushed summary table that expresses percentage-of-grand-total
/// cells relative to the complete-set grand total.
///
/// A brushed cell holds `row / brushed_total`; it is returned as
/// `cell * brushed_total / complete_total`, i.e. `row / complete_total`.
#[derive(Debug)]
pub struct PercentageRebaser {
    brushed: SummaryTable,
    complete_totals: Vec<Option<f64>>,
    brushed_totals: Vec<Option<f64>>,
    grand_percentage: Vec<bool>,
}

impl PercentageRebaser {
    #[must_use]
    pub fn new(complete: &SummaryTable, brushed: SummaryTable) -> Self {
        let complete_totals = complete
            .grand_formulas()
            .iter()
            .map(GrandFormula::grand_total)
            .collect();
        let brushed_totals = brushed
            .grand_formulas()
            .iter()
            .map(GrandFormula::grand_total)
            .collect();
        let grand_percentage = brushed
            .grand_formulas()
            .iter()
            .map(GrandFormula::is_grand_percentage)
            .collect();
        Self {
            brushed,
            complete_totals,
            brushed_totals,
            grand_percentage,
        }
    }

    #[must_use]
    pub fn brushed(&self) -> &SummaryTable {
        &self.brushed
    }

    /// Whether cells of `col` are rebased.
    #[must_use]
    pub fn is_rebased_column(&self, col: usize) -> bool {
        self.measure_index(col)
            .is_some_and(|index| self.grand_percentage.get(index).copied().unwrap_or(false))
    }

    fn measure_index(&self, col: usize) -> Option<usize> {
        col.checked_sub(self.brushed.measure_offset())
            .filter(|&index| index < self.grand_percentage.len())
    }

    fn rebase(&self, index: usize, value: f64) -> Option<f64> {
        let brushed_total = self.brushed_totals.get(index).copied().flatten()?;
        let complete_total = self.complete_totals.get(index).copied().flatten()?;
        if complete_total == 0.0 {
            return None;
        }
        Some(value * brushed_total / complete_total)
    }
}

impl TabularDataset for PercentageRebaser {
    fn column_count(&self) -> usize {
        self.brushed.column_count()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.brushed.column_name(col)
    }

    fn row_count(&self) -> usize {
        self.brushed.row_count()
    }

    fn row_count_unprojected(&self) -> usize {
        self.brushed.row_count_unprojected()
    }

    fn value(&self, col: usize, row: usize) -> CellValue {
        let raw = self.brushed.value(col, row);
        if !self.is_rebased_column(col) {
            return raw;
        }
        let (Some(index), Some(value)) = (self.measure_index(col), raw.as_f64()) else {
            return raw;
        };
        match self.rebase(index, value) {
            Some(rebased) => CellValue::Number(rebased),
            None => {
                trace!(col, row, "grand totals unavailable, keeping brushed percentage");
                raw
            }
        }
    }

    fn comparator(&self, col: usize) -> Option<SharedComparator> {
        self.brushed.comparator(col)
    }

    fn supports_links(&self) -> bool {
        self.brushed.supports_links()
    }

    fn hyperlink(&self, col: usize, row: usize) -> Option<Hyperlink> {
        self.brushed.hyperlink(col, row)
    }

    fn drill_hyperlinks(&self, col: usize, row: usize) -> Vec<Hyperlink> {
        self.brushed.drill_hyperlinks(col, row)
    }

    fn value_mapper(&self) -> Option<SharedMapper> {
        self.brushed.value_mapper()
    }

    fn box_clone(&self) -> Box<dyn TabularDataset> {
        let brushed = SummaryTable {
            table: self.brushed.table.box_clone(),
            grouping_count: self.brushed.grouping_count,
            grand_formulas: self.brushed.grand_formulas.clone(),
        };
        Box::new(Self {
            brushed,
            complete_totals: self.complete_totals.clone(),
            brushed_totals: self.brushed_totals.clone(),
            grand_percentage: self.grand_percentage.clone(),
        })
    }

    fn dispose(&mut self) {
        self.brushed.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.brushed.is_disposed()
    }
}
