use crate::core::dataset::TabularDataset;
use crate::core::range::{LinearRange, RangeSettings, RowSelector, ScaleRange};
use crate::core::stack_range::{StackGroup, StackRange};
use crate::core::types::ValueRange;

/// Range for pareto charts: a stacked bar series plus a cumulative line on one axis.
///
/// The result bounds both the stack (with negative stacking off) and a plain
/// linear range over the same columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParetoRange {
    stack: StackRange,
}

impl ParetoRange {
    #[must_use]
    pub fn new(stack: StackRange) -> Self {
        Self { stack }
    }

    #[must_use]
    pub fn stack(&self) -> &StackRange {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut StackRange {
        &mut self.stack
    }

    fn linear(&self) -> LinearRange {
        LinearRange::new(self.stack.settings().clone())
    }
}

impl ScaleRange for ParetoRange {
    fn calculate(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
    ) -> ValueRange {
        self.calculate_with_stack_groups(dataset, columns, selector, &[])
    }

    fn calculate_with_stack_groups(
        &self,
        dataset: &dyn TabularDataset,
        columns: &[String],
        selector: &dyn RowSelector,
        extra_groups: &[StackGroup],
    ) -> ValueRange {
        let stacked = self
            .stack
            .calculate_stacked(dataset, columns, selector, extra_groups, false);
        let linear = self.linear().calculate(dataset, columns, selector);
        stacked.union(linear)
    }

    fn is_stacking(&self) -> bool {
        true
    }

    fn settings(&self) -> &RangeSettings {
        self.stack.settings()
    }

    fn settings_mut(&mut self) -> &mut RangeSettings {
        self.stack.settings_mut()
    }
}
