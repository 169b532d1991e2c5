use crate::core::brush_columns::derived_names;

use super::chart_info::{AestheticRef, ChartInfo};
use super::frame::{CombinedFrame, FrameKind, FrameValue, StaticFrame, distinct_count};
use super::frame_strategy::{
    AestheticStrategy, FrameStrategy, VisualChannel, paired, resolve_binding, shared_field,
};

/// Size channel.
///
/// Combined size frames also answer for the brushed and interval-top columns
/// derived from each measure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeFrameStrategy;

impl AestheticStrategy for SizeFrameStrategy {
    fn channel(&self) -> VisualChannel {
        VisualChannel::Size
    }

    fn aesthetic_ref<'a>(
        &self,
        info: &'a ChartInfo,
        measure: Option<&str>,
    ) -> Option<&'a AestheticRef> {
        resolve_binding(
            info,
            measure,
            |aggregate| aggregate.size_field.as_ref(),
            info.size_field.as_ref(),
        )
    }
}

impl FrameStrategy for SizeFrameStrategy {
    fn frame_kind(&self) -> FrameKind {
        FrameKind::Size
    }

    fn supports_general_frame(&self, _info: &ChartInfo) -> bool {
        true
    }

    fn field_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame> {
        info.measure(measure).map(|aggregate| &aggregate.size_frame)
    }

    fn combine(
        &self,
        info: &ChartInfo,
        names: &[String],
        frames: &[StaticFrame],
        _same_source_field: bool,
        force_visible: bool,
    ) -> CombinedFrame {
        let interval = info.chart_type.is_interval();
        let mut combined = CombinedFrame::new(FrameKind::Size);
        let mut values: Vec<FrameValue> = Vec::with_capacity(names.len());

        for (name, frame) in paired(names, frames) {
            let value = match frame.value {
                FrameValue::Size(size) => FrameValue::Size(size),
                _ => FrameKind::Size.default_value(),
            };
            values.push(value);
            combined.entries.insert(name.clone(), value);
            for derived in derived_names(name, interval) {
                combined.entries.insert(derived, value);
            }
        }

        combined.field = shared_field(frames);
        combined.legend_visible = combined.field.is_some()
            && force_visible
            && info.legend_enabled
            && distinct_count(&values) > 1;
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::SizeFrameStrategy;
    use crate::api::chart_info::{ChartInfo, ChartType};
    use crate::api::frame::{FrameValue, StaticFrame};
    use crate::api::frame_strategy::FrameStrategy;

    #[test]
    fn unbound_sizes_never_show_a_legend() {
        let combined = SizeFrameStrategy.combine(
            &ChartInfo::default(),
            &["a".to_owned(), "b".to_owned()],
            &[StaticFrame::size(1.0), StaticFrame::size(4.0)],
            false,
            true,
        );
        assert!(!combined.legend_visible);
        assert_eq!(combined.value_for_measure("__all__b"), FrameValue::Size(4.0));
    }

    #[test]
    fn plain_charts_skip_interval_top_entries() {
        let combined = SizeFrameStrategy.combine(
            &ChartInfo::new(ChartType::Bar),
            &["a".to_owned()],
            &[StaticFrame::size(2.0).with_field("Weight")],
            false,
            true,
        );
        assert!(combined.contains("__all__a"));
        assert!(!combined.contains("__top__a"));
        assert!(!combined.legend_visible);
    }
}
