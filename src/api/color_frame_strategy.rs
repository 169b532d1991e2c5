use tracing::debug;

use crate::render::Color;

use super::chart_info::{AestheticRef, ChartInfo};
use super::frame::{CombinedFrame, FrameKind, FrameValue, StaticFrame};
use super::frame_strategy::{
    AestheticStrategy, FrameStrategy, VisualChannel, paired, resolve_binding, shared_field,
};
use super::palette;

/// Color channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorFrameStrategy;

impl AestheticStrategy for ColorFrameStrategy {
    fn channel(&self) -> VisualChannel {
        VisualChannel::Color
    }

    fn aesthetic_ref<'a>(
        &self,
        info: &'a ChartInfo,
        measure: Option<&str>,
    ) -> Option<&'a AestheticRef> {
        resolve_binding(
            info,
            measure,
            |aggregate| aggregate.color_field.as_ref(),
            info.color_field.as_ref(),
        )
    }
}

impl FrameStrategy for ColorFrameStrategy {
    fn frame_kind(&self) -> FrameKind {
        FrameKind::Color
    }

    fn field_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame> {
        info.measure(measure).map(|aggregate| &aggregate.color_frame)
    }

    fn supports_summary_frame(&self) -> bool {
        true
    }

    fn summary_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame> {
        info.measure(measure)?.summary_color_frame.as_ref()
    }

    /// Measures sharing a source field never share a color: a repeated color is
    /// replaced by the first palette color not yet used.
    fn combine(
        &self,
        info: &ChartInfo,
        names: &[String],
        frames: &[StaticFrame],
        same_source_field: bool,
        force_visible: bool,
    ) -> CombinedFrame {
        let mut combined = CombinedFrame::new(FrameKind::Color);
        let mut used: Vec<Color> = Vec::with_capacity(names.len());

        for (name, frame) in paired(names, frames) {
            let mut color = frame.value.as_color().unwrap_or(palette::color_at(0));
            if same_source_field && used.contains(&color) {
                let replacement = palette::next_unused(&used);
                debug!(measure = %name, "reassign colliding measure color");
                color = replacement;
            }
            used.push(color);
            combined
                .entries
                .insert(name.clone(), FrameValue::Color(color));

            if let Some(negative) = frame.negative_color {
                combined.negative_colors.insert(name.clone(), negative);
            }
            if let Some(visible) = frame.legend_visible {
                combined.visibility_overrides.insert(name.clone(), visible);
            }
        }

        combined.field = shared_field(frames);
        combined.title = frames.iter().find_map(|frame| frame.title.clone());
        combined.legend_visible = force_visible && info.legend_enabled;
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::ColorFrameStrategy;
    use crate::api::chart_info::ChartInfo;
    use crate::api::frame::{FrameValue, StaticFrame};
    use crate::api::frame_strategy::FrameStrategy;
    use crate::api::palette::CATEGORICAL_PALETTE;
    use crate::render::Color;

    #[test]
    fn colors_are_kept_when_sources_differ() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let combined = ColorFrameStrategy.combine(
            &ChartInfo::default(),
            &["a".to_owned(), "b".to_owned()],
            &[StaticFrame::color(red), StaticFrame::color(red)],
            false,
            true,
        );
        assert_eq!(combined.value_for_measure("b"), FrameValue::Color(red));
        assert!(combined.legend_visible);
    }

    #[test]
    fn negative_colors_and_overrides_are_carried() {
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let combined = ColorFrameStrategy.combine(
            &ChartInfo::default(),
            &["a".to_owned()],
            &[StaticFrame::color(CATEGORICAL_PALETTE[1])
                .with_negative_color(blue)
                .with_legend_visible(false)],
            true,
            true,
        );
        assert_eq!(combined.negative_color("__all__a"), Some(blue));
        assert!(!combined.is_measure_visible("a"));
    }
}
