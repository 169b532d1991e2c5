//! Shape, line and texture channels.
//!
//! The three share one binding slot (`shape_field`) in the chart model, so each
//! strategy ignores bindings whose frame belongs to another of the three.

use super::chart_info::{AestheticRef, ChartAggregateRef, ChartInfo};
use super::frame::{CombinedFrame, FrameKind, FrameValue, StaticFrame, distinct_count};
use super::frame_strategy::{
    AestheticStrategy, FrameStrategy, VisualChannel, default_aware_visibility, paired,
    resolve_binding, shared_field,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFrameStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineFrameStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextureFrameStrategy;

fn shape_slot_ref<'a>(
    info: &'a ChartInfo,
    measure: Option<&str>,
    kind: FrameKind,
) -> Option<&'a AestheticRef> {
    resolve_binding(
        info,
        measure,
        |aggregate| aggregate.shape_field.as_ref(),
        info.shape_field.as_ref(),
    )
    .filter(|binding| binding.frame_kind() == kind)
}

fn combine_shape_slot(
    kind: FrameKind,
    info: &ChartInfo,
    names: &[String],
    frames: &[StaticFrame],
    force_visible: bool,
) -> CombinedFrame {
    let mut combined = CombinedFrame::new(kind);
    for (name, frame) in paired(names, frames) {
        let value = if frame.kind() == kind {
            frame.value
        } else {
            kind.default_value()
        };
        combined.entries.insert(name.clone(), value);
    }

    let values: Vec<FrameValue> = combined.entries.values().copied().collect();
    let distinct = distinct_count(&values);
    combined.legend_visible =
        default_aware_visibility(kind, &values, distinct, info, force_visible);
    combined.field = shared_field(frames);
    combined
}

macro_rules! shape_slot_strategy {
    ($strategy:ty, $channel:ident, $frame:ident) => {
        impl AestheticStrategy for $strategy {
            fn channel(&self) -> VisualChannel {
                VisualChannel::$channel
            }

            fn aesthetic_ref<'a>(
                &self,
                info: &'a ChartInfo,
                measure: Option<&str>,
            ) -> Option<&'a AestheticRef> {
                shape_slot_ref(info, measure, FrameKind::$channel)
            }
        }

        impl $strategy {
            fn aggregate_frame(aggregate: &ChartAggregateRef) -> &StaticFrame {
                &aggregate.$frame
            }
        }
    };
}

shape_slot_strategy!(ShapeFrameStrategy, Shape, shape_frame);
shape_slot_strategy!(LineFrameStrategy, Line, line_frame);
shape_slot_strategy!(TextureFrameStrategy, Texture, texture_frame);

impl FrameStrategy for ShapeFrameStrategy {
    fn frame_kind(&self) -> FrameKind {
        FrameKind::Shape
    }

    fn field_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame> {
        info.measure(measure).map(Self::aggregate_frame)
    }

    fn combine(
        &self,
        info: &ChartInfo,
        names: &[String],
        frames: &[StaticFrame],
        _same_source_field: bool,
        force_visible: bool,
    ) -> CombinedFrame {
        combine_shape_slot(FrameKind::Shape, info, names, frames, force_visible)
    }
}

impl FrameStrategy for LineFrameStrategy {
    fn frame_kind(&self) -> FrameKind {
        FrameKind::Line
    }

    fn field_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame> {
        info.measure(measure).map(Self::aggregate_frame)
    }

    fn combine(
        &self,
        info: &ChartInfo,
        names: &[String],
        frames: &[StaticFrame],
        _same_source_field: bool,
        force_visible: bool,
    ) -> CombinedFrame {
        combine_shape_slot(FrameKind::Line, info, names, frames, force_visible)
    }
}

impl FrameStrategy for TextureFrameStrategy {
    fn frame_kind(&self) -> FrameKind {
        FrameKind::Texture
    }

    fn field_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame> {
        info.measure(measure).map(Self::aggregate_frame)
    }

    fn supports_summary_frame(&self) -> bool {
        true
    }

    fn summary_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame> {
        info.measure(measure)?.summary_texture_frame.as_ref()
    }

    fn combine(
        &self,
        info: &ChartInfo,
        names: &[String],
        frames: &[StaticFrame],
        _same_source_field: bool,
        force_visible: bool,
    ) -> CombinedFrame {
        combine_shape_slot(FrameKind::Texture, info, names, frames, force_visible)
    }
}
