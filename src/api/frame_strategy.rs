use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::brush_columns::original_name;
use crate::error::{ChartError, ChartResult};

use super::chart_info::{AestheticRef, ChartAggregateRef, ChartInfo};
use super::color_frame_strategy::ColorFrameStrategy;
use super::frame::{CombinedFrame, FrameKind, FrameValue, StaticFrame, VisualFrame};
use super::shape_frame_strategy::{LineFrameStrategy, ShapeFrameStrategy, TextureFrameStrategy};
use super::size_frame_strategy::SizeFrameStrategy;
use super::text_strategy::TextStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualChannel {
    Color,
    Shape,
    Size,
    Line,
    Texture,
    Text,
}

impl VisualChannel {
    /// Aesthetic lookup for any channel.
    #[must_use]
    pub fn aesthetic_strategy(self) -> Box<dyn AestheticStrategy> {
        match self {
            Self::Color => Box::new(ColorFrameStrategy),
            Self::Shape => Box::new(ShapeFrameStrategy),
            Self::Size => Box::new(SizeFrameStrategy),
            Self::Line => Box::new(LineFrameStrategy),
            Self::Texture => Box::new(TextureFrameStrategy),
            Self::Text => Box::new(TextStrategy),
        }
    }

    /// Frame operations for the channel; the text channel has none.
    pub fn frame_strategy(self) -> ChartResult<Box<dyn FrameStrategy>> {
        match self {
            Self::Color => Ok(Box::new(ColorFrameStrategy)),
            Self::Shape => Ok(Box::new(ShapeFrameStrategy)),
            Self::Size => Ok(Box::new(SizeFrameStrategy)),
            Self::Line => Ok(Box::new(LineFrameStrategy)),
            Self::Texture => Ok(Box::new(TextureFrameStrategy)),
            Self::Text => Err(ChartError::UnsupportedChannel(self)),
        }
    }
}

/// Resolves the aesthetic binding of one channel.
pub trait AestheticStrategy: fmt::Debug {
    fn channel(&self) -> VisualChannel;

    /// Binding configured on `measure`. Without a measure, the chart-global
    /// binding, which multi-aesthetic charts do not have.
    fn aesthetic_ref<'a>(
        &self,
        info: &'a ChartInfo,
        measure: Option<&str>,
    ) -> Option<&'a AestheticRef>;
}

/// Frame access and multi-measure combination for one visual channel.
pub trait FrameStrategy: AestheticStrategy {
    fn frame_kind(&self) -> FrameKind;

    /// Whether a chart-wide frame applies to this chart.
    fn supports_general_frame(&self, info: &ChartInfo) -> bool {
        info.is_merged()
    }

    fn general_frame<'a>(&self, info: &'a ChartInfo) -> Option<&'a VisualFrame> {
        if !self.supports_general_frame(info) {
            return None;
        }
        info.general_frames.get(&self.frame_kind())
    }

    fn supports_field_frame(&self) -> bool {
        true
    }

    /// The static frame configured on `measure`.
    fn field_frame<'a>(&self, info: &'a ChartInfo, measure: &str) -> Option<&'a StaticFrame>;

    fn supports_summary_frame(&self) -> bool {
        false
    }

    /// Frame used for the measure's totals.
    fn summary_frame<'a>(&self, _info: &'a ChartInfo, _measure: &str) -> Option<&'a StaticFrame> {
        None
    }

    /// Merges one static frame per measure into a frame shared by all of them.
    ///
    /// `names` and `frames` pair up by index.
    fn combine(
        &self,
        info: &ChartInfo,
        names: &[String],
        frames: &[StaticFrame],
        same_source_field: bool,
        force_visible: bool,
    ) -> CombinedFrame;
}

/// Looks up the binding of a measure, or the chart-global binding when no
/// measure is given and the chart is not multi-aesthetic.
pub(crate) fn resolve_binding<'a, F>(
    info: &'a ChartInfo,
    measure: Option<&str>,
    slot: F,
    global: Option<&'a AestheticRef>,
) -> Option<&'a AestheticRef>
where
    F: Fn(&'a ChartAggregateRef) -> Option<&'a AestheticRef>,
{
    match measure {
        Some(measure) => info.measure(measure).and_then(slot),
        None if !info.multi_aesthetic => global,
        None => None,
    }
}

pub(crate) fn paired<'a>(
    names: &'a [String],
    frames: &'a [StaticFrame],
) -> impl Iterator<Item = (&'a String, &'a StaticFrame)> {
    if names.len() != frames.len() {
        warn!(
            names = names.len(),
            frames = frames.len(),
            "frame combination received mismatched names and frames"
        );
    }
    names.iter().zip(frames)
}

/// First bound field among the frames.
pub(crate) fn shared_field(frames: &[StaticFrame]) -> Option<String> {
    frames.iter().find_map(|frame| frame.field.clone())
}

/// Legend rule for channels with a no-op default value.
pub(crate) fn default_aware_visibility(
    kind: FrameKind,
    values: &[FrameValue],
    distinct: usize,
    info: &ChartInfo,
    force_visible: bool,
) -> bool {
    if !force_visible || !info.legend_enabled {
        return false;
    }
    distinct > 1 || (distinct == 1 && values.first() != Some(&kind.default_value()))
}

/// Combines the field frames of `measures` with one strategy.
///
/// Measures without a field frame get the channel default. Frames count as
/// sharing a source field when two measures derive from the same column, or
/// when every frame is bound to one and the same field.
pub fn combine_measure_frames(
    strategy: &dyn FrameStrategy,
    info: &ChartInfo,
    measures: &[String],
    force_visible: bool,
) -> CombinedFrame {
    let frames: Vec<StaticFrame> = measures
        .iter()
        .map(|measure| {
            strategy
                .field_frame(info, measure)
                .cloned()
                .unwrap_or_else(|| StaticFrame::new(strategy.frame_kind().default_value()))
        })
        .collect();

    let mut originals: Vec<&str> = measures.iter().map(|m| original_name(m)).collect();
    originals.sort_unstable();
    let colliding_sources = originals.windows(2).any(|pair| pair[0] == pair[1]);
    let common_field = frames.len() > 1
        && frames.first().and_then(|frame| frame.field.as_deref()).is_some_and(|field| {
            frames
                .iter()
                .all(|frame| frame.field.as_deref() == Some(field))
        });

    strategy.combine(
        info,
        measures,
        &frames,
        colliding_sources || common_field,
        force_visible,
    )
}
