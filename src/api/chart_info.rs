use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::{Color, LineStrokeStyle, ShapeStyle, TextureStyle};

use super::frame::{DEFAULT_SIZE, FrameKind, StaticFrame, VisualFrame};
use super::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Point,
    Area,
    Pie,
    Pareto,
    Waterfall,
    /// Floating bars spanning a low and a top value.
    IntervalBar,
    /// Filled band between a low and a top value.
    IntervalArea,
}

impl ChartType {
    /// Interval charts carry a synthetic `__top__` column per measure.
    #[must_use]
    pub fn is_interval(self) -> bool {
        matches!(self, Self::IntervalBar | Self::IntervalArea)
    }
}

/// Whether the chart has one shared style or a per-measure (combo) style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartInfoKind {
    #[default]
    Plain,
    /// Combo chart; every measure may carry its own chart style and frames.
    Merged,
}

/// Binding of a data field to a visual frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AestheticRef {
    pub field: String,
    pub frame: VisualFrame,
}

impl AestheticRef {
    #[must_use]
    pub fn new(field: impl Into<String>, frame: VisualFrame) -> Self {
        Self {
            field: field.into(),
            frame,
        }
    }

    #[must_use]
    pub fn frame_kind(&self) -> FrameKind {
        self.frame.kind()
    }
}

/// Per-measure aesthetic configuration.
///
/// `shape_field` is one slot shared by the shape, line and texture channels; the
/// frame kind of the binding tells which channel it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartAggregateRef {
    pub color_field: Option<AestheticRef>,
    pub shape_field: Option<AestheticRef>,
    pub size_field: Option<AestheticRef>,
    pub text_field: Option<AestheticRef>,
    pub color_frame: StaticFrame,
    pub shape_frame: StaticFrame,
    pub line_frame: StaticFrame,
    pub texture_frame: StaticFrame,
    pub size_frame: StaticFrame,
    pub summary_color_frame: Option<StaticFrame>,
    pub summary_texture_frame: Option<StaticFrame>,
}

impl Default for ChartAggregateRef {
    fn default() -> Self {
        Self {
            color_field: None,
            shape_field: None,
            size_field: None,
            text_field: None,
            color_frame: StaticFrame::color(palette::color_at(0)),
            shape_frame: StaticFrame::shape(ShapeStyle::default()),
            line_frame: StaticFrame::line(LineStrokeStyle::default()),
            texture_frame: StaticFrame::texture(TextureStyle::default()),
            size_frame: StaticFrame::size(DEFAULT_SIZE),
            summary_color_frame: None,
            summary_texture_frame: None,
        }
    }
}

impl ChartAggregateRef {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color_frame = StaticFrame::color(color);
        self
    }

    #[must_use]
    pub fn with_color_frame(mut self, frame: StaticFrame) -> Self {
        self.color_frame = frame;
        self
    }

    #[must_use]
    pub fn with_shape_frame(mut self, frame: StaticFrame) -> Self {
        self.shape_frame = frame;
        self
    }

    #[must_use]
    pub fn with_line_frame(mut self, frame: StaticFrame) -> Self {
        self.line_frame = frame;
        self
    }

    #[must_use]
    pub fn with_texture_frame(mut self, frame: StaticFrame) -> Self {
        self.texture_frame = frame;
        self
    }

    #[must_use]
    pub fn with_size_frame(mut self, frame: StaticFrame) -> Self {
        self.size_frame = frame;
        self
    }

    #[must_use]
    pub fn with_color_field(mut self, binding: AestheticRef) -> Self {
        self.color_field = Some(binding);
        self
    }

    #[must_use]
    pub fn with_shape_field(mut self, binding: AestheticRef) -> Self {
        self.shape_field = Some(binding);
        self
    }

    #[must_use]
    pub fn with_size_field(mut self, binding: AestheticRef) -> Self {
        self.size_field = Some(binding);
        self
    }

    #[must_use]
    pub fn with_text_field(mut self, binding: AestheticRef) -> Self {
        self.text_field = Some(binding);
        self
    }

    #[must_use]
    pub fn with_summary_color_frame(mut self, frame: StaticFrame) -> Self {
        self.summary_color_frame = Some(frame);
        self
    }

    #[must_use]
    pub fn with_summary_texture_frame(mut self, frame: StaticFrame) -> Self {
        self.summary_texture_frame = Some(frame);
        self
    }
}

/// Chart configuration read by the frame strategies.
///
/// This type is serializable so host applications can persist chart setup next
/// to their own documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInfo {
    #[serde(default)]
    pub chart_type: ChartType,
    #[serde(default)]
    pub kind: ChartInfoKind,
    /// Each measure carries its own aesthetic bindings.
    #[serde(default)]
    pub multi_aesthetic: bool,
    #[serde(default = "default_legend_enabled")]
    pub legend_enabled: bool,
    #[serde(default)]
    pub color_field: Option<AestheticRef>,
    #[serde(default)]
    pub shape_field: Option<AestheticRef>,
    #[serde(default)]
    pub size_field: Option<AestheticRef>,
    #[serde(default)]
    pub text_field: Option<AestheticRef>,
    /// Chart-wide frames, one per kind.
    #[serde(default)]
    pub general_frames: IndexMap<FrameKind, VisualFrame>,
    /// Measures in display order.
    #[serde(default)]
    pub measures: IndexMap<String, ChartAggregateRef>,
}

fn default_legend_enabled() -> bool {
    true
}

impl Default for ChartInfo {
    fn default() -> Self {
        Self::new(ChartType::default())
    }
}

impl ChartInfo {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            kind: ChartInfoKind::default(),
            multi_aesthetic: false,
            legend_enabled: default_legend_enabled(),
            color_field: None,
            shape_field: None,
            size_field: None,
            text_field: None,
            general_frames: IndexMap::new(),
            measures: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ChartInfoKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_multi_aesthetic(mut self, multi_aesthetic: bool) -> Self {
        self.multi_aesthetic = multi_aesthetic;
        self
    }

    #[must_use]
    pub fn with_legend_enabled(mut self, legend_enabled: bool) -> Self {
        self.legend_enabled = legend_enabled;
        self
    }

    #[must_use]
    pub fn with_color_field(mut self, binding: AestheticRef) -> Self {
        self.color_field = Some(binding);
        self
    }

    #[must_use]
    pub fn with_shape_field(mut self, binding: AestheticRef) -> Self {
        self.shape_field = Some(binding);
        self
    }

    #[must_use]
    pub fn with_size_field(mut self, binding: AestheticRef) -> Self {
        self.size_field = Some(binding);
        self
    }

    #[must_use]
    pub fn with_text_field(mut self, binding: AestheticRef) -> Self {
        self.text_field = Some(binding);
        self
    }

    /// Sets the chart-wide frame of the frame's kind.
    #[must_use]
    pub fn with_general_frame(mut self, frame: VisualFrame) -> Self {
        self.general_frames.insert(frame.kind(), frame);
        self
    }

    #[must_use]
    pub fn with_measure(mut self, name: impl Into<String>, aggregate: ChartAggregateRef) -> Self {
        self.measures.insert(name.into(), aggregate);
        self
    }

    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.kind == ChartInfoKind::Merged
    }

    #[must_use]
    pub fn measure(&self, name: &str) -> Option<&ChartAggregateRef> {
        self.measures.get(name)
    }

    pub fn measure_names(&self) -> impl Iterator<Item = &str> {
        self.measures.keys().map(String::as_str)
    }
}
