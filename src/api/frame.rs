use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::brush_columns::original_name;
use crate::core::types::CellValue;
use crate::render::{Color, LineStrokeStyle, ShapeStyle, TextureStyle};

use super::palette;

/// Size assigned when nothing else is configured.
pub const DEFAULT_SIZE: f64 = 1.0;

/// Kind of visual property a frame produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    Color,
    Shape,
    Size,
    Line,
    Texture,
}

impl FrameKind {
    /// The no-op value of the channel; a legend showing only this value is clutter.
    #[must_use]
    pub fn default_value(self) -> FrameValue {
        match self {
            Self::Color => FrameValue::Color(palette::color_at(0)),
            Self::Shape => FrameValue::Shape(ShapeStyle::default()),
            Self::Size => FrameValue::Size(DEFAULT_SIZE),
            Self::Line => FrameValue::Line(LineStrokeStyle::default()),
            Self::Texture => FrameValue::Texture(TextureStyle::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameValue {
    Color(Color),
    Shape(ShapeStyle),
    Size(f64),
    Line(LineStrokeStyle),
    Texture(TextureStyle),
}

impl FrameValue {
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Color(_) => FrameKind::Color,
            Self::Shape(_) => FrameKind::Shape,
            Self::Size(_) => FrameKind::Size,
            Self::Line(_) => FrameKind::Line,
            Self::Texture(_) => FrameKind::Texture,
        }
    }

    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_size(&self) -> Option<f64> {
        match self {
            Self::Size(size) => Some(*size),
            _ => None,
        }
    }
}

/// Frame holding one fixed value, typically configured per measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticFrame {
    pub value: FrameValue,
    /// Field the frame is bound to, if any.
    #[serde(default)]
    pub field: Option<String>,
    /// Color used for negative values (color frames only).
    #[serde(default)]
    pub negative_color: Option<Color>,
    /// Explicit legend visibility chosen by the user.
    #[serde(default)]
    pub legend_visible: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
}

impl StaticFrame {
    #[must_use]
    pub fn new(value: FrameValue) -> Self {
        Self {
            value,
            field: None,
            negative_color: None,
            legend_visible: None,
            title: None,
        }
    }

    #[must_use]
    pub fn color(color: Color) -> Self {
        Self::new(FrameValue::Color(color))
    }

    #[must_use]
    pub fn shape(shape: ShapeStyle) -> Self {
        Self::new(FrameValue::Shape(shape))
    }

    #[must_use]
    pub fn size(size: f64) -> Self {
        Self::new(FrameValue::Size(size))
    }

    #[must_use]
    pub fn line(line: LineStrokeStyle) -> Self {
        Self::new(FrameValue::Line(line))
    }

    #[must_use]
    pub fn texture(texture: TextureStyle) -> Self {
        Self::new(FrameValue::Texture(texture))
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_negative_color(mut self, color: Color) -> Self {
        self.negative_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_legend_visible(mut self, visible: bool) -> Self {
        self.legend_visible = Some(visible);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> FrameKind {
        self.value.kind()
    }
}

/// Frame mapping the categories of a bound dimension to values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFrame {
    pub field: String,
    pub default: FrameValue,
    #[serde(default)]
    pub values: IndexMap<String, FrameValue>,
}

impl CategoricalFrame {
    #[must_use]
    pub fn new(field: impl Into<String>, default: FrameValue) -> Self {
        Self {
            field: field.into(),
            default,
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, category: impl Into<String>, value: FrameValue) -> Self {
        self.values.insert(category.into(), value);
        self
    }

    #[must_use]
    pub fn kind(&self) -> FrameKind {
        self.default.kind()
    }

    #[must_use]
    pub fn value_of(&self, category: &str) -> FrameValue {
        self.values.get(category).copied().unwrap_or(self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VisualFrame {
    Static(StaticFrame),
    Categorical(CategoricalFrame),
}

impl VisualFrame {
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Static(frame) => frame.kind(),
            Self::Categorical(frame) => frame.kind(),
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Static(frame) => frame.field.as_deref(),
            Self::Categorical(frame) => Some(&frame.field),
        }
    }
}

/// One frame shared by several measures of a chart.
///
/// Built by a frame strategy from per-measure static frames; owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedFrame {
    pub kind: FrameKind,
    pub entries: IndexMap<String, FrameValue>,
    pub default: FrameValue,
    #[serde(default)]
    pub negative_colors: IndexMap<String, Color>,
    #[serde(default)]
    pub visibility_overrides: IndexMap<String, bool>,
    pub legend_visible: bool,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl CombinedFrame {
    #[must_use]
    pub fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
            default: kind.default_value(),
            negative_colors: IndexMap::new(),
            visibility_overrides: IndexMap::new(),
            legend_visible: false,
            field: None,
            title: None,
        }
    }

    /// Value for a column. A name without its own entry resolves to its source
    /// measure, so stacked and brushed columns share the measure's value.
    #[must_use]
    pub fn value_for_measure(&self, name: &str) -> FrameValue {
        self.entries
            .get(name)
            .or_else(|| self.entries.get(original_name(name)))
            .copied()
            .unwrap_or(self.default)
    }

    /// Value for a raw cell; text cells are looked up as measure names.
    #[must_use]
    pub fn value_for(&self, value: &CellValue) -> FrameValue {
        match value {
            CellValue::Text(name) => self.value_for_measure(name),
            _ => self.default,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn negative_color(&self, measure: &str) -> Option<Color> {
        self.negative_colors
            .get(measure)
            .or_else(|| self.negative_colors.get(original_name(measure)))
            .copied()
    }

    /// Whether the legend shows `measure`; explicit overrides beat the frame flag.
    #[must_use]
    pub fn is_measure_visible(&self, measure: &str) -> bool {
        self.visibility_overrides
            .get(measure)
            .or_else(|| self.visibility_overrides.get(original_name(measure)))
            .copied()
            .unwrap_or(self.legend_visible)
    }

    pub fn measures(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn distinct_value_count(&self) -> usize {
        distinct_count(self.entries.values())
    }
}

pub(crate) fn distinct_count<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = &'a FrameValue>,
{
    let mut seen: Vec<&FrameValue> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.len()
}
