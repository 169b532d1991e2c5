use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_hex(hex: u32) -> Self {
        let red = ((hex >> 16) & 0xff) as f64 / 255.0;
        let green = ((hex >> 8) & 0xff) as f64 / 255.0;
        let blue = (hex & 0xff) as f64 / 255.0;
        Self::rgb(red, green, blue)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Point symbol used by the shape channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapeStyle {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
    Star,
}

/// Stroke pattern used by the line channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

/// Fill pattern used by the texture channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextureStyle {
    #[default]
    None,
    ForwardHatch,
    BackwardHatch,
    CrossHatch,
    Dots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkKind {
    Point,
    Line,
    Bar,
    Area,
    Text,
}

/// A laid-out visual mark as handed to the render ordering step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualMark {
    pub kind: MarkKind,
    /// Chart element (data tuple) the mark was generated for.
    pub element: u64,
    /// Primary color channel.
    pub color: Color,
}

impl VisualMark {
    #[must_use]
    pub const fn new(kind: MarkKind, element: u64, color: Color) -> Self {
        Self {
            kind,
            element,
            color,
        }
    }

    #[must_use]
    pub const fn point(element: u64, color: Color) -> Self {
        Self::new(MarkKind::Point, element, color)
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        self.kind == MarkKind::Point
    }
}
