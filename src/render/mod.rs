//! Render-facing value types consumed by layout/painting collaborators.
//!
//! Nothing here paints; these are the visual property values frames resolve to
//! and the ordering policy applied to marks before painting.

mod primitives;
mod render_order;

pub use primitives::{Color, LineStrokeStyle, MarkKind, ShapeStyle, TextureStyle, VisualMark};
pub use render_order::RenderComparator;
