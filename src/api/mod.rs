//! Chart configuration model and the per-channel visual frame strategies.

mod chart_info;
mod color_frame_strategy;
mod frame;
mod frame_strategy;
pub mod palette;
mod shape_frame_strategy;
mod size_frame_strategy;
mod text_strategy;

pub use chart_info::{AestheticRef, ChartAggregateRef, ChartInfo, ChartInfoKind, ChartType};
pub use color_frame_strategy::ColorFrameStrategy;
pub use frame::{
    CategoricalFrame, CombinedFrame, DEFAULT_SIZE, FrameKind, FrameValue, StaticFrame,
    VisualFrame,
};
pub use frame_strategy::{
    AestheticStrategy, FrameStrategy, VisualChannel, combine_measure_frames,
};
pub use shape_frame_strategy::{LineFrameStrategy, ShapeFrameStrategy, TextureFrameStrategy};
pub use size_frame_strategy::SizeFrameStrategy;
pub use text_strategy::TextStrategy;
