//! chart-brush: data-side support for brushed (linked-highlight) charts.
//!
//! The crate combines a complete dataset with its brushed subset, computes the
//! value ranges axes need (linear, stacked, pareto and brushed), rebases
//! percentage summaries, and resolves visual frames for each aesthetic channel.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartInfo, VisualChannel};
pub use error::{ChartError, ChartResult};
