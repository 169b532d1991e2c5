use super::chart_info::{AestheticRef, ChartInfo};
use super::frame_strategy::{AestheticStrategy, VisualChannel, resolve_binding};

/// Text labels are bound to a field but have no visual frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStrategy;

impl AestheticStrategy for TextStrategy {
    fn channel(&self) -> VisualChannel {
        VisualChannel::Text
    }

    fn aesthetic_ref<'a>(
        &self,
        info: &'a ChartInfo,
        measure: Option<&str>,
    ) -> Option<&'a AestheticRef> {
        resolve_binding(
            info,
            measure,
            |aggregate| aggregate.text_field.as_ref(),
            info.text_field.as_ref(),
        )
    }
}
