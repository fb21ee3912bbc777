use crate::masking::domain::mask_renderer::{MaskRenderer, MaskStyle};

use super::blur_mask_renderer::GaussianBlurMaskRenderer;
use super::solid_fill_mask_renderer::SolidFillMaskRenderer;

/// Creates the renderer for the configured mask style.
///
/// `kernel_size` only affects the blur style.
pub fn create_renderer(style: MaskStyle, kernel_size: usize) -> Box<dyn MaskRenderer> {
    log::info!("Using {style:?} mask renderer (kernel_size={kernel_size})");
    match style {
        MaskStyle::Blur => Box::new(GaussianBlurMaskRenderer::new(kernel_size)),
        MaskStyle::SolidFill => Box::new(SolidFillMaskRenderer::default()),
    }
}
