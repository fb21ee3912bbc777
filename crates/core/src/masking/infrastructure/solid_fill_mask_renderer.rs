use ndarray::s;

use crate::masking::domain::mask_renderer::MaskRenderer;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Near-black default; a pure black rectangle reads as a dead pixel
/// area on OLED screens, a dark gray reads as deliberate redaction.
pub const DEFAULT_FILL_COLOR: [u8; 3] = [24, 24, 24];

/// Renderer that overwrites each redacted rectangle with one opaque
/// color. Idempotent for a fixed region set.
pub struct SolidFillMaskRenderer {
    color: [u8; 3],
}

impl SolidFillMaskRenderer {
    pub fn new(color: [u8; 3]) -> Self {
        Self { color }
    }
}

impl Default for SolidFillMaskRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_FILL_COLOR)
    }
}

impl MaskRenderer for SolidFillMaskRenderer {
    fn apply(&self, frame: &Frame, regions: &[Region]) -> Frame {
        let mut output = frame.clone();
        let channels = output.channels() as usize;

        for r in regions {
            let clamped = r.clamp_to(frame.width(), frame.height());
            if clamped.is_empty() {
                continue;
            }
            let (y0, y1) = (clamped.y as usize, (clamped.y + clamped.height) as usize);
            let (x0, x1) = (clamped.x as usize, (clamped.x + clamped.width) as usize);

            let mut view = output.as_ndarray_mut();
            let mut roi = view.slice_mut(s![y0..y1, x0..x1, ..]);
            for c in 0..channels {
                roi.slice_mut(s![.., .., c]).fill(self.color[c % 3]);
            }
        }

        output
    }
}
