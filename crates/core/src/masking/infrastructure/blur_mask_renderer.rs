use std::cell::RefCell;

use crate::masking::domain::mask_renderer::MaskRenderer;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::gaussian::{self, RoiRect};

/// Default kernel size for on-screen redaction blur.
pub const DEFAULT_KERNEL_SIZE: usize = 31;

/// Smallest kernel that still blurs. A size-1 kernel is the identity,
/// which would publish sensitive pixels untouched under a "masked" label.
pub const MIN_KERNEL_SIZE: usize = 3;

/// CPU renderer that Gaussian-blurs each redacted rectangle.
///
/// The 1D kernel is precomputed once; ROI and convolution buffers are
/// reused across regions and frames.
pub struct GaussianBlurMaskRenderer {
    kernel: Vec<f32>,
    roi_buf: RefCell<Vec<u8>>,
    blur_temp: RefCell<Vec<f32>>,
}

impl GaussianBlurMaskRenderer {
    pub fn new(kernel_size: usize) -> Self {
        let kernel_size = (kernel_size | 1).max(MIN_KERNEL_SIZE); // odd, and never the identity
        Self {
            kernel: gaussian::gaussian_kernel_1d(kernel_size),
            roi_buf: RefCell::new(Vec::new()),
            blur_temp: RefCell::new(Vec::new()),
        }
    }
}

impl Default for GaussianBlurMaskRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_KERNEL_SIZE)
    }
}

impl MaskRenderer for GaussianBlurMaskRenderer {
    fn apply(&self, frame: &Frame, regions: &[Region]) -> Frame {
        let mut output = frame.clone();
        let fw = output.width() as usize;
        let channels = output.channels() as usize;

        for r in regions {
            let clamped = r.clamp_to(frame.width(), frame.height());
            if clamped.is_empty() {
                continue;
            }
            let rect = RoiRect {
                x: clamped.x as usize,
                y: clamped.y as usize,
                w: clamped.width as usize,
                h: clamped.height as usize,
            };

            let mut roi = self.roi_buf.borrow_mut();
            let mut temp = self.blur_temp.borrow_mut();
            gaussian::extract_roi(output.data(), fw, channels, rect, &mut roi);
            gaussian::separable_gaussian_blur_with_kernel(
                &mut roi,
                rect.w,
                rect.h,
                channels,
                &self.kernel,
                &mut temp,
            );
            gaussian::write_roi_back(output.data_mut(), &roi, fw, channels, rect);
        }

        output
    }
}
