/// An axis-aligned rectangle in frame-pixel coordinates.
///
/// Detector output may extend past the frame edge; callers clamp with
/// [`Region::clamp_to`] before rasterizing rather than rejecting the
/// region outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> i64 {
        self.width.max(0) as i64 * self.height.max(0) as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamps the rectangle to `[0, frame_width) x [0, frame_height)`.
    ///
    /// A region entirely outside the frame collapses to zero area.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> Region {
        let fw = frame_width as i32;
        let fh = frame_height as i32;
        let x0 = self.x.clamp(0, fw);
        let y0 = self.y.clamp(0, fh);
        let x1 = (self.x + self.width).clamp(0, fw);
        let y1 = (self.y + self.height).clamp(0, fh);
        Region {
            x: x0,
            y: y0,
            width: (x1 - x0).max(0),
            height: (y1 - y0).max(0),
        }
    }
}
