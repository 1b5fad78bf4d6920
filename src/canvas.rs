use crate::shared::Cell;

/// RGBA8 pixel buffer used as a CPU render target
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions, cleared to transparent black
    ///
    /// Panics if the RGBA buffer size does not fit in `usize`. Configured
    /// targets are bounded by [`crate::config::MAX_TARGET_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Self {
        let size = Self::buffer_size(width, height).expect("canvas size overflows usize");
        Self {
            pixels: vec![0; size],
            width,
            height,
        }
    }

    /// RGBA byte count for the given dimensions, `None` on overflow
    pub fn buffer_size(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    /// Fill entire canvas with color
    pub fn clear(&mut self, color: Cell) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Fill the half-open pixel rectangle [x0, x1) x [y0, y1), clipped to the canvas.
    /// Returns the number of pixels written.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Cell) -> usize {
        let (x1, y1) = (x1.min(self.width), y1.min(self.height));
        if x0 >= x1 || y0 >= y1 {
            return 0;
        }

        let row_bytes = self.width as usize * 4;
        for y in y0..y1 {
            let start = y as usize * row_bytes + x0 as usize * 4;
            let end = y as usize * row_bytes + x1 as usize * 4;
            for px in self.pixels[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
        (x1 - x0) as usize * (y1 - y0) as usize
    }
}
