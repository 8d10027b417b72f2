//! RAM framebuffer with per-pixel change detection.
//!
//! Every frame is painted into this buffer instead of the display. After
//! drawing completes, only the rectangular region containing changed pixels
//! is flushed to the hardware display in a single transfer.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use log::debug;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// Grow `rect` to include the pixel at `(x, y)`.
fn include(rect: &mut Option<DirtyRect>, x: usize, y: usize) {
    match rect {
        Some(rect) => rect.expand(x, y),
        None => *rect = Some(DirtyRect::from_point(x, y)),
    }
}

/// Heap-allocated framebuffer implementing `DrawTarget<Color = Rgb565>`.
///
/// Keeps a copy of what the display showed after the last successful flush,
/// so a frame that repaints identical pixels transfers nothing. Drawing
/// outside the buffer is silently clipped.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    /// Display contents as of the last successful flush.
    front: Vec<Rgb565>,
    /// Every pixel that differs from `front` lies inside this box.
    touched: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a framebuffer of `size` filled with black pixels.
    pub fn new(size: Size) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width * height],
            front: vec![Rgb565::BLACK; width * height],
            touched: None,
        }
    }

    /// Color at `point`, `None` outside the buffer.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index_of(point).map(|idx| self.pixels[idx])
    }

    /// Fill the whole buffer with `color`.
    pub fn fill(&mut self, color: Rgb565) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Write a single pixel, expanding the touched box only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            include(&mut self.touched, x, y);
        }
    }

    /// Tight box around the pixels that differ from the display.
    fn changed(&self) -> Option<DirtyRect> {
        let touched = self.touched?;
        let mut changed = None;
        for y in touched.min_y..=touched.max_y {
            let row = y * self.width;
            for x in touched.min_x..=touched.max_x {
                if self.pixels[row + x] != self.front[row + x] {
                    include(&mut changed, x, y);
                }
            }
        }
        changed
    }

    /// Flush the changed region to a display.
    ///
    /// Only the bounding rectangle of pixels that differ from the last
    /// successful flush is sent, via `fill_contiguous`. Returns the flushed
    /// area, or `None` when the display is already up to date. A failed
    /// transfer leaves the region pending for the next flush.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<Option<Rectangle>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.changed() else {
            self.touched = None;
            return Ok(None);
        };

        let area = rect.to_rectangle();
        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            area.size.width, area.size.height, rect.min_x, rect.min_y
        );

        let pixels = &self.pixels;
        let stride = self.width;
        let width = area.size.width as usize;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });
        display.fill_contiguous(&area, pixel_iter)?;

        for y in rect.min_y..=rect.max_y {
            let row_start = y * stride + rect.min_x;
            let row = row_start..row_start + width;
            self.front[row.clone()].copy_from_slice(&self.pixels[row]);
        }
        self.touched = None;
        Ok(Some(area))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if self.index_of(coord).is_some() {
                self.set_pixel(coord.x as usize, coord.y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let mut colors = colors.into_iter();
        for point in area.points() {
            let Some(color) = colors.next() else {
                break;
            };
            if self.index_of(point).is_some() {
                self.set_pixel(point.x as usize, point.y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }

        let x_start = clipped.top_left.x as usize;
        let y_start = clipped.top_left.y as usize;
        let x_end = x_start + clipped.size.width as usize;
        let y_end = y_start + clipped.size.height as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    /// Display whose first `failures` transfers are rejected.
    struct FlakyDisplay {
        inner: FrameBuffer,
        failures: usize,
    }

    impl OriginDimensions for FlakyDisplay {
        fn size(&self) -> Size {
            self.inner.size()
        }
    }

    impl DrawTarget for FlakyDisplay {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(());
            }
            self.inner
                .draw_iter(pixels)
                .map_err(|never| match never {})
        }
    }

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_new_buffer_is_clean() {
        let fb = FrameBuffer::new(Size::new(16, 8));
        assert!(fb.changed().is_none());
        assert_eq!(fb.pixel(Point::new(15, 7)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(16, 0)), None);
        assert_eq!(fb.pixel(Point::new(-1, 0)), None);
    }

    #[test]
    fn test_dirty_area_covers_changed_pixels_only() {
        let mut fb = FrameBuffer::new(Size::new(32, 32));
        rect(4, 6, 3, 2)
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.changed().map(DirtyRect::to_rectangle), Some(rect(4, 6, 3, 2)));
    }

    #[test]
    fn test_redrawing_same_color_stays_clean() {
        let mut fb = FrameBuffer::new(Size::new(8, 8));
        fb.clear(Rgb565::BLACK).unwrap();
        assert!(fb.changed().is_none());
    }

    #[test]
    fn test_flush_copies_region_and_resets() {
        let mut fb = FrameBuffer::new(Size::new(20, 10));
        let mut display = FrameBuffer::new(Size::new(20, 10));

        fb.fill_solid(&rect(2, 3, 4, 4), Rgb565::GREEN).unwrap();
        let flushed = fb.flush(&mut display).unwrap();

        assert_eq!(flushed, Some(rect(2, 3, 4, 4)));
        assert_eq!(display.pixel(Point::new(5, 6)), Some(Rgb565::GREEN));
        assert_eq!(display.pixel(Point::new(6, 6)), Some(Rgb565::BLACK));
        assert_eq!(fb.flush(&mut display).unwrap(), None);
    }

    #[test]
    fn test_repainting_identical_frame_flushes_nothing() {
        let mut fb = FrameBuffer::new(Size::new(20, 10));
        let mut display = FrameBuffer::new(Size::new(20, 10));

        fb.fill(Rgb565::BLUE);
        fb.fill_solid(&rect(2, 3, 4, 4), Rgb565::GREEN).unwrap();
        assert_eq!(fb.flush(&mut display).unwrap(), Some(rect(0, 0, 20, 10)));

        // clear and repaint the same content
        fb.fill(Rgb565::BLUE);
        fb.fill_solid(&rect(2, 3, 4, 4), Rgb565::GREEN).unwrap();
        assert_eq!(fb.flush(&mut display).unwrap(), None);

        // only the moved square is sent
        fb.fill(Rgb565::BLUE);
        fb.fill_solid(&rect(3, 3, 4, 4), Rgb565::GREEN).unwrap();
        assert_eq!(fb.flush(&mut display).unwrap(), Some(rect(2, 3, 5, 4)));
        assert_eq!(display.pixel(Point::new(2, 3)), Some(Rgb565::BLUE));
        assert_eq!(display.pixel(Point::new(6, 3)), Some(Rgb565::GREEN));
    }

    #[test]
    fn test_failed_flush_is_retried() {
        let mut fb = FrameBuffer::new(Size::new(20, 10));
        let mut display = FlakyDisplay {
            inner: FrameBuffer::new(Size::new(20, 10)),
            failures: 1,
        };

        fb.fill_solid(&rect(2, 3, 4, 4), Rgb565::GREEN).unwrap();
        assert_eq!(fb.flush(&mut display), Err(()));
        assert_eq!(display.inner.pixel(Point::new(2, 3)), Some(Rgb565::BLACK));

        // the next frame paints the same pixels; the lost region is still sent
        fb.fill_solid(&rect(2, 3, 4, 4), Rgb565::GREEN).unwrap();
        assert_eq!(fb.flush(&mut display), Ok(Some(rect(2, 3, 4, 4))));
        assert_eq!(display.inner.pixel(Point::new(2, 3)), Some(Rgb565::GREEN));
        assert_eq!(fb.flush(&mut display), Ok(None));
    }

    #[test]
    fn test_fill_solid_clips_negative_origin() {
        let mut fb = FrameBuffer::new(Size::new(10, 10));
        fb.fill_solid(&rect(-5, -5, 7, 7), Rgb565::BLUE).unwrap();

        assert_eq!(fb.pixel(Point::new(0, 0)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::BLACK));
    }
}
