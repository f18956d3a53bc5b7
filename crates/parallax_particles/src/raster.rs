//! Software RGBA pixel buffer.
//!
//! Source-over blending with straight alpha, every primitive clipped to
//! the current dimensions. Resizing reallocates and therefore clears.

use crate::color::Color;
use crate::surface::Surface;

/// Transparent pixel.
const CLEAR_PIXEL: [u8; 4] = [0, 0, 0, 0];

/// An in-memory raster surface.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelSurface {
    /// Allocates a cleared surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![CLEAR_PIXEL; (width as usize) * (height as usize)],
        }
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Row-major RGBA pixels.
    #[must_use]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixels as a flat byte slice, ready for texture upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels with non-zero alpha.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|p| p[3] != 0).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Blends `color` over one pixel, scaled by `coverage`.
    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        let Some(dst) = self.pixels.get_mut(idx) else {
            return;
        };

        let sa = (color.a * coverage).clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let da = f32::from(dst[3]) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: f32, d: u8| {
            let d = f32::from(d) / 255.0;
            let c = (s.clamp(0.0, 1.0) * sa + d * da * (1.0 - sa)) / out_a;
            (c * 255.0).round() as u8
        };

        *dst = [
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ];
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    fn clear(&mut self) {
        self.pixels.fill(CLEAR_PIXEL);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        if !(x.is_finite() && y.is_finite()) || radius <= 0.0 {
            return;
        }

        // Sub-pixel discs cover no pixel center; paint their pixel by area.
        if radius < 0.5 {
            let area = std::f32::consts::PI * radius * radius;
            self.blend(x.floor() as i64, y.floor() as i64, color, area);
            return;
        }

        let max_x = i64::from(self.width) - 1;
        let max_y = i64::from(self.height) - 1;
        let x0 = ((x - radius).floor() as i64).max(0);
        let x1 = ((x + radius).ceil() as i64).min(max_x);
        let y0 = ((y - radius).floor() as i64).max(0);
        let y1 = ((y + radius).ceil() as i64).min(max_y);
        let r2 = radius * radius;

        for py in y0..=y1 {
            let dy = py as f32 + 0.5 - y;
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color, 1.0);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        let (x0, y0) = from;
        let (x1, y1) = to;
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return;
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
        let (sx, sy) = (dx / steps as f32, dy / steps as f32);

        let mut last = None;
        for i in 0..=steps {
            let px = (x0 + sx * i as f32).floor() as i64;
            let py = (y0 + sy * i as f32).floor() as i64;
            // Consecutive samples can land on the same pixel.
            if last == Some((px, py)) {
                continue;
            }
            last = Some((px, py));
            self.blend(px, py, color, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_clear() {
        let surface = PixelSurface::new(8, 4);
        assert_eq!(surface.pixels().len(), 32);
        assert_eq!(surface.as_bytes().len(), 128);
        assert_eq!(surface.painted_count(), 0);
    }

    #[test]
    fn test_circle_paints_center() {
        let mut surface = PixelSurface::new(20, 20);
        surface.fill_circle(10.0, 10.0, 2.0, Color::WHITE.with_alpha(0.5));

        let center = surface.pixel(10, 10).unwrap();
        assert_eq!(center[0], 255);
        assert_eq!(center[3], 128);
        assert_eq!(surface.pixel(0, 0), Some(CLEAR_PIXEL));
    }

    #[test]
    fn test_overlapping_alpha_accumulates() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_circle(2.0, 2.0, 1.0, Color::WHITE.with_alpha(0.5));
        surface.fill_circle(2.0, 2.0, 1.0, Color::WHITE.with_alpha(0.5));

        // 0.5 over 0.5 = 0.75
        let alpha = surface.pixel(2, 2).unwrap()[3];
        assert!((190..=193).contains(&alpha), "alpha {alpha}");
    }

    #[test]
    fn test_primitives_are_clipped() {
        let mut surface = PixelSurface::new(10, 10);
        surface.fill_circle(-50.0, -50.0, 5.0, Color::WHITE);
        surface.stroke_line((20.0, 20.0), (40.0, 40.0), Color::WHITE);
        assert_eq!(surface.painted_count(), 0);

        surface.stroke_line((-5.0, 5.5), (15.0, 5.5), Color::WHITE);
        assert_eq!(surface.painted_count(), 10);
    }

    #[test]
    fn test_resize_clears() {
        let mut surface = PixelSurface::new(10, 10);
        surface.fill_circle(5.0, 5.0, 3.0, Color::WHITE);
        assert!(surface.painted_count() > 0);

        surface.resize(30, 20);
        assert_eq!((surface.width(), surface.height()), (30, 20));
        assert_eq!(surface.painted_count(), 0);
        assert_eq!(surface.pixel(29, 19), Some(CLEAR_PIXEL));
        assert_eq!(surface.pixel(30, 19), None);
    }

    #[test]
    fn test_tiny_disc_still_visible() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_circle(1.5, 1.5, 0.3, Color::WHITE);
        assert_eq!(surface.painted_count(), 1);
    }
}
