use egui::{Color32, Pos2};
use image::{Rgb, RgbImage};

use crate::shape::BoundingBox;
use crate::surface::RenderSurface;

/// Software [`RenderSurface`] backed by an RGB pixel buffer, used for image export.
///
/// Draws one pixel wide outlines. Anything falling outside the buffer is clipped.
pub struct RasterSurface {
    image: RgbImage,
    color: Rgb<u8>,
}

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

fn to_pixel(pos: Pos2) -> (i64, i64) {
    (pos.x.round() as i64, pos.y.round() as i64)
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, to_rgb(background)),
            color: to_rgb(Color32::BLACK),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn put_pixel(&mut self, x: i64, y: i64) {
        if x >= 0 && y >= 0 && x < self.image.width() as i64 && y < self.image.height() as i64 {
            self.image.put_pixel(x as u32, y as u32, self.color);
        }
    }

    // Bresenham, both end points inclusive.
    fn line_pixels(&mut self, (x0, y0): (i64, i64), (x1, y1): (i64, i64)) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.put_pixel(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Integer midpoint ellipse through the corners' inclusive pixel box.
    /// Handles odd and even diameters. Both diameters must be non-zero.
    fn ellipse_pixels(&mut self, (mut x0, mut y0): (i64, i64), (mut x1, mut y1): (i64, i64)) {
        let mut a = (x1 - x0).abs();
        let b = (y1 - y0).abs();
        let mut b1 = b & 1;
        let mut dx = 4 * (1 - a) * b * b;
        let mut dy = 4 * (b1 + 1) * a * a;
        let mut err = dx + dy + b1 * a * a;

        if x0 > x1 {
            x0 = x1;
            x1 += a;
        }
        if y0 > y1 {
            y0 = y1;
        }
        y0 += (b + 1) / 2;
        y1 = y0 - b1;
        a *= 8 * a;
        b1 = 8 * b * b;

        loop {
            self.put_pixel(x1, y0);
            self.put_pixel(x0, y0);
            self.put_pixel(x0, y1);
            self.put_pixel(x1, y1);
            let e2 = 2 * err;
            if e2 <= dy {
                y0 += 1;
                y1 -= 1;
                dy += a;
                err += dy;
            }
            if e2 >= dx || 2 * err > dy {
                x0 += 1;
                x1 -= 1;
                dx += b1;
                err += dx;
            }
            if x0 > x1 {
                break;
            }
        }

        // narrow ellipses stop early, finish the tips down to the top and bottom rows
        while y0 - y1 <= b {
            self.put_pixel(x0 - 1, y0);
            self.put_pixel(x1 + 1, y0);
            y0 += 1;
            self.put_pixel(x0 - 1, y1);
            self.put_pixel(x1 + 1, y1);
            y1 -= 1;
        }
    }
}

impl RenderSurface for RasterSurface {
    fn set_color(&mut self, color: Color32) {
        self.color = to_rgb(color);
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2) {
        self.line_pixels(to_pixel(from), to_pixel(to));
    }

    fn draw_rect(&mut self, bounds: BoundingBox) {
        let (x0, y0) = to_pixel(bounds.min());
        let (x1, y1) = to_pixel(bounds.max());
        self.line_pixels((x0, y0), (x1, y0));
        self.line_pixels((x1, y0), (x1, y1));
        self.line_pixels((x1, y1), (x0, y1));
        self.line_pixels((x0, y1), (x0, y0));
    }

    fn draw_ellipse(&mut self, bounds: BoundingBox) {
        let (min, max) = (to_pixel(bounds.min()), to_pixel(bounds.max()));
        if min.0 == max.0 || min.1 == max.1 {
            // zero-width or zero-height, collapses to a line
            self.line_pixels(min, max);
        } else {
            self.ellipse_pixels(min, max);
        }
    }
}
