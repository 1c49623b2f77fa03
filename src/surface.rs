use egui::{Color32, Pos2};

use crate::shape::BoundingBox;

/// A 2D target shapes can draw themselves onto.
///
/// All coordinates are canvas-local. Outlines are one pixel wide and drawn in the
/// color set by the most recent [`RenderSurface::set_color`] call.
pub trait RenderSurface {
    fn set_color(&mut self, color: Color32);

    fn draw_line(&mut self, from: Pos2, to: Pos2);

    /// Outline of `bounds`, no fill.
    fn draw_rect(&mut self, bounds: BoundingBox);

    /// Outline of the ellipse inscribed in `bounds`, no fill.
    fn draw_ellipse(&mut self, bounds: BoundingBox);
}
