use egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::document::Document;
use crate::shape::BoundingBox;
use crate::surface::RenderSurface;

const OUTLINE_WIDTH: f32 = 1.0;

/// [`RenderSurface`] drawing onto an egui painter, offset to the canvas position on screen
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    color: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            color: Color32::BLACK,
        }
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(OUTLINE_WIDTH, self.color)
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2()
    }

    fn to_screen_rect(&self, bounds: BoundingBox) -> Rect {
        bounds.to_rect().translate(self.origin.to_vec2())
    }
}

impl RenderSurface for PainterSurface<'_> {
    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], self.stroke());
    }

    fn draw_rect(&mut self, bounds: BoundingBox) {
        self.painter
            .rect_stroke(self.to_screen_rect(bounds), 0.0, self.stroke());
    }

    fn draw_ellipse(&mut self, bounds: BoundingBox) {
        let rect = self.to_screen_rect(bounds);
        self.painter.add(egui::Shape::ellipse_stroke(
            rect.center(),
            rect.size() / 2.0,
            self.stroke(),
        ));
    }
}

/// Paints the canvas background and document into the canvas rect
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);

        let mut surface = PainterSurface::new(&painter, rect.min);
        document.render(&mut surface);
    }
}
