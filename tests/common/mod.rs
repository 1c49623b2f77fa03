#![allow(dead_code)]

use drawing_app::{BoundingBox, RenderSurface};
use egui::{Color32, Pos2};

/// A single call made against a render surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetColor(Color32),
    Line(Pos2, Pos2),
    Rect(BoundingBox),
    Ellipse(BoundingBox),
}

/// Render surface that just remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls that actually put something on the canvas
    pub fn draw_calls(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, DrawCall::SetColor(_)))
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_color(&mut self, color: Color32) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2) {
        self.calls.push(DrawCall::Line(from, to));
    }

    fn draw_rect(&mut self, bounds: BoundingBox) {
        self.calls.push(DrawCall::Rect(bounds));
    }

    fn draw_ellipse(&mut self, bounds: BoundingBox) {
        self.calls.push(DrawCall::Ellipse(bounds));
    }
}

pub fn pos(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}
