use egui::{Color32, Pos2, Rect};

use crate::surface::RenderSurface;
use crate::tool::Tool;

/// Normalized axis-aligned box derived from two arbitrary corner points.
///
/// Width and height are never negative, whichever direction the user dragged in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn from_corners(a: Pos2, b: Pos2) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn min(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    pub fn max(&self) -> Pos2 {
        Pos2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_min_max(self.min(), self.max())
    }
}

/// A drawable primitive on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Polyline through every point the pointer visited, in order.
    Freehand { color: Color32, points: Vec<Pos2> },
    /// Rectangle outline spanned by the press point and the latest drag point.
    Rectangle { color: Color32, start: Pos2, end: Pos2 },
    /// Ellipse outline inscribed in the box spanned by start and end.
    Oval { color: Color32, start: Pos2, end: Pos2 },
}

impl Shape {
    /// Start a new shape of the given tool kind at `start`.
    pub fn new(tool: Tool, color: Color32, start: Pos2) -> Self {
        match tool {
            Tool::Freehand => Self::freehand(color, start),
            Tool::Rectangle => Self::rectangle(color, start),
            Tool::Oval => Self::oval(color, start),
        }
    }

    pub fn freehand(color: Color32, start: Pos2) -> Self {
        Self::Freehand {
            color,
            points: vec![start],
        }
    }

    pub fn rectangle(color: Color32, start: Pos2) -> Self {
        Self::Rectangle {
            color,
            start,
            end: start,
        }
    }

    pub fn oval(color: Color32, start: Pos2) -> Self {
        Self::Oval {
            color,
            start,
            end: start,
        }
    }

    pub fn tool(&self) -> Tool {
        match self {
            Self::Freehand { .. } => Tool::Freehand,
            Self::Rectangle { .. } => Tool::Rectangle,
            Self::Oval { .. } => Tool::Oval,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Self::Freehand { color, .. }
            | Self::Rectangle { color, .. }
            | Self::Oval { color, .. } => *color,
        }
    }

    /// The geometry points of the shape.
    ///
    /// Freehand returns its whole path, rectangles and ovals their two corners.
    pub fn points(&self) -> Vec<Pos2> {
        match self {
            Self::Freehand { points, .. } => points.clone(),
            Self::Rectangle { start, end, .. } | Self::Oval { start, end, .. } => {
                vec![*start, *end]
            }
        }
    }

    /// Normalized bounding box of a rectangle or oval. `None` for freehand paths.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Self::Freehand { .. } => None,
            Self::Rectangle { start, end, .. } | Self::Oval { start, end, .. } => {
                Some(BoundingBox::from_corners(*start, *end))
            }
        }
    }

    /// Feed a new pointer location into the shape.
    pub fn extend(&mut self, point: Pos2) {
        match self {
            Self::Freehand { points, .. } => points.push(point),
            Self::Rectangle { end, .. } | Self::Oval { end, .. } => *end = point,
        }
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.set_color(self.color());
        match self {
            Self::Freehand { points, .. } => {
                for segment in points.windows(2) {
                    surface.draw_line(segment[0], segment[1]);
                }
            }
            Self::Rectangle { start, end, .. } => {
                surface.draw_rect(BoundingBox::from_corners(*start, *end));
            }
            Self::Oval { start, end, .. } => {
                surface.draw_ellipse(BoundingBox::from_corners(*start, *end));
            }
        }
    }
}
