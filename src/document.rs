use crate::shape::Shape;
use crate::surface::RenderSurface;

/// The drawing: every shape on the canvas in the order it was created.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The most recently appended shape, i.e. the one a drag extends.
    pub fn last_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.last_mut()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Draw all shapes back to front. Later shapes paint over earlier ones.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        for shape in &self.shapes {
            shape.render(surface);
        }
    }
}
