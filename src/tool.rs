use egui::Color32;
use serde::{Deserialize, Serialize};

/// The shape kind new pointer-down gestures will create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Freehand,
    Rectangle,
    Oval,
}

impl Tool {
    /// Toolbar order.
    pub const ALL: [Tool; 3] = [Tool::Freehand, Tool::Rectangle, Tool::Oval];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Freehand => "Freehand",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Oval",
        }
    }
}

/// Current drawing color and tool. Read whenever a shape is started.
///
/// We derive Deserialize/Serialize so the selection survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    pub color: Color32,
    pub tool: Tool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            tool: Tool::Freehand,
        }
    }
}

impl ToolState {
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }
}
