use std::path::PathBuf;

use egui::Color32;

use crate::tool::Tool;

/// A discrete toolbar action applied to the editor
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Remove every shape from the canvas
    ClearCanvas,
    /// Use this color for shapes started from now on
    SetColor(Color32),
    /// Use this tool for shapes started from now on
    SelectTool(Tool),
    /// Rasterize the canvas and write it as PNG to the given path
    SaveImage(PathBuf),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ClearCanvas => "Clear Canvas",
            Command::SetColor(_) => "Choose Color",
            Command::SelectTool(tool) => tool.label(),
            Command::SaveImage(_) => "Save Image",
        }
    }
}
