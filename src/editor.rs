use egui::Color32;
use image::RgbImage;

use crate::command::Command;
use crate::document::Document;
use crate::error::ExportResult;
use crate::export;
use crate::input::{ControllerState, InputController, InputEvent};
use crate::tool::{Tool, ToolState};

/// Result of applying a toolbar command
pub type CommandResult = ExportResult<()>;

/// One drawing session: the document plus everything that decides how input changes it.
#[derive(Debug)]
pub struct Editor {
    document: Document,
    tools: ToolState,
    controller: InputController,
    canvas_size: [u32; 2],
    background: Color32,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(ToolState::default(), Color32::WHITE)
    }
}

impl Editor {
    pub fn new(tools: ToolState, background: Color32) -> Self {
        Self {
            document: Document::new(),
            tools,
            controller: InputController::new(),
            canvas_size: [0, 0],
            background,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn current_color(&self) -> Color32 {
        self.tools.color
    }

    pub fn current_tool(&self) -> Tool {
        self.tools.tool
    }

    pub fn controller_state(&self) -> ControllerState {
        self.controller.state()
    }

    /// Record the on-screen canvas size in whole pixels; exports use this size.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        if self.canvas_size != [width, height] {
            log::debug!("Canvas resized to {}x{}", width, height);
            self.canvas_size = [width, height];
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.controller
            .handle_event(event, &mut self.document, &self.tools);
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        match command {
            Command::ClearCanvas => {
                log::info!("Clearing {} shapes", self.document.len());
                self.document.clear();
            }
            Command::SetColor(color) => {
                log::info!("Color changed to {:?}", color);
                self.tools.set_color(color);
            }
            Command::SelectTool(tool) => {
                log::info!("Tool selected: {}", tool.label());
                self.tools.set_tool(tool);
            }
            Command::SaveImage(path) => {
                let [width, height] = self.canvas_size;
                export::export_png(&self.document, width, height, self.background, &path)?;
            }
        }
        Ok(())
    }

    /// The canvas as it would be exported right now.
    pub fn export_image(&self) -> ExportResult<RgbImage> {
        let [width, height] = self.canvas_size;
        export::render_to_image(&self.document, width, height, self.background)
    }
}
