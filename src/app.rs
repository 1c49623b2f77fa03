use std::path::PathBuf;

use crate::command::Command;
use crate::config::AppConfig;
use crate::editor::Editor;
use crate::input::InputHandler;
use crate::panels::{self, ToolbarAction};
use crate::renderer::Renderer;
use crate::tool::ToolState;
use crate::widgets::{ColorDialog, ColorDialogResponse};

pub struct PaintApp {
    config: AppConfig,
    editor: Editor,
    input: InputHandler,
    renderer: Renderer,
    color_dialog: Option<ColorDialog>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_tools(AppConfig::default(), ToolState::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let tools = Self::restore_tools(cc.storage);
        log::info!("Starting with {:?}", tools);

        Self::with_tools(config, tools)
    }

    /// The tool selection saved by the previous run, or the defaults.
    pub fn restore_tools(storage: Option<&dyn eframe::Storage>) -> ToolState {
        storage
            .and_then(|storage| eframe::get_value::<ToolState>(storage, eframe::APP_KEY))
            .unwrap_or_default()
    }

    pub fn with_tools(config: AppConfig, tools: ToolState) -> Self {
        Self {
            editor: Editor::new(tools, config.canvas_background),
            renderer: Renderer::new(config.canvas_background),
            input: InputHandler::default(),
            color_dialog: None,
            config,
        }
    }

    fn handle_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::ClearCanvas => self.execute(Command::ClearCanvas),
            ToolbarAction::ChooseColor => {
                self.color_dialog = Some(ColorDialog::new(self.editor.current_color()));
            }
            ToolbarAction::SelectTool(tool) => self.execute(Command::SelectTool(tool)),
            ToolbarAction::SaveImage => {
                if let Some(path) = pick_save_path() {
                    self.save_image(path);
                }
            }
        }
    }

    fn execute(&mut self, command: Command) {
        let name = command.name();
        if let Err(err) = self.editor.execute(command) {
            log::error!("{} failed: {}", name, err);
        }
    }

    fn save_image(&mut self, path: PathBuf) {
        match self.editor.execute(Command::SaveImage(path.clone())) {
            Ok(()) => show_message(rfd::MessageLevel::Info, "Message", "Image Saved Successfully"),
            Err(err) => {
                log::error!("Failed to save image to {}: {}", path.display(), err);
                show_message(
                    rfd::MessageLevel::Error,
                    "Error",
                    &format!("Error Saving The Image: {err}"),
                );
            }
        }
    }

    fn show_color_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.color_dialog else {
            return;
        };

        match dialog.show(ctx) {
            ColorDialogResponse::Pending => {}
            ColorDialogResponse::Accepted(color) => {
                self.color_dialog = None;
                self.execute(Command::SetColor(color));
            }
            ColorDialogResponse::Cancelled => {
                log::debug!("Color selection cancelled");
                self.color_dialog = None;
            }
        }
    }
}

fn pick_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save Image")
        .add_filter("PNG Image", &["png"])
        .save_file()
}

fn show_message(level: rfd::MessageLevel, title: &str, description: &str) {
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.editor.tools());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = panels::tools_panel(ctx, &self.config.toolbar, self.editor.current_tool());
        for action in actions {
            self.handle_toolbar_action(action);
        }

        panels::central_panel(ctx, &mut self.editor, &mut self.input, &self.renderer);

        self.show_color_dialog(ctx);
    }
}
