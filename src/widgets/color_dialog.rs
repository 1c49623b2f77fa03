use egui::Color32;

/// What the user did with the color dialog this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorDialogResponse {
    /// Still open, nothing decided yet
    Pending,
    Accepted(Color32),
    Cancelled,
}

/// "Choose Color" window. Edits a working copy and only hands it back on OK.
#[derive(Debug, Clone)]
pub struct ColorDialog {
    color: Color32,
    open: bool,
}

impl ColorDialog {
    /// Open the dialog seeded with the current drawing color
    pub fn new(initial: Color32) -> Self {
        Self {
            color: initial,
            open: true,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> ColorDialogResponse {
        let mut response = ColorDialogResponse::Pending;

        egui::Window::new("Choose Color")
            .open(&mut self.open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        response = ColorDialogResponse::Accepted(self.color);
                    }
                    if ui.button("Cancel").clicked() {
                        response = ColorDialogResponse::Cancelled;
                    }
                });
            });

        // closed with the window's X button
        if !self.open && response == ColorDialogResponse::Pending {
            response = ColorDialogResponse::Cancelled;
        }
        response
    }
}
