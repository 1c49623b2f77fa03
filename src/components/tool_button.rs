use crate::config::ButtonStyle;

/// Flat toolbar button with a solid background and no border
pub struct ToolButton<'a> {
    pub style: &'a ButtonStyle,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(style: &'a ButtonStyle) -> Self {
        Self {
            style,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let text = egui::RichText::new(&self.style.label)
            .color(self.style.text)
            .strong();

        // highlight the active tool with a light outline
        let stroke = if self.selected {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 181, 246))
        } else {
            egui::Stroke::NONE
        };

        ui.add(
            egui::Button::new(text)
                .fill(self.style.fill)
                .stroke(stroke)
                .min_size(egui::vec2(0.0, 28.0)),
        )
    }
}
