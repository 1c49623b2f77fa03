use egui::Color32;

/// Fixed look of one toolbar button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub label: String,
    pub fill: Color32,
    pub text: Color32,
}

impl ButtonStyle {
    fn new(label: &str, fill: Color32) -> Self {
        Self {
            label: label.to_owned(),
            fill,
            text: Color32::WHITE,
        }
    }
}

/// Toolbar button styles, in toolbar order
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarPalette {
    pub clear: ButtonStyle,
    pub color: ButtonStyle,
    pub freehand: ButtonStyle,
    pub rectangle: ButtonStyle,
    pub oval: ButtonStyle,
    pub save: ButtonStyle,
}

impl Default for ToolbarPalette {
    fn default() -> Self {
        Self {
            clear: ButtonStyle::new("Clear Canvas", Color32::RED),
            color: ButtonStyle::new("Choose Color", Color32::from_rgb(63, 81, 181)),
            freehand: ButtonStyle::new("Freehand", Color32::from_rgb(211, 84, 0)),
            rectangle: ButtonStyle::new("Rectangle", Color32::from_rgb(142, 68, 173)),
            oval: ButtonStyle::new("Oval", Color32::from_rgb(39, 174, 96)),
            save: ButtonStyle::new("Save Image", Color32::from_rgb(20, 10, 0)),
        }
    }
}

/// Application level settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub canvas_background: Color32,
    pub toolbar: ToolbarPalette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Drawing APP".to_owned(),
            window_size: [800.0, 600.0],
            canvas_background: Color32::WHITE,
            toolbar: ToolbarPalette::default(),
        }
    }
}

impl AppConfig {
    /// Native window options for this configuration
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_title(self.window_title.clone()),
            centered: true,
            ..Default::default()
        }
    }
}
