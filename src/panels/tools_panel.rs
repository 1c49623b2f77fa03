use crate::components::ToolButton;
use crate::config::ToolbarPalette;
use crate::tool::Tool;

/// Button presses coming out of the toolbar this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    ClearCanvas,
    ChooseColor,
    SelectTool(Tool),
    SaveImage,
}

pub fn tools_panel(ctx: &egui::Context, palette: &ToolbarPalette, active_tool: Tool) -> Vec<ToolbarAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            if ToolButton::new(&palette.clear).show(ui).clicked() {
                actions.push(ToolbarAction::ClearCanvas);
            }
            if ToolButton::new(&palette.color).show(ui).clicked() {
                actions.push(ToolbarAction::ChooseColor);
            }

            for tool in Tool::ALL {
                let style = match tool {
                    Tool::Freehand => &palette.freehand,
                    Tool::Rectangle => &palette.rectangle,
                    Tool::Oval => &palette.oval,
                };
                if ToolButton::new(style)
                    .selected(tool == active_tool)
                    .show(ui)
                    .clicked()
                {
                    actions.push(ToolbarAction::SelectTool(tool));
                }
            }

            if ToolButton::new(&palette.save).show(ui).clicked() {
                actions.push(ToolbarAction::SaveImage);
            }
        });
        ui.add_space(4.0);
    });

    actions
}
