use crate::editor::Editor;
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// The drawing canvas: feeds pointer input to the editor and repaints the document.
pub fn central_panel(
    ctx: &egui::Context,
    editor: &mut Editor,
    input: &mut InputHandler,
    renderer: &Renderer,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
            let canvas_rect = response.rect;

            editor.set_canvas_size(
                canvas_rect.width().max(0.0).round() as u32,
                canvas_rect.height().max(0.0).round() as u32,
            );

            input.set_canvas_rect(canvas_rect);
            for event in input.process_input(ctx, &response) {
                editor.handle_event(&event);
            }

            renderer.render(&painter, canvas_rect, editor.document());
        });
}
