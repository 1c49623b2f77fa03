use egui::Pos2;

/// The primary pointer button as seen during a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in screen coordinates, if known
    pub pointer_pos: Option<Pos2>,
    /// Primary button went down this frame
    pub pointer_pressed: bool,
    /// Primary button went up this frame
    pub pointer_released: bool,
    /// Primary button is currently held
    pub pointer_down: bool,
    /// The canvas is hovered and not covered by another window
    pub over_canvas: bool,
}

impl PointerState {
    /// Sample the pointer from egui for the canvas widget described by `canvas`
    pub fn from_egui(ctx: &egui::Context, canvas: &egui::Response) -> Self {
        let over_canvas = canvas.hovered();

        ctx.input(|i| Self {
            pointer_pos: i.pointer.interact_pos(),
            pointer_pressed: i.pointer.primary_pressed(),
            pointer_released: i.pointer.primary_released(),
            pointer_down: i.pointer.primary_down(),
            over_canvas,
        })
    }
}
