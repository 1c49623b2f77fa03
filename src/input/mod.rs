use egui::{Pos2, Rect};

mod controller;
mod state;

pub use controller::{ControllerState, InputController};
pub use state::PointerState;

/// Pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed on the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while a gesture started on the canvas is held
    PointerDrag { position: Pos2 },
    /// Primary button was released, ending the gesture
    PointerUp { position: Pos2 },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerDrag { position }
            | InputEvent::PointerUp { position } => *position,
        }
    }
}

/// Turns per-frame egui pointer state into canvas [`InputEvent`]s.
///
/// Only gestures that begin on the canvas produce events. Once a gesture has begun,
/// drags keep reporting even if the pointer wanders past the canvas edge.
pub struct InputHandler {
    canvas_rect: Rect,
    gesture_active: bool,
    last_pointer_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            gesture_active: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input for the canvas widget and generate our InputEvents
    pub fn process_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) -> Vec<InputEvent> {
        let state = PointerState::from_egui(ctx, canvas);
        self.process_state(&state)
    }

    pub fn process_state(&mut self, state: &PointerState) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if state.pointer_pressed {
            match state.pointer_pos {
                Some(pos) if state.over_canvas => {
                    events.push(InputEvent::PointerDown {
                        position: self.to_canvas(pos),
                    });
                    self.gesture_active = true;
                    self.last_pointer_pos = Some(pos);
                }
                _ => {
                    self.gesture_active = false;
                    self.last_pointer_pos = None;
                }
            }
        } else if self.gesture_active && state.pointer_down {
            if let Some(pos) = state.pointer_pos {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerDrag {
                        position: self.to_canvas(pos),
                    });
                    self.last_pointer_pos = Some(pos);
                }
            }
        }

        // A press and release can land in the same frame on a quick click.
        if state.pointer_released && self.gesture_active {
            if let Some(pos) = state.pointer_pos.or(self.last_pointer_pos) {
                events.push(InputEvent::PointerUp {
                    position: self.to_canvas(pos),
                });
            }
            self.gesture_active = false;
            self.last_pointer_pos = None;
        }

        events
    }
}
