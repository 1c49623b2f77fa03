use egui::Pos2;

use super::InputEvent;
use crate::document::Document;
use crate::shape::Shape;
use crate::tool::ToolState;

/// Where the controller is within a pointer gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    Idle,
    /// A shape was started by the last pointer-down and is being extended by drags
    Drawing,
}

/// Maps pointer gestures onto the document: a press starts a shape, drags grow it.
#[derive(Debug, Default)]
pub struct InputController {
    state: ControllerState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn handle_event(&mut self, event: &InputEvent, document: &mut Document, tools: &ToolState) {
        match *event {
            InputEvent::PointerDown { position } => self.on_pointer_down(position, document, tools),
            InputEvent::PointerDrag { position } => self.on_pointer_drag(position, document),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
        }
    }

    /// Start a new shape of the current tool and color. Valid in any state: a
    /// press without a preceding release still begins a fresh shape.
    pub fn on_pointer_down(&mut self, position: Pos2, document: &mut Document, tools: &ToolState) {
        document.append(Shape::new(tools.tool, tools.color, position));
        self.state = ControllerState::Drawing;
        log::debug!("Started {} at {:?}", tools.tool.label(), position);
    }

    /// Extend the most recently started shape.
    pub fn on_pointer_drag(&mut self, position: Pos2, document: &mut Document) {
        if self.state != ControllerState::Drawing {
            log::warn!("Ignoring drag at {:?} with no gesture in progress", position);
            return;
        }

        // The drawing can be cleared while a gesture is held.
        if let Some(shape) = document.last_mut() {
            shape.extend(position);
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.state == ControllerState::Drawing {
            log::debug!("Finished shape");
        }
        self.state = ControllerState::Idle;
    }
}
