mod common;

use common::pos;
use drawing_app::input::ControllerState;
use drawing_app::{BoundingBox, Command, Editor, InputEvent, Shape, Tool, ToolState};
use egui::Color32;

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown { position: pos(x, y) }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDrag { position: pos(x, y) }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp { position: pos(x, y) }
}

#[test]
fn test_default_tool_state() {
    let editor = Editor::default();
    assert_eq!(editor.current_color(), Color32::BLACK);
    assert_eq!(editor.current_tool(), Tool::Freehand);
    assert!(editor.document().is_empty());
}

#[test]
fn test_rectangle_gesture() {
    let mut editor = Editor::default();
    editor.execute(Command::SelectTool(Tool::Rectangle)).unwrap();
    editor.execute(Command::SetColor(Color32::RED)).unwrap();

    editor.handle_event(&down(10.0, 10.0));
    editor.handle_event(&drag(50.0, 40.0));

    let shapes = editor.document().shapes();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].tool(), Tool::Rectangle);
    assert_eq!(shapes[0].color(), Color32::RED);
    assert_eq!(
        shapes[0].bounding_box(),
        Some(BoundingBox {
            x: 10.0,
            y: 10.0,
            width: 40.0,
            height: 30.0
        })
    );
}

#[test]
fn test_freehand_gesture() {
    let mut editor = Editor::default();
    editor.execute(Command::SelectTool(Tool::Freehand)).unwrap();

    editor.handle_event(&down(0.0, 0.0));
    editor.handle_event(&drag(5.0, 5.0));
    editor.handle_event(&drag(5.0, 10.0));
    editor.handle_event(&up(5.0, 10.0));

    let shapes = editor.document().shapes();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].points(), vec![pos(0.0, 0.0), pos(5.0, 5.0), pos(5.0, 10.0)]);
    assert_eq!(editor.controller_state(), ControllerState::Idle);
}

#[test]
fn test_one_shape_per_pointer_down() {
    let mut editor = Editor::default();
    let tools = [Tool::Freehand, Tool::Oval, Tool::Freehand, Tool::Rectangle];

    // no pointer-up between gestures on purpose
    for (i, tool) in tools.iter().enumerate() {
        editor.execute(Command::SelectTool(*tool)).unwrap();
        let base = i as f32 * 10.0;
        editor.handle_event(&down(base, base));
        for step in 1..=i + 1 {
            editor.handle_event(&drag(base + step as f32, base));
        }
    }

    let shapes = editor.document().shapes();
    assert_eq!(shapes.len(), tools.len());

    for (i, shape) in shapes.iter().enumerate() {
        let base = i as f32 * 10.0;
        assert_eq!(shape.tool(), tools[i]);
        match shape {
            Shape::Freehand { points, .. } => {
                let expected: Vec<_> = std::iter::once(pos(base, base))
                    .chain((1..=i + 1).map(|step| pos(base + step as f32, base)))
                    .collect();
                assert_eq!(*points, expected);
            }
            Shape::Rectangle { start, end, .. } | Shape::Oval { start, end, .. } => {
                assert_eq!(*start, pos(base, base));
                assert_eq!(*end, pos(base + (i + 1) as f32, base));
            }
        }
    }
}

#[test]
fn test_drag_on_empty_document_is_noop() {
    let mut editor = Editor::default();
    editor.handle_event(&drag(10.0, 10.0));
    editor.handle_event(&up(10.0, 10.0));
    assert!(editor.document().is_empty());
}

#[test]
fn test_color_is_captured_at_creation() {
    let mut editor = Editor::new(
        ToolState {
            color: Color32::BLUE,
            tool: Tool::Oval,
        },
        Color32::WHITE,
    );

    editor.handle_event(&down(0.0, 0.0));
    editor.execute(Command::SetColor(Color32::RED)).unwrap();
    editor.handle_event(&drag(20.0, 20.0));

    assert_eq!(editor.document().shapes()[0].color(), Color32::BLUE);
    assert_eq!(editor.current_color(), Color32::RED);
}

#[test]
fn test_clear_canvas_keeps_tool_state() {
    let mut editor = Editor::default();
    editor.execute(Command::SelectTool(Tool::Oval)).unwrap();
    editor.handle_event(&down(1.0, 1.0));
    editor.handle_event(&up(1.0, 1.0));

    editor.execute(Command::ClearCanvas).unwrap();

    assert!(editor.document().is_empty());
    assert_eq!(editor.current_tool(), Tool::Oval);
}

#[test]
fn test_command_names_match_toolbar() {
    assert_eq!(Command::ClearCanvas.name(), "Clear Canvas");
    assert_eq!(Command::SetColor(Color32::RED).name(), "Choose Color");
    assert_eq!(Command::SelectTool(Tool::Rectangle).name(), "Rectangle");
    assert_eq!(Command::SaveImage("out.png".into()).name(), "Save Image");
}
