mod common;

use common::{DrawCall, RecordingSurface, pos};
use drawing_app::{BoundingBox, Document, Shape, Tool};
use egui::Color32;

#[test]
fn test_freehand_renders_connected_segments() {
    let mut stroke = Shape::new(Tool::Freehand, Color32::BLUE, pos(0.0, 0.0));
    stroke.extend(pos(5.0, 5.0));
    stroke.extend(pos(5.0, 10.0));

    let mut surface = RecordingSurface::new();
    stroke.render(&mut surface);

    assert_eq!(
        surface.calls,
        vec![
            DrawCall::SetColor(Color32::BLUE),
            DrawCall::Line(pos(0.0, 0.0), pos(5.0, 5.0)),
            DrawCall::Line(pos(5.0, 5.0), pos(5.0, 10.0)),
        ]
    );
}

#[test]
fn test_single_point_freehand_draws_nothing() {
    let stroke = Shape::freehand(Color32::BLACK, pos(3.0, 3.0));

    let mut surface = RecordingSurface::new();
    stroke.render(&mut surface);

    assert!(surface.draw_calls().is_empty());
}

#[test]
fn test_duplicate_points_render_zero_length_segments() {
    let mut stroke = Shape::freehand(Color32::BLACK, pos(3.0, 3.0));
    stroke.extend(pos(3.0, 3.0));

    let mut surface = RecordingSurface::new();
    stroke.render(&mut surface);

    assert_eq!(surface.draw_calls(), vec![&DrawCall::Line(pos(3.0, 3.0), pos(3.0, 3.0))]);
}

#[test]
fn test_rectangle_and_oval_draw_normalized_outlines() {
    let mut rect = Shape::rectangle(Color32::RED, pos(50.0, 40.0));
    rect.extend(pos(10.0, 10.0));
    let mut oval = Shape::oval(Color32::GREEN, pos(10.0, 40.0));
    oval.extend(pos(50.0, 10.0));

    let expected = BoundingBox {
        x: 10.0,
        y: 10.0,
        width: 40.0,
        height: 30.0,
    };

    let mut surface = RecordingSurface::new();
    rect.render(&mut surface);
    oval.render(&mut surface);

    assert_eq!(
        surface.calls,
        vec![
            DrawCall::SetColor(Color32::RED),
            DrawCall::Rect(expected),
            DrawCall::SetColor(Color32::GREEN),
            DrawCall::Ellipse(expected),
        ]
    );
}

#[test]
fn test_bounding_box_symmetric_under_corner_swap() {
    let corners = [
        (pos(0.0, 0.0), pos(7.0, 3.0)),
        (pos(-4.0, 12.0), pos(9.0, -1.0)),
        (pos(5.0, 5.0), pos(5.0, 5.0)),
        (pos(100.0, 2.0), pos(1.0, 200.0)),
    ];

    for (a, b) in corners {
        let mut forward = Shape::rectangle(Color32::BLACK, a);
        forward.extend(b);
        let mut backward = Shape::oval(Color32::BLACK, b);
        backward.extend(a);

        let fwd = forward.bounding_box().unwrap();
        let bwd = backward.bounding_box().unwrap();
        assert_eq!(fwd, bwd);
        assert!(fwd.width >= 0.0 && fwd.height >= 0.0);
    }
}

#[test]
fn test_document_renders_in_insertion_order() {
    let mut document = Document::new();
    document.append(Shape::rectangle(Color32::RED, pos(0.0, 0.0)));
    document.append(Shape::oval(Color32::BLUE, pos(1.0, 1.0)));

    let mut surface = RecordingSurface::new();
    document.render(&mut surface);

    assert_eq!(surface.calls.len(), 4);
    assert_eq!(surface.calls[0], DrawCall::SetColor(Color32::RED));
    assert!(matches!(surface.calls[1], DrawCall::Rect(_)));
    assert_eq!(surface.calls[2], DrawCall::SetColor(Color32::BLUE));
    assert!(matches!(surface.calls[3], DrawCall::Ellipse(_)));
}

#[test]
fn test_rerender_is_idempotent() {
    let mut document = Document::new();
    let mut stroke = Shape::freehand(Color32::BLACK, pos(0.0, 0.0));
    stroke.extend(pos(4.0, 4.0));
    document.append(stroke);
    let mut rect = Shape::rectangle(Color32::RED, pos(2.0, 2.0));
    rect.extend(pos(8.0, 1.0));
    document.append(rect);

    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    document.render(&mut first);
    document.render(&mut second);

    assert_eq!(first.calls, second.calls);
}

#[test]
fn test_clear_then_render_is_blank() {
    let mut document = Document::new();
    document.append(Shape::rectangle(Color32::RED, pos(0.0, 0.0)));
    document.append(Shape::freehand(Color32::RED, pos(0.0, 0.0)));
    document.clear();

    let mut surface = RecordingSurface::new();
    document.render(&mut surface);

    assert!(surface.calls.is_empty());
}
