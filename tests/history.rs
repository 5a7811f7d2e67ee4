use egui::{Color32, Vec2, pos2, vec2};
use oriented_paint::{Document, DrawError, Orientation};

fn surface() -> Vec2 {
    vec2(300.0, 200.0)
}

// One complete pointer-down / move / pointer-up cycle.
fn draw_line(document: &mut Document, color: Color32) {
    document
        .begin_stroke(Orientation::Portrait, surface(), color, 4.0)
        .expect("surface is non-degenerate");
    document
        .continue_stroke(pos2(10.0, 10.0), pos2(10.0, 10.0), pos2(50.0, 10.0))
        .expect("stroke is active");
    document.end_stroke();
}

#[test]
fn undo_moves_one_stroke_to_redo_and_redo_restores_it() {
    let mut document = Document::new();
    draw_line(&mut document, Color32::RED);
    assert_eq!(document.current_strokes().len(), 1);
    assert!(!document.can_redo());

    document.undo().expect("one stroke to undo");
    assert_eq!(document.current_strokes().len(), 0);
    assert!(document.is_empty());
    assert!(document.can_redo());

    document.redo().expect("one stroke to redo");
    assert_eq!(document.current_strokes().len(), 1);
    assert!(!document.can_redo());
}

#[test]
fn beginning_a_stroke_discards_redo_history() {
    let mut document = Document::new();
    draw_line(&mut document, Color32::RED);
    draw_line(&mut document, Color32::GREEN);

    document.undo().expect("stroke to undo");
    assert!(document.can_redo());

    draw_line(&mut document, Color32::BLUE);
    assert!(!document.can_redo());
    assert_eq!(document.redo(), Err(DrawError::EmptyRedoHistory));
}

#[test]
fn redo_restores_in_reverse_undo_order() {
    let mut document = Document::new();
    draw_line(&mut document, Color32::RED);
    draw_line(&mut document, Color32::GREEN);

    document.undo().expect("stroke to undo");
    document.undo().expect("stroke to undo");
    assert!(document.is_empty());

    // Last undone comes back first, so the log rebuilds in draw order.
    document.redo().expect("stroke to redo");
    assert_eq!(document.current_strokes()[0].color(), Color32::RED);

    document.redo().expect("stroke to redo");
    let colors: Vec<_> = document
        .current_strokes()
        .iter()
        .map(|stroke| stroke.color())
        .collect();
    assert_eq!(colors, vec![Color32::RED, Color32::GREEN]);
}

#[test]
fn clear_empties_the_log() {
    let mut document = Document::new();
    for _ in 0..3 {
        draw_line(&mut document, Color32::RED);
    }

    document.clear();
    assert!(document.is_empty());
    assert!(document.current_strokes().is_empty());
    assert_eq!(document.undo(), Err(DrawError::EmptyHistory));
}

#[test]
fn clear_leaves_undone_strokes_restorable() {
    let mut document = Document::new();
    draw_line(&mut document, Color32::RED);
    draw_line(&mut document, Color32::GREEN);
    document.undo().expect("stroke to undo");

    document.clear();
    assert!(document.can_redo());

    document.redo().expect("stroke to redo");
    assert_eq!(document.current_strokes().len(), 1);
    assert_eq!(document.current_strokes()[0].color(), Color32::GREEN);
}

#[test]
fn move_event_without_a_stroke_is_a_protocol_violation() {
    let mut document = Document::new();
    let result = document.continue_stroke(pos2(0.0, 0.0), pos2(0.0, 0.0), pos2(5.0, 5.0));
    assert_eq!(result, Err(DrawError::NoActiveStroke));
}

#[test]
fn finished_strokes_reject_further_moves() {
    let mut document = Document::new();
    draw_line(&mut document, Color32::RED);

    let result = document.continue_stroke(pos2(0.0, 0.0), pos2(0.0, 0.0), pos2(5.0, 5.0));
    assert_eq!(result, Err(DrawError::NoActiveStroke));
    // The finished stroke itself is untouched.
    assert_eq!(document.current_strokes().len(), 1);
}

#[test]
fn undoing_the_stroke_in_progress_ends_it() {
    let mut document = Document::new();
    document
        .begin_stroke(Orientation::Portrait, surface(), Color32::RED, 4.0)
        .expect("surface is non-degenerate");
    document
        .continue_stroke(pos2(10.0, 10.0), pos2(10.0, 10.0), pos2(50.0, 10.0))
        .expect("stroke is active");

    document.undo().expect("the in-progress stroke to undo");
    assert!(document.is_empty());

    let result = document.continue_stroke(pos2(0.0, 0.0), pos2(0.0, 0.0), pos2(5.0, 5.0));
    assert_eq!(result, Err(DrawError::NoActiveStroke));
}

#[test]
fn stroke_in_progress_is_rendered() {
    let mut document = Document::new();
    document
        .begin_stroke(Orientation::Portrait, surface(), Color32::RED, 4.0)
        .expect("surface is non-degenerate");
    document
        .continue_stroke(pos2(10.0, 10.0), pos2(10.0, 10.0), pos2(50.0, 10.0))
        .expect("stroke is active");

    assert_eq!(document.current_strokes().len(), 1);
    assert!(!document.current_strokes()[0].is_empty());
}

#[test]
fn empty_histories_report_recoverable_errors() {
    let mut document = Document::new();
    assert_eq!(document.undo(), Err(DrawError::EmptyHistory));
    assert_eq!(document.redo(), Err(DrawError::EmptyRedoHistory));
    // Both are no-ops; the log is still usable.
    draw_line(&mut document, Color32::RED);
    assert_eq!(document.current_strokes().len(), 1);
}

#[test]
fn degenerate_surface_creates_no_stroke() {
    let mut document = Document::new();
    let result = document.begin_stroke(Orientation::Portrait, vec2(0.0, 200.0), Color32::RED, 4.0);
    assert!(matches!(result, Err(DrawError::DegenerateSurface { .. })));
    assert!(document.is_empty());

    // The failed begin leaves the log idle.
    let result = document.continue_stroke(pos2(0.0, 0.0), pos2(0.0, 0.0), pos2(5.0, 5.0));
    assert_eq!(result, Err(DrawError::NoActiveStroke));
}

#[test]
fn strokes_record_the_configuration_they_began_in() {
    let mut document = Document::new();
    document
        .begin_stroke(Orientation::LandscapeLeft, vec2(200.0, 300.0), Color32::RED, 4.0)
        .expect("surface is non-degenerate");
    document.end_stroke();

    let stroke = &document.current_strokes()[0];
    assert_eq!(stroke.source_orientation(), Orientation::LandscapeLeft);
    assert_eq!(stroke.source_size(), vec2(200.0, 300.0));
    assert_eq!(stroke.width(), 4.0);
}
