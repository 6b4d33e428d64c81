use egui::{pos2, PointerButton, Pos2, Rect};
use sketchpad::{InputEvent, InputHandler, InputLocation, Sketchpad, SketchpadOptions};

fn editing_sketchpad() -> Sketchpad {
    let options = SketchpadOptions {
        width: Some(200.0),
        height: Some(100.0),
        input: Some("drawing".to_owned()),
        ..SketchpadOptions::default()
    };
    Sketchpad::new("canvas", options).unwrap()
}

fn location(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: pos2(x, y),
        is_in_canvas: true,
    }
}

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        location: location(x, y),
        button: PointerButton::Primary,
    }
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        location: location(x, y),
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        location: location(x, y),
        button: PointerButton::Primary,
    }
}

#[test]
fn drag_commits_a_polyline() {
    let mut pad = editing_sketchpad();
    for event in [down(0.0, 0.0), moved(10.0, 0.0), moved(10.0, 10.0), up(10.0, 10.0)] {
        pad.handle_input(&event);
    }

    assert_eq!(pad.strokes().len(), 1);
    let stroke = &pad.strokes()[0];
    assert_eq!(stroke.path(), "M0,0L10,0L10,10");
    assert_eq!(stroke.style().color, "#000000");
    assert_eq!(stroke.style().width, 5.0);
    assert_eq!(pad.paper().len(), 1);
}

#[test]
fn click_leaves_the_store_untouched() {
    let mut pad = editing_sketchpad();
    pad.commit(sketchpad::Stroke::new("M0,0L1,1", pad.pen().style())).unwrap();
    let before = pad.json();

    pad.handle_input(&down(5.0, 5.0));
    pad.handle_input(&up(5.0, 5.0));

    assert_eq!(pad.json(), before);
    assert_eq!(pad.paper().len(), 1);
}

#[test]
fn stroke_in_progress_survives_undo_and_replay() {
    let mut pad = editing_sketchpad();
    pad.commit(sketchpad::Stroke::new("M0,0L1,1", pad.pen().style())).unwrap();

    pad.handle_input(&down(0.0, 0.0));
    pad.handle_input(&moved(10.0, 0.0));
    pad.undo();
    assert!(pad.strokes().is_empty());
    pad.handle_input(&moved(10.0, 10.0));
    assert_eq!(pad.paper().len(), 1);

    pad.animate_at(std::time::Duration::from_millis(500), 0.0);
    pad.handle_input(&moved(20.0, 10.0));
    pad.handle_input(&up(20.0, 10.0));

    assert_eq!(pad.strokes().len(), 1);
    assert_eq!(pad.strokes()[0].path(), "M0,0L10,0L10,10L20,10");
    assert_eq!(pad.paper().len(), 1);
}

#[test]
fn pen_settings_apply_to_the_next_stroke() {
    let mut pad = editing_sketchpad();
    pad.pen_mut()
        .set_color("#ff0000")
        .set_width(999.0)
        .set_opacity(-1.0);

    for event in [down(0.0, 0.0), moved(3.0, 4.0), up(3.0, 4.0)] {
        pad.handle_input(&event);
    }

    let style = pad.strokes()[0].style();
    assert_eq!(style.color, "#ff0000");
    assert_eq!(style.width, 20.0);
    assert_eq!(style.opacity, 0.0);
}

#[test]
fn sketchpad_without_mirror_field_is_read_only() {
    let mut pad = Sketchpad::new("canvas", SketchpadOptions::default()).unwrap();
    assert!(!pad.is_editing());

    for event in [down(0.0, 0.0), moved(3.0, 4.0), up(3.0, 4.0)] {
        pad.handle_input(&event);
    }
    assert!(pad.strokes().is_empty());

    pad.set_editing(true);
    assert_eq!(pad.container().cursor(), egui::CursorIcon::Crosshair);
    for event in [down(0.0, 0.0), moved(3.0, 4.0), up(3.0, 4.0)] {
        pad.handle_input(&event);
    }
    assert_eq!(pad.strokes().len(), 1);
}

#[test]
fn raw_egui_events_draw_relative_to_the_canvas() {
    let mut pad = editing_sketchpad();
    let canvas = Rect::from_min_size(pos2(50.0, 20.0), pad.paper().size());
    let mut input = InputHandler::new(canvas);

    let press = |pos: Pos2, pressed: bool| egui::Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    };
    let raw = [
        press(pos2(50.0, 20.0), true),
        egui::Event::PointerMoved(pos2(60.0, 20.0)),
        egui::Event::PointerMoved(pos2(60.0, 30.0)),
        // Released far outside the canvas
        press(pos2(900.0, 900.0), false),
    ];

    for event in input.process_events(&raw) {
        pad.handle_input(&event);
    }

    assert_eq!(pad.strokes().len(), 1);
    assert_eq!(pad.strokes()[0].path(), "M0,0L10,0L10,10");
    assert!(pad.container().is_selectable());
}

#[test]
fn swapping_the_pen_mid_stroke_abandons_it() {
    let mut pad = editing_sketchpad();
    pad.handle_input(&down(0.0, 0.0));
    pad.handle_input(&moved(5.0, 5.0));

    let mut marker = sketchpad::Pen::new();
    marker.set_width(12.0);
    pad.set_pen(marker);
    pad.handle_input(&up(5.0, 5.0));

    assert!(pad.strokes().is_empty());
    assert!(pad.paper().is_empty());
    assert_eq!(pad.pen().width(), 12.0);
}
