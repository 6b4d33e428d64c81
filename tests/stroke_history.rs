use std::cell::Cell;
use std::rc::Rc;

use sketchpad::{Sketchpad, SketchpadOptions, Stroke, StrokeStyle};

fn stroke(n: u32) -> Stroke {
    let style = StrokeStyle {
        width: n as f32,
        ..StrokeStyle::default()
    };
    Stroke::new(format!("M0,0L{n},{n}"), style)
}

fn sketchpad() -> Sketchpad {
    Sketchpad::new("canvas", SketchpadOptions::default()).unwrap()
}

fn counter(sketchpad: &mut Sketchpad) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    sketchpad.on_change(move || c.set(c.get() + 1));
    count
}

#[test]
fn undo_moves_exactly_k_strokes() {
    for n in 0..5u32 {
        for k in 0..=n {
            let mut pad = sketchpad();
            for i in 0..n {
                pad.commit(stroke(i + 1)).unwrap();
            }
            for _ in 0..k {
                pad.undo();
            }

            assert_eq!(pad.strokes().len(), (n - k) as usize);
            assert_eq!(pad.store().undone().len(), k as usize);
            assert_eq!(pad.undoable(), n > k);
            assert_eq!(pad.redoable(), k > 0);
        }
    }
}

#[test]
fn redo_restores_the_exact_record() {
    let mut pad = sketchpad();
    pad.commit(stroke(1)).unwrap();
    pad.commit(stroke(7)).unwrap();
    let before = pad.json();

    pad.undo();
    assert_eq!(pad.strokes(), &[stroke(1)]);
    pad.redo();

    assert_eq!(pad.strokes(), &[stroke(1), stroke(7)]);
    assert_eq!(pad.json(), before);
}

#[test]
fn new_stroke_after_undo_drops_redo_history() {
    let mut pad = sketchpad();
    pad.commit(stroke(1)).unwrap();
    pad.commit(stroke(2)).unwrap();
    pad.undo();
    pad.undo();

    pad.commit(stroke(3)).unwrap();
    pad.redo();
    assert_eq!(pad.strokes(), &[stroke(3)]);
    assert!(!pad.redoable());
}

#[test]
fn clear_empties_the_drawing_but_not_redo() {
    let mut pad = sketchpad();
    pad.commit(stroke(1)).unwrap();
    pad.commit(stroke(2)).unwrap();
    pad.undo();
    pad.clear();

    assert_eq!(pad.json(), "[]");
    assert!(pad.paper().is_empty());
    assert!(pad.redoable());

    pad.redo();
    assert_eq!(pad.strokes(), &[stroke(2)]);
}

#[test]
fn every_mutation_notifies_once() {
    let mut pad = sketchpad();
    let count = counter(&mut pad);

    pad.commit(stroke(1)).unwrap();
    pad.undo();
    pad.redo();
    pad.clear();
    pad.set_strokes(vec![stroke(2)]).unwrap();
    assert_eq!(count.get(), 5);

    // No-ops stay quiet
    pad.redo();
    assert_eq!(count.get(), 5);
    pad.set_strokes(Vec::new()).unwrap();
    pad.undo();
    assert_eq!(count.get(), 6);
}

#[test]
fn removing_the_subscriber_silences_changes() {
    let mut pad = sketchpad();
    let count = counter(&mut pad);
    pad.remove_on_change();

    pad.commit(stroke(1)).unwrap();
    assert_eq!(count.get(), 0);
}

#[test]
#[should_panic(expected = "subscriber failed")]
fn subscriber_panics_reach_the_caller() {
    let mut pad = sketchpad();
    pad.on_change(|| panic!("subscriber failed"));
    pad.commit(stroke(1)).unwrap();
}

#[test]
fn paper_mirrors_committed_strokes() {
    let mut pad = sketchpad();
    pad.commit(stroke(1)).unwrap();
    pad.commit(stroke(2)).unwrap();
    pad.undo();

    let drawn: Vec<&Stroke> = pad.paper().elements().collect();
    assert_eq!(drawn, vec![&stroke(1)]);
}

#[test]
fn mirror_field_tracks_every_change() {
    let options = SketchpadOptions {
        input: Some("#drawing".to_owned()),
        ..SketchpadOptions::default()
    };
    let mut pad = Sketchpad::new("canvas", options).unwrap();
    let mirror = pad.mirror().unwrap().clone();
    assert_eq!(mirror.field_id(), "drawing");
    assert_eq!(mirror.value(), "[]");

    pad.commit(stroke(1)).unwrap();
    assert_eq!(mirror.value(), pad.json());

    pad.undo();
    assert_eq!(mirror.value(), "[]");
}
