mod common;

use common::Driver;
use hades_engine::input::Key;
use hades_gui::prelude::*;

// The first field in W sits at (60, 85, 180, 20); clicking at x = 230 lands
// past the end of any short value.
const FIELD: (f32, f32) = (230.0, 95.0);

fn float_field(gui: &mut Gui, v: &mut f32) -> bool {
    gui.begin_window("W", WindowStyle::default());
    let committed = gui.edit_field_f32("v", v);
    gui.button("elsewhere");
    gui.end_window();
    committed
}

fn digits_or_dot(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// ── float round trip ──────────────────────────────────────────────────────

#[test]
fn typed_float_commits_on_enter_and_reformats() {
    let mut d = Driver::new();
    let mut v = 0.0_f32;
    d.frame(|gui| float_field(gui, &mut v));

    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| float_field(gui, &mut v));
    assert_eq!(d.gui.edit_state().text(), "0.00");

    for _ in 0..4 {
        d.key(Key::Backspace);
    }
    d.type_text("12.50").key(Key::Enter);
    assert!(d.frame(|gui| float_field(gui, &mut v)));
    assert_eq!(v, 12.5);

    d.frame(|gui| float_field(gui, &mut v));
    assert_eq!(d.gui.edit_state().text(), "12.50");
}

#[test]
fn reactivating_reproduces_the_formatted_value() {
    let mut d = Driver::new();
    let mut v = 12.5_f32;
    d.frame(|gui| float_field(gui, &mut v));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| float_field(gui, &mut v));
    // Click on empty window space, then back on the field.
    d.click(200.0, 250.0);
    d.frame(|gui| float_field(gui, &mut v));
    assert_eq!(d.gui.edit_state().owner(), None);
    d.frame(|gui| float_field(gui, &mut v));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| float_field(gui, &mut v));
    assert_eq!(d.gui.edit_state().text(), "12.50");
    assert_eq!(v, 12.5);
}

#[test]
fn clicking_elsewhere_commits_the_buffer() {
    let mut d = Driver::new();
    let mut v = 1.0_f32;
    d.frame(|gui| float_field(gui, &mut v));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| float_field(gui, &mut v));
    d.type_text("5");
    d.frame(|gui| float_field(gui, &mut v));
    assert_eq!(d.gui.edit_state().text(), "1.005");

    d.click(200.0, 250.0);
    assert!(!d.frame(|gui| float_field(gui, &mut v)));
    assert!(d.frame(|gui| float_field(gui, &mut v)));
    assert_eq!(v, 1.005);
}

#[test]
fn escape_drops_the_edit() {
    let mut d = Driver::new();
    let mut v = 3.0_f32;
    d.frame(|gui| float_field(gui, &mut v));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| float_field(gui, &mut v));
    d.type_text("9").key(Key::Escape);
    assert!(!d.frame(|gui| float_field(gui, &mut v)));
    assert_eq!(d.gui.edit_state().owner(), None);
    d.click(200.0, 250.0);
    assert!(!d.frame(|gui| float_field(gui, &mut v)));
    assert!(!d.frame(|gui| float_field(gui, &mut v)));
    assert_eq!(v, 3.0);
}

#[test]
fn abandoned_field_is_dropped_without_commit() {
    let mut d = Driver::new();
    let mut v = 2.0_f32;
    d.frame(|gui| float_field(gui, &mut v));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| float_field(gui, &mut v));
    d.type_text("7");
    d.frame(|gui| float_field(gui, &mut v));

    // The field stops being declared; the next outside click abandons it.
    let other = |gui: &mut Gui| {
        gui.begin_window("W", WindowStyle::default());
        gui.button("elsewhere");
        gui.end_window();
    };
    d.frame(other);
    d.frame(other);
    d.click(200.0, 250.0);
    d.frame(other);
    assert_eq!(d.gui.edit_state().owner(), None);

    assert!(!d.frame(|gui| float_field(gui, &mut v)));
    assert_eq!(v, 2.0);
}

// ── caret ─────────────────────────────────────────────────────────────────

fn validated(gui: &mut Gui, s: &mut String) -> bool {
    gui.begin_window("W", WindowStyle::default());
    let committed = gui.edit_field_with("t", s, Some(digits_or_dot));
    gui.end_window();
    committed
}

#[test]
fn four_lefts_from_the_end_land_after_the_first_digit() {
    let mut d = Driver::new();
    let mut s = String::from("12.34");
    d.frame(|gui| validated(gui, &mut s));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| validated(gui, &mut s));
    assert_eq!(d.gui.edit_state().caret(), 5);

    for _ in 0..4 {
        d.key(Key::ArrowLeft);
    }
    d.frame(|gui| validated(gui, &mut s));
    let state = d.gui.edit_state();
    assert_eq!(state.caret(), 1);
    assert_eq!(state.before_caret(), Some(0));
    assert_eq!(state.caret_x(), 8.0);
}

#[test]
fn validator_rejects_typed_letters() {
    let mut d = Driver::new();
    let mut s = String::from("1");
    d.frame(|gui| validated(gui, &mut s));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| validated(gui, &mut s));
    d.type_text("a2b").key(Key::Enter);
    assert!(d.frame(|gui| validated(gui, &mut s)));
    assert_eq!(s, "12");
}

#[test]
fn click_inside_text_places_the_caret() {
    let mut d = Driver::new();
    let mut s = String::from("12.34");
    d.frame(|gui| validated(gui, &mut s));
    // Text starts at x = 64; 78 is just past the middle of '2', before '.'.
    d.click(78.0, 95.0);
    d.frame(|gui| validated(gui, &mut s));
    assert_eq!(d.gui.edit_state().caret(), 2);
}

#[test]
fn delete_and_backspace_edit_around_the_caret() {
    let mut d = Driver::new();
    let mut s = String::from("abc");
    let declare = |gui: &mut Gui, s: &mut String| {
        gui.begin_window("W", WindowStyle::default());
        let c = gui.edit_field_string("name", s);
        gui.end_window();
        c
    };
    d.frame(|gui| declare(gui, &mut s));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| declare(gui, &mut s));
    d.key(Key::Home).key(Key::Delete).key(Key::End).key(Key::Backspace).key(Key::Enter);
    assert!(d.frame(|gui| declare(gui, &mut s)));
    assert_eq!(s, "b");
}

// ── typed fields ──────────────────────────────────────────────────────────

#[test]
fn int_field_rejects_a_second_minus() {
    let mut d = Driver::new();
    let mut n = 0_i32;
    let declare = |gui: &mut Gui, n: &mut i32| {
        gui.begin_window("W", WindowStyle::default());
        let c = gui.edit_field_i32("count", n);
        gui.end_window();
        c
    };
    d.frame(|gui| declare(gui, &mut n));
    d.click(FIELD.0, FIELD.1);
    d.frame(|gui| declare(gui, &mut n));
    d.key(Key::Backspace).key(Key::Home).type_text("-4-2").key(Key::Enter);
    assert!(d.frame(|gui| declare(gui, &mut n)));
    assert_eq!(n, -42);
}

#[test]
fn vec3_fields_commit_independently() {
    let mut d = Driver::new();
    let mut v = [0.0_f32; 3];
    let declare = |gui: &mut Gui, v: &mut [f32; 3]| {
        gui.begin_window("W", WindowStyle::default());
        let c = gui.edit_field_vec3("Position", v);
        gui.end_window();
        c
    };
    d.frame(|gui| declare(gui, &mut v));
    let row = d.gui.window("W").unwrap().content_rect().unwrap();
    assert_eq!(row.y(), 85.0);

    // Fields are 45.33 px wide plus "X " labels; the second one starts near x = 127.
    d.click(160.0, 95.0);
    d.frame(|gui| declare(gui, &mut v));
    d.key(Key::End);
    for _ in 0..4 {
        d.key(Key::Backspace);
    }
    d.type_text("3").key(Key::Enter);
    assert!(d.frame(|gui| declare(gui, &mut v)));
    assert_eq!(v, [0.0, 3.0, 0.0]);
}

#[test]
fn make_next_item_active_focuses_a_field() {
    let mut d = Driver::new();
    let mut v = 4.0_f32;
    d.gui.make_next_item_active();
    d.frame(|gui| float_field(gui, &mut v));
    assert!(d.gui.edit_state().owner().is_some());
    assert_eq!(d.gui.edit_state().text(), "4.00");
}
