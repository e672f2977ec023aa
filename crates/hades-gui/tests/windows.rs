mod common;

use common::Driver;
use hades_engine::input::CursorShape;
use hades_gui::prelude::*;

fn two_windows(gui: &mut Gui) {
    gui.begin_window("W1", WindowStyle::default());
    gui.button("behind");
    gui.end_window();
    gui.begin_window("W2", WindowStyle::default());
    gui.button("front");
    gui.end_window();
}

// ── creation / z-order ────────────────────────────────────────────────────

#[test]
fn first_window_gets_default_rect_and_later_ones_cascade() {
    let mut d = Driver::new();
    d.frame(two_windows);
    assert_eq!(d.gui.window_rect("W1"), Some(Rect::new(50.0, 50.0, 300.0, 300.0)));
    assert_eq!(d.gui.window_rect("W2"), Some(Rect::new(390.0, 50.0, 300.0, 300.0)));
    assert_eq!(d.gui.window("W1").and_then(Window::order_index), Some(0));
    assert_eq!(d.gui.window("W2").and_then(Window::order_index), Some(1));
}

#[test]
fn clicked_window_moves_to_the_top() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.click(100.0, 200.0);
    d.frame(two_windows);
    assert_eq!(d.gui.window("W1").and_then(Window::order_index), Some(1));
    assert_eq!(d.gui.window("W2").and_then(Window::order_index), Some(0));
    assert_eq!(d.gui.focused_window(), Some("W1"));
}

#[test]
fn click_on_overlap_only_reaches_the_front_window() {
    let mut d = Driver::new();
    d.frame(|gui| {
        gui.begin_window("W1", WindowStyle::default());
        gui.end_window();
        gui.set_next_window_pos(Vec2::new(100.0, 100.0));
        gui.begin_window("W2", WindowStyle::default());
        gui.end_window();
    });

    d.press(200.0, 200.0);
    let (w1_hovered, w2_hovered) = d.frame(|gui| {
        gui.begin_window("W1", WindowStyle::default());
        let a = gui.is_window_hovered();
        gui.end_window();
        gui.begin_window("W2", WindowStyle::default());
        let b = gui.is_window_hovered();
        gui.end_window();
        (a, b)
    });

    assert!(!w1_hovered);
    assert!(w2_hovered);
    let w2_id = d.gui.window("W2").map(Window::id);
    assert_eq!(d.gui.hot_item(), w2_id);
    assert_eq!(d.gui.focused_window(), Some("W2"));
    assert_eq!(d.gui.window("W1").and_then(Window::order_index), Some(0));
}

#[test]
fn buttons_of_an_occluded_window_do_not_react() {
    let mut d = Driver::new();
    let declare = |gui: &mut Gui| {
        gui.begin_window("W1", WindowStyle::default());
        let clicked = gui.button("under");
        gui.end_window();
        gui.set_next_window_pos(Vec2::new(40.0, 40.0));
        gui.begin_window("W2", WindowStyle::default());
        gui.end_window();
        clicked
    };
    d.frame(declare);
    // "under" sits at (60, 85) inside W1, which W2 now covers.
    d.click(70.0, 95.0);
    assert!(!d.frame(declare));
    assert_eq!(d.gui.active_item(), None);
}

// ── hidden windows ────────────────────────────────────────────────────────

#[test]
fn closed_window_declares_nothing_until_shown() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.gui.close_window("W1");
    let open = d.frame(|gui| {
        let open = gui.begin_window("W1", WindowStyle::default());
        gui.end_window();
        open
    });
    assert!(!open);
    assert!(d.gui.window("W1").is_some_and(Window::is_hidden));

    d.gui.show_window("W1");
    let open = d.frame(|gui| {
        let open = gui.begin_window("W1", WindowStyle::default());
        gui.end_window();
        open
    });
    assert!(open);
}

// ── move ──────────────────────────────────────────────────────────────────

#[test]
fn dragging_the_header_moves_the_window() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.press(100.0, 60.0);
    d.frame(two_windows);
    d.move_to(130.0, 80.0);
    d.frame(two_windows);
    assert_eq!(d.gui.window_rect("W1"), Some(Rect::new(80.0, 70.0, 300.0, 300.0)));
    assert_eq!(d.gui.cursor(), CursorShape::Move);
}

#[test]
fn header_drag_is_clamped_to_the_surface() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.press(100.0, 60.0);
    d.frame(two_windows);
    d.move_to(-500.0, -500.0);
    d.frame(two_windows);
    let outline = Theme::default().window.outline_width;
    assert_eq!(d.gui.window_rect("W1").map(|r| r.origin), Some(Vec2::new(outline, outline)));
}

// ── resize ────────────────────────────────────────────────────────────────

#[test]
fn left_border_drag_resizes_a_free_window() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.press(50.0, 200.0);
    d.frame(two_windows);
    assert_eq!(d.gui.cursor(), CursorShape::ResizeHorizontal);
    d.move_to(30.0, 200.0);
    d.frame(two_windows);
    assert_eq!(d.gui.window_rect("W1"), Some(Rect::new(30.0, 50.0, 320.0, 300.0)));
}

#[test]
fn resize_is_refused_under_a_higher_window() {
    let mut d = Driver::new();
    let declare = |gui: &mut Gui| {
        gui.begin_window("W1", WindowStyle::default());
        gui.end_window();
        gui.set_next_window_pos(Vec2::new(200.0, 100.0));
        gui.begin_window("W2", WindowStyle::default());
        gui.end_window();
    };
    d.frame(declare);
    d.press(50.0, 200.0);
    d.frame(declare);
    d.move_to(30.0, 200.0);
    d.frame(declare);
    assert_eq!(d.gui.window_rect("W1"), Some(Rect::new(50.0, 50.0, 300.0, 300.0)));
}

#[test]
fn no_resize_style_ignores_borders() {
    let mut d = Driver::new();
    let declare = |gui: &mut Gui| {
        gui.begin_window("W", WindowStyle::default() | WindowStyle::NO_RESIZE);
        gui.end_window();
    };
    d.frame(declare);
    d.press(50.0, 200.0);
    d.frame(declare);
    d.move_to(30.0, 200.0);
    d.frame(declare);
    assert_eq!(d.gui.window_rect("W"), Some(Rect::new(50.0, 50.0, 300.0, 300.0)));
}

// ── scrolling ─────────────────────────────────────────────────────────────

fn tall(gui: &mut Gui) {
    gui.begin_window("W", WindowStyle::default());
    for i in 0..20 {
        gui.button(&format!("row {i}"));
    }
    gui.end_window();
}

#[test]
fn wheel_scrolls_the_focused_window() {
    let mut d = Driver::new();
    d.frame(tall);
    d.click(200.0, 200.0);
    d.frame(tall);
    d.wheel(-1.0);
    d.frame(tall);
    assert_eq!(d.gui.window("W").map(|w| w.scroll().y), Some(20.0));
}

#[test]
fn wheel_is_ignored_without_focus() {
    let mut d = Driver::new();
    d.frame(tall);
    d.move_to(200.0, 200.0).wheel(-1.0);
    d.frame(tall);
    assert_eq!(d.gui.window("W").map(|w| w.scroll().y), Some(0.0));
}

#[test]
fn scroll_offset_is_clamped_to_the_content() {
    let mut d = Driver::new();
    d.frame(tall);
    d.click(200.0, 200.0);
    d.frame(tall);
    d.wheel(-1000.0);
    d.frame(tall);
    let w = d.gui.window("W").unwrap();
    let max = w.content_size().y - w.view_rect().height();
    assert!(max > 0.0);
    assert_eq!(w.scroll().y, max);
}

#[test]
fn short_content_has_no_scrollbar() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.frame(two_windows);
    let w = d.gui.window("W1").unwrap();
    assert_eq!(w.view_rect().width(), 300.0);
}

/// Offset reached by dragging the vertical thumb of `tall` by `dy`.
fn thumb_drag_offset(dy: f32) -> f32 {
    // View is 275 high (300 minus the header); content is 20 rows of 36 plus
    // 19 gaps of 10 plus padding on both sides.
    let (view, content) = (275.0_f32, 930.0_f32);
    let thumb = view * view / content;
    dy / (view - thumb) * (content - view)
}

#[test]
fn dragging_the_thumb_scrolls_the_content() {
    let mut d = Driver::new();
    d.frame(tall);
    // Thumb track spans x 340..350 below the header at y 75.
    d.press(343.0, 80.0);
    d.frame(tall);
    d.move_to(343.0, 130.0);
    d.frame(tall);

    let expected = thumb_drag_offset(50.0);
    let w = d.gui.window("W").unwrap();
    assert!((w.scroll().y - expected).abs() < 0.01);
    assert_eq!(w.rect(), Rect::new(50.0, 50.0, 300.0, 300.0));

    let first = d.frame(|gui| {
        gui.begin_window("W", WindowStyle::default());
        gui.button("row 0");
        let r = gui.last_item_rect();
        for i in 1..20 {
            gui.button(&format!("row {i}"));
        }
        gui.end_window();
        r
    });
    assert!((first.unwrap().y() - (85.0 - expected)).abs() < 0.01);
}

#[test]
fn press_on_the_right_border_resizes_without_grabbing_the_thumb() {
    let mut d = Driver::new();
    d.frame(tall);
    // x 348 is inside both the thumb and the right border band.
    d.press(348.0, 80.0);
    d.frame(tall);
    d.move_to(358.0, 130.0);
    d.frame(tall);

    let w = d.gui.window("W").unwrap();
    assert_eq!(w.rect().width(), 310.0);
    assert_eq!(w.scroll().y, 0.0);
}

// ── child windows ─────────────────────────────────────────────────────────

#[test]
fn child_window_takes_a_layout_slot() {
    let mut d = Driver::new();
    let after = d.frame(|gui| {
        gui.begin_window("W", WindowStyle::default());
        gui.begin_child("panel", Vec2::new(200.0, 100.0), WindowStyle::OUTLINES);
        gui.button("inside");
        gui.end_child();
        gui.button("after");
        let after = gui.last_item_rect();
        gui.end_window();
        after
    });
    let child = d.gui.window_rect("W/panel").unwrap();
    assert_eq!(child, Rect::new(60.0, 85.0, 200.0, 100.0));
    assert_eq!(after.map(|r| r.y()), Some(195.0));
    let w = d.gui.window("W").unwrap();
    assert_eq!(w.children().len(), 1);
}

#[test]
fn child_input_is_gated_by_the_parent() {
    let mut d = Driver::new();
    let declare = |gui: &mut Gui| {
        gui.begin_window("W", WindowStyle::default());
        gui.begin_child("panel", Vec2::new(200.0, 100.0), WindowStyle::OUTLINES);
        let hovered = gui.is_window_hovered();
        gui.end_child();
        gui.end_window();
        gui.set_next_window_pos(Vec2::new(100.0, 100.0));
        gui.begin_window("Cover", WindowStyle::default());
        gui.end_window();
        hovered
    };
    d.frame(declare);
    d.move_to(70.0, 90.0);
    assert!(d.frame(declare));
    d.move_to(150.0, 150.0);
    assert!(!d.frame(declare));
}

// ── frame output ──────────────────────────────────────────────────────────

#[test]
fn output_lists_windows_back_to_front_with_children() {
    let mut d = Driver::new();
    d.frame(|gui| two_windows(gui));
    d.gui.new_frame(&mut d.queue, FrameTime::from_dt(0.016, 99));
    d.gui.begin_window("W1", WindowStyle::default());
    d.gui.begin_child("c", Vec2::new(100.0, 50.0), WindowStyle::empty());
    d.gui.end_child();
    d.gui.end_window();
    d.gui.begin_window("W2", WindowStyle::default());
    d.gui.end_window();
    let out = d.gui.end_frame();
    let names: Vec<&str> = out.layers.iter().map(|l| l.name).collect();
    assert_eq!(names, ["W1", "W1/c", "W2"]);
    assert!(out.layer("W1").is_some_and(|l| !l.draw_list.is_empty()));
    assert!(out.item_count() > 0);
}

#[test]
fn undeclared_windows_are_not_drawn() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.gui.new_frame(&mut d.queue, FrameTime::from_dt(0.016, 2));
    let out = d.gui.end_frame();
    assert!(out.is_empty());
}

#[test]
fn empty_frame_leaves_state_untouched() {
    let mut d = Driver::new();
    d.frame(tall);
    d.click(200.0, 200.0);
    d.frame(tall);
    d.wheel(-1.0);
    d.frame(tall);
    let before = d.gui.window("W").map(|w| (w.rect(), w.scroll()));
    let edit_before = d.gui.edit_state().text().to_owned();
    d.frame(|_| ());
    d.frame(|_| ());
    assert_eq!(d.gui.window("W").map(|w| (w.rect(), w.scroll())), before);
    assert_eq!(d.gui.edit_state().text(), edit_before);
}

// ── surface ───────────────────────────────────────────────────────────────

#[test]
fn surface_resize_pulls_windows_back_inside() {
    let mut d = Driver::new();
    d.frame(two_windows);
    d.queue.push(InputEvent::SurfaceResized { width: 400.0, height: 300.0 });
    d.frame(two_windows);
    assert_eq!(d.gui.surface(), Viewport::new(400.0, 300.0));
    let r = d.gui.window_rect("W2").unwrap();
    assert!(r.x() <= 400.0 - 300.0);
}
