mod common;

use common::Driver;
use hades_gui::layout_store;
use hades_gui::prelude::*;

fn editor(gui: &mut Gui) {
    for name in ["Scene", "Inspector", "Assets"] {
        gui.begin_window(name, WindowStyle::default());
        gui.text(name);
        gui.end_window();
    }
}

#[test]
fn saved_layout_restores_rects_and_order() {
    let mut d = Driver::new();
    d.frame(editor);
    // Drag Scene's header, which also raises it.
    d.press(100.0, 60.0);
    d.frame(editor);
    d.move_to(120.0, 100.0);
    d.frame(editor);
    d.release(120.0, 100.0);
    d.frame(editor);

    let records = d.gui.save_layout();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Inspector", "Assets", "Scene"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.ron");
    layout_store::save(&path, &records).unwrap();

    let mut fresh = Driver::new();
    fresh.gui.load_layout(&layout_store::load(&path).unwrap());
    fresh.frame(editor);

    for name in ["Scene", "Inspector", "Assets"] {
        assert_eq!(fresh.gui.window_rect(name), d.gui.window_rect(name), "{name}");
    }
    assert_eq!(fresh.gui.window("Scene").and_then(Window::order_index), Some(2));
    assert_eq!(fresh.gui.window_rect("Scene").map(|r| r.origin), Some(Vec2::new(70.0, 90.0)));
}

#[test]
fn restored_style_survives_until_the_window_is_declared() {
    let mut d = Driver::new();
    let records = vec![LayoutRecord::new(
        "Tool",
        WindowStyle::HEADER | WindowStyle::NO_MOVE,
        Rect::new(10.0, 20.0, 200.0, 100.0),
    )];
    d.gui.load_layout(&records);
    let w = d.gui.window("Tool").unwrap();
    assert_eq!(w.style(), WindowStyle::HEADER | WindowStyle::NO_MOVE);
    assert_eq!(w.rect(), Rect::new(10.0, 20.0, 200.0, 100.0));
    assert_eq!(w.order_index(), Some(0));
}
