//! The level-editor panels declared every frame.

use hades_gui::prelude::*;

pub const SHAPES: [&str; 4] = ["Cube", "Sphere", "Plane", "Capsule"];

/// Caller-owned values the panels edit.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub entity_name: String,
    pub shape: usize,
    pub position: [f32; 3],
    pub scale: f32,
    pub copies: i32,
    pub static_body: bool,
    pub fov: f32,
    pub spawned: Vec<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            entity_name: "crate".to_owned(),
            shape: 0,
            position: [0.0; 3],
            scale: 1.0,
            copies: 1,
            static_body: false,
            fov: 60.0,
            spawned: Vec::new(),
        }
    }
}

fn name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Declares every editor window for one frame.
pub fn declare(gui: &mut Gui, state: &mut EditorState) {
    if gui.begin_window("Tools", WindowStyle::default()) {
        if gui.tab("Make Entity") {
            make_entity(gui, state);
        }
        if gui.tab("Camera") {
            gui.edit_field_f32("FOV", &mut state.fov);
            if gui.button("Reset") {
                state.fov = 60.0;
            }
        }
    }
    gui.end_window();

    gui.set_next_window_size(Vec2::new(260.0, 220.0));
    if gui.begin_window("Scene", WindowStyle::default()) {
        gui.text(&format!("{} entities", state.spawned.len()));
        gui.begin_child("list", Vec2::new(0.0, 120.0), WindowStyle::OUTLINES | WindowStyle::SCROLL_BAR);
        for name in &state.spawned {
            gui.text(name);
        }
        gui.end_child();
    }
    gui.end_window();
}

fn make_entity(gui: &mut Gui, state: &mut EditorState) {
    gui.edit_field_with("Name", &mut state.entity_name, Some(name_char));
    gui.list_box("Shape", &SHAPES, &mut state.shape);
    gui.edit_field_vec3("Position", &mut state.position);
    gui.edit_field_f32("Scale", &mut state.scale);
    gui.edit_field_i32("Copies", &mut state.copies);
    gui.radio_button("Static", &mut state.static_body);

    if gui.button("Spawn") {
        for i in 0..state.copies.max(0) {
            let name = format!("{}_{}_{i}", state.entity_name, SHAPES[state.shape]);
            log::info!("spawned {name} at {:?}", state.position);
            state.spawned.push(name);
        }
    }
    gui.same_line();
    if gui.button("Clear") {
        state.spawned.clear();
    }
    gui.next_line();
}
