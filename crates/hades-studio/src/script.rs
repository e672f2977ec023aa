//! Scripted input, one entry per frame.

use hades_engine::input::{EventQueue, InputEvent, Key, KeyState, Modifiers, MouseButtonState};

#[derive(Debug, Clone)]
pub enum Step {
    Idle,
    Click(f32, f32),
    Move(f32, f32),
    Type(&'static str),
    Keys(&'static [Key]),
}

impl Step {
    pub fn queue(&self, q: &mut EventQueue) {
        match *self {
            Step::Idle => {}
            Step::Click(x, y) => {
                q.push(InputEvent::left_button(MouseButtonState::Pressed, x, y));
                q.push(InputEvent::left_button(MouseButtonState::Released, x, y));
            }
            Step::Move(x, y) => q.push(InputEvent::pointer_moved(x, y)),
            Step::Type(s) => q.push(InputEvent::text(s)),
            Step::Keys(keys) => {
                for &k in keys {
                    q.push(InputEvent::key(k, KeyState::Pressed, Modifiers::NONE));
                    q.push(InputEvent::key(k, KeyState::Released, Modifiers::NONE));
                }
            }
        }
    }
}

/// Renames the entity, picks "Plane", spawns three copies and switches tabs.
///
/// Coordinates follow the default layout of the "Tools" window at (50, 50).
pub fn demo() -> Vec<Step> {
    vec![
        Step::Idle,
        // Name field (60, 112).
        Step::Click(230.0, 120.0),
        Step::Keys(&[Key::End, Key::Backspace, Key::Backspace, Key::Backspace, Key::Backspace, Key::Backspace]),
        Step::Type("barrel"),
        Step::Keys(&[Key::Enter]),
        // Shape list box, then its third row.
        Step::Click(100.0, 150.0),
        Step::Click(100.0, 205.0),
        // Copies field.
        Step::Click(230.0, 240.0),
        Step::Keys(&[Key::Backspace]),
        Step::Type("3"),
        Step::Keys(&[Key::Enter]),
        Step::Idle,
        // Spawn button.
        Step::Click(70.0, 300.0),
        // Camera tab.
        Step::Click(190.0, 95.0),
        Step::Move(400.0, 400.0),
        Step::Idle,
    ]
}
