//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The host translates platform events into `InputEvent`s (see [`platform::winit`])
//! and queues them in an [`EventQueue`] that the GUI drains once per frame.

mod frame;
mod queue;
mod state;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use queue::EventQueue;
pub use state::InputState;
pub use types::{
    CursorShape,
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TextEvent,
};
