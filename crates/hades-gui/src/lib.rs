//! Hades GUI: an immediate-mode editor GUI on top of `hades-engine`.
//!
//! Widgets are declared every frame as calls on a [`Gui`] context. The context
//! keeps what must survive between frames: window rects, z-order and scroll
//! offsets, the hot and active widget, and the caret of the one edit field that
//! owns the keyboard.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hades_gui::prelude::*;
//!
//! let mut gui = Gui::new(GuiConfig::new(Viewport::new(1280.0, 720.0)), Box::new(MonospaceMetrics::default()));
//!
//! // Once per rendered frame:
//! gui.new_frame(&mut events, clock.tick());
//! if gui.begin_window("Entity", WindowStyle::default()) {
//!     if gui.button("Spawn") {
//!         spawn();
//!     }
//!     gui.same_line();
//!     gui.edit_field_f32("Scale", &mut scale);
//! }
//! gui.end_window();
//! let output = gui.end_frame();
//! for layer in &output.layers {
//!     renderer.draw(layer.draw_list);
//! }
//! ```

pub mod config;
pub mod context;
pub mod edit;
pub mod id;
pub mod items;
pub mod layout;
pub mod layout_store;
pub mod output;
pub mod painter;
pub mod registry;
pub mod resize;
pub mod scroll;
pub mod theme;
pub mod window;
mod widgets;
mod windows;

pub use config::GuiConfig;
pub use context::Gui;
pub use output::{FrameOutput, WindowLayer};

/// Everything an editor needs to declare UI.
pub mod prelude {
    pub use crate::config::GuiConfig;
    pub use crate::context::Gui;
    pub use crate::edit::{CharValidator, EditFieldState};
    pub use crate::id::GuiId;
    pub use crate::layout_store::{LayoutError, LayoutRecord};
    pub use crate::output::{FrameOutput, WindowLayer};
    pub use crate::theme::{
        ButtonTheme, EditFieldTheme, ListBoxTheme, RadioTheme, ScrollbarTheme, TabTheme, Theme, WindowTheme,
    };
    pub use crate::window::{Window, WindowHandle, WindowKind, WindowStyle};

    pub use hades_engine::coords::{Rect, Vec2, Viewport};
    pub use hades_engine::input::{CursorShape, EventQueue, InputEvent};
    pub use hades_engine::paint::Color;
    pub use hades_engine::scene::shapes::TextureId;
    pub use hades_engine::text::{MonospaceMetrics, TextMetrics};
    pub use hades_engine::time::{FrameClock, FrameTime};
}
