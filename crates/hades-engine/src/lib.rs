//! Hades engine crate.
//!
//! Owns the pieces the editor GUI builds on without depending on a concrete
//! renderer or window system: geometry, colors, the recorded draw stream,
//! platform-agnostic input, text metrics, frame timing and logging.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
