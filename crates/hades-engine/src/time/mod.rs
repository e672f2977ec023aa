//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per presented frame. The GUI
//! only reads `dt` (caret blink) and `frame_index` (window visibility).

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
