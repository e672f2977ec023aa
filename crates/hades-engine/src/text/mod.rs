//! Text metrics seam.
//!
//! The GUI never rasterizes glyphs; it only asks how wide things are. Hosts with a
//! real font plug in [`FontMetrics`], tests and headless runs use [`MonospaceMetrics`].

mod font_system;
mod metrics;

pub use font_system::{FontId, FontLoadError, FontMetrics, FontSystem};
pub use metrics::{MonospaceMetrics, TextMetrics};
