//! Paint model shared between the GUI and whatever rasterizes its output.
//!
//! Only solid colors in linear premultiplied alpha. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
