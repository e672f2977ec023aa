//! Adapters from windowing crates to engine input types.

pub mod winit;
