//! Overlay generation: rendering packages and writing them to disk

pub mod render;
pub mod writer;

pub use render::{package_derivation, package_index};
pub use writer::create_overlay;
