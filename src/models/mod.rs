//! Data structures shared across the pipeline

mod config;
mod font;
mod metadata;

pub use config::Config;
pub use font::{Family, Font};
pub use metadata::{FamilyMetadata, FontMetadata};
