//! Generate a Nix package overlay from a local Google Fonts repository.
//!
//! Families are discovered through their `METADATA.pb` descriptors, dated
//! with git history and rendered into one derivation per family plus an
//! overlay index.

include!(concat!(env!("OUT_DIR"), "/protos/mod.rs"));

pub mod cli;
pub mod error;
pub mod models;
pub mod overlay;
pub mod repository;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Config, Family, Font};
pub use overlay::create_overlay;
pub use repository::{families, Git, Provenance};
