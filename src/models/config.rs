use std::path::PathBuf;
use crate::cli::Args;
use crate::error::{Error, Result};

/// Configuration for one overlay generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Local working copy of the fonts repository
    pub repository: PathBuf,
    /// Directory the overlay is written into
    pub overlay: PathBuf,
}

impl Config {
    /// Create a new configuration
    pub fn new(repository: impl Into<PathBuf>, overlay: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.into(),
            overlay: overlay.into(),
        }
    }

    /// Create a configuration from parsed command line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        if !args.repository.is_dir() {
            return Err(Error::InvalidPath(args.repository));
        }
        Ok(Self::new(args.repository, args.overlay))
    }
}
