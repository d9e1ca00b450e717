use std::path::PathBuf;
use clap::Parser;

/// Generate Nix package overlay from Google Fonts repository.
#[derive(Parser, Debug)]
#[command(name = "nix-google-fonts-gen", version, about)]
pub struct Args {
    /// Path to local Google Fonts Git repository.
    pub repository: PathBuf,

    /// Path to overlay directory.
    pub overlay: PathBuf,
}
