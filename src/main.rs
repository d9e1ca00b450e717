use std::process;
use clap::Parser;
use log::error;
use nix_google_fonts_gen::cli::Args;
use nix_google_fonts_gen::utils::init_logging;
use nix_google_fonts_gen::{create_overlay, Config, Git, Result};

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;
    create_overlay(&config, &Git::default())?;
    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}
