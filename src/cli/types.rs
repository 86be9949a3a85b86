use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "image-control",
    version,
    about = "Right-click image transform controller"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Launches the native window with the given images on the page surface.
    View { inputs: Vec<PathBuf> },
    /// Runs the dialog open routine headless and prints the metadata table
    /// and transform state as JSON.
    Inspect { input: PathBuf },
    /// Prints the context-menu tree as JSON.
    Menu,
}
