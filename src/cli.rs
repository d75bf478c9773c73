use std::path::PathBuf;

/// Generates the Balloon Attic favicon set.
#[derive(clap::Parser)]
#[command(version)]
pub struct Cli {
    /// Sets the directory the favicon files are written to
    #[arg(
        short,
        long,
        env = "BALLOON_FAVICONS_OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,

    /// Logs every file as it is written
    #[arg(short, long)]
    pub verbose: bool,
}
