use clap::Parser;
use std::path::PathBuf;

/// Arguments for the create-installer command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle every package of the deployment:\n    modular create-installer --out dist\n\n\
                  Leave packages out:\n    modular create-installer --out dist --exclude calendar --exclude mail\n\n\
                  Bundle from another package directory:\n    modular create-installer --out dist --archive ./release")]
pub struct InstallerArgs {
    /// Output directory for the installer (must be empty or missing)
    #[arg(long, short = 'o')]
    pub out: PathBuf,

    /// Package to leave out (repeatable)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Source archive (defaults to the deployment's packages directory)
    #[arg(long)]
    pub archive: Option<PathBuf>,
}
