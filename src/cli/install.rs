use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a package directory:\n    modular install ./reports\n\n\
                  Check dependencies without installing:\n    modular install ./reports --dry-run")]
pub struct InstallArgs {
    /// Package archive: a directory containing package.yaml
    pub archive: PathBuf,

    /// Check dependencies without installing
    #[arg(long)]
    pub dry_run: bool,
}
