use clap::Parser;
use std::path::PathBuf;

/// Arguments for the setup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install the deployment's packages directory:\n    modular setup\n\n\
                  Install from an installer archive:\n    modular setup --archive dist\n\n\
                  Show the install order only:\n    modular setup --dry-run")]
pub struct SetupArgs {
    /// Installer archive (defaults to the deployment's packages directory)
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Show what would be installed without installing
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use super::*;

    #[test]
    fn test_cli_parsing_setup() {
        let cli = Cli::try_parse_from(["modular", "setup"]).unwrap();
        match cli.command {
            Commands::Setup(args) => {
                assert!(args.archive.is_none());
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Setup command"),
        }
    }

    #[test]
    fn test_cli_parsing_setup_with_archive() {
        let cli =
            Cli::try_parse_from(["modular", "setup", "--archive", "dist", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Setup(args) => {
                assert_eq!(args.archive, Some(PathBuf::from("dist")));
                assert!(args.dry_run);
            }
            _ => panic!("Expected Setup command"),
        }
    }
}
