use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall a package and its dependents:\n    modular uninstall core\n\n\
                  Show what would be removed:\n    modular uninstall core --dry-run")]
pub struct UninstallArgs {
    /// Package name to uninstall
    pub name: String,

    /// Show what would be uninstalled without actually uninstalling
    #[arg(long)]
    pub dry_run: bool,
}
