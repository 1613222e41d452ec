use clap::Parser;
use std::path::PathBuf;

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the install order of the deployment's packages:\n    modular plan\n\n\
                  Print the install order of an installer archive:\n    modular plan --archive dist")]
pub struct PlanArgs {
    /// Archive to resolve (defaults to the deployment's packages directory)
    #[arg(long)]
    pub archive: Option<PathBuf>,
}
