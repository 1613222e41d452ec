use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show an installed package:\n    modular show core")]
pub struct ShowArgs {
    /// Installed package name
    pub name: String,
}
