use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLE:\n  modular completions bash > ~/.bash_completion.d/modular")]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}
