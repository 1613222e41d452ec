//! Modular - dependency-ordered package installer
//!
//! Installs independently versioned packages into a deployment root in
//! dependency order, notifies module hooks about every lifecycle event and
//! removes packages together with everything that depends on them.

use clap::Parser;

mod archive;
mod catalog;
mod cli;
mod commands;
mod common;
mod config;
mod deployment;
mod error;
mod hash;
mod hooks;
mod logging;
mod manifest;
mod operations;
mod package;
mod progress;
mod resolver;
mod version;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::CreateInstaller(args) => commands::installer::run(cli.root, args),
        Commands::Setup(args) => commands::setup::run(cli.root, args),
        Commands::Install(args) => commands::install::run(cli.root, args),
        Commands::Uninstall(args) => commands::uninstall::run(cli.root, args),
        Commands::List(args) => commands::list::run(cli.root, args),
        Commands::Show(args) => commands::show::run(cli.root, args),
        Commands::Plan(args) => commands::plan::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
