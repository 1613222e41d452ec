//! Command implementations for the modular CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod installer;
pub mod list;
pub mod plan;
pub mod setup;
pub mod show;
pub mod uninstall;
pub mod version;
