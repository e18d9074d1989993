//! flux-manager - command builder and process wrapper for the flux GitOps CLI

pub mod commands;
pub mod config;
pub mod flux;
pub mod utils;

pub use flux::{FluxError, FluxManager, Mode, Options};
