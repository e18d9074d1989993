//! Wrapper around the flux GitOps CLI

pub mod command;
pub mod error;
pub mod manager;
pub mod options;
pub mod runner;

/// Program invoked when no other is configured
pub const FLUX_BIN: &str = "flux";

pub use command::FluxCommand;
pub use error::FluxError;
pub use manager::FluxManager;
pub use options::{Mode, Options, OptionsBuilder};
pub use runner::{CommandOutput, CommandRunner, DryRunRunner, ProcessRunner};
