//! Command implementations for flux-manager CLI

pub mod check;
pub mod create;
pub mod install;
pub mod settings;

use crate::config::Settings;
use crate::flux::{DryRunRunner, FluxManager, Options, ProcessRunner};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Options shared by every flux subcommand
#[derive(Debug, Clone, Default)]
pub struct InvocationArgs {
    pub namespace: Option<String>,
    pub branch: Option<String>,
    pub tag: Option<String>,
    /// Raw arguments forwarded to flux
    pub args: Vec<String>,
}

/// Resolved state every command runs with
#[derive(Debug, Clone)]
pub struct CommandContext {
    settings: Settings,
    kubeconfig: PathBuf,
    dry_run: bool,
}

impl CommandContext {
    pub fn new(settings: Settings, kubeconfig: Option<&str>, dry_run: bool) -> Result<Self> {
        let kubeconfig = settings.resolve_kubeconfig(kubeconfig)?;
        Ok(Self {
            settings,
            kubeconfig,
            dry_run,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn kubeconfig(&self) -> &Path {
        &self.kubeconfig
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Spinners interleave badly with dry-run output, so they are skipped there
    pub fn show_progress(&self) -> bool {
        self.settings.behavior.show_progress && !self.dry_run
    }

    /// Manager for one operation, printing instead of executing in dry-run mode
    pub fn manager(&self, operation: &str) -> FluxManager {
        let manager = if self.dry_run {
            FluxManager::with_runner(DryRunRunner, self.kubeconfig.clone())
        } else {
            FluxManager::with_runner(ProcessRunner, self.kubeconfig.clone())
        };

        manager
            .with_program(self.settings.flux.binary.clone())
            .with_span(tracing::info_span!(
                "flux",
                operation,
                kubeconfig = %self.kubeconfig.display()
            ))
    }

    /// Merge CLI arguments with configured defaults
    pub fn options(&self, args: InvocationArgs) -> Options {
        Options::builder()
            .namespace(self.settings.resolve_namespace(args.namespace))
            .branch(args.branch.unwrap_or_default())
            .tag(args.tag.unwrap_or_default())
            .args(self.settings.extra_args(args.args))
            .build()
    }
}
