//! Flux operations on a single cluster

use super::command::FluxCommand;
use super::error::FluxError;
use super::options::{Mode, Options};
use super::runner::{CommandRunner, ProcessRunner};
use super::FLUX_BIN;
use std::path::{Path, PathBuf};
use tracing::Span;

/// Runs flux operations against the cluster a kubeconfig points at
pub struct FluxManager {
    runner: Box<dyn CommandRunner>,
    kubeconfig: PathBuf,
    program: String,
    span: Span,
}

impl FluxManager {
    /// Manager that spawns the `flux` binary found on `PATH`
    pub fn new(kubeconfig: impl Into<PathBuf>) -> Self {
        Self::with_runner(ProcessRunner, kubeconfig)
    }

    pub fn with_runner(
        runner: impl CommandRunner + 'static,
        kubeconfig: impl Into<PathBuf>,
    ) -> Self {
        let kubeconfig = kubeconfig.into();
        let span = tracing::debug_span!("flux", kubeconfig = %kubeconfig.display());
        Self {
            runner: Box::new(runner),
            kubeconfig,
            program: FLUX_BIN.to_string(),
            span,
        }
    }

    /// Use a different program name or path instead of `flux`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Emit all diagnostics inside `span`
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn kubeconfig(&self) -> &Path {
        &self.kubeconfig
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Install flux components on the cluster
    pub fn install(&self, options: Options) -> Result<(), FluxError> {
        self.run(&self.command(Mode::Install, options))
    }

    /// Remove flux components from the cluster
    pub fn uninstall(&self, options: Options) -> Result<(), FluxError> {
        self.run(&self.command(Mode::Uninstall, options))
    }

    /// Create or update a GitRepository source
    pub fn create_git_repo(
        &self,
        name: &str,
        url: &str,
        options: Options,
    ) -> Result<(), FluxError> {
        self.create_source(Mode::CreateSourceGit, name, url, options)
    }

    /// Create or update a HelmRepository source
    pub fn create_helm_repo(
        &self,
        name: &str,
        url: &str,
        options: Options,
    ) -> Result<(), FluxError> {
        self.create_source(Mode::CreateSourceHelm, name, url, options)
    }

    /// Create or update a Kustomization reconciling `source`
    pub fn create_kustomization(
        &self,
        name: &str,
        source: &str,
        options: Options,
    ) -> Result<(), FluxError> {
        let mode = Mode::CreateKustomization;
        require(mode, "name", name)?;
        require(mode, "source", source)?;
        require_source_ref(mode, &options)?;

        let cmd = self
            .command(mode, options)
            .positional([name, "--source", source]);
        self.run(&cmd)
    }

    /// Create or update a HelmRelease installing `chart` from `source`
    pub fn create_helm_release(
        &self,
        name: &str,
        source: &str,
        chart: &str,
        options: Options,
    ) -> Result<(), FluxError> {
        let mode = Mode::CreateHelmRelease;
        require(mode, "name", name)?;
        require(mode, "source", source)?;
        require(mode, "chart", chart)?;
        require_source_ref(mode, &options)?;

        let cmd = self
            .command(mode, options)
            .positional([name, "--source", source, "--chart", chart]);
        self.run(&cmd)
    }

    fn create_source(
        &self,
        mode: Mode,
        name: &str,
        url: &str,
        options: Options,
    ) -> Result<(), FluxError> {
        require(mode, "name", name)?;
        require(mode, "url", url)?;
        require_source_ref(mode, &options)?;

        let cmd = self.command(mode, options).positional([name, "--url", url]);
        self.run(&cmd)
    }

    fn command(&self, mode: Mode, options: Options) -> FluxCommand {
        FluxCommand::new(mode, options, self.kubeconfig.clone())
    }

    /// Execute a rendered command and map its exit status
    pub fn run(&self, cmd: &FluxCommand) -> Result<(), FluxError> {
        let _entered = self.span.enter();

        if !self.runner.is_available(&self.program) {
            return Err(FluxError::ToolNotFound {
                tool: self.program.clone(),
            });
        }

        let rendered = cmd.render(&self.program);
        tracing::debug!(command = %rendered, mode = %cmd.mode(), "Running flux operation");

        let output = self
            .runner
            .run(&self.program, &cmd.to_args())
            .map_err(|source| FluxError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        tracing::debug!(code = ?output.code, "Flux command output:\n{}", output.combined);

        if output.success {
            Ok(())
        } else {
            Err(FluxError::CommandFailed {
                command: rendered,
                code: output.code,
                output: output.combined.trim().to_string(),
            })
        }
    }
}

fn require(mode: Mode, field: &'static str, value: &str) -> Result<(), FluxError> {
    if value.is_empty() {
        return Err(FluxError::MissingArgument {
            resource: mode.resource(),
            field,
        });
    }
    Ok(())
}

fn require_source_ref(mode: Mode, options: &Options) -> Result<(), FluxError> {
    if mode.requires_source_ref() && !options.has_source_ref() {
        return Err(FluxError::MissingSourceRef {
            resource: mode.resource(),
        });
    }
    Ok(())
}
