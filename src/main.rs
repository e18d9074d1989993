//! flux-manager CLI - drives the flux GitOps CLI against a kubeconfig

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use flux_manager::commands::{self, CommandContext, InvocationArgs};
use flux_manager::config::Settings;
use flux_manager::utils::{errors, logger};
use std::io;

#[derive(Parser)]
#[command(name = "flux-manager")]
#[command(author, version, about = "Command wrapper for the flux GitOps CLI", long_about = None)]
struct Cli {
    /// Verbose output (can be used multiple times: -v, -vv, -vvv)
    /// -v: INFO, -vv: DEBUG (commands and flux output), -vvv: TRACE
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Dry-run mode: print flux commands without running them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Path to kubeconfig file
    #[arg(short, long, global = true, env = "KUBECONFIG")]
    kubeconfig: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install flux components on the cluster
    Install {
        #[command(flatten)]
        flux: FluxArgs,
    },

    /// Remove flux components from the cluster
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        flux: UninstallArgs,
    },

    /// Create flux resources
    Create {
        #[command(subcommand)]
        command: CreateCommands,
    },

    /// Check prerequisites
    Check,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum CreateCommands {
    /// Create sources
    Source {
        #[command(subcommand)]
        command: SourceCommands,
    },

    /// Create a Kustomization
    #[command(visible_alias = "ks")]
    Kustomization {
        /// Kustomization name
        name: String,

        /// Source reference, e.g. GitRepository/podinfo
        #[arg(long)]
        source: String,

        #[command(flatten)]
        flux: FluxArgs,
    },

    /// Create a HelmRelease
    #[command(visible_alias = "hr")]
    Helmrelease {
        /// HelmRelease name
        name: String,

        /// Source reference, e.g. HelmRepository/bitnami
        #[arg(long)]
        source: String,

        /// Chart name
        #[arg(long)]
        chart: String,

        #[command(flatten)]
        flux: FluxArgs,
    },
}

#[derive(Subcommand)]
enum SourceCommands {
    /// Create a GitRepository source
    Git {
        /// Source name
        name: String,

        /// Repository URL
        #[arg(long)]
        url: String,

        #[command(flatten)]
        flux: FluxArgs,
    },

    /// Create a HelmRepository source
    Helm {
        /// Source name
        name: String,

        /// Repository URL
        #[arg(long)]
        url: String,

        #[command(flatten)]
        flux: FluxArgs,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective settings
    Show,

    /// Print an example config file
    Example,
}

/// Options forwarded to every flux invocation
#[derive(Args)]
struct FluxArgs {
    /// Target namespace
    #[arg(short, long)]
    namespace: Option<String>,

    /// Git branch
    #[arg(long)]
    branch: Option<String>,

    /// Git tag
    #[arg(long)]
    tag: Option<String>,

    /// Extra arguments passed to flux as-is (after --)
    #[arg(last = true)]
    args: Vec<String>,
}

impl From<FluxArgs> for InvocationArgs {
    fn from(flux: FluxArgs) -> Self {
        InvocationArgs {
            namespace: flux.namespace,
            branch: flux.branch,
            tag: flux.tag,
            args: flux.args,
        }
    }
}

/// Options accepted by `flux uninstall`, which has no source reference
#[derive(Args)]
struct UninstallArgs {
    /// Namespace flux is installed in
    #[arg(short, long)]
    namespace: Option<String>,

    /// Extra arguments passed to flux as-is (after --)
    #[arg(last = true)]
    args: Vec<String>,
}

impl From<UninstallArgs> for InvocationArgs {
    fn from(flux: UninstallArgs) -> Self {
        InvocationArgs {
            namespace: flux.namespace,
            args: flux.args,
            ..Default::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    logger::init(cli.verbose);

    if let Err(e) = run(cli) {
        errors::display_error_and_exit(e);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load();

    if cli.dry_run {
        flux_manager::log_info!("🔍 DRY RUN MODE: No changes will be made");
    }

    let ctx = || CommandContext::new(settings.clone(), cli.kubeconfig.as_deref(), cli.dry_run);

    match cli.command {
        Commands::Install { flux } => commands::install::install(&ctx()?, flux.into()),
        Commands::Uninstall { yes, flux } => {
            commands::install::uninstall(&ctx()?, flux.into(), yes)
        }
        Commands::Create { command } => handle_create_command(&ctx()?, command),
        Commands::Check => commands::check::check(&ctx()?),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::settings::show(&settings),
            ConfigCommands::Example => commands::settings::example(),
        },
        Commands::Completion { shell } => handle_completion_command(shell),
        Commands::Version => handle_version_command(),
    }
}

fn handle_create_command(ctx: &CommandContext, command: CreateCommands) -> Result<()> {
    match command {
        CreateCommands::Source { command } => match command {
            SourceCommands::Git { name, url, flux } => {
                commands::create::source_git(ctx, &name, &url, flux.into())
            }
            SourceCommands::Helm { name, url, flux } => {
                commands::create::source_helm(ctx, &name, &url, flux.into())
            }
        },
        CreateCommands::Kustomization { name, source, flux } => {
            commands::create::kustomization(ctx, &name, &source, flux.into())
        }
        CreateCommands::Helmrelease {
            name,
            source,
            chart,
            flux,
        } => commands::create::helm_release(ctx, &name, &source, &chart, flux.into()),
    }
}

fn handle_completion_command(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "flux-manager", &mut io::stdout());
    Ok(())
}

fn handle_version_command() -> Result<()> {
    println!("flux-manager {}", env!("CARGO_PKG_VERSION"));
    println!("Command wrapper for the flux GitOps CLI");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_git_source() {
        let cli = Cli::parse_from([
            "flux-manager",
            "--kubeconfig",
            "/tmp/kc",
            "create",
            "source",
            "git",
            "podinfo",
            "--url",
            "https://github.com/stefanprodan/podinfo",
            "--branch",
            "master",
            "--",
            "--interval=1m",
        ]);

        assert_eq!(cli.kubeconfig.as_deref(), Some("/tmp/kc"));
        match cli.command {
            Commands::Create {
                command:
                    CreateCommands::Source {
                        command: SourceCommands::Git { name, url, flux },
                    },
            } => {
                assert_eq!(name, "podinfo");
                assert_eq!(url, "https://github.com/stefanprodan/podinfo");
                assert_eq!(flux.branch.as_deref(), Some("master"));
                assert_eq!(flux.args, vec!["--interval=1m"]);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_parse_uninstall() {
        let cli = Cli::parse_from([
            "flux-manager",
            "uninstall",
            "--yes",
            "-n",
            "flux-system",
            "--",
            "--keep-namespace",
        ]);

        match cli.command {
            Commands::Uninstall { yes, flux } => {
                assert!(yes);
                let args = InvocationArgs::from(flux);
                assert_eq!(args.namespace.as_deref(), Some("flux-system"));
                assert!(args.branch.is_none() && args.tag.is_none());
                assert_eq!(args.args, vec!["--keep-namespace"]);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_uninstall_rejects_source_ref() {
        assert!(Cli::try_parse_from(["flux-manager", "uninstall", "--branch", "main"]).is_err());
        assert!(Cli::try_parse_from(["flux-manager", "uninstall", "--tag", "v2.0.0"]).is_err());
    }

    #[test]
    fn test_parse_helmrelease_alias() {
        let cli = Cli::parse_from([
            "flux-manager",
            "create",
            "hr",
            "redis",
            "--source",
            "HelmRepository/bitnami",
            "--chart",
            "redis",
            "--tag",
            "v1.0.0",
        ]);

        assert!(matches!(
            cli.command,
            Commands::Create {
                command: CreateCommands::Helmrelease { .. }
            }
        ));
    }
}
