//! Create command implementations for sources, kustomizations and releases

use super::{CommandContext, InvocationArgs};
use crate::flux::{FluxError, FluxManager, Options};
use crate::utils::progress::with_spinner_result;
use anyhow::{Context, Result};

/// Handle create source git command
pub fn source_git(
    ctx: &CommandContext,
    name: &str,
    url: &str,
    args: InvocationArgs,
) -> Result<()> {
    run(ctx, "GitRepository", name, args, |m, opts| {
        m.create_git_repo(name, url, opts)
    })
}

/// Handle create source helm command
pub fn source_helm(
    ctx: &CommandContext,
    name: &str,
    url: &str,
    args: InvocationArgs,
) -> Result<()> {
    run(ctx, "HelmRepository", name, args, |m, opts| {
        m.create_helm_repo(name, url, opts)
    })
}

/// Handle create kustomization command
pub fn kustomization(
    ctx: &CommandContext,
    name: &str,
    source: &str,
    args: InvocationArgs,
) -> Result<()> {
    run(ctx, "Kustomization", name, args, |m, opts| {
        m.create_kustomization(name, source, opts)
    })
}

/// Handle create helmrelease command
pub fn helm_release(
    ctx: &CommandContext,
    name: &str,
    source: &str,
    chart: &str,
    args: InvocationArgs,
) -> Result<()> {
    run(ctx, "HelmRelease", name, args, |m, opts| {
        m.create_helm_release(name, source, chart, opts)
    })
}

fn run<F>(
    ctx: &CommandContext,
    kind: &str,
    name: &str,
    args: InvocationArgs,
    op: F,
) -> Result<()>
where
    F: FnOnce(&FluxManager, Options) -> Result<(), FluxError>,
{
    crate::log_info!("Creating {} '{}'", kind, name);

    let options = ctx.options(args);
    let manager = ctx.manager(kind);

    with_spinner_result(
        ctx.show_progress(),
        &format!("Creating {} '{}'...", kind, name),
        &format!("{} '{}' created", kind, name),
        || op(&manager, options),
    )
    .with_context(|| format!("Failed to create {} '{}'", kind, name))?;

    crate::log_info!("{} '{}' created successfully", kind, name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::dry_run_context;
    use crate::utils::errors::suggestions;

    fn on_branch(branch: &str) -> InvocationArgs {
        InvocationArgs {
            branch: Some(branch.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_dry_run() {
        let ctx = dry_run_context();
        let podinfo = "https://github.com/stefanprodan/podinfo";
        let bitnami = "https://charts.bitnami.com/bitnami";

        source_git(&ctx, "podinfo", podinfo, on_branch("master")).unwrap();
        source_helm(&ctx, "bitnami", bitnami, on_branch("main")).unwrap();
        kustomization(&ctx, "podinfo", "GitRepository/podinfo", on_branch("master")).unwrap();
        helm_release(&ctx, "redis", "HelmRepository/bitnami", "redis", on_branch("main"))
            .unwrap();
    }

    #[test]
    fn test_validation_survives_dry_run() {
        let ctx = dry_run_context();
        let err = source_git(&ctx, "podinfo", "", on_branch("master")).unwrap_err();

        assert!(err.to_string().contains("Failed to create GitRepository 'podinfo'"));
        let cause = err.downcast_ref::<FluxError>().unwrap();
        assert!(cause.is_validation());
    }

    #[test]
    fn test_missing_ref_has_suggestion() {
        let ctx = dry_run_context();
        let err = kustomization(&ctx, "apps", "GitRepository/apps", InvocationArgs::default())
            .unwrap_err();
        assert!(suggestions(&err).iter().any(|s| s.contains("--tag")));
    }
}
