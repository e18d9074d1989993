//! Install and uninstall command implementations

use super::{CommandContext, InvocationArgs};
use crate::utils::progress::with_spinner_result;
use anyhow::{Context, Result};

/// Handle install command
pub fn install(ctx: &CommandContext, args: InvocationArgs) -> Result<()> {
    crate::log_info!("Installing flux using {}", ctx.kubeconfig().display());

    let options = ctx.options(args);
    let manager = ctx.manager("install");

    with_spinner_result(
        ctx.show_progress(),
        "Installing flux components...",
        "Flux installed",
        || manager.install(options),
    )
    .context("Failed to install flux")?;

    crate::log_info!("Flux installed successfully");
    Ok(())
}

/// Handle uninstall command
///
/// Asks for confirmation unless `yes` is set, confirmation is disabled in the
/// settings, or this is a dry run.
pub fn uninstall(ctx: &CommandContext, args: InvocationArgs, yes: bool) -> Result<()> {
    let needs_confirmation =
        !yes && !ctx.is_dry_run() && ctx.settings().behavior.confirm_destructive;

    if needs_confirmation
        && !crate::utils::confirm(&format!(
            "Are you sure you want to uninstall flux from the cluster in {}?",
            ctx.kubeconfig().display()
        ))?
    {
        crate::log_info!("Uninstall cancelled");
        return Ok(());
    }

    let mut options = ctx.options(args);
    with_silent(&mut options.args);
    let manager = ctx.manager("uninstall");

    with_spinner_result(
        ctx.show_progress(),
        "Uninstalling flux components...",
        "Flux uninstalled",
        || manager.uninstall(options),
    )
    .context("Failed to uninstall flux")?;

    crate::log_info!("Flux uninstalled successfully");
    Ok(())
}

/// flux asks its own question on uninstall, which cannot be answered with
/// captured stdio
fn with_silent(args: &mut Vec<String>) {
    if !args.iter().any(|a| a == "--silent" || a == "-s") {
        args.push("--silent".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::dry_run_context;

    #[test]
    fn test_with_silent_added_once() {
        let mut args = vec!["--keep-namespace".to_string()];
        with_silent(&mut args);
        with_silent(&mut args);
        assert_eq!(args, vec!["--keep-namespace", "--silent"]);

        let mut short = vec!["-s".to_string()];
        with_silent(&mut short);
        assert_eq!(short, vec!["-s"]);
    }

    #[test]
    fn test_install_dry_run() {
        let ctx = dry_run_context();
        let args = InvocationArgs {
            namespace: Some("flux-system".to_string()),
            ..Default::default()
        };
        assert!(install(&ctx, args).is_ok());
    }

    #[test]
    fn test_uninstall_dry_run_skips_prompt() {
        let ctx = dry_run_context();
        assert!(uninstall(&ctx, InvocationArgs::default(), false).is_ok());
    }
}
