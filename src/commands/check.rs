//! Prerequisite check command

use super::CommandContext;
use crate::utils::{CommonPrereqs, Prerequisite};
use anyhow::{Result, anyhow};

/// Handle check command
pub fn check(ctx: &CommandContext) -> Result<()> {
    crate::log_info!("Checking prerequisites...");

    let flux = CommonPrereqs::flux(&ctx.settings().flux.binary);
    let kubectl = CommonPrereqs::kubectl();
    let prereqs: Vec<&dyn Prerequisite> = vec![&flux, &kubectl];

    let (found, missing) = CommonPrereqs::check_all(&prereqs);
    CommonPrereqs::report(&found, &missing);

    let kubeconfig = ctx.kubeconfig();
    if kubeconfig.exists() {
        crate::log_info!("Kubeconfig: {}", kubeconfig.display());
    } else {
        crate::log_warn!("Kubeconfig not found: {}", kubeconfig.display());
    }

    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|(name, _)| name.as_str()).collect();
        return Err(anyhow!("Missing prerequisites: {}", names.join(", ")));
    }

    crate::log_info!("✓ All prerequisites satisfied!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_check_reports_missing_flux() {
        let mut settings = Settings::default();
        settings.flux.binary = "nonexistent-flux-xyz".to_string();
        let ctx = CommandContext::new(settings, Some("/tmp/kubeconfig"), false).unwrap();

        let err = check(&ctx).unwrap_err();
        assert!(err.to_string().contains("nonexistent-flux-xyz"));
    }
}
