//! Prerequisite checking system for required tools

use colored::Colorize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrereqError {
    #[error("Tool '{name}' not found")]
    NotFound { name: String, hint: String },
}

/// Trait for checking prerequisites
pub trait Prerequisite {
    /// Name of the prerequisite tool
    fn name(&self) -> &str;

    /// Check if the tool is available
    fn check(&self) -> Result<(), PrereqError>;
}

/// Basic prerequisite that checks if a command exists
pub struct CommandPrereq {
    pub name: String,
    pub hint: String,
}

impl CommandPrereq {
    pub fn new(name: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hint: hint.into(),
        }
    }
}

impl Prerequisite for CommandPrereq {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self) -> Result<(), PrereqError> {
        which::which(&self.name).map_err(|_| PrereqError::NotFound {
            name: self.name.clone(),
            hint: self.hint.clone(),
        })?;
        Ok(())
    }
}

/// Common prerequisites for flux-manager
pub struct CommonPrereqs;

impl CommonPrereqs {
    /// Get flux prerequisite, checked under the configured binary name
    pub fn flux(binary: &str) -> CommandPrereq {
        CommandPrereq::new(binary, "Install from: https://fluxcd.io/flux/installation/")
    }

    /// Get kubectl prerequisite
    pub fn kubectl() -> CommandPrereq {
        CommandPrereq::new(
            "kubectl",
            "Install from: https://kubernetes.io/docs/tasks/tools/",
        )
    }

    /// Check all prerequisites
    /// Returns (found_tools, missing_tools)
    pub fn check_all(prereqs: &[&dyn Prerequisite]) -> (Vec<String>, Vec<(String, String)>) {
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for prereq in prereqs {
            match prereq.check() {
                Ok(()) => found.push(prereq.name().to_string()),
                Err(PrereqError::NotFound { name, hint }) => missing.push((name, hint)),
            }
        }

        (found, missing)
    }

    /// Print a found/missing report
    pub fn report(found: &[String], missing: &[(String, String)]) {
        for name in found {
            println!("  {} {}", "✓".green(), name);
        }
        for (name, hint) in missing {
            println!("  {} {} ({})", "✗".red(), name, hint);
        }
    }
}
