//! Configuration file support for flux-manager

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = ".flux-manager.toml";

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub flux: FluxSettings,

    #[serde(default)]
    pub behavior: Behavior,
}

/// Default values for common operations
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Defaults {
    /// Kubeconfig used when neither --kubeconfig nor KUBECONFIG is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<String>,

    /// Namespace used when --namespace is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// How the flux binary is invoked
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FluxSettings {
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Arguments placed before any extra arguments given on the command line
    #[serde(default)]
    pub extra_args: Vec<String>,
}

/// Behavior settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Behavior {
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,

    #[serde(default = "default_true")]
    pub show_progress: bool,
}

fn default_binary() -> String {
    crate::flux::FLUX_BIN.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for FluxSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            extra_args: Vec::new(),
        }
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            confirm_destructive: default_true(),
            show_progress: default_true(),
        }
    }
}

/// One file out of a KUBECONFIG-style path list
fn pick_kubeconfig(list: &str) -> Option<PathBuf> {
    let entries: Vec<PathBuf> = env::split_paths(list)
        .filter(|p| !p.as_os_str().is_empty())
        .collect();

    entries
        .iter()
        .find(|p| p.exists())
        .cloned()
        .or_else(|| entries.into_iter().next())
}

impl Settings {
    /// Load settings from file or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::find_config_file() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                crate::log_warn!("{:#}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Find config file in standard locations
    /// Priority:
    /// 1. .flux-manager.toml in current directory
    /// 2. ~/.config/flux-manager/config.toml (XDG config directory)
    pub fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(LOCAL_CONFIG);
        if local_config.exists() {
            return Some(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("flux-manager").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Kubeconfig to pass to flux
    /// Priority: CLI argument (or KUBECONFIG) > config file > ~/.kube/config
    ///
    /// Values may be path lists in KUBECONFIG form (`/a:/b`). flux takes a
    /// single file, so the first existing entry wins, else the first entry.
    pub fn resolve_kubeconfig(&self, cli: Option<&str>) -> Result<PathBuf> {
        if let Some(path) = cli.and_then(pick_kubeconfig) {
            return Ok(path);
        }

        if let Some(path) = self.defaults.kubeconfig.as_deref().and_then(pick_kubeconfig) {
            return Ok(path);
        }

        dirs::home_dir()
            .map(|home| home.join(".kube").join("config"))
            .ok_or_else(|| anyhow!("Could not determine home directory; pass --kubeconfig"))
    }

    /// Namespace to pass to flux, empty when none is configured
    pub fn resolve_namespace(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.defaults.namespace.clone())
            .unwrap_or_default()
    }

    /// Configured extra arguments followed by `args`
    pub fn extra_args(&self, args: Vec<String>) -> Vec<String> {
        let mut all = self.flux.extra_args.clone();
        all.extend(args);
        all
    }

    /// Generate example config file content
    pub fn example_config() -> String {
        let header = "# flux-manager configuration file\n\
                      # Place this file at ~/.config/flux-manager/config.toml or .flux-manager.toml in your project\n\n";

        let example = Settings {
            defaults: Defaults {
                kubeconfig: None,
                namespace: Some("flux-system".to_string()),
            },
            ..Settings::default()
        };

        match toml::to_string_pretty(&example) {
            Ok(config) => format!("{}{}", header, config),
            Err(_) => format!(
                r#"{}[defaults]
# kubeconfig = "~/.kube/config"
# namespace = "flux-system"

[flux]
binary = "flux"
extra_args = []

[behavior]
confirm_destructive = true
show_progress = true
"#,
                header
            ),
        }
    }
}
