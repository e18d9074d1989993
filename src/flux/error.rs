//! Error types for flux operations

use thiserror::Error;

/// Errors returned by [`FluxManager`](super::FluxManager) operations
#[derive(Error, Debug)]
pub enum FluxError {
    #[error(
        "'{tool}' command is missing. Please ensure the tool exists before using the flux manager"
    )]
    ToolNotFound { tool: String },

    #[error("{resource} {field} is required")]
    MissingArgument {
        resource: &'static str,
        field: &'static str,
    },

    #[error("{resource} tag or branch is required")]
    MissingSourceRef { resource: &'static str },

    #[error("flux command failed{}: {command}\n{output}", exit_suffix(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Failed to run flux command: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {})", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl FluxError {
    /// Whether the error was raised before any process was started
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FluxError::MissingArgument { .. } | FluxError::MissingSourceRef { .. }
        )
    }

    /// Actionable hints shown alongside the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            FluxError::ToolNotFound { tool } => vec![
                "Install with: curl -s https://fluxcd.io/install.sh | sudo bash".to_string(),
                format!("Ensure '{}' is in your PATH", tool),
                "Run 'flux-manager check' to see all prerequisites".to_string(),
            ],
            FluxError::MissingArgument { field, .. } => {
                vec![format!("Provide a non-empty {}", field)]
            }
            FluxError::MissingSourceRef { .. } => {
                vec!["Pass --branch or --tag to select the source revision".to_string()]
            }
            FluxError::CommandFailed { .. } => vec![
                "Review the flux output above for the cause".to_string(),
                "Verify the kubeconfig points at a reachable cluster".to_string(),
                "Run with -vv to see the exact command and its output".to_string(),
            ],
            FluxError::Spawn { .. } => {
                vec!["Check that the flux binary is executable".to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = FluxError::MissingArgument {
            resource: "GitRepository",
            field: "url",
        };
        assert_eq!(err.to_string(), "GitRepository url is required");
        assert!(err.is_validation());
    }

    #[test]
    fn test_command_failed_message() {
        let err = FluxError::CommandFailed {
            command: "flux install".to_string(),
            code: Some(1),
            output: "✗ install failed".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("flux install"));
        assert!(msg.contains("install failed"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_signal_termination_message() {
        let err = FluxError::CommandFailed {
            command: "flux install".to_string(),
            code: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_tool_not_found_suggestions() {
        let err = FluxError::ToolNotFound {
            tool: "flux".to_string(),
        };
        assert!(err.to_string().contains("'flux' command is missing"));
        assert_eq!(err.suggestions().len(), 3);
    }
}
