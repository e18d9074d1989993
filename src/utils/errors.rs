//! Error display with actionable suggestions

use crate::flux::FluxError;
use colored::Colorize;

/// Suggestions attached to an error chain, if any part of it is a [`FluxError`]
pub fn suggestions(err: &anyhow::Error) -> Vec<String> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FluxError>())
        .map(FluxError::suggestions)
        .unwrap_or_default()
}

/// Log the error and print its suggestions
pub fn display(err: &anyhow::Error) {
    crate::log_error!("{:#}", err);

    let suggestions = suggestions(err);
    if !suggestions.is_empty() {
        eprintln!();
        eprintln!("{}", "Suggestions:".yellow().bold());
        for suggestion in &suggestions {
            eprintln!("  {} {}", "→".blue(), suggestion);
        }
    }
}

/// Helper to display error and exit
pub fn display_error_and_exit(err: anyhow::Error) -> ! {
    display(&err);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_suggestions_from_context_chain() {
        let result: Result<(), FluxError> = Err(FluxError::MissingSourceRef {
            resource: "GitRepository",
        });
        let err = result.context("Failed to create source").unwrap_err();

        let hints = suggestions(&err);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("--branch"));
    }

    #[test]
    fn test_no_suggestions_for_other_errors() {
        let err = anyhow::anyhow!("something else");
        assert!(suggestions(&err).is_empty());
    }
}
