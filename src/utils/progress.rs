//! Progress indicators for long-running flux calls

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run `f` behind a spinner when `enabled`, finishing with ✓ or ✗
pub fn with_spinner_result<F, T, E>(
    enabled: bool,
    message: &str,
    success_msg: &str,
    f: F,
) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    if !enabled {
        return f();
    }

    let pb = create_spinner(message);
    match f() {
        Ok(result) => {
            pb.finish_with_message(format!("✓ {}", success_msg));
            Ok(result)
        }
        Err(e) => {
            pb.finish_with_message(format!("✗ {}", message));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_spinner() {
        let pb = create_spinner("Installing flux");
        assert!(pb.message().contains("Installing flux"));
        pb.finish_and_clear();
    }

    #[test]
    fn test_with_spinner_result() {
        let ok: Result<i32, String> = with_spinner_result(true, "Working", "Done", || Ok(42));
        assert_eq!(ok.unwrap(), 42);

        let err: Result<i32, String> =
            with_spinner_result(true, "Working", "Done", || Err("boom".to_string()));
        assert_eq!(err.unwrap_err(), "boom");
    }

    #[test]
    fn test_disabled_spinner_still_runs() {
        let mut ran = false;
        let result: Result<(), ()> = with_spinner_result(false, "Working", "Done", || {
            ran = true;
            Ok(())
        });
        assert!(result.is_ok());
        assert!(ran);
    }
}
