//! Process execution backends

use colored::Colorize;
use std::ffi::OsString;
use std::io;
use std::process::Command;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub combined: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
            combined: String::new(),
        }
    }
}

/// Executes external programs on behalf of the manager
pub trait CommandRunner {
    /// Check whether `program` can be resolved
    fn is_available(&self, program: &str) -> bool;

    /// Run `program` with `args` and wait for it to exit
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput>;
}

/// Runs programs as child processes resolved through `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            combined,
        })
    }
}

/// Prints commands instead of running them
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn is_available(&self, _program: &str) -> bool {
        true
    }

    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput> {
        let mut words = vec![program.to_string()];
        words.extend(args.iter().map(|arg| arg.to_string_lossy().into_owned()));
        println!("  {} {}", "[DRY RUN]".cyan().bold(), shell_words::join(words));
        Ok(CommandOutput::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_availability() {
        assert!(ProcessRunner.is_available("sh"));
        assert!(!ProcessRunner.is_available("nonexistent-tool-xyz"));
    }

    #[test]
    fn test_process_runner_captures_output() {
        let args = vec![
            OsString::from("-c"),
            OsString::from("echo out; echo err >&2; exit 3"),
        ];
        let output = ProcessRunner.run("sh", &args).unwrap();

        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert!(output.combined.contains("out"));
        assert!(output.combined.contains("err"));
    }

    #[test]
    fn test_process_runner_success() {
        let output = ProcessRunner.run("true", &[]).unwrap();
        assert!(output.success);
        assert_eq!(output.code, Some(0));
    }

    #[test]
    fn test_process_runner_spawn_failure() {
        assert!(ProcessRunner.run("nonexistent-tool-xyz", &[]).is_err());
    }

    #[test]
    fn test_dry_run_runner() {
        assert!(DryRunRunner.is_available("nonexistent-tool-xyz"));
        let output = DryRunRunner
            .run("flux", &[OsString::from("install")])
            .unwrap();
        assert_eq!(output, CommandOutput::success());
    }
}
