//! Rendering of flux invocations

use super::options::{Mode, Options};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// A fully described flux invocation
#[derive(Debug, Clone)]
pub struct FluxCommand {
    mode: Mode,
    positional: Vec<String>,
    options: Options,
    kubeconfig: PathBuf,
}

impl FluxCommand {
    pub fn new(mode: Mode, options: Options, kubeconfig: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            positional: Vec::new(),
            options,
            kubeconfig: kubeconfig.into(),
        }
    }

    /// Add operation arguments that go right after the subcommand
    pub fn positional<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positional.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Argument vector, without the program name
    ///
    /// Order is fixed: subcommand, positionals, namespace, branch, tag,
    /// extra args, kubeconfig. The kubeconfig path is passed as raw OS
    /// bytes, so it reaches flux unchanged even when it is not UTF-8.
    pub fn to_args(&self) -> Vec<OsString> {
        let opts = &self.options;
        let mut args: Vec<OsString> = self
            .mode
            .subcommand()
            .iter()
            .map(OsString::from)
            .collect();

        args.extend(self.positional.iter().map(OsString::from));

        for (flag, value) in [
            ("--namespace", &opts.namespace),
            ("--branch", &opts.branch),
            ("--tag", &opts.tag),
        ] {
            if !value.is_empty() {
                args.push(flag.into());
                args.push(value.into());
            }
        }

        args.extend(opts.args.iter().map(OsString::from));
        args.push("--kubeconfig".into());
        args.push(self.kubeconfig.as_os_str().to_os_string());
        args
    }

    /// Shell-quoted command line, for logs and dry-run output only
    pub fn render(&self, program: &str) -> String {
        let mut words = vec![program.to_string()];
        words.extend(
            self.to_args()
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        );
        shell_words::join(words)
    }
}

impl fmt::Display for FluxCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(super::FLUX_BIN))
    }
}
