//! Invocation options and operation modes

use std::fmt;

/// Flux operation a command performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Install,
    Uninstall,
    CreateSourceGit,
    CreateSourceHelm,
    CreateKustomization,
    CreateHelmRelease,
}

impl Mode {
    /// Subcommand words passed to flux for this mode
    pub fn subcommand(&self) -> &'static [&'static str] {
        match self {
            Mode::Install => &["install"],
            Mode::Uninstall => &["uninstall"],
            Mode::CreateSourceGit => &["create", "source", "git"],
            Mode::CreateSourceHelm => &["create", "source", "helm"],
            Mode::CreateKustomization => &["create", "kustomization"],
            Mode::CreateHelmRelease => &["create", "helmrelease"],
        }
    }

    /// Kind of the resource this mode manages, used in error messages
    pub fn resource(&self) -> &'static str {
        match self {
            Mode::Install | Mode::Uninstall => "Flux",
            Mode::CreateSourceGit => "GitRepository",
            Mode::CreateSourceHelm => "HelmRepository",
            Mode::CreateKustomization => "Kustomization",
            Mode::CreateHelmRelease => "HelmRelease",
        }
    }

    /// Whether the mode needs a branch or tag to pick a source revision
    pub fn requires_source_ref(&self) -> bool {
        !matches!(self, Mode::Install | Mode::Uninstall)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.subcommand().join(" "))
    }
}

/// Options shared by every flux operation
///
/// Empty strings mean "not set" and are left out of the rendered command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub namespace: String,
    pub branch: String,
    pub tag: String,
    pub args: Vec<String>,
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// True when a branch or a tag has been given
    pub fn has_source_ref(&self) -> bool {
        !self.branch.is_empty() || !self.tag.is_empty()
    }
}

/// Builder for [`Options`]; every setter overwrites the previous value
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.options.namespace = namespace.into();
        self
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.options.branch = branch.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.options.tag = tag.into();
        self
    }

    /// Append a single extra argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.options.args.push(arg.into());
        self
    }

    /// Replace the extra arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Options {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_empty() {
        let opts = Options::builder().build();
        assert_eq!(opts, Options::default());
        assert!(opts.namespace.is_empty());
        assert!(opts.args.is_empty());
        assert!(!opts.has_source_ref());
    }

    #[test]
    fn test_last_writer_wins() {
        let opts = Options::builder()
            .namespace("first")
            .namespace("second")
            .args(["--a"])
            .args(["--b", "--c"])
            .build();

        assert_eq!(opts.namespace, "second");
        assert_eq!(opts.args, vec!["--b", "--c"]);
    }

    #[test]
    fn test_arg_appends() {
        let opts = Options::builder().arg("--one").arg("--two").build();
        assert_eq!(opts.args, vec!["--one", "--two"]);
    }

    #[test]
    fn test_source_ref() {
        assert!(Options::builder().branch("main").build().has_source_ref());
        assert!(Options::builder().tag("v1.0.0").build().has_source_ref());
    }

    #[test]
    fn test_mode_subcommand() {
        assert_eq!(Mode::CreateSourceGit.to_string(), "create source git");
        assert_eq!(Mode::CreateHelmRelease.to_string(), "create helmrelease");
        assert!(!Mode::Install.requires_source_ref());
        assert!(Mode::CreateKustomization.requires_source_ref());
    }
}
