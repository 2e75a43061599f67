//! Config-driven assembly of a dispatcher from the built-in rules.

use docsniff_core::{
    Config, ConfigError, DispatchError, Dispatcher, LintResult, Severity, SourceFile, TokenStream,
    Violation,
};
use docsniff_rules::{Preset, UnknownPreset};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Config file names to search for, in priority order.
pub const CONFIG_CANDIDATES: &[&str] = &["docsniff.toml", ".docsniff.toml"];

/// Errors that can occur while setting up a [`Linter`].
#[derive(Debug, Error)]
pub enum LintError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured preset does not exist.
    #[error(transparent)]
    UnknownPreset(#[from] UnknownPreset),

    /// Rules could not be registered.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// The built-in rules, selected and tuned by a [`Config`].
pub struct Linter {
    dispatcher: Dispatcher,
    fail_on: Severity,
}

impl Linter {
    /// Builds a linter from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset or `fail_on` value is unknown.
    pub fn from_config(config: Config) -> Result<Self, LintError> {
        let preset: Preset = config.preset.as_deref().unwrap_or("all").parse()?;
        let fail_on = config.fail_on()?;
        debug!("Using preset {preset:?}, failing on {fail_on}");

        let dispatcher = Dispatcher::builder()
            .config(config)
            .rules(preset.rules())
            .build()?;

        Ok(Self {
            dispatcher,
            fail_on,
        })
    }

    /// Builds a linter from a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds invalid settings.
    pub fn from_file(path: &Path) -> Result<Self, LintError> {
        info!("Using config: {}", path.display());
        Self::from_config(Config::from_file(path)?)
    }

    /// Builds a linter from the config file in `root`, or defaults if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but is invalid.
    pub fn discover(root: &Path) -> Result<Self, LintError> {
        match find_config(root) {
            Some(path) => Self::from_file(&path),
            None => Self::from_config(Config::default()),
        }
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Returns the severity at which a run is considered failed.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on
    }

    /// Checks one token stream.
    #[must_use]
    pub fn check(&self, tokens: &TokenStream) -> Vec<Violation> {
        self.dispatcher.check(tokens)
    }

    /// Checks many files in parallel.
    #[must_use]
    pub fn check_files(&self, files: &[SourceFile]) -> LintResult {
        self.dispatcher.check_files(files)
    }

    /// Formats a table of the active rules with their codes and descriptions.
    #[must_use]
    pub fn rule_listing(&self) -> String {
        use std::fmt::Write;

        let mut listing = format!("{:<24} {:<26} Description\n", "Code", "Name");
        for rule in self.dispatcher.rules() {
            let _ = writeln!(
                listing,
                "{:<24} {:<26} {}",
                rule.code(),
                rule.name(),
                rule.description()
            );
        }
        listing
    }

    /// Returns true if `result` holds violations at or above the failure threshold.
    #[must_use]
    pub fn is_failure(&self, result: &LintResult) -> bool {
        result.has_violations_at(self.fail_on)
    }
}

/// Finds the first config candidate present in `root`.
#[must_use]
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsniff_core::TokenKind::*;

    fn config(toml: &str) -> Config {
        Config::parse(toml).expect("Failed to parse")
    }

    #[test]
    fn default_config_runs_all_rules() {
        let linter = Linter::from_config(Config::default()).expect("linter");
        assert_eq!(
            linter.dispatcher().rule_names(),
            vec!["missing-class-comment", "missing-function-comment"]
        );
        assert_eq!(linter.fail_on(), Severity::Error);
    }

    #[test]
    fn preset_selects_rules() {
        let linter = Linter::from_config(config(r#"preset = "classes""#)).expect("linter");
        assert_eq!(linter.dispatcher().rule_names(), vec!["missing-class-comment"]);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let err = Linter::from_config(config(r#"preset = "strict""#))
            .err()
            .expect("should fail");
        assert!(matches!(err, LintError::UnknownPreset(_)));
    }

    #[test]
    fn unknown_fail_on_is_rejected() {
        let err = Linter::from_config(config(r#"fail_on = "fatal""#))
            .err()
            .expect("should fail");
        assert!(matches!(err, LintError::Config(ConfigError::InvalidSeverity { .. })));
    }

    #[test]
    fn severity_override_controls_failure() {
        let linter = Linter::from_config(config(
            r#"
[rules.missing-function-comment]
severity = "warning"
"#,
        ))
        .expect("linter");

        let files = vec![SourceFile::new(
            "a.php",
            TokenStream::from_kinds([Whitespace, Function]),
        )];
        let result = linter.check_files(&files);

        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].severity, Severity::Warning);
        assert!(!linter.is_failure(&result));
    }

    #[test]
    fn rule_listing_shows_active_rules() {
        let linter = Linter::from_config(config(r#"preset = "functions""#)).expect("linter");
        let listing = linter.rule_listing();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Code"));
        assert!(lines[1].starts_with("MissingFunctionComment"));
        assert!(lines[1].contains("missing-function-comment"));
        assert!(lines[1].ends_with("Requires a doc comment before function declarations"));
    }

    #[test]
    fn discover_reads_config_candidate() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(".docsniff.toml"),
            "[rules.missing-class-comment]\nenabled = false\n",
        )
        .expect("write config");

        assert_eq!(
            find_config(dir.path()),
            Some(dir.path().join(".docsniff.toml"))
        );
        let linter = Linter::discover(dir.path()).expect("linter");
        assert_eq!(
            linter.dispatcher().rule_names(),
            vec!["missing-function-comment"]
        );
    }

    #[test]
    fn discover_without_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(find_config(dir.path()).is_none());
        let linter = Linter::discover(dir.path()).expect("linter");
        assert_eq!(linter.dispatcher().rule_count(), 2);
    }
}
