//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = crate::config::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(crate::config::ConfigError::InvalidSeverity {
                value: other.to_string(),
            }),
        }
    }
}

/// A missing doc comment found during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Violation code (e.g., "`MissingClassComment`").
    pub code: String,
    /// Rule name (e.g., "missing-class-comment").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Index of the declaration token in its stream.
    pub position: usize,
    /// Line of the declaration token (0 if unknown).
    pub line: usize,
    /// Column of the declaration token (0 if unknown).
    pub column: usize,
    /// Human-readable message.
    pub message: String,
    /// File the token stream came from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Violation {
    /// Creates a new violation at a token position.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            position,
            line: 0,
            column: 0,
            message: message.into(),
            file: None,
        }
    }

    /// Sets the source line and column.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Sets the file this violation belongs to.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    fn location(&self) -> String {
        let file = self
            .file
            .as_ref()
            .map_or_else(|| "<tokens>".to_string(), |f| f.display().to_string());
        if self.line == 0 {
            format!("{file}#{}", self.position)
        } else {
            format!("{file}:{}:{}", self.line, self.column)
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location(),
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Result of running lint checks.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of token streams checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns violations with the given code.
    #[must_use]
    pub fn by_code(&self, code: &str) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.code == code).collect()
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations
            .iter()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Formats all violations at or above `threshold` with a summary line.
    #[must_use]
    pub fn format_report(&self, threshold: Severity) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for v in self.violations.iter().filter(|v| v.severity >= threshold) {
            let _ = writeln!(report, "{v}");
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = write!(
            report,
            "Found {} error(s), {} warning(s), {} info(s) in {} file(s)",
            errors, warnings, infos, self.files_checked
        );
        report
    }

    /// Sorts violations by file, then by position.
    pub fn sort(&mut self) {
        self.violations
            .sort_by(|a, b| a.file.cmp(&b.file).then(a.position.cmp(&b.position)));
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }
}
