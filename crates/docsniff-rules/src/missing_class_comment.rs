//! Rule to require a doc comment before type declarations.
//!
//! # Detected Patterns
//!
//! - `class`, `interface`, `trait` and `enum` declarations whose nearest
//!   significant preceding token is not the end of a `/** ... */` block
//!
//! `readonly`, `abstract` and `final` modifiers, whitespace and attribute
//! blocks may sit between the doc comment and the keyword. Visibility
//! keywords are not valid on type declarations and stop the scan.
//!
//! # Good Patterns
//!
//! ```text
//! /**
//!  * Holds the resolved settings.
//!  */
//! #[Immutable]
//! final readonly class Settings {}
//! ```

use docsniff_core::{
    has_doc_comment, ReportSink, Rule, Severity, SkipSet, TokenKind, TokenStream, Violation,
};

/// Rule code for missing-class-comment.
pub const CODE: &str = "MissingClassComment";

/// Rule name for missing-class-comment.
pub const NAME: &str = "missing-class-comment";

/// Message reported for an undocumented type declaration.
pub const MESSAGE: &str = "Missing class doc comment.";

const TARGETS: &[TokenKind] = &[
    TokenKind::Class,
    TokenKind::Interface,
    TokenKind::Trait,
    TokenKind::Enum,
];

/// Kinds skipped between a type keyword and its doc comment.
pub const SKIP: SkipSet = SkipSet::new(&[
    TokenKind::Readonly,
    TokenKind::Abstract,
    TokenKind::Final,
]);

/// Requires a doc comment before type declarations.
#[derive(Debug, Clone)]
pub struct MissingClassComment {
    /// Severity of reported violations.
    pub severity: Severity,
}

impl Default for MissingClassComment {
    fn default() -> Self {
        Self::new()
    }
}

impl MissingClassComment {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for MissingClassComment {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a doc comment before class, interface, trait and enum declarations"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn targets(&self) -> &[TokenKind] {
        TARGETS
    }

    fn skip_set(&self) -> SkipSet {
        SKIP
    }

    fn check(&self, tokens: &TokenStream, index: usize, sink: &mut dyn ReportSink) {
        if has_doc_comment(tokens, index, &self.skip_set()) {
            return;
        }
        sink.report(Violation::new(CODE, NAME, self.severity, index, MESSAGE));
    }
}
