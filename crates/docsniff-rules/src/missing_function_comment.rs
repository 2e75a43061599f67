//! Rule to require a doc comment before function declarations.
//!
//! # Rationale
//!
//! Methods are usually preceded by visibility and `static` keywords, so the
//! scan steps over all of them along with `abstract`, `final`, whitespace
//! and attribute blocks.
//!
//! # Good Patterns
//!
//! ```text
//! /**
//!  * Loads the user.
//!  */
//! #[Route("/users/{id}")]
//! public static function load(int $id): User {}
//! ```

use docsniff_core::{
    has_doc_comment, ReportSink, Rule, Severity, SkipSet, TokenKind, TokenStream, Violation,
};

/// Rule code for missing-function-comment.
pub const CODE: &str = "MissingFunctionComment";

/// Rule name for missing-function-comment.
pub const NAME: &str = "missing-function-comment";

/// Message reported for an undocumented function declaration.
pub const MESSAGE: &str = "Missing function doc comment.";

const TARGETS: &[TokenKind] = &[TokenKind::Function];

/// Kinds skipped between a `function` keyword and its doc comment.
pub const SKIP: SkipSet = SkipSet::new(&[
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
]);

/// Requires a doc comment before function declarations.
#[derive(Debug, Clone)]
pub struct MissingFunctionComment {
    /// Severity of reported violations.
    pub severity: Severity,
}

impl Default for MissingFunctionComment {
    fn default() -> Self {
        Self::new()
    }
}

impl MissingFunctionComment {
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

impl Rule for MissingFunctionComment {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a doc comment before function declarations"
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
