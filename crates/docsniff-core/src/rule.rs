//! Rule trait for defining token-stream lint rules.

use crate::sink::ReportSink;
use crate::skip_set::SkipSet;
use crate::token::{TokenKind, TokenStream};
use crate::types::Severity;

/// A lint rule triggered by tokens of specific kinds.
///
/// The dispatcher calls [`Rule::check`] once for every token whose kind is
/// listed in [`Rule::targets`]. Rules must not keep per-token state; one
/// instance checks every matching token of every file, possibly from
/// several threads at once.
///
/// # Example
///
/// ```
/// use docsniff_core::{ReportSink, Rule, Severity, TokenKind, TokenStream, Violation};
///
/// pub struct NoEnums;
///
/// impl Rule for NoEnums {
///     fn name(&self) -> &'static str { "no-enums" }
///     fn code(&self) -> &'static str { "NoEnums" }
///     fn targets(&self) -> &[TokenKind] { &[TokenKind::Enum] }
///
///     fn check(&self, _tokens: &TokenStream, index: usize, sink: &mut dyn ReportSink) {
///         sink.report(Violation::new(self.code(), self.name(), self.default_severity(), index, "Enum found."));
///     }
/// }
///
/// let tokens = TokenStream::from_kinds([TokenKind::Enum]);
/// let mut found = Vec::new();
/// NoEnums.check(&tokens, 0, &mut found);
/// assert_eq!(found.len(), 1);
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "missing-class-comment").
    fn name(&self) -> &'static str;

    /// Returns the violation code (e.g., "`MissingClassComment`").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the token kinds this rule is invoked for.
    fn targets(&self) -> &[TokenKind];

    /// Returns the kinds this rule's backward scan steps over.
    fn skip_set(&self) -> SkipSet {
        SkipSet::WHITESPACE
    }

    /// Checks the token at `index` and reports any violation to `sink`.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The whole token stream of the file
    /// * `index` - Position of a token whose kind is one of [`Rule::targets`]
    /// * `sink` - Destination for violations
    fn check(&self, tokens: &TokenStream, index: usize, sink: &mut dyn ReportSink);
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
