//! Rule registration and single-pass dispatch over token streams.

use crate::config::Config;
use crate::context::SourceFile;
use crate::rule::{Rule, RuleBox};
use crate::sink::{ReportSink, SeverityOverride};
use crate::token::{TokenKind, TokenStream};
use crate::types::{LintResult, Severity, Violation};

use rayon::prelude::*;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while registering rules.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Two rules with the same name were registered.
    #[error("Rule `{name}` is already registered")]
    DuplicateRule {
        /// Name of the rule.
        name: String,
    },
}

/// Builder for configuring a [`Dispatcher`].
#[derive(Default)]
pub struct DispatcherBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl DispatcherBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the dispatcher, dropping rules the configuration disables.
    ///
    /// # Errors
    ///
    /// Returns an error if two rules share a name.
    pub fn build(self) -> Result<Dispatcher, DispatchError> {
        let config = self.config.unwrap_or_default();
        let mut dispatcher = Dispatcher::new();

        for rule in self.rules {
            if !config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            let severity = config.rule_severity(rule.name());
            dispatcher.register_with_severity(rule, severity)?;
        }

        Ok(dispatcher)
    }
}

struct Registered {
    rule: RuleBox,
    severity: Option<Severity>,
}

/// Runs registered rules over token streams.
///
/// Each rule is indexed under every kind it targets. A run walks the stream
/// once, front to back, and invokes the rules registered for each token's
/// kind in registration order.
#[derive(Default)]
pub struct Dispatcher {
    rules: Vec<Registered>,
    by_kind: HashMap<TokenKind, Vec<usize>>,
}

impl Dispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder for configuring a dispatcher.
    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Registers a rule under each of its target kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule with the same name is already registered.
    pub fn register(&mut self, rule: RuleBox) -> Result<(), DispatchError> {
        self.register_with_severity(rule, None)
    }

    fn register_with_severity(
        &mut self,
        rule: RuleBox,
        severity: Option<Severity>,
    ) -> Result<(), DispatchError> {
        if self.rules.iter().any(|r| r.rule.name() == rule.name()) {
            return Err(DispatchError::DuplicateRule {
                name: rule.name().to_string(),
            });
        }

        let id = self.rules.len();
        for &kind in rule.targets() {
            let ids = self.by_kind.entry(kind).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        debug!("Registered rule {} for {:?}", rule.name(), rule.targets());

        self.rules.push(Registered { rule, severity });
        Ok(())
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of registered rules in registration order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.name()).collect()
    }

    /// Iterates over registered rules in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.rules.iter().map(|r| r.rule.as_ref())
    }

    /// Returns the names of rules registered for `kind`, in invocation order.
    #[must_use]
    pub fn rules_for(&self, kind: TokenKind) -> Vec<&'static str> {
        self.by_kind
            .get(&kind)
            .map(|ids| ids.iter().map(|&id| self.rules[id].rule.name()).collect())
            .unwrap_or_default()
    }

    /// Runs all matching rules over one token stream.
    pub fn run(&self, tokens: &TokenStream, sink: &mut dyn ReportSink) {
        for (index, token) in tokens.iter().enumerate() {
            let Some(ids) = self.by_kind.get(&token.kind) else {
                continue;
            };
            for &id in ids {
                let registered = &self.rules[id];
                match registered.severity {
                    Some(severity) => {
                        let mut sink = SeverityOverride {
                            inner: &mut *sink,
                            severity,
                        };
                        registered.rule.check(tokens, index, &mut sink);
                    }
                    None => registered.rule.check(tokens, index, &mut *sink),
                }
            }
        }
    }

    /// Checks one token stream and returns its violations, located by token.
    #[must_use]
    pub fn check(&self, tokens: &TokenStream) -> Vec<Violation> {
        let mut violations: Vec<Violation> = Vec::new();
        self.run(tokens, &mut violations);
        for v in &mut violations {
            if let Some(token) = tokens.get(v.position) {
                v.line = token.line;
                v.column = token.column;
            }
        }
        violations
    }

    /// Checks one file and tags its violations with the file path.
    #[must_use]
    pub fn check_file(&self, file: &SourceFile) -> Vec<Violation> {
        debug!("Checking: {}", file.path().display());
        self.check(&file.tokens)
            .into_iter()
            .map(|v| v.with_file(file.path()))
            .collect()
    }

    /// Checks many files in parallel.
    ///
    /// Violations are sorted by file, then by position, whatever order the
    /// files finish in.
    #[must_use]
    pub fn check_files(&self, files: &[SourceFile]) -> LintResult {
        info!(
            "Checking {} files with {} rules",
            files.len(),
            self.rule_count()
        );

        let violations: Vec<Violation> = files
            .par_iter()
            .flat_map_iter(|file| self.check_file(file))
            .collect();

        let mut result = LintResult {
            violations,
            files_checked: files.len(),
        };
        result.sort();

        info!(
            "Check complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );
        result
    }
}
