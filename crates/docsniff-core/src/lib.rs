//! # docsniff-core
//!
//! Core framework for doc-comment linting over token streams.
//!
//! The engine consumes the tokens of one source file at a time, as produced
//! by a host tokenizer, and reports violations through a [`ReportSink`]. It
//! includes:
//!
//! - [`TokenKind`], [`Token`] and [`TokenStream`] for the token model
//! - [`SkipSet`] and [`find_preceding_significant`] for backward scanning
//! - [`Rule`] trait for rules triggered by token kinds
//! - [`Dispatcher`] for single-pass rule execution
//! - [`Violation`] and [`LintResult`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use docsniff_core::{Dispatcher, TokenKind, TokenStream};
//!
//! let dispatcher = Dispatcher::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let tokens = TokenStream::from_kinds([TokenKind::Whitespace, TokenKind::Function]);
//! let violations = dispatcher.check(&tokens);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod dispatcher;
mod rule;
mod scanner;
mod sink;
mod skip_set;
mod token;
mod types;

pub use config::{Config, ConfigError, RuleConfig};
pub use context::SourceFile;
pub use dispatcher::{DispatchError, Dispatcher, DispatcherBuilder};
pub use rule::{Rule, RuleBox};
pub use scanner::{attribute_opener, find_preceding_significant, has_doc_comment};
pub use sink::ReportSink;
pub use skip_set::SkipSet;
pub use token::{Token, TokenKind, TokenStream};
pub use types::{LintResult, Severity, Violation};
