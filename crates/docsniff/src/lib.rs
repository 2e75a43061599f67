//! # docsniff
//!
//! Flags type and function declarations that lack a preceding doc comment.
//!
//! This is the main facade crate that re-exports the core engine and the
//! built-in rules. A host tokenizes each source file into a
//! [`TokenStream`] and hands it to a [`Linter`].
//!
//! ## Configuration
//!
//! ```toml
//! # docsniff.toml
//! preset = "all"
//! fail_on = "error"
//!
//! [rules.missing-function-comment]
//! severity = "warning"
//! ```
//!
//! ## Programmatic Usage
//!
//! ```
//! use docsniff::{Config, Linter, TokenKind, TokenStream};
//!
//! let linter = Linter::from_config(Config::default())?;
//! let tokens = TokenStream::from_kinds([TokenKind::Whitespace, TokenKind::Function]);
//! let violations = linter.check(&tokens);
//!
//! assert_eq!(violations[0].code, "MissingFunctionComment");
//! # Ok::<(), docsniff::LintError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core types and traits
pub use docsniff_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use docsniff_rules::*;
}

mod linter;

pub use linter::{find_config, LintError, Linter, CONFIG_CANDIDATES};
