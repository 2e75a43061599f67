//! # docsniff-rules
//!
//! Built-in doc-comment rules for docsniff.
//!
//! ## Available Rules
//!
//! | Code | Name | Targets |
//! |------|------|---------|
//! | `MissingClassComment` | `missing-class-comment` | `class`, `interface`, `trait`, `enum` |
//! | `MissingFunctionComment` | `missing-function-comment` | `function` |
//!
//! Both rules report when the nearest significant token before the keyword
//! is not the end of a doc comment. They differ only in which modifiers may
//! sit in between.
//!
//! ## Usage
//!
//! ```ignore
//! use docsniff_core::Dispatcher;
//! use docsniff_rules::{MissingClassComment, MissingFunctionComment};
//!
//! let dispatcher = Dispatcher::builder()
//!     .rule(MissingClassComment::new())
//!     .rule(MissingFunctionComment::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod missing_class_comment;
pub mod missing_function_comment;
mod presets;

pub use missing_class_comment::MissingClassComment;
pub use missing_function_comment::MissingFunctionComment;
pub use presets::{all_rules, rule_by_name, Preset, UnknownPreset};

/// Re-export core types for convenience.
pub use docsniff_core::{Rule, Severity, Violation};
