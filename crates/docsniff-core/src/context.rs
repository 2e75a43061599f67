//! Inputs for multi-file checks.

use crate::token::TokenStream;
use std::path::{Path, PathBuf};

/// The token stream of one source file together with its path.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path of the file, as the host knows it.
    pub path: PathBuf,
    /// Tokens produced by the host tokenizer.
    pub tokens: TokenStream,
}

impl SourceFile {
    /// Creates a new source file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tokens: TokenStream) -> Self {
        Self {
            path: path.into(),
            tokens,
        }
    }

    /// Returns the path of this file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
