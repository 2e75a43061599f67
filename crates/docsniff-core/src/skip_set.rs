//! Sets of token kinds that a backward scan steps over.

use crate::token::TokenKind;

/// Kinds a rule considers insignificant when looking for a preceding doc
/// comment.
///
/// Whitespace is always insignificant, whether or not it is listed.
/// Attribute blocks are not part of the set; the scanner skips them as a
/// unit.
///
/// ```
/// use docsniff_core::{SkipSet, TokenKind};
///
/// const MODIFIERS: SkipSet = SkipSet::new(&[TokenKind::Final, TokenKind::Abstract]);
///
/// assert!(MODIFIERS.contains(TokenKind::Final));
/// assert!(MODIFIERS.contains(TokenKind::Whitespace));
/// assert!(!MODIFIERS.contains(TokenKind::Public));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipSet {
    kinds: &'static [TokenKind],
}

impl SkipSet {
    /// A set that skips whitespace only.
    pub const WHITESPACE: Self = Self::new(&[]);

    /// Creates a skip-set from a fixed list of kinds.
    #[must_use]
    pub const fn new(kinds: &'static [TokenKind]) -> Self {
        Self { kinds }
    }

    /// Returns true if tokens of `kind` are skipped.
    #[must_use]
    pub fn contains(&self, kind: TokenKind) -> bool {
        kind == TokenKind::Whitespace || self.kinds.contains(&kind)
    }

    /// Returns the explicitly listed kinds.
    #[must_use]
    pub fn kinds(&self) -> &'static [TokenKind] {
        self.kinds
    }
}

impl Default for SkipSet {
    fn default() -> Self {
        Self::WHITESPACE
    }
}
