//! Backward token scanning.

use crate::skip_set::SkipSet;
use crate::token::{TokenKind, TokenStream};
use tracing::{trace, warn};

/// Finds the nearest significant token before `start`.
///
/// Walks backward from `start - 1`, stepping over tokens whose kind is in
/// `skip` and over whole attribute blocks. Tokens inside an attribute block
/// are never inspected.
///
/// Returns `None` when the start of the stream is reached, when `start` is
/// 0 or out of bounds, or when an attribute block has no opener.
#[must_use]
pub fn find_preceding_significant(
    tokens: &TokenStream,
    start: usize,
    skip: &SkipSet,
) -> Option<usize> {
    if start == 0 || start >= tokens.len() {
        return None;
    }

    let mut cursor = start - 1;
    loop {
        let kind = tokens.kind(cursor)?;

        if kind == TokenKind::AttributeEnd {
            let Some(opener) = attribute_opener(tokens, cursor) else {
                warn!("Unmatched attribute end at token {cursor}");
                return None;
            };
            trace!("Skipping attribute block {opener}..={cursor}");
            cursor = opener.checked_sub(1)?;
            continue;
        }

        if !skip.contains(kind) {
            return Some(cursor);
        }

        cursor = cursor.checked_sub(1)?;
    }
}

/// Returns true if the nearest significant token before `index` closes a
/// doc comment.
#[must_use]
pub fn has_doc_comment(tokens: &TokenStream, index: usize, skip: &SkipSet) -> bool {
    find_preceding_significant(tokens, index, skip)
        .and_then(|found| tokens.kind(found))
        .is_some_and(|kind| kind == TokenKind::DocCommentClose)
}

/// Finds the `AttributeStart` matching the `AttributeEnd` at `end`.
///
/// Nested blocks are balanced. Returns `None` if `end` is not an attribute
/// end or no matching opener exists.
#[must_use]
pub fn attribute_opener(tokens: &TokenStream, end: usize) -> Option<usize> {
    if tokens.kind(end)? != TokenKind::AttributeEnd {
        return None;
    }

    let mut depth = 0usize;
    for index in (0..end).rev() {
        match tokens.kind(index)? {
            TokenKind::AttributeEnd => depth += 1,
            TokenKind::AttributeStart if depth == 0 => return Some(index),
            TokenKind::AttributeStart => depth -= 1,
            _ => {}
        }
    }
    None
}
