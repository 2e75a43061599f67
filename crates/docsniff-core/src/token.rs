//! Token model consumed by the lint engine.
//!
//! Tokens are produced by a host tokenizer. The engine never inspects token
//! text; it only tests kinds for set membership and uses positions to
//! report violations.

use serde::{Deserialize, Serialize};

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    // Declarations
    /// `class` keyword.
    Class,
    /// `interface` keyword.
    Interface,
    /// `trait` keyword.
    Trait,
    /// `enum` keyword.
    Enum,
    /// `function` keyword.
    Function,

    // Modifiers
    /// `final` modifier.
    Final,
    /// `abstract` modifier.
    Abstract,
    /// `readonly` modifier.
    Readonly,
    /// `static` modifier.
    Static,
    /// `public` visibility.
    Public,
    /// `protected` visibility.
    Protected,
    /// `private` visibility.
    Private,

    // Structure
    /// Spaces, tabs and newlines.
    Whitespace,
    /// Opening delimiter of an attribute block (`#[`).
    AttributeStart,
    /// Closing delimiter of an attribute block (`]`).
    AttributeEnd,
    /// Opening delimiter of a doc comment (`/**`).
    DocCommentOpen,
    /// Closing delimiter of a doc comment (`*/`).
    DocCommentClose,
    /// Plain line or block comment.
    Comment,

    // General
    /// Identifier or name.
    Identifier,
    /// String literal.
    StringLiteral,
    /// Numeric literal.
    NumberLiteral,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// Any kind the engine has no special knowledge of.
    Other,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Trait => "trait",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Final => "final",
            Self::Abstract => "abstract",
            Self::Readonly => "readonly",
            Self::Static => "static",
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Whitespace => "whitespace",
            Self::AttributeStart => "attribute-start",
            Self::AttributeEnd => "attribute-end",
            Self::DocCommentOpen => "doc-comment-open",
            Self::DocCommentClose => "doc-comment-close",
            Self::Comment => "comment",
            Self::Identifier => "identifier",
            Self::StringLiteral => "string-literal",
            Self::NumberLiteral => "number-literal",
            Self::Semicolon => "semicolon",
            Self::Comma => "comma",
            Self::OpenParen => "open-paren",
            Self::CloseParen => "close-paren",
            Self::OpenBrace => "open-brace",
            Self::CloseBrace => "close-brace",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A single token.
///
/// A token's position is its index in the owning [`TokenStream`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Source text. Not used by the engine.
    #[serde(default)]
    pub text: String,
    /// Line number (1-indexed, 0 if unknown).
    #[serde(default)]
    pub line: usize,
    /// Column number (1-indexed, 0 if unknown).
    #[serde(default)]
    pub column: usize,
}

impl Token {
    /// Creates a token with no source location.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            line: 0,
            column: 0,
        }
    }

    /// Sets the source location of this token.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Self::new(kind, "")
    }
}

/// The ordered tokens of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates a stream from tokens in source order.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Creates a stream of text-less tokens from their kinds.
    #[must_use]
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = TokenKind>,
    {
        Self {
            tokens: kinds.into_iter().map(Token::from).collect(),
        }
    }

    /// Returns the token at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Returns the kind of the token at `index`, if any.
    #[must_use]
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
