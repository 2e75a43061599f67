//! Integration test: built-in rules end-to-end via Dispatcher.
//!
//! Token streams are written by hand in the shape a PHP tokenizer would
//! produce, one token per lexeme with line numbers.

use docsniff_core::{Dispatcher, SourceFile, Token, TokenKind, TokenStream, Violation};
use docsniff_rules::{
    missing_class_comment, missing_function_comment, MissingClassComment, MissingFunctionComment,
};
use TokenKind::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn dispatcher() -> Dispatcher {
    Dispatcher::builder()
        .rule(MissingClassComment::new())
        .rule(MissingFunctionComment::new())
        .build()
        .expect("dispatcher should build")
}

/// Builds a stream from `(kind, text)` pairs, tracking line numbers.
fn lex(parts: &[(TokenKind, &str)]) -> TokenStream {
    let mut line = 1;
    let mut column = 1;
    parts
        .iter()
        .map(|&(kind, text)| {
            let token = Token::new(kind, text).at(line, column);
            for ch in text.chars() {
                if ch == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
            token
        })
        .collect()
}

fn codes(violations: &[Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.code.as_str()).collect()
}

// ── Concrete scenarios ──

#[test]
fn documented_final_class_has_no_violations() {
    init_tracing();
    let tokens = TokenStream::from_kinds([DocCommentClose, Whitespace, Final, Whitespace, Class]);
    assert!(dispatcher().check(&tokens).is_empty());
}

#[test]
fn undocumented_function_reports_once() {
    init_tracing();
    let tokens = TokenStream::from_kinds([Whitespace, Function, Whitespace, Identifier]);
    let violations = dispatcher().check(&tokens);
    assert_eq!(codes(&violations), vec![missing_function_comment::CODE]);
    assert_eq!(violations[0].message, "Missing function doc comment.");
}

// ── Whole file ──

#[test]
fn php_like_file_reports_each_undocumented_declaration() {
    init_tracing();
    // <?php
    // /** Documented. */
    // #[Entity("user")]
    // final class User {
    //     public function name() {}
    //     /** Documented. */
    //     private static function build() {}
    // }
    // interface Repo {}
    let tokens = lex(&[
        (Other, "<?php"),
        (Whitespace, "\n"),
        (DocCommentOpen, "/**"),
        (Comment, " Documented. "),
        (DocCommentClose, "*/"),
        (Whitespace, "\n"),
        (AttributeStart, "#["),
        (Identifier, "Entity"),
        (OpenParen, "("),
        (StringLiteral, "\"user\""),
        (CloseParen, ")"),
        (AttributeEnd, "]"),
        (Whitespace, "\n"),
        (Final, "final"),
        (Whitespace, " "),
        (Class, "class"),
        (Whitespace, " "),
        (Identifier, "User"),
        (Whitespace, " "),
        (OpenBrace, "{"),
        (Whitespace, "\n    "),
        (Public, "public"),
        (Whitespace, " "),
        (Function, "function"),
        (Whitespace, " "),
        (Identifier, "name"),
        (OpenParen, "("),
        (CloseParen, ")"),
        (Whitespace, " "),
        (OpenBrace, "{"),
        (CloseBrace, "}"),
        (Whitespace, "\n    "),
        (DocCommentOpen, "/**"),
        (Comment, " Documented. "),
        (DocCommentClose, "*/"),
        (Whitespace, "\n    "),
        (Private, "private"),
        (Whitespace, " "),
        (Static, "static"),
        (Whitespace, " "),
        (Function, "function"),
        (Whitespace, " "),
        (Identifier, "build"),
        (OpenParen, "("),
        (CloseParen, ")"),
        (Whitespace, " "),
        (OpenBrace, "{"),
        (CloseBrace, "}"),
        (Whitespace, "\n"),
        (CloseBrace, "}"),
        (Whitespace, "\n"),
        (Interface, "interface"),
        (Whitespace, " "),
        (Identifier, "Repo"),
        (Whitespace, " "),
        (OpenBrace, "{"),
        (CloseBrace, "}"),
    ]);

    let violations = dispatcher().check(&tokens);
    let found: Vec<(&str, usize, usize)> = violations
        .iter()
        .map(|v| (v.code.as_str(), v.line, v.column))
        .collect();

    assert_eq!(
        found,
        vec![
            (missing_function_comment::CODE, 5, 12),
            (missing_class_comment::CODE, 9, 1),
        ]
    );
}

#[test]
fn public_class_is_reported_by_type_rule() {
    init_tracing();
    let tokens = TokenStream::from_kinds([DocCommentClose, Whitespace, Public, Whitespace, Class]);
    let violations = dispatcher().check(&tokens);
    assert_eq!(codes(&violations), vec![missing_class_comment::CODE]);
}

#[test]
fn repeated_runs_are_identical() {
    init_tracing();
    let tokens = TokenStream::from_kinds([
        Semicolon, Whitespace, Trait, Whitespace, Function, Whitespace, Enum,
    ]);
    let dispatcher = dispatcher();
    let first = dispatcher.check(&tokens);
    let second = dispatcher.check(&tokens);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn files_are_checked_in_parallel_and_sorted() {
    init_tracing();
    let files: Vec<SourceFile> = (0..16)
        .map(|i| {
            SourceFile::new(
                format!("src/File{i:02}.php"),
                TokenStream::from_kinds([Whitespace, Class, Whitespace, Function]),
            )
        })
        .collect();

    let result = dispatcher().check_files(&files);

    assert_eq!(result.files_checked, 16);
    assert_eq!(result.violations.len(), 32);
    assert_eq!(result.by_code(missing_class_comment::CODE).len(), 16);
    let first = &result.violations[0];
    assert_eq!(
        first.file.as_deref(),
        Some(std::path::Path::new("src/File00.php"))
    );
    assert_eq!(first.position, 1);
}
