//! Integration tests for config-driven linting through the facade crate.

use docsniff::rules::{missing_class_comment, missing_function_comment};
use docsniff::{Config, Linter, Severity, SourceFile, TokenKind, TokenStream};
use TokenKind::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sample_files() -> Vec<SourceFile> {
    vec![
        // /** */ abstract class A { /** */ public function a() {} }
        SourceFile::new(
            "src/A.php",
            TokenStream::from_kinds([
                DocCommentClose,
                Whitespace,
                Abstract,
                Whitespace,
                Class,
                Whitespace,
                Identifier,
                OpenBrace,
                DocCommentClose,
                Whitespace,
                Public,
                Whitespace,
                Function,
                Identifier,
                OpenParen,
                CloseParen,
                OpenBrace,
                CloseBrace,
                CloseBrace,
            ]),
        ),
        // enum B {} function helper() {}
        SourceFile::new(
            "src/B.php",
            TokenStream::from_kinds([
                Enum,
                Whitespace,
                Identifier,
                OpenBrace,
                CloseBrace,
                Whitespace,
                Function,
                Whitespace,
                Identifier,
            ]),
        ),
    ]
}

#[test]
fn default_linter_fails_on_undocumented_declarations() {
    init_tracing();
    let linter = Linter::from_config(Config::default()).expect("linter should build");
    let result = linter.check_files(&sample_files());

    assert_eq!(result.files_checked, 2);
    let codes: Vec<&str> = result.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![missing_class_comment::CODE, missing_function_comment::CODE]
    );
    assert!(result
        .violations
        .iter()
        .all(|v| v.file.as_deref() == Some(std::path::Path::new("src/B.php"))));
    assert!(linter.is_failure(&result));
}

#[test]
fn config_file_tunes_rules() {
    init_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("docsniff.toml");
    std::fs::write(
        &path,
        r#"
fail_on = "error"

[rules.missing-class-comment]
enabled = false

[rules.missing-function-comment]
severity = "info"
"#,
    )
    .expect("write config");

    let linter = Linter::from_file(&path).expect("linter should build");
    let result = linter.check_files(&sample_files());

    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Info);
    assert!(!linter.is_failure(&result));
    assert_eq!(
        result.format_report(Severity::Info),
        "src/B.php#6: info [MissingFunctionComment] Missing function doc comment.\n\
         Found 0 error(s), 0 warning(s), 1 info(s) in 2 file(s)"
    );
}
