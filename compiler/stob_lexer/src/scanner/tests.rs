use super::*;
use crate::config::Trivia;
use pretty_assertions::assert_eq;
use stob_lexer_core::{ScanError, TokenKind};

fn kinds(scanner: Scanner<'_>) -> Vec<TokenKind> {
    scanner.map(|token| token.kind).collect()
}

#[test]
fn yields_tokens_then_none_forever() {
    let mut scanner = Scanner::new("a;");
    assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::Semicolon));
    assert!(scanner.is_at_end());
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

#[test]
fn skipping_trivia_keeps_significant_tokens() {
    let source = "a /* c */ = // d\n 1";
    let scanner = Scanner::with_config(source, ScanConfig::skipping_trivia());
    assert_eq!(
        kinds(scanner),
        vec![TokenKind::Identifier, TokenKind::Assign, TokenKind::DecimalLiteral]
    );
}

#[test]
fn skipping_trivia_keeps_flagged_comments() {
    let scanner = Scanner::with_config("x /* open", ScanConfig::skipping_trivia());
    let tokens: Vec<_> = scanner.collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::MultiLineComment);
    assert_eq!(tokens[1].error, Some(ScanError::UnterminatedComment));
}

#[test]
fn skipped_trivia_does_not_shift_spans() {
    let source = "  x";
    let all: Vec<_> = Scanner::new(source).collect();
    let significant: Vec<_> =
        Scanner::with_config(source, ScanConfig::skipping_trivia()).collect();
    assert_eq!(significant, all[1..].to_vec());
}

#[test]
fn tab_width_affects_columns() {
    let config = ScanConfig::with_tab_width(4);
    let tokens: Vec<_> = Scanner::with_config("\tx", config).collect();
    assert_eq!(tokens[1].start.column, 5);

    let tokens: Vec<_> = Scanner::new("\tx").collect();
    assert_eq!(tokens[1].start.column, 9);
}

#[test]
fn config_is_reported() {
    let config = ScanConfig {
        tab_width: 2,
        trivia: Trivia::Skip,
    };
    assert_eq!(Scanner::with_config("", config).config(), config);
}

// === Restart ===

#[test]
fn resume_from_checkpoint_matches_full_scan() {
    let source = "int a = 1;\n/* doc */ b += 0x2F;";
    let full: Vec<_> = Scanner::new(source).collect();

    let mut scanner = Scanner::new(source);
    for _ in 0..5 {
        scanner.next();
    }
    let checkpoint = scanner.checkpoint();
    let rest: Vec<_> = scanner.collect();
    let resumed: Vec<_> = Scanner::resume(source, checkpoint, ScanConfig::default()).collect();

    assert_eq!(resumed, rest);
    assert_eq!(resumed, full[5..].to_vec());
}

#[test]
fn resume_with_other_tab_width_recomputes_columns() {
    let source = "\ta\tb";
    let mut scanner = Scanner::with_config(source, ScanConfig::with_tab_width(4));
    scanner.next();
    scanner.next();
    let checkpoint = scanner.checkpoint();
    assert_eq!(checkpoint.tab_width(), 4);
    assert_eq!(checkpoint.position().column, 6);

    let wide = ScanConfig::with_tab_width(8);
    let full: Vec<_> = Scanner::with_config(source, wide).collect();
    let resumed: Vec<_> = Scanner::resume(source, checkpoint, wide).collect();
    assert_eq!(resumed[0].start.column, 10);
    assert_eq!(resumed, full[2..].to_vec());
}

#[test]
fn checkpoint_reports_offset() {
    let mut scanner = Scanner::new("ab cd");
    scanner.next();
    let checkpoint = scanner.checkpoint();
    assert_eq!(checkpoint.offset(), 2);
    assert_eq!(checkpoint.position().column, 3);
}

#[test]
fn resume_at_offset_computes_position() {
    let source = "a\r\n\tbb";
    let resumed: Vec<_> = Scanner::resume_at(source, 4, ScanConfig::default())
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(resumed.len(), 1);
    assert_eq!(resumed[0].kind, TokenKind::Identifier);
    assert_eq!((resumed[0].start.line, resumed[0].start.column), (2, 9));
}

#[test]
fn resume_at_end_yields_nothing() {
    let source = "abc";
    let scanner = Scanner::resume_at(source, 3, ScanConfig::default());
    assert_eq!(scanner.map(|s| s.count()), Ok(0));
}

#[test]
fn resume_at_rejects_bad_offsets() {
    let source = "λ";
    assert_eq!(
        Scanner::resume_at(source, 3, ScanConfig::default()).err(),
        Some(ResumeError::OffsetOutOfBounds { offset: 3, len: 2 })
    );
    assert_eq!(
        Scanner::resume_at(source, 1, ScanConfig::default()).err(),
        Some(ResumeError::NotCharBoundary { offset: 1 })
    );
}

#[test]
fn resume_with_shared_index() {
    let source = "x = 1;\ny = 2;";
    let lines = LineIndex::new(source);
    let full: Vec<_> = Scanner::new(source).collect();
    for (i, token) in full.iter().enumerate() {
        let resumed: Vec<_> =
            Scanner::resume_at_indexed(source, &lines, token.span.start, ScanConfig::default())
                .into_iter()
                .flatten()
                .collect();
        assert_eq!(resumed, full[i..].to_vec());
    }
}
