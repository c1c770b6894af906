use super::*;
use crate::char_class::classify;
use pretty_assertions::assert_eq;

/// Run the automaton over all of `text`. `Dead` if some character has no
/// transition.
fn run(text: &str) -> State {
    text.chars().fold(State::Start, |state, c| match state {
        State::Dead => State::Dead,
        _ => step(state, classify(c)),
    })
}

fn accepts(text: &str) -> Option<TokenKind> {
    accepting(run(text)).map(|accept| accept.kind)
}

/// Every state reachable from `Start`, found by walking the table.
fn reachable() -> Vec<State> {
    let mut seen = [false; STATE_COUNT];
    let mut queue = vec![State::Start];
    let mut found = Vec::new();
    seen[State::Start as usize] = true;
    while let Some(state) = queue.pop() {
        found.push(state);
        for &next in &TRANSITIONS[state as usize] {
            if !seen[next as usize] {
                seen[next as usize] = true;
                queue.push(next);
            }
        }
    }
    found
}

// === Table shape ===

#[test]
fn every_state_is_reachable() {
    assert_eq!(reachable().len(), STATE_COUNT);
}

#[test]
fn dead_state_is_a_sink() {
    assert!(TRANSITIONS[State::Dead as usize]
        .iter()
        .all(|&next| next == State::Dead));
    assert_eq!(accepting(State::Dead), None);
    assert_eq!(recovery(State::Dead), None);
}

#[test]
fn empty_match_is_never_accepted() {
    assert_eq!(accepting(State::Start), None);
    assert_eq!(recovery(State::Start), None);
}

#[test]
fn no_state_both_accepts_and_recovers() {
    for state in reachable() {
        assert!(
            accepting(state).is_none() || recovery(state).is_none(),
            "{state:?}"
        );
    }
}

#[test]
fn recovering_states_only_stop_at_line_breaks() {
    let line_break = CharClass::LineBreak as usize;
    for state in reachable() {
        let Some(accept) = recovery(state) else {
            continue;
        };
        for (class, &next) in TRANSITIONS[state as usize].iter().enumerate() {
            let stops = next == State::Dead;
            if class == line_break && accept.error == Some(ScanError::UnterminatedLiteral) {
                assert!(stops, "{state:?} must stop at a line break");
            } else {
                assert!(!stops, "{state:?} stops on class {class}");
            }
        }
    }
}

#[test]
fn every_emitted_kind_is_public() {
    for state in reachable() {
        for accept in [accepting(state), recovery(state)].into_iter().flatten() {
            assert!(!accept.kind.is_internal(), "{state:?} emits {}", accept.kind);
            assert!(!accept.kind.is_keyword(), "{state:?} emits {}", accept.kind);
        }
    }
}

// === Recognition ===

#[test]
fn operators_take_longest_spelling() {
    assert_eq!(accepts("<"), Some(TokenKind::Lt));
    assert_eq!(accepts("<<"), Some(TokenKind::LShift));
    assert_eq!(accepts("<<="), Some(TokenKind::LShiftAssign));
    assert_eq!(accepts(">>>="), Some(TokenKind::RUnsignedShiftAssign));
    assert_eq!(accepts(">>>"), Some(TokenKind::RUnsignedShift));
    assert_eq!(accepts(">>="), Some(TokenKind::RSignedShiftAssign));
    assert_eq!(accepts("..."), Some(TokenKind::Ellipsis));
    assert_eq!(accepts(".."), None);
    assert_eq!(run("<<<"), State::Dead);
}

#[test]
fn every_operator_lexeme_is_recognized() {
    for &kind in TokenKind::ALL {
        if kind.category() != crate::Category::Operator {
            continue;
        }
        let Some(lexeme) = kind.lexeme() else {
            panic!("operator {kind} has no lexeme");
        };
        assert_eq!(accepts(lexeme), Some(kind), "lexeme {lexeme:?}");
    }
}

#[test]
fn integer_literals() {
    assert_eq!(accepts("0"), Some(TokenKind::OctalLiteral));
    assert_eq!(accepts("017"), Some(TokenKind::OctalLiteral));
    assert_eq!(accepts("0L"), Some(TokenKind::OctalLiteral));
    assert_eq!(accepts("42"), Some(TokenKind::DecimalLiteral));
    assert_eq!(accepts("42l"), Some(TokenKind::DecimalLiteral));
    assert_eq!(accepts("0x1F"), Some(TokenKind::HexLiteral));
    assert_eq!(accepts("0XcafeL"), Some(TokenKind::HexLiteral));
    assert_eq!(accepts("0x"), None);
    assert_eq!(accepts("09"), None);
}

#[test]
fn floating_literals() {
    assert_eq!(accepts("1.5e10"), Some(TokenKind::DecimalFloatingPointLiteral));
    assert_eq!(accepts("1."), Some(TokenKind::DecimalFloatingPointLiteral));
    assert_eq!(accepts(".5"), Some(TokenKind::DecimalFloatingPointLiteral));
    assert_eq!(accepts("1e-3f"), Some(TokenKind::DecimalFloatingPointLiteral));
    assert_eq!(accepts("2D"), Some(TokenKind::DecimalFloatingPointLiteral));
    assert_eq!(accepts("09.5"), Some(TokenKind::DecimalFloatingPointLiteral));
    assert_eq!(accepts("1e"), None);
    assert_eq!(accepts("1e+"), None);
    assert_eq!(
        accepts("0x1p3"),
        Some(TokenKind::HexadecimalFloatingPointLiteral)
    );
    assert_eq!(
        accepts("0x1.8P-2d"),
        Some(TokenKind::HexadecimalFloatingPointLiteral)
    );
    assert_eq!(
        accepts("0x.8p0"),
        Some(TokenKind::HexadecimalFloatingPointLiteral)
    );
    assert_eq!(accepts("0x1."), None);
}

#[test]
fn comments() {
    assert_eq!(accepts("// note"), Some(TokenKind::SingleLineComment));
    assert_eq!(run("// note\n"), State::Dead);
    assert_eq!(accepts("/* a\n b */"), Some(TokenKind::MultiLineComment));
    assert_eq!(accepts("/**/"), Some(TokenKind::MultiLineComment));
    assert_eq!(accepts("/***/"), Some(TokenKind::FormalComment));
    assert_eq!(accepts("/** doc **/"), Some(TokenKind::FormalComment));
    assert_eq!(accepts("/*"), None);
    assert_eq!(
        recovery(run("/* open")),
        Some(Accept {
            kind: TokenKind::MultiLineComment,
            error: Some(ScanError::UnterminatedComment),
        })
    );
}

#[test]
fn string_literals() {
    assert_eq!(accepts(r#""""#), Some(TokenKind::StringLiteral));
    assert_eq!(accepts(r#""a\"b\\""#), Some(TokenKind::StringLiteral));
    assert_eq!(accepts(r#""\101\t""#), Some(TokenKind::StringLiteral));
    assert_eq!(
        accepting(run(r#""bad \q escape""#)),
        Some(Accept {
            kind: TokenKind::StringLiteral,
            error: Some(ScanError::InvalidEscape),
        })
    );
    assert_eq!(run("\"abc\n"), State::Dead);
    assert_eq!(
        recovery(run("\"abc")).map(|accept| accept.error),
        Some(Some(ScanError::UnterminatedLiteral))
    );
}

#[test]
fn character_literals() {
    assert_eq!(accepts("'a'"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts(r"'\n'"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts(r"'\''"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts(r"'\0'"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts(r"'\377'"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts(r"'\77'"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts("'λ'"), Some(TokenKind::CharacterLiteral));

    let malformed = Some(Accept {
        kind: TokenKind::CharacterLiteral,
        error: Some(ScanError::MalformedCharLiteral),
    });
    assert_eq!(accepting(run("''")), malformed);
    assert_eq!(accepting(run("'ab'")), malformed);
    assert_eq!(accepting(run(r"'\477'")), malformed);

    assert_eq!(
        accepting(run(r"'\q'")).and_then(|accept| accept.error),
        Some(ScanError::InvalidEscape)
    );
    assert_eq!(
        recovery(run("'a")).and_then(|accept| accept.error),
        Some(ScanError::UnterminatedLiteral)
    );
}

#[test]
fn unicode_escapes() {
    assert_eq!(accepts(r"'\u0041'"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts(r"'\uuuFFfe'"), Some(TokenKind::CharacterLiteral));
    assert_eq!(accepts(r#""\u00e9x""#), Some(TokenKind::StringLiteral));
    assert_eq!(accepts(r#""a\\u""#), Some(TokenKind::StringLiteral));
    assert_eq!(accepting(run(r"'\u0041'")).and_then(|a| a.error), None);

    let bad_char = Some(Accept {
        kind: TokenKind::CharacterLiteral,
        error: Some(ScanError::InvalidEscape),
    });
    assert_eq!(accepting(run(r"'\u00G1'")), bad_char);
    assert_eq!(accepting(run(r"'\u'")), bad_char);
    assert_eq!(accepting(run(r"'\U0041'")), bad_char);
    assert_eq!(
        accepting(run(r#""\u12""#)).and_then(|a| a.error),
        Some(ScanError::InvalidEscape)
    );

    // A fifth hex digit is a second character.
    assert_eq!(
        accepting(run(r"'\u00411'")).and_then(|a| a.error),
        Some(ScanError::MalformedCharLiteral)
    );
    assert_eq!(run("'\\u00\n"), State::Dead);
    assert_eq!(
        recovery(run(r"'\u00")).and_then(|a| a.error),
        Some(ScanError::UnterminatedLiteral)
    );
}

#[test]
fn words_and_whitespace() {
    assert_eq!(accepts("ifx"), Some(TokenKind::Identifier));
    assert_eq!(accepts("if"), Some(TokenKind::Identifier));
    assert_eq!(accepts("$_a1"), Some(TokenKind::Identifier));
    assert_eq!(accepts("naïve"), Some(TokenKind::Identifier));
    assert_eq!(accepts(" \t\r\n\u{c}"), Some(TokenKind::Whitespace));
    assert_eq!(run("1a"), State::Dead);
    assert_eq!(run("#"), State::Dead);
}
