use super::*;

// === TokenKind ===

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn discriminants_follow_declaration_order() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, i, "{kind} out of order");
    }
}

#[test]
fn names_are_the_variant_names() {
    assert_eq!(TokenKind::Identifier.name(), "Identifier");
    assert_eq!(TokenKind::String.name(), "String");
    assert_eq!(TokenKind::LeftCurly.name(), "LeftCurly");
    assert_eq!(TokenKind::Unexpected.name(), "Unexpected");
    for kind in TokenKind::ALL {
        assert_eq!(format!("{kind:?}"), kind.name());
    }
}

#[test]
fn display_respects_width() {
    assert_eq!(format!("{:>12}", TokenKind::Colon), "       Colon");
    assert_eq!(format!("{:<8}|", TokenKind::End), "End     |");
    assert_eq!(TokenKind::RightSquare.to_string(), "RightSquare");
}

#[test]
fn atom_lexemes() {
    assert_eq!(TokenKind::Colon.atom_lexeme(), Some(":"));
    assert_eq!(TokenKind::Minus.atom_lexeme(), Some("-"));
    assert_eq!(TokenKind::LeftSquare.atom_lexeme(), Some("["));
    assert_eq!(TokenKind::RightSquare.atom_lexeme(), Some("]"));
    assert_eq!(TokenKind::LeftCurly.atom_lexeme(), Some("{"));
    assert_eq!(TokenKind::RightCurly.atom_lexeme(), Some("}"));
}

#[test]
fn variable_lexeme_returns_none() {
    assert_eq!(TokenKind::Identifier.atom_lexeme(), None);
    assert_eq!(TokenKind::Number.atom_lexeme(), None);
    assert_eq!(TokenKind::String.atom_lexeme(), None);
    assert_eq!(TokenKind::Comment.atom_lexeme(), None);
    assert_eq!(TokenKind::Hash.atom_lexeme(), None);
    assert_eq!(TokenKind::End.atom_lexeme(), None);
    assert_eq!(TokenKind::Unexpected.atom_lexeme(), None);
}

#[test]
fn terminal_kinds() {
    let terminal: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_terminal())
        .collect();
    assert_eq!(terminal, vec![TokenKind::End, TokenKind::Unexpected]);
}

// === Span ===

#[test]
fn span_basics() {
    let span = Span::new(3, 8);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 3..8);
    assert_eq!(span.to_string(), "3..8");

    let point = Span::point(4);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
}

// === Token ===

#[test]
fn token_queries() {
    let tok = Token::new(TokenKind::Identifier, Span::new(0, 3), "key");
    assert_eq!(tok.kind(), TokenKind::Identifier);
    assert_eq!(tok.lexeme(), "key");
    assert_eq!(tok.span(), Span::new(0, 3));
    assert!(tok.is(TokenKind::Identifier));
    assert!(tok.is_not(TokenKind::Number));
    assert!(tok.is_one_of(&[TokenKind::Number, TokenKind::Identifier]));
    assert!(!tok.is_one_of(&[TokenKind::End, TokenKind::Unexpected]));
    assert!(!tok.is_one_of(&[]));
}

#[test]
fn token_is_copy() {
    let tok = Token::new(TokenKind::Colon, Span::new(3, 4), ":");
    let tok2 = tok;
    assert_eq!(tok, tok2);
}

#[test]
fn token_debug_shows_kind_lexeme_and_span() {
    let tok = Token::new(TokenKind::String, Span::new(1, 6), "hello");
    assert_eq!(format!("{tok:?}"), "String(\"hello\") @ 1..6");
}
