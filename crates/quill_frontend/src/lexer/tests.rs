use super::{Lexer, LexerError, LexerErrorKind};
use crate::token::TokenKind::{self, *};

fn lex(source: &str) -> (Vec<(TokenKind, usize, String)>, Vec<LexerError>) {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        lexer.scan();
        if lexer.token() == EOF {
            break;
        }
        tokens.push((lexer.token(), lexer.pos(), lexer.text().to_owned()));
    }

    (tokens, lexer.take_errors())
}

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).tokens().map(|token| token.kind).collect()
}

#[test]
fn starts_at_bof() {
    let lexer = Lexer::new("var x");

    assert_eq!(lexer.token(), BOF);
    assert_eq!(lexer.pos(), 0);
    assert_eq!(lexer.text(), "");
}

#[test]
fn scan_moves_one_token() {
    let mut lexer = Lexer::new("var x");

    lexer.scan();
    assert_eq!((lexer.token(), lexer.pos(), lexer.text()), (Var, 0, "var"));

    lexer.scan();
    assert_eq!((lexer.token(), lexer.pos(), lexer.text()), (Whitespace, 3, " "));

    lexer.scan();
    assert_eq!(lexer.current().text, "x");
}

#[test]
fn tokens_match_scanning() {
    let source = "type t = 'a\\b'\nx;";

    let scanned = lex(source).0;
    let collected: Vec<_> = Lexer::new(source)
        .tokens()
        .map(|token| (token.kind, token.pos, token.text))
        .collect();

    assert_eq!(collected, scanned);
    assert_eq!(collected.len(), 10);
}

#[test]
fn eof_is_sticky() {
    let mut lexer = Lexer::new("x");

    lexer.scan();
    assert_eq!(lexer.token(), Identifier);

    for _ in 0..3 {
        lexer.scan();
        assert_eq!(lexer.token(), EOF);
        assert_eq!(lexer.pos(), 1);
        assert_eq!(lexer.text(), "");
    }
}

#[test]
fn empty_source() {
    let mut lexer = Lexer::new("");

    lexer.scan();
    assert_eq!(lexer.token(), EOF);
    assert_eq!(lexer.pos(), 0);

    lexer.scan();
    assert_eq!(lexer.token(), EOF);
    assert!(lexer.take_errors().is_empty());
}

#[test]
fn identifiers_round_trip() {
    for ident in ["x", "_", "foo_bar", "camelCase", "x1", "_9", "vars", "types", "returned"] {
        let (tokens, errors) = lex(ident);

        assert_eq!(tokens, [(Identifier, 0, ident.to_owned())]);
        assert!(errors.is_empty());
    }
}

#[test]
fn keywords() {
    for (source, kind) in [
        ("function", Function),
        ("var", Var),
        ("type", Type),
        ("return", Return),
    ] {
        let (tokens, _) = lex(source);
        assert_eq!(tokens, [(kind, 0, source.to_owned())]);
        assert!(kind.is_keyword());
    }

    // keywords are case sensitive
    assert_eq!(kinds("Var"), [Identifier]);
}

#[test]
fn var_declaration() {
    assert_eq!(
        kinds("var x: T = 1;"),
        [
            Var, Whitespace, Identifier, Colon, Whitespace, Identifier, Whitespace, Equals,
            Whitespace, Literal, Semicolon,
        ]
    );
}

#[test]
fn positions_are_byte_offsets() {
    let (tokens, _) = lex("type  t = u");

    let positions: Vec<_> = tokens.iter().map(|(_, pos, _)| *pos).collect();
    assert_eq!(positions, [0, 4, 6, 7, 8, 9, 10]);
}

#[test]
fn whitespace_runs_are_one_token() {
    let (tokens, _) = lex(" \t  x");

    assert_eq!(
        tokens,
        [(Whitespace, 0, " \t  ".to_owned()), (Identifier, 4, "x".to_owned())]
    );
}

#[test]
fn newlines_are_separate_tokens() {
    assert_eq!(
        kinds("a\nb\r\nc\rd\n\n"),
        [Identifier, Newline, Identifier, Newline, Identifier, Newline, Identifier, Newline, Newline]
    );

    let (tokens, _) = lex("\r\n");
    assert_eq!(tokens, [(Newline, 0, "\r\n".to_owned())]);
}

#[test]
fn unicode_line_separators() {
    assert_eq!(
        kinds("a\u{2028}b\u{2029}c"),
        [Identifier, Newline, Identifier, Newline, Identifier]
    );

    // next line is plain whitespace
    assert_eq!(kinds("a\u{85}b"), [Identifier, Whitespace, Identifier]);

    let (tokens, errors) = lex("'ab\u{2028}");
    assert_eq!(tokens[0], (StringLiteral, 0, "ab".to_owned()));
    assert_eq!(tokens[1].0, Newline);
    assert_eq!(errors.len(), 1);
}

#[test]
fn numeric_literal_is_maximal() {
    let (tokens, _) = lex("12345abc");

    assert_eq!(
        tokens,
        [
            (Literal, 0, "12345".to_owned()),
            (Identifier, 5, "abc".to_owned()),
        ]
    );
}

#[test]
fn string_literals() {
    let (tokens, errors) = lex(r#""hello" 'world'"#);

    assert_eq!(
        tokens,
        [
            (StringLiteral, 0, "hello".to_owned()),
            (Whitespace, 7, " ".to_owned()),
            (StringLiteral, 8, "world".to_owned()),
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn string_quotes_must_match() {
    let (tokens, errors) = lex(r#""it's""#);

    assert_eq!(tokens, [(StringLiteral, 0, "it's".to_owned())]);
    assert!(errors.is_empty());
}

#[test]
fn string_escapes() {
    let (tokens, errors) = lex(r#""a\n\t\\\"b""#);

    assert_eq!(tokens, [(StringLiteral, 0, "a\n\t\\\"b".to_owned())]);
    assert!(errors.is_empty());
}

#[test]
fn unknown_escape_is_kept() {
    let (tokens, errors) = lex(r#""a\qb""#);

    assert_eq!(tokens, [(StringLiteral, 0, r"a\qb".to_owned())]);
    assert_eq!(
        errors,
        [LexerError {
            kind: LexerErrorKind::UnknownEscape('q'),
            pos: 2,
        }]
    );
}

#[test]
fn unterminated_string_at_eof() {
    let (tokens, errors) = lex("x = \"abc");

    assert_eq!(tokens.last(), Some(&(StringLiteral, 4, "abc".to_owned())));
    assert_eq!(
        errors,
        [LexerError {
            kind: LexerErrorKind::UnterminatedString,
            pos: 4,
        }]
    );
}

#[test]
fn unterminated_string_stops_at_newline() {
    let (tokens, errors) = lex("'abc\nx");

    assert_eq!(
        tokens,
        [
            (StringLiteral, 0, "abc".to_owned()),
            (Newline, 4, "\n".to_owned()),
            (Identifier, 5, "x".to_owned()),
        ]
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].pos, 0);
}

#[test]
fn unknown_characters_advance() {
    let (tokens, errors) = lex("a@#b");

    assert_eq!(
        tokens,
        [
            (Identifier, 0, "a".to_owned()),
            (Unknown, 1, "@".to_owned()),
            (Unknown, 2, "#".to_owned()),
            (Identifier, 3, "b".to_owned()),
        ]
    );
    assert_eq!(
        errors,
        [
            LexerError {
                kind: LexerErrorKind::UnexpectedChar('@'),
                pos: 1,
            },
            LexerError {
                kind: LexerErrorKind::UnexpectedChar('#'),
                pos: 2,
            },
        ]
    );
}

#[test]
fn multibyte_unknown_character() {
    let (tokens, errors) = lex("é=1");

    assert_eq!(tokens[0], (Unknown, 0, "é".to_owned()));
    assert_eq!(tokens[1], (Equals, 2, "=".to_owned()));
    assert_eq!(errors.len(), 1);
}

#[test]
fn error_messages() {
    insta::assert_debug_snapshot!(
        lex("@ 'x\\z").1.into_iter().map(|e| e.kind.to_string()).collect::<Vec<_>>(),
        @r###"
    [
        "unexpected character '@'",
        "unknown escape sequence `\\z`",
        "unterminated string literal",
    ]
    "###
    );
}
