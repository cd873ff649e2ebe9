use logos::Logos;

use super::{ErrorKind, Span};

// Item is a structural element of a JSON document.
// Each ObjectBegin is eventually followed by a matching ObjectEnd, and each ArrayBegin by a matching ArrayEnd,
// unless the lexer reports an error first. Every Field item is followed by exactly one value
// (a Scalar, or a complete object or array).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Item {
    ObjectBegin,
    ObjectEnd,
    ArrayBegin,
    ArrayEnd,
    Field(Str),
    Scalar(Scalar),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Span),
    String(Str),
}

/// String literal location.
///
/// `Plain` spans exclude the quotes and contain no escape sequences, so the
/// slice is the value itself. `Escaped` spans include the quotes and must be decoded.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Str {
    Plain(Span),
    Escaped(Span),
}

// ---

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = ErrorKind)]
pub(crate) enum Lexeme {
    #[token("null", |_| Scalar::Null)]
    #[token("false", |_| Scalar::Bool(false))]
    #[token("true", |_| Scalar::Bool(true))]
    #[regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?", |lex| Scalar::Number(lex.span().into()))]
    #[regex(r#""[^"\\\x00-\x1F]*""#, |lex| Scalar::String(Str::Plain(unquote(lex.span().into()))), priority = 5)]
    #[regex(r#""([^"\\\x00-\x1F]|\\(["\\bnfrt/]|u[a-fA-F0-9]{4}))*""#, |lex| Scalar::String(Str::Escaped(lex.span().into())), priority = 4)]
    Scalar(Scalar),

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,
}

#[inline]
fn unquote(s: Span) -> Span {
    Span::new(s.start + 1, s.end - 1)
}
