// std imports
use std::borrow::Cow;

// third-party imports
use json_lexer::{Item, Lexer, Scalar, Span, Str};

// local imports
use crate::{
    error::{Error, Result},
    stream::TokenStream,
    token::{Number, Token},
};

// ---

/// Parser is a [`TokenStream`] over JSON text.
///
/// The source may hold any number of whitespace-separated top-level values.
/// Strings and field names are decoded only when asked for, so skipped
/// content costs no more than validating its structure.
#[derive(Clone, Debug)]
pub struct Parser<'s> {
    lexer: Lexer<'s>,
    item: Option<Item>,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            lexer: Lexer::new(source),
            item: None,
        }
    }

    /// Span of the current token within the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.lexer.span()
    }

    /// Number of objects and arrays enclosing the cursor, including the one it has just entered.
    #[inline]
    pub fn depth(&self) -> usize {
        self.lexer.depth()
    }

    #[inline]
    fn slice(&self, span: Span) -> &'s str {
        span.slice(self.lexer.source())
    }

    fn decode(&self, s: Str) -> Result<Cow<'s, str>> {
        match s {
            Str::Plain(span) => Ok(Cow::Borrowed(self.slice(span))),
            Str::Escaped(span) => Ok(Cow::Owned(json::from_str(self.slice(span))?)),
        }
    }

    #[inline]
    fn unexpected(&self, expected: Token) -> Error {
        Error::UnexpectedToken {
            expected,
            found: self.current_token(),
        }
    }
}

impl<'s> TokenStream for Parser<'s> {
    #[inline]
    fn current_token(&self) -> Option<Token> {
        self.item.map(token)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        match self.lexer.next() {
            Some(Ok(item)) => {
                self.item = Some(item);
            }
            Some(Err(e)) => {
                self.item = None;
                return Err(e.into());
            }
            None => {
                self.item = None;
            }
        }
        Ok(self.current_token())
    }

    fn current_name(&self) -> Result<Cow<'_, str>> {
        match self.item {
            Some(Item::Field(s)) => self.decode(s),
            _ => Err(self.unexpected(Token::FieldName)),
        }
    }

    fn skip_children(&mut self) -> Result<()> {
        if !self.current_token().is_some_and(Token::is_structure_start) {
            return Ok(());
        }

        let depth = self.lexer.depth() - 1;
        while self.lexer.depth() > depth {
            if self.next_token()?.is_none() {
                return Err(Error::UnexpectedEnd);
            }
        }

        log::trace!("skipped children up to {}", self.lexer.span().end);
        Ok(())
    }

    fn text(&self) -> Result<Cow<'_, str>> {
        match self.item {
            Some(Item::Scalar(Scalar::String(s)) | Item::Field(s)) => self.decode(s),
            Some(Item::Scalar(Scalar::Number(span))) => Ok(Cow::Borrowed(self.slice(span))),
            Some(Item::Scalar(Scalar::Bool(value))) => Ok(Cow::Borrowed(if value { "true" } else { "false" })),
            Some(Item::Scalar(Scalar::Null)) => Ok(Cow::Borrowed("null")),
            Some(Item::ObjectBegin) => Ok(Cow::Borrowed("{")),
            Some(Item::ObjectEnd) => Ok(Cow::Borrowed("}")),
            Some(Item::ArrayBegin) => Ok(Cow::Borrowed("[")),
            Some(Item::ArrayEnd) => Ok(Cow::Borrowed("]")),
            None => Err(Error::UnexpectedEnd),
        }
    }

    fn number_value(&self) -> Result<Number> {
        match self.item {
            Some(Item::Scalar(Scalar::Number(span))) => parse_number(self.slice(span)),
            _ => Err(self.unexpected(Token::ValueNumber)),
        }
    }

    fn boolean_value(&self) -> Result<bool> {
        match self.item {
            Some(Item::Scalar(Scalar::Bool(value))) => Ok(value),
            _ => Err(self.unexpected(Token::ValueBoolean)),
        }
    }
}

// ---

#[inline]
fn token(item: Item) -> Token {
    match item {
        Item::ObjectBegin => Token::StartObject,
        Item::ObjectEnd => Token::EndObject,
        Item::ArrayBegin => Token::StartArray,
        Item::ArrayEnd => Token::EndArray,
        Item::Field(_) => Token::FieldName,
        Item::Scalar(Scalar::String(_)) => Token::ValueString,
        Item::Scalar(Scalar::Number(_)) => Token::ValueNumber,
        Item::Scalar(Scalar::Bool(_)) => Token::ValueBoolean,
        Item::Scalar(Scalar::Null) => Token::ValueNull,
    }
}

/// Parses a JSON number literal into the narrowest fitting subtype.
///
/// Integers that fit in 32 bits are `Int`, those that fit in 64 bits are `Long`,
/// larger ones are `BigInteger` holding the literal as is.
/// Fractions and exponents are `Double`.
pub fn parse_number(text: &str) -> Result<Number> {
    if !text.contains(['.', 'e', 'E']) {
        if let Ok(value) = text.parse::<i32>() {
            return Ok(Number::Int(value));
        }
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Number::Long(value));
        }
        let digits = text.strip_prefix('-').unwrap_or(text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Number::BigInteger(text.into()));
        }
    }

    text.parse::<f64>()
        .map(Number::Double)
        .map_err(|_| Error::InvalidNumber(text.into()))
}

#[cfg(test)]
mod tests;
