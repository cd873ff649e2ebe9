// std imports
use std::borrow::Cow;

// local imports
use crate::{
    error::Result,
    token::{Number, Token},
};

// ---

/// TokenStream is a pull-style cursor over a hierarchical document.
///
/// The cursor starts unpositioned: [`current_token`](Self::current_token) returns `None`
/// until the first call to [`next_token`](Self::next_token), and again after the stream is exhausted.
/// A stream is mutated in place and must not be traversed by more than one caller at a time.
pub trait TokenStream {
    /// Token the cursor is positioned at.
    fn current_token(&self) -> Option<Token>;

    /// Advances the cursor and returns the new current token.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Name of the current field, valid only at [`Token::FieldName`].
    fn current_name(&self) -> Result<Cow<'_, str>>;

    /// Moves the cursor from [`Token::StartObject`] or [`Token::StartArray`] to the matching end token
    /// without decoding anything in between. Does nothing at any other token.
    fn skip_children(&mut self) -> Result<()>;

    /// Textual content of the current token.
    fn text(&self) -> Result<Cow<'_, str>>;

    /// Numeric value of the current [`Token::ValueNumber`], tagged with its subtype.
    fn number_value(&self) -> Result<Number>;

    /// Value of the current [`Token::ValueBoolean`].
    fn boolean_value(&self) -> Result<bool>;

    /// Returns the current token, fetching the first one if the cursor is not positioned yet.
    #[inline]
    fn prime(&mut self) -> Result<Option<Token>> {
        match self.current_token() {
            Some(token) => Ok(Some(token)),
            None => self.next_token(),
        }
    }
}
