use super::{
    Error, ErrorKind, Span,
    error::MakeError,
    token::{Item, Lexeme, Scalar},
};

// ---

/// Maximum supported nesting of objects and arrays.
pub const MAX_DEPTH: usize = 128;

type InnerLexer<'s> = logos::Lexer<'s, Lexeme>;

impl<'s> MakeError for InnerLexer<'s> {
    #[inline]
    fn make_error(&self, kind: ErrorKind) -> Error {
        Error {
            kind,
            span: self.span().into(),
        }
    }
}

// ---

/// Lexer validates the structure of a sequence of JSON values and yields
/// one [`Item`] per structural element.
///
/// Any number of top-level values may follow each other, separated by whitespace,
/// which makes the lexer usable for newline-delimited JSON as is.
#[derive(Clone, Debug)]
pub struct Lexer<'s> {
    inner: InnerLexer<'s>,
    stack: BitStack,
    context: Context,
}

impl<'s> Lexer<'s> {
    #[inline]
    pub fn new(source: &'s str) -> Self {
        Self {
            inner: InnerLexer::new(source),
            stack: BitStack::new(),
            context: Context::Root,
        }
    }

    /// Span of the most recently returned item.
    #[inline]
    pub fn span(&self) -> Span {
        self.inner.span().into()
    }

    #[inline]
    pub fn source(&self) -> &'s str {
        self.inner.source()
    }

    /// Number of currently open objects and arrays.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len() as usize
    }

    #[inline]
    fn error(&self, kind: ErrorKind) -> Option<Result<Item, Error>> {
        Some(Err(self.inner.make_error(kind)))
    }

    #[inline]
    fn value_done(&mut self) {
        self.context = match self.stack.peek() {
            Some(false) => Context::ObjectDelimiter,
            Some(true) => Context::ArrayDelimiter,
            None => Context::Root,
        };
    }

    #[inline]
    fn open(&mut self, array: bool) -> Option<Result<Item, Error>> {
        if self.stack.push(array).is_none() {
            return self.error(ErrorKind::DepthLimitExceeded);
        }
        if array {
            self.context = Context::ArrayBegin;
            Some(Ok(Item::ArrayBegin))
        } else {
            self.context = Context::ObjectBegin;
            Some(Ok(Item::ObjectBegin))
        }
    }

    #[inline]
    fn close(&mut self, array: bool) -> Option<Result<Item, Error>> {
        match self.stack.pop() {
            Some(bit) if bit == array => {
                self.value_done();
                Some(Ok(if array { Item::ArrayEnd } else { Item::ObjectEnd }))
            }
            _ => self.error(ErrorKind::UnexpectedToken),
        }
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Result<Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(token) = self.inner.next() {
            let token = match token {
                Ok(token) => token,
                Err(e) => return self.error(e),
            };

            match token {
                Lexeme::Scalar(scalar) => match self.context {
                    Context::Root | Context::ArrayBegin | Context::ArrayNext | Context::FieldValue => {
                        self.value_done();
                        return Some(Ok(Item::Scalar(scalar)));
                    }
                    Context::ObjectBegin | Context::ObjectNext => {
                        if let Scalar::String(s) = scalar {
                            self.context = Context::FieldSeparator;
                            return Some(Ok(Item::Field(s)));
                        }
                        return self.error(ErrorKind::UnexpectedToken);
                    }
                    _ => return self.error(ErrorKind::UnexpectedToken),
                },
                Lexeme::Comma => match self.context {
                    Context::ArrayDelimiter => self.context = Context::ArrayNext,
                    Context::ObjectDelimiter => self.context = Context::ObjectNext,
                    _ => return self.error(ErrorKind::UnexpectedToken),
                },
                Lexeme::Colon => match self.context {
                    Context::FieldSeparator => self.context = Context::FieldValue,
                    _ => return self.error(ErrorKind::UnexpectedToken),
                },
                Lexeme::BraceOpen => match self.context {
                    Context::Root | Context::ArrayBegin | Context::ArrayNext | Context::FieldValue => {
                        return self.open(false);
                    }
                    _ => return self.error(ErrorKind::UnexpectedToken),
                },
                Lexeme::BracketOpen => match self.context {
                    Context::Root | Context::ArrayBegin | Context::ArrayNext | Context::FieldValue => {
                        return self.open(true);
                    }
                    _ => return self.error(ErrorKind::UnexpectedToken),
                },
                Lexeme::BraceClose => match self.context {
                    Context::ObjectBegin | Context::ObjectDelimiter => return self.close(false),
                    _ => return self.error(ErrorKind::UnexpectedToken),
                },
                Lexeme::BracketClose => match self.context {
                    Context::ArrayBegin | Context::ArrayDelimiter => return self.close(true),
                    _ => return self.error(ErrorKind::UnexpectedToken),
                },
            }
        }

        if !self.stack.is_empty() {
            self.stack = BitStack::new();
            self.context = Context::Root;
            return self.error(ErrorKind::UnexpectedEof);
        }

        None
    }
}

// ---

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Context {
    Root,
    ArrayBegin,
    ArrayDelimiter,
    ArrayNext,
    ObjectBegin,
    ObjectDelimiter,
    ObjectNext,
    FieldSeparator,
    FieldValue,
}

// ---

// One bit per open container, `true` for arrays.
#[derive(Debug, Clone)]
struct BitStack {
    bits: u128,
    len: u8,
}

impl BitStack {
    #[inline]
    fn new() -> Self {
        Self { bits: 0, len: 0 }
    }

    #[inline]
    fn push(&mut self, bit: bool) -> Option<()> {
        if self.len as usize == MAX_DEPTH {
            return None;
        }

        self.bits = (self.bits << 1) | (bit as u128);
        self.len += 1;
        Some(())
    }

    #[inline]
    fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }

        let result = (self.bits & 1) == 1;
        self.bits >>= 1;
        self.len -= 1;
        Some(result)
    }

    #[inline]
    fn peek(&self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }

        Some((self.bits & 1) == 1)
    }

    #[inline]
    fn len(&self) -> u8 {
        self.len
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len == 0
    }
}
