pub mod error;
pub mod lexer;
pub mod span;
pub mod token;

pub use error::{Error, ErrorKind};
pub use lexer::{Lexer, MAX_DEPTH};
pub use span::Span;
pub use token::{Item, Scalar, Str};
