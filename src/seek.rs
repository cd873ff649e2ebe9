// local imports
use crate::{error::Result, path::Path, stream::TokenStream, token::Token};

// ---

/// Seeks the field addressed by the `.`-separated `path` and positions the cursor at its value.
///
/// Returns the value token, or `None` if the field was not found.
/// A blank path performs no seek at all and returns `None`.
pub fn seek<S>(path: &str, stream: &mut S) -> Result<Option<Token>>
where
    S: TokenStream + ?Sized,
{
    let path = Path::parse(path);
    if path.is_empty() {
        return Ok(None);
    }

    seek_path(stream, path.segments())
}

/// Seeks the field addressed by the given path segments, see [`seek`].
pub fn seek_path<S, T>(stream: &mut S, path: &[T]) -> Result<Option<Token>>
where
    S: TokenStream + ?Sized,
    T: AsRef<str>,
{
    seek_any(stream, path, None)
}

/// Seeks whichever of the two candidate paths is found first and positions the cursor at its value.
///
/// Fields not leading to either candidate are skipped without being decoded.
/// Once a field name matches a segment of one candidate, the search continues
/// inside that field's value for this candidate only, and the other candidate is abandoned.
/// If both candidates match the same field name, `path1` takes precedence.
pub fn seek_any<S, T>(stream: &mut S, path1: &[T], path2: Option<&[T]>) -> Result<Option<Token>>
where
    S: TokenStream + ?Sized,
    T: AsRef<str>,
{
    let mut candidates = [Some(Cursor::new(path1)), path2.map(Cursor::new)];
    for candidate in candidates.iter_mut() {
        if candidate.as_ref().is_some_and(|c| c.path.is_empty()) {
            *candidate = None;
        }
    }

    if stream.prime()? == Some(Token::StartArray) {
        stream.skip_children()?;
    }

    loop {
        let mut token = stream.next_token()?;
        if token == Some(Token::StartObject) {
            token = stream.next_token()?;
        }
        if token != Some(Token::FieldName) {
            log::trace!("seek: no more fields at this level");
            return Ok(None);
        }

        let hit = {
            let name = stream.current_name()?;
            candidates
                .iter()
                .position(|c| c.as_ref().is_some_and(|c| c.segment() == name))
        };

        let Some(index) = hit else {
            stream.next_token()?;
            stream.skip_children()?;
            continue;
        };

        if let Some(cursor) = candidates[index].as_mut() {
            if cursor.is_last() {
                log::trace!("seek: found candidate {}", index + 1);
                return stream.next_token();
            }
            cursor.index += 1;
        }
        candidates[1 - index] = None;
    }
}

// ---

struct Cursor<'a, T> {
    path: &'a [T],
    index: usize,
}

impl<'a, T: AsRef<str>> Cursor<'a, T> {
    #[inline]
    fn new(path: &'a [T]) -> Self {
        Self { path, index: 0 }
    }

    #[inline]
    fn segment(&self) -> &str {
        self.path[self.index].as_ref()
    }

    #[inline]
    fn is_last(&self) -> bool {
        self.index + 1 == self.path.len()
    }
}
