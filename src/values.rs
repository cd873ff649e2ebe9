// std imports
use std::mem;

// local imports
use crate::{
    error::{Error, Result},
    path::Path,
    stream::TokenStream,
    token::{Token, Value},
    transcode::transcode_to_string,
};

// ---

/// Textual placeholder for a path that did not match anything.
pub const NOT_FOUND: &str = "(not found)";

/// Extracts the values of all `paths` from the next object of `stream` in a single forward pass.
///
/// Returns one entry per path, in the same order, `None` for paths that were not found.
/// A `null` field value is found and yields `Some(Value::Null)`.
/// Objects and arrays are captured as re-serialized JSON text.
///
/// Traversal starts at the object the cursor is positioned at, or at the next object in the stream
/// otherwise, and ends when that object is closed, leaving the cursor at its closing token.
/// Arrays are never descended into, so paths leading through array elements are never found.
/// If several paths end at the same field, its value is read only once.
/// If a field is both the end of one path and a step of another, the value is captured for the
/// former, and the latter cannot continue inside it.
/// For duplicate field names the first occurrence wins.
pub fn values<S, I>(stream: &mut S, paths: I) -> Result<Vec<Option<Value>>>
where
    S: TokenStream + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut matchers: Vec<Matcher> = paths.into_iter().map(|p| Matcher::new(p.as_ref())).collect();
    let max_nesting = matchers.iter().filter_map(Matcher::nesting).max().unwrap_or(0);
    log::debug!("values: {} paths, max nesting {}", matchers.len(), max_nesting);

    find(stream, &mut matchers, max_nesting)?;

    Ok(matchers.into_iter().map(|m| m.value).collect())
}

/// Reads the value the cursor is positioned at.
///
/// Scalars are read as is, anything else is re-serialized with the cursor left at the last token of
/// the subtree. Returns `None` if the stream is exhausted.
pub fn read_value<S>(stream: &mut S) -> Result<Option<Value>>
where
    S: TokenStream + ?Sized,
{
    let Some(token) = stream.current_token() else {
        return Ok(None);
    };

    let value = match token {
        token if !token.is_scalar() => Value::Raw(transcode_to_string(stream)?),
        Token::ValueNumber => Value::Number(stream.number_value()?),
        Token::ValueBoolean => Value::Bool(stream.boolean_value()?),
        Token::ValueString => Value::String(stream.text()?.into_owned()),
        _ => Value::Null,
    };

    Ok(Some(value))
}

// ---

struct Matcher {
    path: Path,
    value: Option<Value>,
}

impl Matcher {
    fn new(path: &str) -> Self {
        Self {
            path: Path::parse(path),
            value: None,
        }
    }

    #[inline]
    fn nesting(&self) -> Option<usize> {
        self.path.nesting()
    }

    #[inline]
    fn matches(&self, name: &str, level: usize) -> bool {
        self.value.is_none() && self.path.matches(name, level)
    }
}

// Each frame holds indices of the matchers still relevant at the corresponding nesting level,
// i.e. the ones whose segments matched every field name leading to the current object.
// An empty stack is the level before the root object.
fn find<S>(stream: &mut S, matchers: &mut [Matcher], max_nesting: usize) -> Result<()>
where
    S: TokenStream + ?Sized,
{
    let mut stack: Vec<Vec<usize>> = Vec::with_capacity(max_nesting + 1);
    // matchers that will continue inside the value of the field just seen
    let mut next_level: Vec<usize> = Vec::new();

    let mut token = stream.prime()?;

    while let Some(current) = token {
        let participants = mem::take(&mut next_level);

        match current {
            Token::StartObject if stack.is_empty() => {
                stack.push((0..matchers.len()).collect());
            }
            Token::StartObject => {
                if stack.len() <= max_nesting && !participants.is_empty() {
                    stack.push(participants);
                } else {
                    log::trace!("values: skip object at level {}", stack.len());
                    stream.skip_children()?;
                }
            }
            Token::FieldName => {
                if let Some(frame) = stack.last() {
                    let level = stack.len() - 1;
                    let mut terminal = Vec::new();
                    {
                        let name = stream.current_name()?;
                        for &i in frame {
                            if matchers[i].matches(&name, level) {
                                if matchers[i].nesting() == Some(level) {
                                    terminal.push(i);
                                } else {
                                    next_level.push(i);
                                }
                            }
                        }
                    }

                    if !terminal.is_empty() {
                        next_level.clear();
                        stream.next_token()?.ok_or(Error::UnexpectedEnd)?;
                        let value = read_value(stream)?.ok_or(Error::UnexpectedEnd)?;
                        log::trace!("values: captured {} matcher(s) at level {}", terminal.len(), level);
                        for i in terminal {
                            matchers[i].value = Some(value.clone());
                        }
                    }
                }
            }
            Token::EndObject => {
                if stack.pop().is_some() && stack.is_empty() {
                    break;
                }
            }
            Token::StartArray => {
                stream.skip_children()?;
            }
            Token::EndArray
            | Token::ValueString
            | Token::ValueNumber
            | Token::ValueBoolean
            | Token::ValueNull => {}
        }

        token = stream.next_token()?;
    }

    Ok(())
}
