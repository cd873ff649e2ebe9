// local imports
use crate::{
    error::{Error, Result},
    generator::{Generator, JsonGenerator},
    stream::TokenStream,
    token::Token,
};

// ---

/// Copies the subtree rooted at the current token of `stream` into `generator`.
///
/// A field name is copied together with its value. On return the cursor is at the last
/// token of the subtree, i.e. the scalar itself or the closing token of the object or array,
/// so the next call to [`TokenStream::next_token`] yields whatever follows the subtree.
/// Nothing is copied if the cursor is not positioned or is at a closing token.
pub fn traverse<S, G>(stream: &mut S, generator: &mut G) -> Result<()>
where
    S: TokenStream + ?Sized,
    G: Generator + ?Sized,
{
    let Some(mut token) = stream.current_token() else {
        return Ok(());
    };
    let mut depth = 0usize;

    loop {
        match token {
            Token::StartObject => {
                generator.write_begin_object()?;
                depth += 1;
            }
            Token::StartArray => {
                generator.write_begin_array()?;
                depth += 1;
            }
            token if token.is_structure_end() && depth == 0 => {
                return Ok(());
            }
            Token::EndObject => {
                generator.write_end_object()?;
                depth -= 1;
            }
            Token::EndArray => {
                generator.write_end_array()?;
                depth -= 1;
            }
            Token::FieldName => {
                generator.write_field_name(&stream.current_name()?)?;
            }
            Token::ValueString => {
                generator.write_string(&stream.text()?)?;
            }
            Token::ValueNumber => {
                generator.write_number(stream.number_value()?)?;
            }
            Token::ValueBoolean => {
                generator.write_boolean(stream.boolean_value()?)?;
            }
            Token::ValueNull => {
                generator.write_null()?;
            }
        }

        if depth == 0 && token != Token::FieldName {
            return Ok(());
        }

        token = stream.next_token()?.ok_or(Error::UnexpectedEnd)?;
    }
}

/// Re-serializes the subtree rooted at the current token as compact JSON text.
pub fn transcode_to_string<S>(stream: &mut S) -> Result<String>
where
    S: TokenStream + ?Sized,
{
    let mut generator = JsonGenerator::new(Vec::with_capacity(256));
    traverse(stream, &mut generator)?;
    generator.flush()?;
    Ok(String::from_utf8(generator.into_inner()).map_err(|e| e.utf8_error())?)
}
