// std imports
use std::io::Write;

// local imports
use crate::{error::Result, token::Number};

// ---

/// Generator is a destination for a stream of structural events.
pub trait Generator {
    fn write_begin_object(&mut self) -> Result<()>;
    fn write_end_object(&mut self) -> Result<()>;
    fn write_begin_array(&mut self) -> Result<()>;
    fn write_end_array(&mut self) -> Result<()>;
    fn write_field_name(&mut self, name: &str) -> Result<()>;
    fn write_string(&mut self, value: &str) -> Result<()>;
    fn write_number(&mut self, value: Number) -> Result<()>;
    fn write_boolean(&mut self, value: bool) -> Result<()>;
    fn write_null(&mut self) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

// ---

/// JsonGenerator writes events as compact JSON text.
///
/// Non-finite floating point numbers have no JSON representation and are written as `null`.
pub struct JsonGenerator<W> {
    writer: W,
    // one entry per open container, true while no element has been written to it
    scopes: Vec<bool>,
    after_name: bool,
}

impl<W: Write> JsonGenerator<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scopes: Vec::new(),
            after_name: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    #[inline]
    fn separate(&mut self) -> Result<()> {
        if self.after_name {
            self.after_name = false;
            return Ok(());
        }
        if let Some(first) = self.scopes.last_mut() {
            if !*first {
                self.writer.write_all(b",")?;
            }
            *first = false;
        }
        Ok(())
    }

    #[inline]
    fn begin(&mut self, delim: &[u8]) -> Result<()> {
        self.separate()?;
        self.writer.write_all(delim)?;
        self.scopes.push(true);
        Ok(())
    }

    #[inline]
    fn end(&mut self, delim: &[u8]) -> Result<()> {
        self.scopes.pop();
        self.writer.write_all(delim)?;
        Ok(())
    }
}

impl<W: Write> Generator for JsonGenerator<W> {
    fn write_begin_object(&mut self) -> Result<()> {
        self.begin(b"{")
    }

    fn write_end_object(&mut self) -> Result<()> {
        self.end(b"}")
    }

    fn write_begin_array(&mut self) -> Result<()> {
        self.begin(b"[")
    }

    fn write_end_array(&mut self) -> Result<()> {
        self.end(b"]")
    }

    fn write_field_name(&mut self, name: &str) -> Result<()> {
        self.separate()?;
        json::to_writer(&mut self.writer, name)?;
        self.writer.write_all(b":")?;
        self.after_name = true;
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        self.separate()?;
        json::to_writer(&mut self.writer, value)?;
        Ok(())
    }

    fn write_number(&mut self, value: Number) -> Result<()> {
        self.separate()?;
        match value {
            Number::Int(v) => write!(self.writer, "{}", v)?,
            Number::Long(v) => write!(self.writer, "{}", v)?,
            Number::Float(v) => json::to_writer(&mut self.writer, &v)?,
            Number::Double(v) => json::to_writer(&mut self.writer, &v)?,
            Number::BigInteger(v) => self.writer.write_all(v.as_bytes())?,
        }
        Ok(())
    }

    fn write_boolean(&mut self, value: bool) -> Result<()> {
        self.separate()?;
        self.writer.write_all(if value { "true" } else { "false" }.as_bytes())?;
        Ok(())
    }

    fn write_null(&mut self) -> Result<()> {
        self.separate()?;
        self.writer.write_all(b"null")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
