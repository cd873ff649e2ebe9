// std imports
use std::io::{BufRead, Write};

// local imports
use crate::{
    error::*,
    input::InputReference,
    json::Parser,
    path::Path,
    seek::seek_any,
    token::Value,
    values::{read_value, values},
};

// ---

/// What to extract from each record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Extract all of the paths in a single pass.
    Values(Vec<String>),
    /// Seek the first of two alternative paths.
    Seek { path: Path, alt: Option<Path> },
}

pub struct Options {
    pub mode: Mode,
    pub delimiter: String,
    pub not_found: String,
    pub strict: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn run<W: Write + ?Sized>(&self, inputs: &[InputReference], output: &mut W) -> Result<()> {
        for input in inputs {
            log::debug!("process {}", input.description());
            self.process(&input.description(), input.open()?, output)?;
        }
        Ok(())
    }

    /// Processes newline-delimited records from `input`, writing one line per record to `output`.
    pub fn process<R: BufRead, W: Write + ?Sized>(&self, name: &str, mut input: R, output: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        let mut line = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line += 1;

            let record = buf.trim_ascii();
            if record.is_empty() {
                continue;
            }

            match self.process_record(record, output) {
                Ok(()) => {}
                Err(e) if e.is_record_error() && !self.options.strict => {
                    log::warn!("{}:{}: skipped malformed record: {}", name, line, e);
                }
                Err(e) if e.is_record_error() => {
                    return Err(Error::Record {
                        input: name.into(),
                        line,
                        source: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        log::debug!("{}: {} lines processed", name, line);
        Ok(())
    }

    fn process_record<W: Write + ?Sized>(&self, record: &[u8], output: &mut W) -> Result<()> {
        let mut parser = Parser::new(std::str::from_utf8(record)?);

        match &self.options.mode {
            Mode::Values(paths) => {
                let results = values(&mut parser, paths)?;
                for (i, result) in results.iter().enumerate() {
                    if i != 0 {
                        output.write_all(self.options.delimiter.as_bytes())?;
                    }
                    self.write_result(output, result.as_ref())?;
                }
            }
            Mode::Seek { path, alt } => {
                let value = match seek_any(&mut parser, path.segments(), alt.as_ref().map(Path::segments))? {
                    Some(_) => read_value(&mut parser)?,
                    None => None,
                };
                self.write_result(output, value.as_ref())?;
            }
        }

        output.write_all(b"\n")?;
        Ok(())
    }

    #[inline]
    fn write_result<W: Write + ?Sized>(&self, output: &mut W, value: Option<&Value>) -> Result<()> {
        match value {
            Some(value) => write!(output, "{}", value)?,
            None => output.write_all(self.options.not_found.as_bytes())?,
        }
        Ok(())
    }
}
