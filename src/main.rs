// std imports
use std::{
    io::{BufWriter, Write, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use jseek::{
    App, Mode, Options, Path, Settings,
    cli::Opt,
    error::*,
    input::InputReference,
    settings::SourceFile,
};

const JSEEK_DEBUG_LOG: &str = "JSEEK_DEBUG_LOG";
const JSEEK_DEBUG_LOG_STYLE: &str = "JSEEK_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(JSEEK_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(JSEEK_DEBUG_LOG).write_style(JSEEK_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = Opt::parse();

    let configs = Settings::user_file()
        .into_iter()
        .chain(opt.config.iter().map(SourceFile::new));
    let settings = Settings::load(configs)?;
    log::debug!("settings: {:?}", settings);

    let mode = match opt.seek {
        Some(path) => Mode::Seek {
            path: Path::parse(&path),
            alt: opt.alt.as_deref().map(Path::parse),
        },
        None if opt.paths.is_empty() => return Err(Error::NoPaths),
        None => Mode::Values(opt.paths),
    };

    let app = App::new(Options {
        mode,
        delimiter: opt.delimiter.unwrap_or(settings.delimiter),
        not_found: opt.not_found.unwrap_or(settings.not_found),
        strict: opt.strict || !settings.skip_invalid,
    });

    let mut inputs: Vec<_> = opt.files.into_iter().map(InputReference::from_arg).collect();
    if inputs.is_empty() {
        inputs.push(InputReference::Stdin);
    }

    let mut output = BufWriter::new(stdout().lock());
    let result = app.run(&inputs, &mut output).and_then(|_| Ok(output.flush()?));

    match result {
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
