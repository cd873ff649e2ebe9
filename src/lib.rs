// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod generator;
pub mod input;
pub mod json;
pub mod path;
pub mod seek;
pub mod settings;
pub mod stream;
pub mod token;
pub mod transcode;
pub mod values;

// public uses
pub use app::{App, Mode, Options};
pub use error::{Error, Result};
pub use generator::{Generator, JsonGenerator};
pub use path::Path;
pub use seek::{seek, seek_any, seek_path};
pub use settings::Settings;
pub use stream::TokenStream;
pub use token::{Number, NumberType, Token, Value};
pub use transcode::{transcode_to_string, traverse};
pub use values::{NOT_FOUND, read_value, values};
