use std::io::Write;

use assert_matches::assert_matches;

use super::*;
use crate::error::Error;

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}-{}.toml", APP_NAME, name, std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_default_settings() {
    let settings = Settings::load([]).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.delimiter, "\t");
    assert_eq!(settings.not_found, "(not found)");
    assert!(settings.skip_invalid);
}

#[test]
fn test_overlay() {
    let path = temp_config("overlay", "delimiter = \",\"\nskip-invalid = false\n");
    let settings = Settings::load([SourceFile::new(&path)]).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(settings.delimiter, ",");
    assert_eq!(settings.not_found, "(not found)");
    assert!(!settings.skip_invalid);
}

#[test]
fn test_later_file_wins() {
    let first = temp_config("first", "not-found = \"-\"\ndelimiter = \";\"\n");
    let second = temp_config("second", "not-found = \"?\"\n");
    let settings = Settings::load([SourceFile::new(&first), SourceFile::new(&second)]).unwrap();
    std::fs::remove_file(&first).ok();
    std::fs::remove_file(&second).ok();

    assert_eq!(settings.delimiter, ";");
    assert_eq!(settings.not_found, "?");
}

#[test]
fn test_missing_files() {
    let path = std::env::temp_dir().join("jseek-definitely-missing-config.toml");
    assert_matches!(Settings::load([SourceFile::new(&path)]), Err(Error::Config(_)));
    assert_eq!(
        Settings::load([SourceFile::new(&path).required(false)]).unwrap(),
        Settings::default()
    );
}

#[test]
fn test_invalid_value() {
    let path = temp_config("invalid", "skip-invalid = \"sometimes\"\n");
    let result = Settings::load([SourceFile::new(&path)]);
    std::fs::remove_file(&path).ok();
    assert_matches!(result, Err(Error::Config(_)));
}

#[test]
fn test_user_file_is_optional() {
    if let Some(file) = Settings::user_file() {
        assert!(!file.required);
        assert!(file.path.ends_with("jseek/config.toml"));
    }
}
