use clap::{CommandFactory, error::ErrorKind};

use super::*;

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_paths() {
    let opt = Opt::try_parse_from(["jseek", "-p", "a.b", "--path", "c", "x.json", "-"]).unwrap();
    assert_eq!(opt.paths, vec!["a.b", "c"]);
    assert_eq!(opt.seek, None);
    assert_eq!(opt.files, vec![PathBuf::from("x.json"), PathBuf::from("-")]);
    assert!(!opt.strict);
}

#[test]
fn test_seek() {
    let opt = Opt::try_parse_from(["jseek", "--seek", "a.b", "--alt", "b", "--strict"]).unwrap();
    assert!(opt.paths.is_empty());
    assert_eq!(opt.seek.as_deref(), Some("a.b"));
    assert_eq!(opt.alt.as_deref(), Some("b"));
    assert!(opt.strict);
}

#[test]
fn test_mode_required() {
    let err = Opt::try_parse_from(["jseek", "x.json"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_modes_conflict() {
    let err = Opt::try_parse_from(["jseek", "-p", "a", "-s", "b"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_alt_requires_seek() {
    let err = Opt::try_parse_from(["jseek", "-p", "a", "--alt", "b"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}
