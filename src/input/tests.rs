use std::io::{Read, Write};

use assert_matches::assert_matches;

use super::*;

#[test]
fn test_from_arg() {
    assert_eq!(InputReference::from_arg("-".into()), InputReference::Stdin);
    assert_eq!(
        InputReference::from_arg("a.json".into()),
        InputReference::File("a.json".into())
    );
}

#[test]
fn test_description() {
    assert_eq!(InputReference::Stdin.description(), "<stdin>");
    assert_eq!(InputReference::File("a.json".into()).description(), "file \"a.json\"");
}

#[test]
fn test_open_file() {
    let path = std::env::temp_dir().join(format!("jseek-input-{}.json", std::process::id()));
    std::fs::File::create(&path).unwrap().write_all(b"{\"a\":1}\n").unwrap();

    let mut content = String::new();
    InputReference::File(path.clone())
        .open()
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(content, "{\"a\":1}\n");
}

#[test]
fn test_open_errors() {
    let missing = InputReference::File(std::env::temp_dir().join("jseek-definitely-missing.json"));
    assert_matches!(missing.open().err(), Some(e) if e.kind() == io::ErrorKind::NotFound);

    let dir = InputReference::File(std::env::temp_dir());
    assert_matches!(dir.open().err(), Some(e) if e.kind() == io::ErrorKind::InvalidInput);
}
