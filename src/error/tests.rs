use assert_matches::assert_matches;

use super::*;

#[test]
fn test_log() {
    let err = Error::Io(std::io::Error::other("test"));
    let mut buf = Vec::new();
    err.log_to(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\u{1b}[1m\u{1b}[91merror:\u{1b}[39m\u{1b}[0m test\n"
    );
}

#[test]
fn test_record_errors() {
    let err = json_lexer::Lexer::new("{").find_map(|item| item.err()).unwrap();
    let err = Error::from(err);
    assert_matches!(err, Error::Parse(json_lexer::Error { kind: json_lexer::ErrorKind::UnexpectedEof, .. }));
    assert!(err.is_record_error());
    assert!(Error::UnexpectedEnd.is_record_error());
    assert!(!Error::Io(std::io::Error::other("test")).is_record_error());
    assert!(!Error::NoPaths.is_record_error());
}

#[test]
fn test_display() {
    let err = Error::UnexpectedToken {
        expected: Token::FieldName,
        found: Some(Token::ValueNull),
    };
    assert_eq!(err.to_string(), "unexpected token Some(ValueNull), expected FieldName");
}

#[test]
fn test_record_display() {
    let err = Error::Record {
        input: "<stdin>".into(),
        line: 7,
        source: Box::new(Error::UnexpectedEnd),
    };
    assert_eq!(err.to_string(), "<stdin>:7: unexpected end of token stream");
    assert!(std::error::Error::source(&err).is_some());
}
