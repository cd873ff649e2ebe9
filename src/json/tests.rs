use std::borrow::Cow;

use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

fn tokens(input: &str) -> Vec<Token> {
    let mut parser = Parser::new(input);
    let mut result = Vec::new();
    while let Some(token) = parser.next_token().unwrap() {
        result.push(token);
    }
    result
}

#[test]
fn test_tokens() {
    use Token::*;

    assert_eq!(
        tokens(r#"{"a":[1,"x",true,null],"b":{}}"#),
        vec![
            StartObject,
            FieldName,
            StartArray,
            ValueNumber,
            ValueString,
            ValueBoolean,
            ValueNull,
            EndArray,
            FieldName,
            StartObject,
            EndObject,
            EndObject,
        ]
    );
}

#[test]
fn test_cursor_bounds() {
    let mut parser = Parser::new("{}");
    assert_eq!(parser.current_token(), None);
    assert_eq!(parser.prime().unwrap(), Some(Token::StartObject));
    assert_eq!(parser.prime().unwrap(), Some(Token::StartObject));
    assert_eq!(parser.next_token().unwrap(), Some(Token::EndObject));
    assert_eq!(parser.next_token().unwrap(), None);
    assert_eq!(parser.current_token(), None);
    assert_eq!(parser.next_token().unwrap(), None);
}

#[test]
fn test_field_names() {
    let mut parser = Parser::new(r#"{"a":1,"q\"k":2}"#);
    parser.next_token().unwrap();
    assert_eq!(parser.next_token().unwrap(), Some(Token::FieldName));
    assert_matches!(parser.current_name().unwrap(), Cow::Borrowed("a"));
    parser.next_token().unwrap();
    assert_matches!(parser.current_name(), Err(Error::UnexpectedToken { expected: Token::FieldName, .. }));
    assert_eq!(parser.next_token().unwrap(), Some(Token::FieldName));
    assert_eq!(parser.current_name().unwrap(), "q\"k");
}

#[rstest]
#[case(r#""plain""#, "plain")]
#[case(r#""x\ny""#, "x\ny")]
#[case(r#""café""#, "café")]
#[case(r#""a\/b""#, "a/b")]
#[case("12.50", "12.50")]
#[case("false", "false")]
#[case("null", "null")]
fn test_text(#[case] input: &str, #[case] expected: &str) {
    let mut parser = Parser::new(input);
    parser.next_token().unwrap();
    assert_eq!(parser.text().unwrap(), expected);
}

#[rstest]
#[case("1", Number::Int(1))]
#[case("-0", Number::Int(0))]
#[case("-2147483648", Number::Int(i32::MIN))]
#[case("2147483648", Number::Long(2147483648))]
#[case("9223372036854775808", Number::BigInteger("9223372036854775808".into()))]
#[case("-12345678901234567890", Number::BigInteger("-12345678901234567890".into()))]
#[case("12345678901234567890.0", Number::Double(12345678901234567890.0))]
#[case("1.5", Number::Double(1.5))]
#[case("1e3", Number::Double(1000.0))]
#[case("-2.5E-1", Number::Double(-0.25))]
fn test_number_value(#[case] input: &str, #[case] expected: Number) {
    let mut parser = Parser::new(input);
    assert_eq!(parser.next_token().unwrap(), Some(Token::ValueNumber));
    assert_eq!(parser.number_value().unwrap(), expected);
}

#[test]
fn test_boolean_value() {
    let mut parser = Parser::new("[true,1]");
    parser.next_token().unwrap();
    parser.next_token().unwrap();
    assert!(parser.boolean_value().unwrap());
    parser.next_token().unwrap();
    assert_matches!(
        parser.boolean_value(),
        Err(Error::UnexpectedToken {
            expected: Token::ValueBoolean,
            found: Some(Token::ValueNumber),
        })
    );
}

#[test]
fn test_skip_children() {
    let mut parser = Parser::new(r#"{"a":{"b":[1,2,{"c":3}]},"d":4}"#);
    parser.next_token().unwrap();
    parser.next_token().unwrap();
    assert_eq!(parser.next_token().unwrap(), Some(Token::StartObject));
    assert_eq!(parser.depth(), 2);
    parser.skip_children().unwrap();
    assert_eq!(parser.current_token(), Some(Token::EndObject));
    assert_eq!(parser.depth(), 1);
    assert_eq!(parser.next_token().unwrap(), Some(Token::FieldName));
    assert_eq!(parser.current_name().unwrap(), "d");

    assert_eq!(parser.next_token().unwrap(), Some(Token::ValueNumber));
    parser.skip_children().unwrap();
    assert_eq!(parser.current_token(), Some(Token::ValueNumber));
}

#[test]
fn test_malformed() {
    let mut parser = Parser::new(r#"{"a":}"#);
    parser.next_token().unwrap();
    parser.next_token().unwrap();
    assert_matches!(parser.next_token(), Err(Error::Parse(_)));
    assert_eq!(parser.current_token(), None);

    let mut parser = Parser::new(r#"{"a":[1,2"#);
    parser.next_token().unwrap();
    parser.next_token().unwrap();
    parser.next_token().unwrap();
    assert_matches!(parser.skip_children(), Err(Error::Parse(_)));
}

#[test]
fn test_parse_number_invalid() {
    assert_matches!(parse_number("abc"), Err(Error::InvalidNumber(text)) if text == "abc");
}
