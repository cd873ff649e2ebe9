use rstest::rstest;

use super::*;

#[rstest]
#[case("a", &["a"])]
#[case("a.b.c", &["a", "b", "c"])]
#[case(" a . b ", &["a", "b"])]
#[case("a..b.", &["a", "b"])]
#[case("", &[])]
#[case("  ", &[])]
#[case(".", &[])]
fn test_parse(#[case] input: &str, #[case] expected: &[&str]) {
    let path = Path::parse(input);
    assert_eq!(path.segments(), expected);
    assert_eq!(path.is_empty(), expected.is_empty());
}

#[test]
fn test_nesting() {
    assert_eq!(Path::parse("a").nesting(), Some(0));
    assert_eq!(Path::parse("a.b.c").nesting(), Some(2));
    assert_eq!(Path::parse("").nesting(), None);
}

#[test]
fn test_matches() {
    let path: Path = "a.b".parse().unwrap();
    assert!(path.matches("a", 0));
    assert!(path.matches("b", 1));
    assert!(!path.matches("b", 0));
    assert!(!path.matches("c", 2));
    assert_eq!(path.to_string(), "a.b");
}
