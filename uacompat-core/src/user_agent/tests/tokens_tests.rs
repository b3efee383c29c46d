use crate::user_agent::{ProductToken, parse_product_tokens};
use pretty_assertions::assert_eq;

#[test]
fn parse_tokens_with_nested_comment() {
    // Arrange
    let ua = "Mozilla/5.0 (FooOS; x64; BarPhone (6)) ShinyBrowser/2.0";

    // Act
    let tokens = parse_product_tokens(ua);

    // Assert
    assert_eq!(
        tokens,
        vec![
            ProductToken {
                name: "Mozilla",
                version: Some("5.0"),
                comment: Some("FooOS; x64; BarPhone (6)"),
            },
            ProductToken {
                name: "ShinyBrowser",
                version: Some("2.0"),
                comment: None,
            },
        ]
    );
}

#[test]
fn parse_multi_word_product_names() {
    let tokens = parse_product_tokens("Mobile Safari/537.36");

    assert_eq!(tokens[0].name, "Mobile Safari");
    assert_eq!(tokens[0].version, Some("537.36"));
}

#[test]
fn parse_product_without_version() {
    let tokens = parse_product_tokens("Mozilla/5.0 (X11) like Gecko");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].name, "like Gecko");
    assert_eq!(tokens[1].version, None);
}

#[test]
fn parse_unterminated_comment_runs_to_end() {
    let tokens = parse_product_tokens("Mozilla/5.0 (X11; Linux");

    assert_eq!(tokens[0].comment, Some("X11; Linux"));
}

#[test]
fn parse_stops_at_unexpected_character() {
    let tokens = parse_product_tokens("+++");

    assert!(tokens.is_empty());
}
