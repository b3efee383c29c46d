/// One RFC 7231 product token: `name[/version] [(comment)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductToken<'a> {
    pub name: &'a str,
    pub version: Option<&'a str>,
    pub comment: Option<&'a str>,
}

/// Splits a User-Agent header into product tokens.
///
/// e.g. `Mozilla/5.0 (FooOS; x64; BarPhone (6)) ShinyBrowser/2.0` yields
/// `Mozilla` (version `5.0`, comment `FooOS; x64; BarPhone (6)`) and
/// `ShinyBrowser` (version `2.0`). Parsing stops at the first character that
/// cannot start a product name.
pub fn parse_product_tokens(ua: &str) -> Vec<ProductToken<'_>> {
    let mut tokens = Vec::new();
    let mut rest = ua.trim();

    loop {
        let name_len = rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | ' ' | '.')))
            .unwrap_or(rest.len());
        if name_len == 0 {
            break;
        }

        let name = rest[..name_len].trim_end();
        rest = &rest[name_len..];

        let mut version = None;
        if let Some(after) = rest.strip_prefix('/') {
            let end = after.find(' ').unwrap_or(after.len());
            version = Some(&after[..end]).filter(|v| !v.is_empty());
            rest = &after[end..];
        }
        rest = rest.trim_start();

        let mut comment = None;
        if rest.starts_with('(') {
            let (text, remainder) = split_comment(rest);
            comment = Some(text);
            rest = remainder.trim_start();
        }

        tokens.push(ProductToken {
            name,
            version,
            comment,
        });
    }

    tokens
}

/// Splits `(comment) rest` honoring nested parentheses. An unterminated
/// comment runs to the end of the input.
fn split_comment(input: &str) -> (&str, &str) {
    let mut depth = 0usize;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (&input[1..i], &input[i + 1..]);
                }
            }
            _ => {}
        }
    }

    (&input[1..], "")
}
