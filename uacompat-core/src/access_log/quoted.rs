use crate::access_log::ExtractionError;

/// Reads the double-quoted field at the start of `input`.
///
/// nginx escapes `"` and `\` (and control bytes) as `\xHH`; hand-written and
/// older logs use `\"` and `\\`. Both forms are decoded for ASCII bytes, any
/// other escape sequence is kept as written.
///
/// Returns the unescaped content and the remainder after the closing quote.
pub(crate) fn read_quoted<'a>(
    input: &'a str,
    field: &'static str,
) -> Result<(String, &'a str), ExtractionError> {
    let Some(body) = input.strip_prefix('"') else {
        return Err(ExtractionError::MissingField { field });
    };

    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((out, &body[i + 1..])),
            '\\' => match chars.next() {
                Some((_, '"')) => out.push('"'),
                Some((_, '\\')) => out.push('\\'),
                Some((j, 'x')) => match decode_hex_byte(&body[j + 1..]) {
                    Some(byte) => {
                        out.push(char::from(byte));
                        chars.next();
                        chars.next();
                    }
                    None => out.push_str("\\x"),
                },
                Some((_, other)) => {
                    out.push('\\');
                    out.push(other);
                }
                None => break,
            },
            _ => out.push(c),
        }
    }

    Err(ExtractionError::UnterminatedQuote { field })
}

fn decode_hex_byte(s: &str) -> Option<u8> {
    let digits = s.get(..2)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = u8::from_str_radix(digits, 16).ok()?;
    byte.is_ascii().then_some(byte)
}
