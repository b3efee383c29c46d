use crate::query::{ClauseFault, Operator, Predicate, QuerySyntaxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Ident,
    Op(Operator),
    Number,
    Other,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    /// Byte offset into the clause.
    start: usize,
}

/// Parses a comma-separated query. An empty (or all-whitespace) query is the
/// empty predicate list.
pub fn parse_query(query: &str) -> Result<Vec<Predicate>, QuerySyntaxError> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    query.split(',').map(parse_clause).collect()
}

/// Parses a single `<browser><op><version>` clause.
pub fn parse_clause(clause: &str) -> Result<Predicate, QuerySyntaxError> {
    let fail = |fault| QuerySyntaxError {
        clause: clause.trim().to_string(),
        fault,
    };

    let tokens = tokenize(clause);

    match tokens.as_slice() {
        [] => Err(fail(ClauseFault::Empty)),
        [first, ..] if first.kind != TokenKind::Ident => Err(fail(ClauseFault::MissingBrowser)),
        [_] => Err(fail(ClauseFault::MissingOperator)),
        [_, second, ..] if !matches!(second.kind, TokenKind::Op(_)) => {
            Err(fail(ClauseFault::MissingOperator))
        }
        [_, _] => Err(fail(ClauseFault::MissingVersion)),
        [name, op, version, rest @ ..] => {
            let TokenKind::Op(operator) = op.kind else {
                return Err(fail(ClauseFault::MissingOperator));
            };

            match version.kind {
                TokenKind::Number => {}
                TokenKind::Op(_) => {
                    return Err(fail(ClauseFault::UnexpectedOperator(
                        version.text.to_string(),
                    )));
                }
                _ => {
                    return Err(fail(ClauseFault::InvalidVersion(
                        clause[version.start..].trim().to_string(),
                    )));
                }
            }

            if let Some(extra) = rest.first() {
                return Err(fail(ClauseFault::TrailingInput(
                    clause[extra.start..].trim().to_string(),
                )));
            }

            let version = version
                .text
                .parse::<u32>()
                .map_err(|_| fail(ClauseFault::InvalidVersion(version.text.to_string())))?;

            Ok(Predicate::new(name.text, operator, version))
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | '(')
}

/// Browser names may contain spaces and parentheses, e.g. `edge (legacy)`.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ' ' | '(' | ')')
}

fn tokenize(clause: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < clause.len() {
        let rest = &clause[pos..];
        let Some(c) = rest.chars().next() else {
            break;
        };

        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        let (kind, len) = if is_ident_start(c) {
            let len = rest.find(|c| !is_ident_continue(c)).unwrap_or(rest.len());
            (TokenKind::Ident, rest[..len].trim_end().len())
        } else if c.is_ascii_digit() {
            let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            (TokenKind::Number, len)
        } else if let Some(op) = Operator::LONGEST_FIRST
            .into_iter()
            .find(|op| rest.starts_with(op.as_str()))
        {
            (TokenKind::Op(op), op.as_str().len())
        } else {
            (TokenKind::Other, c.len_utf8())
        };

        tokens.push(Token {
            kind,
            text: &rest[..len],
            start: pos,
        });
        pos += len;
    }

    tokens
}
