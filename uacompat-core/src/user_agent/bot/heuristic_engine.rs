use crate::user_agent::{ProductToken, parse_product_tokens};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches names like "Pingdom_bot_1.0".
static EMBEDDED_BOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^a-z]bot[^a-z]").expect("bot pattern is valid"));

/// Flags a User-Agent as a bot from the names it carries.
///
/// Crawlers tend to name themselves either as a product token or, more often,
/// inside the comment of a browser-like token
/// (`Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)`).
pub struct HeuristicEngine;

impl HeuristicEngine {
    pub fn is_bot(&self, ua: &str) -> bool {
        parse_product_tokens(ua)
            .iter()
            .flat_map(candidate_terms)
            .any(looks_like_bot)
    }
}

/// Token names plus each `;`-separated comment term, with any `/version`
/// suffix dropped.
fn candidate_terms<'a>(token: &ProductToken<'a>) -> impl Iterator<Item = &'a str> {
    let comment_terms = token
        .comment
        .into_iter()
        .flat_map(|c| c.split(';'))
        .map(|term| {
            let term = term.trim();
            term.split('/').next().unwrap_or(term)
        });

    std::iter::once(token.name).chain(comment_terms)
}

fn looks_like_bot(term: &str) -> bool {
    let lower = term.to_ascii_lowercase();

    lower.ends_with("bot")
        || lower.contains("crawler")
        || lower.contains("spider")
        || EMBEDDED_BOT.is_match(&lower)
}
