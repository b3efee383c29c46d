//! User-Agent Classification
//!
//! Maps a raw User-Agent header to the browser that sent it and to the
//! *equivalent* browser: the one owning the rendering engine, whose version
//! best predicts feature support. Chromium derivatives resolve to Chrome,
//! iOS browsers to Safari.
//!
//! Resolution is a single priority-ordered scan over [`SIGNATURES`]. Brand
//! rules (Edge, Opera, Samsung Internet, ...) sit in front of the engine rules
//! they are built on, so a derivative never classifies as its base engine's
//! own browser.

pub mod bot;
mod classify;
mod record;
mod signature;
#[cfg(test)]
mod tests;
mod tokens;

pub use classify::{MAX_USER_AGENT_LENGTH, classify, classify_with};
pub use record::{ClassifiedRecord, EngineEquivalent, UNKNOWN_BROWSER};
pub use signature::{RuleRole, SIGNATURES, SignatureRule, VersionExtractor};
pub use tokens::{ProductToken, parse_product_tokens};
