use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleRole {
    /// Names the browser only; its engine comes from an `Engine` rule.
    Brand,
    /// Names the engine-owning browser. Also names the browser itself when no
    /// brand rule matches.
    Engine,
}

#[derive(Debug)]
pub enum VersionExtractor {
    /// Leading integer right after the marker, e.g. `Chrome/95.0.4638.69` or
    /// `iPhone OS 14_4`.
    Leading,
    /// First capture group of a pattern matched against the text after the
    /// marker.
    Pattern(Regex),
    /// Safari release shipped with the macOS version after the marker.
    MacOsSafari,
}

#[derive(Debug)]
pub struct SignatureRule {
    pub priority: u16,
    pub role: RuleRole,
    /// Any of these, found at a token boundary, identifies the rule.
    pub markers: &'static [&'static str],
    pub display_name: &'static str,
    pub version: VersionExtractor,
}

impl SignatureRule {
    fn new(
        priority: u16,
        role: RuleRole,
        markers: &'static [&'static str],
        display_name: &'static str,
        version: VersionExtractor,
    ) -> Self {
        Self {
            priority,
            role,
            markers,
            display_name,
            version,
        }
    }

    /// Major version for this rule, or `None` when no marker is present or
    /// the version does not parse.
    pub fn extract(&self, ua: &str) -> Option<u32> {
        self.markers.iter().find_map(|marker| {
            let at = find_marker(ua, marker)?;
            let tail = &ua[at + marker.len()..];

            match &self.version {
                VersionExtractor::Leading => leading_major(tail),
                VersionExtractor::Pattern(re) => re
                    .captures(tail)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| leading_major(m.as_str())),
                VersionExtractor::MacOsSafari => safari_for_macos(tail),
            }
        })
    }
}

/// The process-wide signature table, sorted by ascending priority.
pub static SIGNATURES: Lazy<Vec<SignatureRule>> = Lazy::new(|| {
    use RuleRole::{Brand, Engine};
    use VersionExtractor::{Leading, MacOsSafari, Pattern};

    let mut rules = vec![
        //---------------------------------------------------------------------
        // Brands
        //---------------------------------------------------------------------
        SignatureRule::new(10, Brand, &["Edg/", "EdgA/", "EdgiOS/"], "Edge", Leading),
        SignatureRule::new(20, Brand, &["OPR/", "OPT/"], "Opera", Leading),
        SignatureRule::new(30, Brand, &["SamsungBrowser/"], "Samsung Internet", Leading),
        SignatureRule::new(40, Brand, &["YaBrowser/"], "Yandex Browser", Leading),
        SignatureRule::new(50, Brand, &["Vivaldi/"], "Vivaldi", Leading),
        SignatureRule::new(60, Brand, &["CriOS/"], "Chrome (iOS)", Leading),
        SignatureRule::new(70, Brand, &["FxiOS/"], "Firefox (iOS)", Leading),
        //---------------------------------------------------------------------
        // Engines
        //---------------------------------------------------------------------
        // EdgeHTML. Has to precede Chrome: legacy Edge claimed Chrome for compat.
        SignatureRule::new(100, Engine, &["Edge/"], "Edge (Legacy)", Leading),
        SignatureRule::new(110, Engine, &["Firefox/"], "Firefox", Leading),
        SignatureRule::new(
            120,
            Engine,
            &["Chrome/", "HeadlessChrome/"],
            "Chrome",
            Leading,
        ),
        // Safari carries its user-facing version in `Version/`, not `Safari/`.
        SignatureRule::new(130, Engine, &["Version/"], "Safari", Leading),
        // iOS web views run the system WebKit, versioned with the OS.
        SignatureRule::new(140, Engine, &["iPhone OS ", "CPU OS "], "Safari", Leading),
        // "Request Desktop Site" on iOS sends a macOS UA with no Version/ token.
        SignatureRule::new(150, Engine, &["Mac OS X "], "Safari", MacOsSafari),
        SignatureRule::new(
            160,
            Engine,
            &["Trident/"],
            "Internet Explorer",
            Pattern(trident_rv()),
        ),
        SignatureRule::new(170, Engine, &["MSIE "], "Internet Explorer", Leading),
    ];

    rules.sort_by_key(|rule| rule.priority);
    rules
});

fn trident_rv() -> Regex {
    Regex::new(r"^[^)]*?\brv:(\d+)").expect("trident pattern is valid")
}

/// Position of the first occurrence of `marker` that starts a product token.
fn find_marker(ua: &str, marker: &str) -> Option<usize> {
    ua.match_indices(marker)
        .map(|(at, _)| at)
        .find(|&at| at_token_boundary(ua, at))
}

fn at_token_boundary(ua: &str, at: usize) -> bool {
    ua[..at]
        .chars()
        .next_back()
        .is_none_or(|c| matches!(c, ' ' | '(' | ';' | ','))
}

/// Leading integer of a version string, ignoring anything from the first
/// non-digit on (`95.0.4638` -> 95, `14_4` -> 14, `91b2` -> 91).
pub(crate) fn leading_major(version: &str) -> Option<u32> {
    let end = version
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(version.len());

    version[..end].parse().ok()
}

/// Desktop-mode WebKit UAs only carry a macOS version. 10.10 through 10.14
/// map to the minor version; 10.15 and later (the reported version has been
/// frozen since Big Sur) map to Safari 14.
fn safari_for_macos(version: &str) -> Option<u32> {
    let mut parts = version.split(['_', '.']);
    let major: u32 = parts.next()?.parse().ok()?;
    let minor = parts.next().and_then(leading_major).unwrap_or(0);

    match (major, minor) {
        (10, 10..=14) => Some(minor),
        (10, 15..) | (11.., _) => Some(14),
        _ => None,
    }
}
