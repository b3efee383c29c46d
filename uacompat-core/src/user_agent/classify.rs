use crate::user_agent::{
    ClassifiedRecord, EngineEquivalent, RuleRole, SIGNATURES, SignatureRule,
};

/// Maximum length of a User-Agent string that we take into consideration.
/// Real browsers stay well below this; anything longer is matched on its prefix.
pub const MAX_USER_AGENT_LENGTH: usize = 2048;

/// Classifies a raw User-Agent string against the built-in signature table.
///
/// Never fails: strings no rule recognizes (bots, scripts, garbage) come back
/// as [`ClassifiedRecord::unknown`].
pub fn classify(ua: &str) -> ClassifiedRecord {
    classify_with(&SIGNATURES, ua)
}

/// Classifies `ua` against `rules`, which must be sorted by ascending priority.
pub fn classify_with(rules: &[SignatureRule], ua: &str) -> ClassifiedRecord {
    let scan = &ua[..scan_len(ua)];

    let mut brand: Option<(&str, u32)> = None;
    let mut engine: Option<(&str, u32)> = None;

    for rule in rules {
        let slot = match rule.role {
            RuleRole::Brand => &mut brand,
            RuleRole::Engine => &mut engine,
        };

        if slot.is_some() {
            continue;
        }

        if let Some(version) = rule.extract(scan) {
            *slot = Some((rule.display_name, version));

            // Brand rules precede the engines they build on, so the first
            // engine hit settles the scan.
            if rule.role == RuleRole::Engine {
                break;
            }
        }
    }

    let Some((equivalent_name, equivalent_version)) = engine else {
        return ClassifiedRecord::unknown(ua);
    };

    let (browser_name, browser_version) = brand.unwrap_or((equivalent_name, equivalent_version));

    ClassifiedRecord {
        browser_name: browser_name.to_string(),
        browser_version: Some(browser_version),
        equivalent: Some(EngineEquivalent {
            name: equivalent_name.to_string(),
            version: equivalent_version,
        }),
        ua_string: ua.to_string(),
    }
}

/// Length of the prefix that gets scanned: at most [`MAX_USER_AGENT_LENGTH`]
/// bytes, cut back to a character boundary.
fn scan_len(ua: &str) -> usize {
    if ua.len() <= MAX_USER_AGENT_LENGTH {
        return ua.len();
    }

    (0..=MAX_USER_AGENT_LENGTH)
        .rev()
        .find(|&i| ua.is_char_boundary(i))
        .unwrap_or(0)
}
