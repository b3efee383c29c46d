use crate::user_agent::{
    ClassifiedRecord, EngineEquivalent, MAX_USER_AGENT_LENGTH, UNKNOWN_BROWSER, classify,
};
use pretty_assertions::assert_eq;

fn assert_classified(
    ua: &str,
    browser: (&str, u32),
    equivalent: (&str, u32),
) {
    // Act
    let record = classify(ua);

    // Assert
    assert_eq!(
        record,
        ClassifiedRecord {
            browser_name: browser.0.to_string(),
            browser_version: Some(browser.1),
            equivalent: Some(EngineEquivalent {
                name: equivalent.0.to_string(),
                version: equivalent.1,
            }),
            ua_string: ua.to_string(),
        }
    );
}

fn assert_unknown(ua: &str) {
    let record = classify(ua);

    assert_eq!(record, ClassifiedRecord::unknown(ua));
    assert_eq!(record.browser_name, UNKNOWN_BROWSER);
    assert!(!record.is_valid());
}

//-----------------------------------------------------------------------------
// Engine-owning browsers
//-----------------------------------------------------------------------------
#[test]
fn classify_chrome_desktop() {
    assert_classified(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/95.0.4638.69 Safari/537.36",
        ("Chrome", 95),
        ("Chrome", 95),
    );
}

#[test]
fn classify_headless_chrome() {
    assert_classified(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) HeadlessChrome/119.0.6045.105 Safari/537.36",
        ("Chrome", 119),
        ("Chrome", 119),
    );
}

#[test]
fn classify_firefox() {
    assert_classified(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:92.0) Gecko/20100101 Firefox/92.0",
        ("Firefox", 92),
        ("Firefox", 92),
    );
}

#[test]
fn classify_firefox_prerelease_suffix() {
    assert_classified(
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0b3",
        ("Firefox", 121),
        ("Firefox", 121),
    );
}

#[test]
fn classify_safari_desktop_uses_version_token() {
    assert_classified(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.1 Safari/605.1.15",
        ("Safari", 15),
        ("Safari", 15),
    );
}

#[test]
fn classify_safari_ios() {
    assert_classified(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Mobile/15E148 Safari/604.1",
        ("Safari", 14),
        ("Safari", 14),
    );
}

#[test]
fn classify_ios_webview_from_os_version() {
    assert_classified(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 15_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 Instagram 216.0.0.12.135",
        ("Safari", 15),
        ("Safari", 15),
    );
}

#[test]
fn classify_ipad_webview_from_os_version() {
    assert_classified(
        "Mozilla/5.0 (iPad; CPU OS 13_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148",
        ("Safari", 13),
        ("Safari", 13),
    );
}

#[test]
fn classify_ios_desktop_mode_from_macos_version() {
    assert_classified(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_6) AppleWebKit/605.1.15 (KHTML, like Gecko)",
        ("Safari", 14),
        ("Safari", 14),
    );
}

#[test]
fn classify_old_macos_webkit_maps_minor_version() {
    assert_classified(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) AppleWebKit/605.1.15 (KHTML, like Gecko)",
        ("Safari", 13),
        ("Safari", 13),
    );
}

#[test]
fn classify_internet_explorer_11() {
    assert_classified(
        "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko",
        ("Internet Explorer", 11),
        ("Internet Explorer", 11),
    );
}

#[test]
fn classify_internet_explorer_10() {
    assert_classified(
        "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0)",
        ("Internet Explorer", 10),
        ("Internet Explorer", 10),
    );
}

#[test]
fn classify_legacy_edge_before_chrome() {
    assert_classified(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/70.0.3538.102 Safari/537.36 Edge/18.19042",
        ("Edge (Legacy)", 18),
        ("Edge (Legacy)", 18),
    );
}

//-----------------------------------------------------------------------------
// Brands on a borrowed engine
//-----------------------------------------------------------------------------
#[test]
fn classify_edge_resolves_to_chrome_engine_version() {
    // Edge's own version deliberately differs from the Chrome token.
    assert_classified(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.45 Safari/537.36 Edg/95.0.1020.53",
        ("Edge", 95),
        ("Chrome", 96),
    );
}

#[test]
fn classify_opera() {
    assert_classified(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/94.0.4606.81 Safari/537.36 OPR/80.0.4170.63",
        ("Opera", 80),
        ("Chrome", 94),
    );
}

#[test]
fn classify_samsung_internet() {
    assert_classified(
        "Mozilla/5.0 (Linux; Android 11; SAMSUNG SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/15.0 Chrome/90.0.4430.210 Mobile Safari/537.36",
        ("Samsung Internet", 15),
        ("Chrome", 90),
    );
}

#[test]
fn classify_chrome_ios_resolves_to_safari() {
    assert_classified(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/86.0.4240.93 Mobile/15E148 Safari/604.1",
        ("Chrome (iOS)", 86),
        ("Safari", 14),
    );
}

#[test]
fn classify_firefox_ios_resolves_to_safari() {
    assert_classified(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 15_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) FxiOS/39.0 Mobile/15E148 Safari/605.1.15",
        ("Firefox (iOS)", 39),
        ("Safari", 15),
    );
}

#[test]
fn classify_android_webview_prefers_chrome_over_version() {
    assert_classified(
        "Mozilla/5.0 (Linux; Android 10; K; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/103.0.5060.71 Mobile Safari/537.36",
        ("Chrome", 103),
        ("Chrome", 103),
    );
}

//-----------------------------------------------------------------------------
// Unknown
//-----------------------------------------------------------------------------
#[test]
fn classify_crawler_as_unknown() {
    assert_unknown("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)");
}

#[test]
fn classify_cli_client_as_unknown() {
    assert_unknown("curl/7.68.0");
}

#[test]
fn classify_empty_string_as_unknown() {
    assert_unknown("");
}

#[test]
fn classify_brand_without_engine_as_unknown() {
    assert_unknown("OPR/80.0.4170.63");
}

#[test]
fn classify_unparsable_version_as_unknown() {
    assert_unknown("Mozilla/5.0 Chrome/abc Firefox/");
}

#[test]
fn classify_marker_inside_other_token_is_ignored() {
    assert_unknown("NotChrome/95.0 XFirefox/92.0");
}

#[test]
fn classify_keeps_overlong_user_agent_intact() {
    // Arrange
    let ua = format!("Firefox/92.0 {}", "x".repeat(4096));

    // Act
    let record = classify(&ua);

    // Assert
    assert_eq!(record.equivalent_name(), Some("Firefox"));
    assert_eq!(record.ua_string, ua);
}

#[test]
fn classify_cuts_overlong_user_agent_at_char_boundary() {
    // Arrange
    let head = "Mozilla/5.0 Chrome/95.0 ";
    let ua = format!("{head}{}é{}", "x".repeat(2023), "y".repeat(100));
    assert!(!ua.is_char_boundary(MAX_USER_AGENT_LENGTH));

    // Act
    let record = classify(&ua);

    // Assert
    assert_eq!(record.browser_name, "Chrome");
    assert_eq!(record.equivalent_name(), Some("Chrome"));
    assert_eq!(record.equivalent_version(), Some(95));
    assert_eq!(record.ua_string, ua);
}
