/// Sentinel browser name for User-Agents no signature recognizes.
pub const UNKNOWN_BROWSER: &str = "Unknown";

/// The engine-owning browser a User-Agent is equivalent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEquivalent {
    pub name: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub browser_name: String,
    pub browser_version: Option<u32>,
    /// Name and version are resolved together or not at all.
    pub equivalent: Option<EngineEquivalent>,
    pub ua_string: String,
}

impl ClassifiedRecord {
    pub fn unknown(ua_string: impl Into<String>) -> Self {
        Self {
            browser_name: UNKNOWN_BROWSER.to_string(),
            browser_version: None,
            equivalent: None,
            ua_string: ua_string.into(),
        }
    }

    /// A record counts toward statistics only when its engine was resolved.
    pub fn is_valid(&self) -> bool {
        self.equivalent.is_some()
    }

    pub fn equivalent_name(&self) -> Option<&str> {
        self.equivalent.as_ref().map(|e| e.name.as_str())
    }

    pub fn equivalent_version(&self) -> Option<u32> {
        self.equivalent.as_ref().map(|e| e.version)
    }
}
