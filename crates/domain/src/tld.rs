/// Number of TLDs the registry advertised when this revision was cut.
/// Maintained by hand per registry release; the sync cycle notifies the user
/// when the live count drifts, since new TLDs may come with record-key
/// families the address rules do not know yet.
pub const EXPECTED_TLD_COUNT: usize = 39;

/// The set of naming suffixes the registry supports, replaced wholesale on
/// every refresh. Entries are stored as fetched; comparison is
/// case-insensitive and duplicates are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedTlds(Vec<String>);

impl SupportedTlds {
    pub fn new(tlds: Vec<String>) -> Self {
        Self(tlds)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Gatekeeper rule: the final `.`-separated label of `domain` must equal
    /// some entry, ignoring case. A dotless domain's whole value is the
    /// candidate label, which will almost always fail to match. The empty set
    /// matches nothing.
    pub fn matches(&self, domain: &str) -> bool {
        let candidate = domain
            .rsplit('.')
            .next()
            .unwrap_or(domain)
            .to_lowercase();
        self.0.iter().any(|tld| tld.to_lowercase() == candidate)
    }
}

impl From<Vec<String>> for SupportedTlds {
    fn from(tlds: Vec<String>) -> Self {
        Self(tlds)
    }
}
