/// Read-only view of the usage-description keys the app manifest declares.
///
/// The platform kills an app that prompts for a permission without the
/// matching Info.plist key, so the broker checks this before every resolve
/// and request.
pub trait UsageDeclarations {
    fn declares(&self, key: &str) -> bool;
}

/// Fixed in-memory declaration table, handy for tests and for apps that
/// know their manifest at build time.
#[derive(Debug, Clone, Default)]
pub struct StaticDeclarations {
    keys: Vec<String>,
}

impl StaticDeclarations {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// A table declaring nothing at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl UsageDeclarations for StaticDeclarations {
    fn declares(&self, key: &str) -> bool {
        self.keys.iter().any(|declared| declared == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_table_matches_exact_keys_only() {
        let declarations = StaticDeclarations::new(["NSCameraUsageDescription"]);
        assert!(declarations.declares("NSCameraUsageDescription"));
        assert!(!declarations.declares("NSContactsUsageDescription"));
        assert!(!StaticDeclarations::empty().declares("NSCameraUsageDescription"));
    }
}
