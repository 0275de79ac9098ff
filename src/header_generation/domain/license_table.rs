use super::license_registry::LicenseRegistry;
use std::collections::BTreeMap;

/// LicenseTable - merged, read-only view over built-in and custom licenses
///
/// Built-ins are consulted first, so a custom entry registered under a
/// built-in key never changes what that key resolves to. This differs from
/// kubebuilder's boilerplate template, where a custom `apache2` or `none`
/// body replaces the standard text; here such an entry is kept but ignored.
#[derive(Debug, Clone, Copy)]
pub struct LicenseTable<'a> {
    custom: Option<&'a BTreeMap<String, String>>,
}

impl<'a> LicenseTable<'a> {
    pub fn new(custom: Option<&'a BTreeMap<String, String>>) -> Self {
        Self { custom }
    }

    /// Resolves a license key to its body text
    pub fn get(&self, key: &str) -> Option<&'a str> {
        LicenseRegistry::get(key).or_else(|| {
            self.custom
                .and_then(|custom| custom.get(key))
                .map(String::as_str)
        })
    }

    /// Whether `key` resolves to a body
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All resolvable keys, sorted and without duplicates
    pub fn keys(&self) -> Vec<&'a str> {
        let mut keys: Vec<&'a str> = LicenseRegistry::entries().map(|(key, _)| key).collect();
        if let Some(custom) = self.custom {
            keys.extend(custom.keys().map(String::as_str));
        }
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}
