/// Key used when the caller does not ask for a license.
pub const DEFAULT_LICENSE_KEY: &str = "apache2";

/// Apache License 2.0 notice as embedded in generated headers.
///
/// The leading newline leaves a blank line under the copyright line; the
/// trailing newline puts the closing delimiter on its own line.
pub const APACHE2: &str = r#"
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#;

static BUILT_IN_LICENSES: [(&str, &str); 2] = [("apache2", APACHE2), ("none", "")];

/// LicenseRegistry - the fixed table of licenses every invocation knows about
///
/// Backed by immutable static data, so lookups need no synchronization.
pub struct LicenseRegistry;

impl LicenseRegistry {
    /// Returns the body of a built-in license
    pub fn get(key: &str) -> Option<&'static str> {
        BUILT_IN_LICENSES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, body)| *body)
    }

    pub fn contains(key: &str) -> bool {
        Self::get(key).is_some()
    }

    /// Iterates over `(key, body)` pairs in declaration order
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        BUILT_IN_LICENSES.iter().copied()
    }
}
