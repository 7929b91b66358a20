//! # Backend configuration
//!
//! [`BackendConfig`] names the remote database-as-a-service endpoint and its
//! public API key. It ships with placeholder values; until both are replaced the
//! backend is considered **unconfigured** and every operation runs against the
//! fallback store.
//!
//! ```toml
//! [backend]
//! url = "https://abcd.supabase.co"
//! anon_key = "eyJhbGciOi..."
//! ```
//!
//! The struct derives `Default` with the placeholders, so a missing config
//! section is equivalent to "use sample data".

use serde::{Deserialize, Serialize};

/// Placeholder URL shipped in fresh installs.
pub const PLACEHOLDER_URL: &str = "https://your-project.supabase.co";
/// Placeholder key shipped in fresh installs.
pub const PLACEHOLDER_ANON_KEY: &str = "your-anon-key-here";

/// Remote backend endpoint and credentials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_anon_key")]
    pub anon_key: String,
}

fn default_url() -> String {
    PLACEHOLDER_URL.to_string()
}

fn default_anon_key() -> String {
    PLACEHOLDER_ANON_KEY.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            anon_key: default_anon_key(),
        }
    }
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Whether real credentials have been filled in.
    pub fn is_configured(&self) -> bool {
        let url = self.url.trim();
        let key = self.anon_key.trim();
        !url.is_empty()
            && !key.is_empty()
            && !url.contains("your-project")
            && key != PLACEHOLDER_ANON_KEY
    }

    /// Base of the REST interface: `<url>/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim().trim_end_matches('/'))
    }
}
