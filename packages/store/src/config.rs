//! # Client configuration: `smart-contacts.toml`
//!
//! Settings the browser client needs before it can talk to the API. The file
//! is optional: every section defaults, so an empty document is equivalent to
//! [`ClientConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//!
//! [ui]
//! success_message_secs = 3     # how long success banners stay up
//!
//! [upload]
//! max_image_bytes = 5242880    # profile images must be strictly smaller
//! ```
//!
//! A browser has no runtime environment, so the document is baked in at
//! compile time: [`ClientConfig::from_build_env`] parses the contents of the
//! `SMART_CONTACTS_CONFIG` variable, then lets `SMART_CONTACTS_API_URL`
//! override `api.base_url`.
//!
//! ```sh
//! SMART_CONTACTS_CONFIG="$(cat smart-contacts.toml)" dx build --release
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Presentation timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_success_message_secs")]
    pub success_message_secs: u32,
}

fn default_success_message_secs() -> u32 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_message_secs: default_success_message_secs(),
        }
    }
}

/// Client-side upload limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

fn default_max_image_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Config embedded at build time. See the module docs.
    pub fn from_build_env() -> Self {
        Self::from_sources(
            option_env!("SMART_CONTACTS_CONFIG"),
            option_env!("SMART_CONTACTS_API_URL"),
        )
    }

    /// Parse `document` (defaults when absent or unreadable), then apply the
    /// `api_url` override when it is non-blank.
    pub fn from_sources(document: Option<&str>, api_url: Option<&str>) -> Self {
        let mut config = match document {
            Some(text) => Self::from_toml(text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable client config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        };
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api.base_url = url.to_string();
        }
        config
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
