use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default base URL of the Have I Been Pwned "Pwned Passwords" range API.
pub const DEFAULT_BREACH_API_URL: &str = "https://api.pwnedpasswords.com";

/// Basic client behavior settings. These settings specify the targets and behavior of the
/// passforge [`Client`](crate::Client). They are optional and uneditable once the client is
/// initialized.
///
/// Defaults to
///
/// ```
/// # use passforge_core::ClientSettings;
/// let settings = ClientSettings {
///     breach_api_url: "https://api.pwnedpasswords.com".to_string(),
///     user_agent: "Passforge Rust-SDK".to_string(),
///     add_padding: false,
///     timeout_secs: None,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the breach lookup service. Defaults to `https://api.pwnedpasswords.com`
    pub breach_api_url: String,
    /// The user_agent sent with every request. Defaults to `Passforge Rust-SDK`
    pub user_agent: String,
    /// Ask the breach service to pad its responses with decoy suffixes, hiding the real response
    /// size from network observers. Decoys always carry a count of zero.
    pub add_padding: bool,
    /// Overall request timeout in seconds. `None` means requests never time out on their own.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            breach_api_url: DEFAULT_BREACH_API_URL.into(),
            user_agent: "Passforge Rust-SDK".into(),
            add_padding: false,
            timeout_secs: None,
        }
    }
}

impl ClientSettings {
    /// Base url without any trailing slash, ready to have paths appended.
    pub fn breach_base_url(&self) -> &str {
        self.breach_api_url.trim_end_matches('/')
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
