use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use tracing::debug;

use crate::client::client_settings::ClientSettings;

/// The main struct to interact with passforge.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. Any state needs to live behind the `Arc`.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

#[doc(hidden)]
#[derive(Debug)]
pub struct InternalClient {
    settings: ClientSettings,
    http_client: reqwest::Client,
}

impl InternalClient {
    /// HTTP client used for requests to the breach lookup service.
    pub fn get_http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Settings this client was created with.
    pub fn get_settings(&self) -> &ClientSettings {
        &self.settings
    }
}

impl Client {
    /// Create a new passforge client. `None` uses [`ClientSettings::default`].
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();
        debug!(
            breach_api_url = %settings.breach_api_url,
            add_padding = settings.add_padding,
            "Creating client"
        );

        let mut client_builder =
            new_http_client_builder().default_headers(build_default_headers(&settings));
        if let Some(timeout) = settings.timeout() {
            client_builder = client_builder.timeout(timeout);
        }

        let http_client = client_builder
            .build()
            .expect("HTTP Client build should not fail");

        Self {
            internal: Arc::new(InternalClient {
                settings,
                http_client,
            }),
        }
    }

    /// Settings this client was created with.
    pub fn settings(&self) -> &ClientSettings {
        self.internal.get_settings()
    }
}

fn new_http_client_builder() -> reqwest::ClientBuilder {
    #[allow(unused_mut)]
    let mut client_builder = reqwest::Client::builder();

    // Enforce HTTPS for all requests in non-debug builds
    #[cfg(not(debug_assertions))]
    {
        client_builder = client_builder.https_only(true);
    }

    client_builder
}

/// Build default headers for the passforge HttpClient
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    // The range API rejects requests without a user agent
    headers.append(
        header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    if settings.add_padding {
        headers.append("Add-Padding", HeaderValue::from_static("true"));
    }

    headers
}
