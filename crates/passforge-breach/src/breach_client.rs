use futures::{StreamExt, stream};
use passforge_core::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::{error::BreachError, hibp, types::BreachCount};

/// Maximum number of concurrent requests when checking many passwords.
const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Client for checking passwords against the breach corpus.
pub struct BreachClient {
    pub(crate) client: Client,
}

impl BreachClient {
    fn new(client: Client) -> Self {
        Self { client }
    }

    /// Check how many times `password` has been seen in known breaches.
    ///
    /// Never fails: any network error, unsuccessful status, timeout or malformed response is
    /// returned as [`BreachCount::Failed`]. A password that isn't in the corpus is
    /// `BreachCount::Found(0)`.
    #[instrument(skip_all)]
    pub async fn check(&self, password: &str) -> BreachCount {
        let settings = self.client.settings();

        hibp::check_password_exposed(
            self.client.internal.get_http_client(),
            password,
            settings.breach_base_url(),
        )
        .await
        .into()
    }

    /// Same as [`BreachClient::check`], but resolves to a failure as soon as `token` is cancelled.
    pub async fn check_with_cancellation(
        &self,
        password: &str,
        token: &CancellationToken,
    ) -> BreachCount {
        tokio::select! {
            biased;
            _ = token.cancelled() => BreachCount::from(Err(BreachError::Cancelled)),
            count = self.check(password) => count,
        }
    }

    /// Check multiple passwords concurrently.
    ///
    /// Returns one [`BreachCount`] per input, in input order. Failures are captured per password
    /// instead of failing the whole batch.
    pub async fn check_many(&self, passwords: Vec<String>) -> Vec<BreachCount> {
        debug!(count = passwords.len(), "Checking passwords");

        let futures = passwords
            .into_iter()
            .map(|password| async move { self.check(&password).await });

        // `buffered` keeps results in input order while running requests concurrently
        stream::iter(futures)
            .buffered(MAX_CONCURRENT_REQUESTS)
            .collect()
            .await
    }
}

#[allow(missing_docs)]
pub trait BreachClientExt {
    fn breach(&self) -> BreachClient;
}

impl BreachClientExt for Client {
    fn breach(&self) -> BreachClient {
        BreachClient::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use passforge_core::ClientSettings;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, path_regex},
    };

    use super::*;
    use crate::LOOKUP_FAILED;

    fn client_for(server: &MockServer) -> Client {
        Client::new(Some(ClientSettings {
            breach_api_url: server.uri(),
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_check_returns_matching_count() {
        let server = MockServer::start().await;

        // SHA1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "003D68EB55068C33ACE09247EE4C639306B:3\r\n\
                 1E4C9B93F3F0682250B6CF8331B7EE68FD8:42\r\n",
            ))
            .mount(&server)
            .await;

        let count = client_for(&server).breach().check("password").await;

        assert_eq!(count, BreachCount::Found(42));
        assert_eq!(count.sentinel(), 42);
    }

    #[tokio::test]
    async fn test_check_returns_zero_when_not_listed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("003D68EB55068C33ACE09247EE4C639306B:3\r\n"),
            )
            .mount(&server)
            .await;

        let count = client_for(&server).breach().check("password").await;

        assert_eq!(count, BreachCount::Found(0));
    }

    #[tokio::test]
    async fn test_check_server_error_is_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/range/[A-F0-9]{5}$"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let count = client_for(&server).breach().check("password").await;

        assert!(count.is_failed());
        assert_eq!(count.sentinel(), LOOKUP_FAILED);
    }

    #[tokio::test]
    async fn test_check_malformed_count_is_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("1E4C9B93F3F0682250B6CF8331B7EE68FD8:lots\r\n"),
            )
            .mount(&server)
            .await;

        let count = client_for(&server).breach().check("password").await;

        assert!(count.is_failed());
    }

    #[tokio::test]
    async fn test_check_unreachable_server_is_failure() {
        // A non-pooled server shuts down when dropped
        let server = MockServer::builder().start().await;
        let client = client_for(&server);
        drop(server);

        let count = client.breach().check("password").await;

        assert!(count.is_failed());
        assert_eq!(count.sentinel(), LOOKUP_FAILED);
    }

    #[tokio::test]
    async fn test_check_trailing_slash_in_base_url() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("1E4C9B93F3F0682250B6CF8331B7EE68FD8:1\r\n"),
            )
            .mount(&server)
            .await;

        let client = Client::new(Some(ClientSettings {
            breach_api_url: format!("{}/", server.uri()),
            ..Default::default()
        }));

        assert_eq!(client.breach().check("password").await, BreachCount::Found(1));
    }

    #[tokio::test]
    async fn test_check_with_padding_ignores_decoys() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .and(header("Add-Padding", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "0000000000000000000000000000000000A:0\r\n\
                 1E4C9B93F3F0682250B6CF8331B7EE68FD8:5\r\n\
                 FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF:0\r\n",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(Some(ClientSettings {
            breach_api_url: server.uri(),
            add_padding: true,
            ..Default::default()
        }));

        assert_eq!(client.breach().check("password").await, BreachCount::Found(5));
    }

    #[tokio::test]
    async fn test_check_timeout_is_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let client = Client::new(Some(ClientSettings {
            breach_api_url: server.uri(),
            timeout_secs: Some(1),
            ..Default::default()
        }));

        assert!(client.breach().check("password").await.is_failed());
    }

    #[tokio::test]
    async fn test_check_with_already_cancelled_token() {
        let server = MockServer::start().await;
        let token = CancellationToken::new();
        token.cancel();

        let count = client_for(&server)
            .breach()
            .check_with_cancellation("password", &token)
            .await;

        assert_eq!(count, BreachCount::Failed("Lookup cancelled".to_string()));
    }

    #[tokio::test]
    async fn test_check_cancelled_while_in_flight() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let token = CancellationToken::new();
        let cancel = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.cancel();
        });

        let count = client_for(&server)
            .breach()
            .check_with_cancellation("password", &token)
            .await;

        assert_eq!(count.sentinel(), LOOKUP_FAILED);
    }

    #[tokio::test]
    async fn test_check_with_cancellation_completes_normally() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("1E4C9B93F3F0682250B6CF8331B7EE68FD8:8\r\n"),
            )
            .mount(&server)
            .await;

        let count = client_for(&server)
            .breach()
            .check_with_cancellation("password", &CancellationToken::new())
            .await;

        assert_eq!(count, BreachCount::Found(8));
    }

    #[tokio::test]
    async fn test_check_many_keeps_order_and_captures_failures() {
        let server = MockServer::start().await;

        // SHA1("password1") = E38AD214943DAAD1D64C102FAEC29DE4AFE9DA3D
        Mock::given(method("GET"))
            .and(path("/range/E38AD"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("214943DAAD1D64C102FAEC29DE4AFE9DA3D:5\r\n"),
            )
            .mount(&server)
            .await;

        // SHA1("password2") = 2AA60A8FF7FCD473D321E0146AFD9E26DF395147
        Mock::given(method("GET"))
            .and(path("/range/2AA60"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        // SHA1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
        Mock::given(method("GET"))
            .and(path("/range/5BAA6"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&server)
            .await;

        let results = client_for(&server)
            .breach()
            .check_many(vec![
                "password1".to_string(),
                "password2".to_string(),
                "password".to_string(),
            ])
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], BreachCount::Found(5));
        assert!(results[1].is_failed());
        assert_eq!(results[2], BreachCount::Found(0));
    }

    #[tokio::test]
    async fn test_check_many_empty() {
        let client = Client::new(None);
        assert!(client.breach().check_many(vec![]).await.is_empty());
    }
}
