//! Have I Been Pwned (HIBP) range API client.
//!
//! Implements k-anonymity based password checking: only a 5 character prefix of the SHA-1 digest
//! is sent, and the suffix is matched locally.

use sha1::{Digest, Sha1};
use tracing::{debug, instrument};

use crate::error::BreachError;

/// Length of the digest prefix sent to the service.
const PREFIX_LEN: usize = 5;

/// Hash password with SHA-1 and split the uppercase hex digest into prefix/suffix.
///
/// Returns a tuple of (prefix: first 5 chars, suffix: remaining 35 chars).
pub(crate) fn hash_password_for_hibp(password: &str) -> (String, String) {
    let hash = Sha1::digest(password.as_bytes());
    let hash_hex = format!("{:X}", hash);
    let (prefix, suffix) = hash_hex.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Parse HIBP API response to find the password hash and return its breach count.
///
/// Response format: "SUFFIX:COUNT\r\n..." (e.g.,
/// "0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n...").
/// Returns 0 if the suffix is not listed, and an error if the matching line has no valid count.
///
/// Suffixes are compared after trimming and ignoring ASCII case, rather than byte for byte. The
/// computed suffix is always uppercase, so this only matters if the service answers in lowercase.
pub(crate) fn parse_hibp_response(response: &str, target_suffix: &str) -> Result<u32, BreachError> {
    let Some((_, count_str)) = response
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(hash_suffix, _)| hash_suffix.trim().eq_ignore_ascii_case(target_suffix))
    else {
        return Ok(0);
    };

    let count_str = count_str.trim();
    count_str
        .parse()
        .map_err(|_| BreachError::MalformedCount(count_str.to_string()))
}

/// Check password exposure via HIBP API using the k-anonymity model.
///
/// 1. Hash password with SHA-1
/// 2. Send only the first 5 characters of the hash to the API
/// 3. API returns all hash suffixes matching that prefix
/// 4. Check locally if the full hash exists in the results
///
/// Returns the number of times the password appears in the HIBP corpus (0 if not found).
#[instrument(skip_all)]
pub(crate) async fn check_password_exposed(
    http_client: &reqwest::Client,
    password: &str,
    hibp_base_url: &str,
) -> Result<u32, BreachError> {
    let (prefix, suffix) = hash_password_for_hibp(password);
    debug!(%prefix, "Querying breach range");

    // Query HIBP API with prefix only (k-anonymity)
    let url = format!("{}/range/{}", hibp_base_url, prefix);
    let response = http_client
        .get(&url)
        .send()
        .await
        .map_err(|e| e.without_url())?
        .error_for_status()
        .map_err(|e| e.without_url())?
        .text()
        .await
        .map_err(|e| e.without_url())?;

    parse_hibp_response(&response, &suffix)
}
