use thiserror::Error;

/// Reasons a breach lookup can fail. These never escape [`BreachClient`](crate::BreachClient),
/// they are folded into [`BreachCount::Failed`](crate::BreachCount::Failed).
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum BreachError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("Malformed count in breach response: {0:?}")]
    MalformedCount(String),
    #[error("Lookup cancelled")]
    Cancelled,
}
