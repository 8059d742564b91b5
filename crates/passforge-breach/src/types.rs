use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BreachError;

/// Integer returned by [`BreachCount::sentinel`] when the lookup failed.
pub const LOOKUP_FAILED: i64 = -1;

/// Result of checking a password against the breach corpus.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "type", content = "value")]
pub enum BreachCount {
    /// Successfully checked, seen this many times. Zero means the password is not in the corpus.
    Found(u32),
    /// The lookup could not be completed, with a description of what went wrong
    Failed(String),
}

impl BreachCount {
    /// The count, or [`LOOKUP_FAILED`] if the lookup failed.
    pub fn sentinel(&self) -> i64 {
        match self {
            BreachCount::Found(count) => i64::from(*count),
            BreachCount::Failed(_) => LOOKUP_FAILED,
        }
    }

    /// The count if the lookup succeeded.
    pub fn count(&self) -> Option<u32> {
        match self {
            BreachCount::Found(count) => Some(*count),
            BreachCount::Failed(_) => None,
        }
    }

    /// Whether the lookup failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, BreachCount::Failed(_))
    }
}

impl From<Result<u32, BreachError>> for BreachCount {
    fn from(result: Result<u32, BreachError>) -> Self {
        match result {
            Ok(count) => BreachCount::Found(count),
            Err(e) => {
                warn!("Breach lookup failed: {e}");
                BreachCount::Failed(e.to_string())
            }
        }
    }
}
