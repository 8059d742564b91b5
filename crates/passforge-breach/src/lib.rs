#![doc = include_str!("../README.md")]

mod breach_client;
mod error;
mod hibp;
mod types;

pub use breach_client::{BreachClient, BreachClientExt};
pub use error::BreachError;
pub use tokio_util::sync::CancellationToken;
pub use types::{BreachCount, LOOKUP_FAILED};
