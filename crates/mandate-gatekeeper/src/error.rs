//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// A serialized record could not be decoded
    #[error("Invalid record payload: {0}")]
    InvalidRecord(String),
}
