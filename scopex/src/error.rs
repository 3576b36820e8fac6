use scopex_core::link::LinkError;
use scopex_driver::error::ScopexDriverError;
use thiserror::Error;

/// A interface for error handling in scopex.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ScopexError {
    /// Error in the driver.
    #[error("{0}")]
    Driver(#[from] ScopexDriverError),
    /// The command needs an open connection.
    #[error("Not connected")]
    NotConnected,
}

impl From<LinkError> for ScopexError {
    fn from(e: LinkError) -> Self {
        ScopexError::Driver(ScopexDriverError::Link(e))
    }
}
