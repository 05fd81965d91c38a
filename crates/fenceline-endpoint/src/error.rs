use thiserror::Error as ThisError;

///
/// EndpointError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EndpointError {
    /// The connector was retired by its owner and must be recreated; idle
    /// expiry alone never raises this.
    #[error("endpoint connection expired")]
    ConnectionExpired,

    #[error("failed to establish endpoint session: {0}")]
    Connect(String),

    #[error("failed to deliver message: {0}")]
    Deliver(String),
}
