//! Delivery endpoints for Fenceline query and notification output.
//!
//! Engine code never talks to a queue provider directly; everything flows
//! through the [`MessageSink`] boundary. [`QueueConn`] adds lazy session
//! establishment with idle expiry on top of a pluggable [`Transport`].

pub mod config;
pub mod error;
pub mod memory;
pub mod queue;
pub mod sink;

pub use config::QueueConfig;
pub use error::EndpointError;
pub use memory::MemorySink;
pub use queue::{EXPIRES_AFTER, QueueConn, Session, Transport};
pub use sink::MessageSink;
