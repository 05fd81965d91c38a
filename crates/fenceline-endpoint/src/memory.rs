use crate::{error::EndpointError, sink::MessageSink};
use std::sync::{Mutex, PoisonError};

///
/// MemorySink
///
/// In-process sink that records every message. Stock implementation for
/// tests and local development.
///

#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MessageSink for MemorySink {
    fn send(&self, msg: &str) -> Result<(), EndpointError> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(msg.to_string());
        Ok(())
    }
}
