use crate::error::EndpointError;

///
/// MessageSink
///
/// Delivery boundary for query and notification results. Callers hold a
/// sink, not a concrete queue client; failures propagate as
/// [`EndpointError`] rather than being swallowed.
///

pub trait MessageSink {
    fn send(&self, msg: &str) -> Result<(), EndpointError>;
}
