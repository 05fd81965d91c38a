use crate::{error::EndpointError, sink::MessageSink};
use std::{
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};

/// Idle window after which a cached session is dropped and transparently
/// re-established on the next send.
pub const EXPIRES_AFTER: Duration = Duration::from_secs(30);

///
/// Transport
///
/// Pluggable session factory for one queue provider. Implementations own
/// credentials and provider configuration; `QueueConn` owns the lifecycle.
///

pub trait Transport {
    type Session: Session;

    fn connect(&self) -> Result<Self::Session, EndpointError>;
}

///
/// Session
///

pub trait Session {
    fn deliver(&mut self, msg: &str) -> Result<(), EndpointError>;
}

struct ConnState<S> {
    session: Option<S>,
    last_used: Instant,
    retired: bool,
}

///
/// QueueConn
///
/// Lazily connecting, idle-expiring queue connection. Expiry is checked on
/// access against a monotonic clock under one lock; there is no background
/// timer. A send on an idle-expired connector recreates the session before
/// attempting delivery — messages are never silently dropped. Only an
/// explicit [`QueueConn::retire`] makes subsequent sends fail.
///

pub struct QueueConn<T: Transport> {
    transport: T,
    expires_after: Duration,
    state: Mutex<ConnState<T::Session>>,
}

impl<T: Transport> QueueConn<T> {
    pub fn new(transport: T) -> Self {
        Self::with_expiry(transport, EXPIRES_AFTER)
    }

    pub fn with_expiry(transport: T, expires_after: Duration) -> Self {
        Self {
            transport,
            expires_after,
            state: Mutex::new(ConnState {
                session: None,
                last_used: Instant::now(),
                retired: false,
            }),
        }
    }

    /// Send one message, establishing or re-establishing the session first
    /// when none is cached or the idle window has elapsed.
    pub fn send(&self, msg: &str) -> Result<(), EndpointError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if state.retired {
            return Err(EndpointError::ConnectionExpired);
        }

        let now = Instant::now();
        if now.duration_since(state.last_used) > self.expires_after {
            // Stale session; fall through to the lazy reconnect below.
            state.session = None;
        }
        state.last_used = now;

        if state.session.is_none() {
            state.session = Some(self.transport.connect()?);
        }
        match state.session.as_mut() {
            Some(session) => session.deliver(msg),
            // Unreachable: a session was established above.
            None => Err(EndpointError::Connect("session not established".to_string())),
        }
    }

    /// Whether a send would have to reconnect (idle window elapsed) or fail
    /// (retired). Drops a stale session as a side effect.
    pub fn is_expired(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.retired {
            return true;
        }
        if Instant::now().duration_since(state.last_used) > self.expires_after {
            state.session = None;
            return true;
        }
        false
    }

    /// Retire the connector. The cached session is released and every later
    /// send fails with [`EndpointError::ConnectionExpired`].
    pub fn retire(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.retired = true;
        state.session = None;
    }
}

impl<T: Transport> MessageSink for QueueConn<T> {
    fn send(&self, msg: &str) -> Result<(), EndpointError> {
        Self::send(self, msg)
    }
}
