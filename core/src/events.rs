//! # Event Bus
//!
//! An owned publish/subscribe registry for UI notifications ("deposit
//! landed", "wallet switched networks"). Publishers and subscribers share a
//! cloned [`EventBus`] handle instead of reaching for a global; whoever
//! creates the bus decides how long it lives.
//!
//! ## Semantics
//!
//! - Listeners for an event run synchronously, in registration order.
//! - Registering the same listener twice stores it twice, and it runs
//!   twice per emit.
//! - [`EventBus::off`] removes the *first* matching registration only.
//!   Matching is by `Arc` identity, not by behaviour.
//! - A listener that returns `Err` stops the emit: later listeners for
//!   that emit don't run, and the error comes back to the publisher.
//!   There is no isolation between subscribers.
//! - Emitting an event nobody listens to is a no-op.
//!
//! Listeners are invoked on a snapshot taken when `emit` starts, outside
//! the lock. A listener may call `on`/`off` on the same bus; the change
//! takes effect from the next emit.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{trace, warn};

/// Event names the frontend publishes.
pub mod names {
    pub const WALLET_CONNECTED: &str = "wallet:connected";
    pub const WALLET_DISCONNECTED: &str = "wallet:disconnected";
    pub const NETWORK_CHANGED: &str = "network:changed";
    pub const VAULT_CREATED: &str = "vault:created";
    pub const DEPOSIT_SUCCESS: &str = "deposit:success";
    pub const WITHDRAW_SUCCESS: &str = "withdraw:success";
    pub const TRANSACTION_PENDING: &str = "transaction:pending";
    pub const TRANSACTION_CONFIRMED: &str = "transaction:confirmed";
    pub const TRANSACTION_FAILED: &str = "transaction:failed";
}

/// A registered callback. Keep the `Arc` around if you intend to call
/// [`EventBus::off`] later.
pub type Listener<P> = Arc<dyn Fn(&P) -> anyhow::Result<()> + Send + Sync>;

/// Wraps a closure as a [`Listener`].
pub fn listener<P, F>(f: F) -> Listener<P>
where
    F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Errors surfaced by [`EventBus::emit`].
#[derive(Debug, Error)]
pub enum EventBusError {
    /// A listener failed; the listeners after it were not called.
    #[error("listener #{index} for {event:?} failed: {source}")]
    ListenerFailed {
        /// Event being emitted.
        event: String,
        /// Position of the failing listener in registration order.
        index: usize,
        /// What the listener returned.
        #[source]
        source: anyhow::Error,
    },
}

/// Publish/subscribe registry keyed by event name, carrying payloads of
/// type `P`.
///
/// Cloning yields another handle to the same registry.
pub struct EventBus<P> {
    listeners: Arc<RwLock<HashMap<String, Vec<Listener<P>>>>>,
}

impl<P> Clone for EventBus<P> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<P> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for EventBus<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.listeners.read();
        let counts: HashMap<&str, usize> = map.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}

impl<P> EventBus<P> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers `listener` under `event`. Duplicates are kept.
    pub fn on(&self, event: &str, listener: Listener<P>) {
        let mut map = self.listeners.write();
        let entry = map.entry(event.to_string()).or_default();
        entry.push(listener);
        trace!(event, count = entry.len(), "listener registered");
    }

    /// Registers a closure and returns its handle for a later `off`.
    pub fn on_fn<F>(&self, event: &str, f: F) -> Listener<P>
    where
        F: Fn(&P) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let handle: Listener<P> = Arc::new(f);
        self.on(event, Arc::clone(&handle));
        handle
    }

    /// Removes the first registration of `listener` under `event`.
    ///
    /// Returns `true` if something was removed. Unknown listeners and
    /// unknown events are a no-op.
    pub fn off(&self, event: &str, listener: &Listener<P>) -> bool {
        let mut map = self.listeners.write();
        let Some(entry) = map.get_mut(event) else {
            return false;
        };
        let Some(pos) = entry.iter().position(|l| Arc::ptr_eq(l, listener)) else {
            return false;
        };
        entry.remove(pos);
        if entry.is_empty() {
            map.remove(event);
        }
        trace!(event, "listener removed");
        true
    }

    /// Calls every listener for `event` with `payload`, in registration
    /// order, stopping at the first failure.
    pub fn emit(&self, event: &str, payload: &P) -> Result<(), EventBusError> {
        let snapshot: Vec<Listener<P>> = match self.listeners.read().get(event) {
            Some(entry) => entry.clone(),
            None => return Ok(()),
        };

        trace!(event, listeners = snapshot.len(), "emitting");
        for (index, listener) in snapshot.iter().enumerate() {
            if let Err(source) = listener(payload) {
                warn!(event, index, error = %source, "listener failed, aborting emit");
                return Err(EventBusError::ListenerFailed {
                    event: event.to_string(),
                    index,
                    source,
                });
            }
        }
        Ok(())
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.read().get(event).map_or(0, Vec::len)
    }

    /// Drops every listener registered under `event`.
    pub fn clear(&self, event: &str) {
        self.listeners.write().remove(event);
    }
}
