//! Dual-channel storage abstraction.
//!
//! Every preference lives in two places: a durable local channel
//! (synchronous, survives reload, private to the browser profile) and
//! a server-visible channel (a small cookie refreshed best-effort so
//! the next full navigation paints correctly). The two may disagree at
//! any instant; that disagreement is expected and transient, and the
//! hydration reconciler resolves it once per page load.
//!
//! Components above this layer never touch storage directly; all
//! access goes through these traits so the engine is testable with
//! in-memory fakes.

use thiserror::Error;

/// Error from a durable-channel mutation (quota, permissions).
///
/// Reads never error: malformed or inaccessible data reads as absent.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("durable write rejected: {0}")]
    Write(String),
    #[error("durable remove rejected: {0}")]
    Remove(String),
}

/// Durable local channel (localStorage in the browser).
pub trait LocalChannel {
    /// Synchronous read; `None` for absent or malformed entries.
    fn read(&self, key: &str) -> Option<String>;

    /// Synchronous write; last write wins, no merge.
    fn write(&self, key: &str, raw: &str) -> Result<(), ChannelError>;

    /// Remove the entry if present.
    fn remove(&self, key: &str) -> Result<(), ChannelError>;
}

/// Server-visible channel (the preference cookie).
///
/// Writes are fire-and-forget from the caller's perspective: the
/// implementation performs them asynchronously, logs failures, and
/// never retries. Losing a write only risks one extra flash on the
/// next navigation; the next successful write of any kind re-syncs.
pub trait RemoteChannel {
    fn write(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// Change notifications from *other* execution contexts.
///
/// Handlers fire when a different tab or window mutates the durable
/// channel; same-context writes must not self-notify (the browser
/// `storage` event already has this contract). Same-key notifications
/// are delivered in arrival order; no ordering is assumed across keys.
pub trait ChangeBus {
    /// Register `handler` for changes to `key`. The handler receives
    /// the new raw value, or `None` when the entry was removed.
    fn subscribe(&self, key: &'static str, handler: Box<dyn Fn(Option<String>)>);
}
