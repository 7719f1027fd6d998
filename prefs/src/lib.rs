//! Preference synchronization engine for the portfolio front-end.
//!
//! Replicates a small set of user preferences (theme, wallpaper, color
//! mode, layout mode) across three independently-writable stores: a
//! durable local channel (localStorage), a server-visible channel (a
//! cookie used for first paint), and in-memory state in possibly many
//! open tabs. Reconciliation is deliberately simple and last-writer
//! biased; the durable local channel is authoritative when the two
//! channels disagree.
//!
//! This crate is UI-framework and browser agnostic so the engine can be
//! exercised on the host with in-memory channel fakes. The `client`
//! crate supplies the browser-backed channel implementations and the
//! Leptos wiring.
//!
//! ERROR HANDLING
//! ==============
//! Preference sync is an enhancement, not a load-bearing feature, so
//! every failure mode degrades to "use the default": malformed stored
//! data reads as absent, channel write failures are logged and dropped,
//! and unknown theme or key identifiers are debug assertions that fall
//! back to defaults in release builds.

pub mod channel;
pub mod engine;
mod hydrate;
pub mod key;
pub mod registry;
mod reset;
pub mod resolve;
pub mod state;
mod sync;

#[cfg(test)]
pub(crate) mod testing;

pub use channel::{ChangeBus, ChannelError, LocalChannel, RemoteChannel};
pub use engine::PrefsEngine;
pub use key::PrefKey;
pub use registry::{ThemeRegistry, UNIVERSAL_WALLPAPER};
pub use resolve::{Resolved, ScopedEntry, ScopedMap};
pub use state::{ColorMode, LayoutMode, PrefsState, ServerSnapshot};
