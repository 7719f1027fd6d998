//! Reset coordinator: one logical operation clearing every registered
//! key from both channels and restoring the documented defaults.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use crate::channel::{LocalChannel, RemoteChannel};
use crate::engine::PrefsEngine;
use crate::key::PrefKey;
use crate::registry::ThemeRegistry;
use crate::state::PrefsState;

impl<L, R, G> PrefsEngine<L, R, G>
where
    L: LocalChannel,
    R: RemoteChannel,
    G: ThemeRegistry,
{
    /// Clear every key across both channels and restore defaults.
    ///
    /// A key whose durable clear errors (quota, permissions) is logged
    /// and skipped; the remaining clears still run. Partial reset is
    /// strictly better than no reset. In-memory state is replaced in a
    /// single assignment, so the UI never observes a half-reset set.
    pub fn reset_all(&mut self) {
        for key in PrefKey::ALL {
            if let Err(e) = self.local.remove(key.storage_key()) {
                log::warn!("reset: clearing {} failed: {e}", key.storage_key());
            }
            self.remote.clear(key.storage_key());
        }
        self.state = PrefsState::defaults(&self.registry);
    }
}
