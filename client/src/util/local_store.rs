//! Durable local channel backed by browser `localStorage`.
//!
//! Hydrate-only behavior; SSR paths read as absent and accept writes
//! as no-ops so server rendering stays deterministic. Reads never
//! error: inaccessible storage is treated the same as an empty one.

use prefs::{ChannelError, LocalChannel};

pub struct BrowserLocal;

impl LocalChannel for BrowserLocal {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), ChannelError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return Err(ChannelError::Write("localStorage unavailable".to_owned()));
            };
            storage
                .set_item(key, raw)
                .map_err(|e| ChannelError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), ChannelError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return Err(ChannelError::Remove("localStorage unavailable".to_owned()));
            };
            storage
                .remove_item(key)
                .map_err(|e| ChannelError::Remove(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
