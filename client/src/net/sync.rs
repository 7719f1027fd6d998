//! Sync endpoint client: the write side of the server-visible channel.
//!
//! The endpoint answers preference writes with `Set-Cookie`, so the
//! cookie the server sees on the next navigation matches the durable
//! local channel. Calls are fire-and-forget: the caller's
//! state is already correct locally, losing a write only risks one
//! extra flash on the next full navigation, and the next successful
//! write of any kind re-syncs. Failures are logged, never retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use prefs::RemoteChannel;

/// Push one preference value to `POST /api/prefs`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn push_pref(key: &str, value: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct PrefWrite<'a> {
            key: &'a str,
            value: &'a str,
        }
        let resp = gloo_net::http::Request::post("/api/prefs")
            .json(&PrefWrite { key, value })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sync rejected: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Ok(())
    }
}

/// Drop one preference cookie via `DELETE /api/prefs/{key}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn clear_pref(key: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/prefs/{key}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("clear rejected: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Ok(())
    }
}

/// [`RemoteChannel`] over the sync endpoint. Each call spawns a local
/// task and discards its result after logging; never turn these into
/// blocking awaits.
pub struct HttpRemote;

impl RemoteChannel for HttpRemote {
    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let key = key.to_owned();
            let value = value.to_owned();
            leptos::task::spawn_local(async move {
                if let Err(e) = push_pref(&key, &value).await {
                    log::warn!("pref sync for {key} failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let key = key.to_owned();
            leptos::task::spawn_local(async move {
                if let Err(e) = clear_pref(&key).await {
                    log::warn!("pref clear for {key} failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
