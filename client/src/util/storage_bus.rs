//! Cross-tab change bus over the browser `storage` event.
//!
//! The platform event fires in every same-profile tab *except* the one
//! that performed the write, which is exactly the engine's
//! no-self-notification contract; nothing in this crate ever publishes
//! an event itself.

use prefs::ChangeBus;

pub struct StorageBus;

impl ChangeBus for StorageBus {
    fn subscribe(&self, key: &'static str, handler: Box<dyn Fn(Option<String>)>) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
                move |event: web_sys::StorageEvent| {
                    if event.key().as_deref() == Some(key) {
                        handler(event.new_value());
                    }
                },
            );
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
            }
            // The subscription lives for the tab's lifetime.
            closure.forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, handler);
        }
    }
}
