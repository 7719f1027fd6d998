//! In-memory fakes so every test constructs a fresh engine with no
//! shared state between cases.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::channel::{ChangeBus, ChannelError, LocalChannel, RemoteChannel};
use crate::registry::{ThemeRegistry, UNIVERSAL_WALLPAPER};

/// Two-theme registry used across the engine tests.
pub struct TestThemes;

const TEST_SCOPES: [&str; 2] = ["remedy", "gruvbox"];

impl ThemeRegistry for TestThemes {
    fn scope_ids(&self) -> &[&str] {
        &TEST_SCOPES
    }

    fn default_scope(&self) -> &str {
        "remedy"
    }

    fn default_wallpaper(&self, scope: &str) -> &str {
        match scope {
            "remedy" => "remedy-slab",
            "gruvbox" => "gruvbox-pines",
            _ => UNIVERSAL_WALLPAPER,
        }
    }

    fn is_compatible(&self, scope: &str, candidate: &str) -> bool {
        if candidate == UNIVERSAL_WALLPAPER {
            return true;
        }
        match scope {
            "remedy" => matches!(candidate, "remedy-slab" | "remedy-dither"),
            "gruvbox" => matches!(candidate, "gruvbox-pines" | "gruvbox-haze"),
            _ => false,
        }
    }
}

/// Durable-channel fake backed by a `HashMap`, with a switch to make
/// mutations fail for reset error-path tests.
#[derive(Default)]
pub struct MemoryLocal {
    entries: RefCell<HashMap<String, String>>,
    fail_mutations: Cell<bool>,
}

impl MemoryLocal {
    pub fn seed(&self, key: &str, raw: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), raw.to_owned());
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.set(fail);
    }
}

impl LocalChannel for &MemoryLocal {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), ChannelError> {
        if self.fail_mutations.get() {
            return Err(ChannelError::Write("quota exceeded".to_owned()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), raw.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ChannelError> {
        if self.fail_mutations.get() {
            return Err(ChannelError::Remove("quota exceeded".to_owned()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Server-visible channel fake that records every write and clear.
#[derive(Default)]
pub struct RecordingRemote {
    pub writes: RefCell<Vec<(String, String)>>,
    pub clears: RefCell<Vec<String>>,
}

impl RecordingRemote {
    /// Writes recorded for one key, in order.
    pub fn writes_for(&self, key: &str) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl RemoteChannel for &RecordingRemote {
    fn write(&self, key: &str, value: &str) {
        self.writes.borrow_mut().push((key.to_owned(), value.to_owned()));
    }

    fn clear(&self, key: &str) {
        self.clears.borrow_mut().push(key.to_owned());
    }
}

/// Change bus fake: tests deliver cross-tab notifications by calling
/// [`FakeBus::publish`] directly. Nothing in the engine publishes to
/// the bus, which is exactly the no-self-notification contract.
#[derive(Default)]
pub struct FakeBus {
    #[allow(clippy::type_complexity)]
    handlers: RefCell<HashMap<&'static str, Vec<Box<dyn Fn(Option<String>)>>>>,
}

impl FakeBus {
    pub fn publish(&self, key: &str, raw: Option<&str>) {
        if let Some(handlers) = self.handlers.borrow().get(key) {
            for handler in handlers {
                handler(raw.map(str::to_owned));
            }
        }
    }

    pub fn handler_count(&self, key: &str) -> usize {
        self.handlers.borrow().get(key).map_or(0, Vec::len)
    }
}

impl ChangeBus for FakeBus {
    fn subscribe(&self, key: &'static str, handler: Box<dyn Fn(Option<String>)>) {
        self.handlers.borrow_mut().entry(key).or_default().push(handler);
    }
}
