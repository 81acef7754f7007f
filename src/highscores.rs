//! Best-score persistence
//!
//! The core only ever reads a previous best and writes a new one; what
//! medium sits behind that contract is the host's business. On the web the
//! legacy JSON envelope under a single LocalStorage key is kept. Anywhere a
//! value is corrupt or unreadable it degrades to "no previous best".

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};

/// Storage contract for the single best score
pub trait ScoreStore {
    fn read_best(&self) -> Option<u32>;
    fn write_best(&mut self, best: u32);
}

/// Compare-and-write on game over.
///
/// The best is written back even when the stored value already wins, and
/// the written value is returned for the host to display.
pub fn record_best(store: &mut dyn ScoreStore, final_score: u32) -> u32 {
    let best = store.read_best().unwrap_or(0).max(final_score);
    store.write_best(best);
    log::info!("final score {final_score}, best {best}");
    best
}

/// In-memory store: the native default, and the fallback when real storage
/// is inaccessible (private browsing)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn read_best(&self) -> Option<u32> {
        self.best
    }

    fn write_best(&mut self, best: u32) {
        self.best = Some(best);
    }
}

/// JSON envelope stored under the LocalStorage key
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreEnvelope {
    #[serde(default)]
    highscore: Option<u32>,
}

/// LocalStorage-backed store (web only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// Key the reference host already stores its envelope under
    const STORAGE_KEY: &'static str = "data";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn read_best(&self) -> Option<u32> {
        let storage = Self::storage()?;
        let json = storage.get_item(Self::STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str::<ScoreEnvelope>(&json) {
            Ok(envelope) => envelope.highscore,
            // corrupt envelope reads as "no previous best"
            Err(_) => None,
        }
    }

    fn write_best(&mut self, best: u32) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage inaccessible, best score not persisted");
            return;
        };
        let envelope = ScoreEnvelope {
            highscore: Some(best),
        };
        if let Ok(json) = serde_json::to_string(&envelope) {
            let _ = storage.set_item(Self::STORAGE_KEY, &json);
        }
    }
}
