//! Persistence boundary: one localStorage slot holding the full game state.
//! Read once at startup, rewritten after every accepted mutation.

use crate::model::GameState;
use crate::util::clog;

pub const STORAGE_KEY: &str = "okey-tracker-state";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Saved state, or `None` when the slot is absent or unreadable.
/// A corrupt save is discarded rather than surfaced as an error.
pub fn load() -> Option<GameState> {
    let store = local_storage()?;
    let raw = store.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            clog(&format!("discarding saved state: {err}"));
            None
        }
    }
}

pub fn save(state: &GameState) {
    if let Some(store) = local_storage() {
        match serde_json::to_string(state) {
            Ok(raw) => {
                let _ = store.set_item(STORAGE_KEY, &raw);
            }
            Err(err) => clog(&format!("failed to serialize game state: {err}")),
        }
    }
}

/// Deletes the slot entirely (New Game wipes the save before reinitializing).
pub fn clear() {
    if let Some(store) = local_storage() {
        let _ = store.remove_item(STORAGE_KEY);
    }
}
