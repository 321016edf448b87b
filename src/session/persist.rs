//! Mirrors session state into a `Storage`. Saving is best-effort and loading never fails:
//! whatever cannot be read back is treated as absent.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::SessionState;
use crate::model::{Round, RoundResult, Settings};
use crate::storage::{Storage, StorageError, StorageKey};

/// Writes all three records. Failures are logged and swallowed.
pub fn save<S: Storage>(storage: &mut S, state: &SessionState) {
    match try_save(storage, state) {
        Ok(()) => debug!("session persisted"),
        Err(e) => warn!(error = %e, "could not persist session, in-memory state kept"),
    }
}

/// # Errors
///
/// Returns the first serialization or storage failure.
pub fn try_save<S: Storage>(storage: &mut S, state: &SessionState) -> Result<(), StorageError> {
    match &state.current_round {
        Some(round) => storage.put(StorageKey::CurrentRound, &serde_json::to_string(round)?)?,
        None => storage.remove(StorageKey::CurrentRound)?,
    }
    storage.put(StorageKey::History, &serde_json::to_string(&state.history)?)?;
    storage.put(StorageKey::Settings, &serde_json::to_string(&state.settings)?)?;
    Ok(())
}

pub fn clear<S: Storage>(storage: &mut S) {
    if let Err(e) = storage.clear() {
        warn!(error = %e, "could not clear storage");
    }
}

/// Rebuilds a session from storage; missing or corrupt records fall back to defaults.
pub fn load<S: Storage>(storage: &S) -> SessionState {
    let current_round = read::<Round, S>(storage, StorageKey::CurrentRound).map(|mut round| {
        let repairs = round.repair();
        if repairs > 0 {
            warn!(repairs, "repaired stored round");
        }
        round
    });
    let history = read::<Value, S>(storage, StorageKey::History)
        .map(load_history)
        .unwrap_or_default();
    let settings = read::<Settings, S>(storage, StorageKey::Settings).unwrap_or_default();

    SessionState {
        current_round,
        history,
        settings,
        last_result: None,
    }
}

fn read<T: DeserializeOwned, S: Storage>(storage: &S, key: StorageKey) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(%key, error = %e, "could not read stored record");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(%key, error = %e, "ignoring malformed stored record");
            None
        }
    }
}

/// Keeps the entries that parse and whose round snapshot needs no repair.
fn load_history(value: Value) -> Vec<RoundResult> {
    let Value::Array(entries) = value else {
        warn!("stored history is not a list, ignoring it");
        return Vec::new();
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<RoundResult>(entry) {
            Ok(result) if result.round.clone().repair() == 0 => Some(result),
            Ok(_) => {
                warn!(index = i, "dropping inconsistent history entry");
                None
            }
            Err(e) => {
                warn!(index = i, error = %e, "dropping malformed history entry");
                None
            }
        })
        .collect()
}
