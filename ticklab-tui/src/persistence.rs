//! UI settings persistence — JSON save/load across restarts.
//!
//! Only the knobs the user sets from the keyboard persist. Bar history
//! never does; every run synthesizes a fresh tape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ticklab_core::periodicity::Periodicity;

use crate::app::App;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub symbol: String,
    pub bars_to_load: u32,
    pub periodicity: Periodicity,
    pub contracts: u32,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            symbol: "SIM".to_string(),
            bars_to_load: 60,
            periodicity: Periodicity::OneMinute,
            contracts: 1,
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is
/// missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &App) -> PersistedState {
    PersistedState {
        symbol: app.session.instrument().symbol().to_string(),
        bars_to_load: app.pending.bars_to_load,
        periodicity: app.pending.periodicity,
        contracts: app.contracts,
    }
}

/// Apply persisted state to the app's pending settings.
pub fn apply(app: &mut App, state: PersistedState) {
    app.pending.bars_to_load = state.bars_to_load.clamp(crate::app::MIN_BARS, crate::app::MAX_BARS);
    app.pending.periodicity = state.periodicity;
    app.contracts = state.contracts.clamp(1, crate::app::MAX_CONTRACTS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("ticklab_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            symbol: "AAPL".into(),
            bars_to_load: 90,
            periodicity: Periodicity::ThirtyMinute,
            contracts: 4,
        };
        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.symbol, "AAPL");
        assert_eq!(loaded.bars_to_load, 90);
        assert_eq!(loaded.periodicity, Periodicity::ThirtyMinute);
        assert_eq!(loaded.contracts, 4);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.symbol, "SIM");
        assert_eq!(loaded.bars_to_load, 60);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("ticklab_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.periodicity, Periodicity::OneMinute);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
