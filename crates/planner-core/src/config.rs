//! Planner configuration.
//!
//! Locates the state directory and derives the store path for each record
//! kind.
//!
//! # Storage Structure
//!
//! ```text
//! ~/.event-planner/
//! ├── stores/              # One JSON collection per record kind
//! │   ├── clients.json
//! │   ├── employees.json
//! │   ├── events.json
//! │   ├── guests.json
//! │   ├── suppliers.json
//! │   └── venues.json
//! └── repl_history.txt     # Interactive prompt history
//! ```
//!
//! # Environment Variables
//!
//! - `PLANNER_STATE_DIR`: Override the base state directory

use std::path::{Path, PathBuf};

use planner_models::EntityKind;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "PLANNER_STATE_DIR";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".event-planner";

const STORES_SUBDIR: &str = "stores";
const HISTORY_FILE: &str = "repl_history.txt";

/// Get the default state directory.
///
/// The state directory is determined by:
/// 1. `PLANNER_STATE_DIR` environment variable if set
/// 2. `~/.event-planner` if home directory is available
/// 3. `.event-planner` in current directory as fallback
pub fn default_state_dir() -> PathBuf {
    std::env::var(STATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_STATE_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
        })
}

/// Where the planner keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Base state directory.
    pub state_dir: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

impl PlannerConfig {
    /// Creates a config rooted at `state_dir`.
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// Uses `explicit` when given, otherwise the default state directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        explicit.map(Self::new).unwrap_or_default()
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Directory holding every collection store.
    pub fn stores_dir(&self) -> PathBuf {
        self.state_dir.join(STORES_SUBDIR)
    }

    /// Store file for one record kind.
    pub fn store_path(&self, kind: EntityKind) -> PathBuf {
        self.stores_dir().join(format!("{}.json", kind.plural()))
    }

    /// History file for the interactive prompt.
    pub fn history_path(&self) -> PathBuf {
        self.state_dir.join(HISTORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_paths() {
        let config = PlannerConfig::new("/data/planner");

        assert_eq!(config.stores_dir(), PathBuf::from("/data/planner/stores"));
        assert_eq!(
            config.store_path(EntityKind::Venue),
            PathBuf::from("/data/planner/stores/venues.json")
        );
        assert_eq!(
            config.history_path(),
            PathBuf::from("/data/planner/repl_history.txt")
        );
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let config = PlannerConfig::resolve(Some(PathBuf::from("/explicit")));
        assert_eq!(config.state_dir(), Path::new("/explicit"));
    }

    #[test]
    fn test_default_state_dir_is_named() {
        // Holds whether or not PLANNER_STATE_DIR is set in the test environment
        let dir = default_state_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
