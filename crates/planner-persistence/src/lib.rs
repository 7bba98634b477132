//! Persistence layer for the event planner.
//!
//! Each record kind lives in one JSON file holding the whole collection.
//! Saves are crash-safe: the new collection is written to a temporary file
//! that is then renamed over the old one.
//!
//! # Example
//!
//! ```no_run
//! use planner_models::Guest;
//! use planner_persistence::CollectionStore;
//!
//! let store: CollectionStore<Guest> = CollectionStore::in_dir("/home/user/.event-planner/stores");
//!
//! let mut guests = store.load().unwrap();
//! guests.clear();
//! store.save(&guests).unwrap();
//! ```

pub mod atomic;
pub mod collection_store;
pub mod error;

pub use collection_store::CollectionStore;
pub use error::{PersistenceError, Result};
