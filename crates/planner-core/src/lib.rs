//! Record managers for the event planner.
//!
//! This crate provides:
//! - `Manager<R>`: one kind's records in memory, saved in full to its
//!   backing store after every change
//! - `Outcome`: the reported result of add/delete/modify
//! - `Planner`: all six managers behind a text-level interface that
//!   dispatches on `EntityKind`
//! - `PlannerConfig`: state directory and store locations
//!
//! # Example
//!
//! ```no_run
//! use planner_core::{Planner, PlannerConfig};
//! use planner_models::{Attributes, EntityKind};
//!
//! let mut planner = Planner::open(&PlannerConfig::default()).unwrap();
//!
//! let attrs = Attributes::from_pairs(
//!     EntityKind::Guest,
//!     [("guest_id", "G1"), ("name", "Grace"), ("address", ""), ("contact_details", "")],
//! )
//! .unwrap();
//! println!("{}", planner.add(&attrs).unwrap());
//! println!("{}", planner.display(EntityKind::Guest, "G1"));
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod outcome;
pub mod planner;

pub use config::PlannerConfig;
pub use error::{CoreError, Result};
pub use manager::Manager;
pub use outcome::Outcome;
pub use planner::Planner;
