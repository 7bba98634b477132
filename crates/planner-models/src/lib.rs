//! Record types for the event planner.
//!
//! This crate provides the six record kinds tracked by the planner
//! (employees, events, clients, guests, suppliers and venues), their
//! identifier newtypes, per-kind patch types for partial updates, and the
//! `Record` trait the generic manager is written against.

pub mod attributes;
pub mod builders;
pub mod client;
pub mod employee;
pub mod error;
pub mod event;
pub mod guest;
pub mod ids;
pub mod kind;
pub mod record;
pub mod supplier;
pub mod venue;

// Re-export main types
pub use attributes::Attributes;
pub use builders::EventBuilder;
pub use client::{Client, ClientPatch};
pub use employee::{Employee, EmployeePatch};
pub use error::{ModelError, Result};
pub use event::{Event, EventPatch};
pub use guest::{Guest, GuestPatch};
pub use ids::{ClientId, EmployeeId, EventId, GuestId, SupplierId, VenueId};
pub use kind::EntityKind;
pub use record::Record;
pub use supplier::{Supplier, SupplierPatch};
pub use venue::{Venue, VenuePatch};
