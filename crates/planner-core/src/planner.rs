//! Planner - the six record managers behind one text-level interface.
//!
//! Front ends deal in entity kinds, identifiers and attribute text. The
//! planner picks the matching manager with a `match` on [`EntityKind`] and
//! turns every result into the operator-facing message.

use planner_models::{
    Attributes, Client, Employee, EntityKind, Event, Guest, Record, Supplier, Venue,
};
use planner_persistence::CollectionStore;
use tracing::info;

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::manager::Manager;
use crate::outcome::Outcome;

/// Record managers for every entity kind.
pub struct Planner {
    employees: Manager<Employee>,
    events: Manager<Event>,
    clients: Manager<Client>,
    guests: Manager<Guest>,
    suppliers: Manager<Supplier>,
    venues: Manager<Venue>,
}

/// Dispatches `$body` to the manager for `$kind`, bound as `$m`.
macro_rules! with_manager {
    (mut $self:expr, $kind:expr, $m:ident => $body:expr) => {
        match $kind {
            EntityKind::Employee => {
                let $m = &mut $self.employees;
                $body
            }
            EntityKind::Event => {
                let $m = &mut $self.events;
                $body
            }
            EntityKind::Client => {
                let $m = &mut $self.clients;
                $body
            }
            EntityKind::Guest => {
                let $m = &mut $self.guests;
                $body
            }
            EntityKind::Supplier => {
                let $m = &mut $self.suppliers;
                $body
            }
            EntityKind::Venue => {
                let $m = &mut $self.venues;
                $body
            }
        }
    };
    ($self:expr, $kind:expr, $m:ident => $body:expr) => {
        match $kind {
            EntityKind::Employee => {
                let $m = &$self.employees;
                $body
            }
            EntityKind::Event => {
                let $m = &$self.events;
                $body
            }
            EntityKind::Client => {
                let $m = &$self.clients;
                $body
            }
            EntityKind::Guest => {
                let $m = &$self.guests;
                $body
            }
            EntityKind::Supplier => {
                let $m = &$self.suppliers;
                $body
            }
            EntityKind::Venue => {
                let $m = &$self.venues;
                $body
            }
        }
    };
}

impl Planner {
    /// Opens every store under the configured state directory.
    ///
    /// # Errors
    /// Fails on the first store that exists but cannot be read.
    pub fn open(config: &PlannerConfig) -> Result<Self> {
        let planner = Self {
            employees: open_manager(config)?,
            events: open_manager(config)?,
            clients: open_manager(config)?,
            guests: open_manager(config)?,
            suppliers: open_manager(config)?,
            venues: open_manager(config)?,
        };
        info!(state_dir = %config.state_dir().display(), "Planner ready");
        Ok(planner)
    }

    /// Builds a record from `attrs` and adds it.
    pub fn add(&mut self, attrs: &Attributes) -> Result<String> {
        with_manager!(mut self, attrs.kind(), m => add_record(m, attrs))
    }

    /// Deletes the `kind` record with identifier `id`.
    pub fn delete(&mut self, kind: EntityKind, id: &str) -> Result<String> {
        let outcome = with_manager!(mut self, kind, m => m.delete(id))?;
        Ok(outcome.message(kind))
    }

    /// Applies the attributes in `attrs` to the record with identifier `id`.
    pub fn modify(&mut self, id: &str, attrs: &Attributes) -> Result<String> {
        with_manager!(mut self, attrs.kind(), m => modify_record(m, id, attrs))
    }

    /// Renders the `kind` record with identifier `id`, or the not-found
    /// message.
    pub fn display(&self, kind: EntityKind, id: &str) -> String {
        let rendered = with_manager!(self, kind, m => m.display(id));
        rendered.unwrap_or_else(|| Outcome::NotFound.message(kind))
    }

    /// Returns true if a `kind` record with identifier `id` exists.
    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        with_manager!(self, kind, m => m.contains(id))
    }

    /// Renders every `kind` record, in identifier order.
    pub fn list(&self, kind: EntityKind) -> Vec<String> {
        with_manager!(self, kind, m => m.iter().map(ToString::to_string).collect())
    }

    /// Serializes every `kind` record as a pretty-printed JSON array.
    pub fn list_json(&self, kind: EntityKind) -> Result<String> {
        with_manager!(self, kind, m => Ok(serde_json::to_string_pretty(&m.list())?))
    }

    /// Number of `kind` records.
    pub fn count(&self, kind: EntityKind) -> usize {
        with_manager!(self, kind, m => m.len())
    }

    pub fn employees(&self) -> &Manager<Employee> {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut Manager<Employee> {
        &mut self.employees
    }

    pub fn events(&self) -> &Manager<Event> {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut Manager<Event> {
        &mut self.events
    }

    pub fn clients(&self) -> &Manager<Client> {
        &self.clients
    }

    pub fn clients_mut(&mut self) -> &mut Manager<Client> {
        &mut self.clients
    }

    pub fn guests(&self) -> &Manager<Guest> {
        &self.guests
    }

    pub fn guests_mut(&mut self) -> &mut Manager<Guest> {
        &mut self.guests
    }

    pub fn suppliers(&self) -> &Manager<Supplier> {
        &self.suppliers
    }

    pub fn suppliers_mut(&mut self) -> &mut Manager<Supplier> {
        &mut self.suppliers
    }

    pub fn venues(&self) -> &Manager<Venue> {
        &self.venues
    }

    pub fn venues_mut(&mut self) -> &mut Manager<Venue> {
        &mut self.venues
    }
}

fn open_manager<R: Record>(config: &PlannerConfig) -> Result<Manager<R>> {
    Manager::open(CollectionStore::new(config.store_path(R::KIND)))
}

fn add_record<R: Record>(manager: &mut Manager<R>, attrs: &Attributes) -> Result<String> {
    let record = R::from_attributes(attrs)?;
    Ok(manager.add(record)?.message(R::KIND))
}

fn modify_record<R: Record>(manager: &mut Manager<R>, id: &str, attrs: &Attributes) -> Result<String> {
    // Unknown ids report not-found before attribute text is checked
    if !manager.contains(id) {
        return Ok(Outcome::NotFound.message(R::KIND));
    }
    let patch = R::patch_from_attributes(attrs)?;
    Ok(manager.modify(id, patch)?.message(R::KIND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use planner_models::ModelError;
    use std::fs;
    use tempfile::tempdir;

    fn guest_attrs(id: &str) -> Attributes {
        Attributes::from_pairs(
            EntityKind::Guest,
            [
                ("guest_id", id),
                ("name", "Grace"),
                ("address", "7 Bay Rd"),
                ("contact_details", "grace@example.com"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_open_empty_state_dir() {
        let dir = tempdir().unwrap();
        let planner = Planner::open(&PlannerConfig::new(dir.path())).unwrap();

        for kind in EntityKind::ALL {
            assert_eq!(planner.count(kind), 0);
        }
    }

    #[test]
    fn test_add_messages() {
        let dir = tempdir().unwrap();
        let mut planner = Planner::open(&PlannerConfig::new(dir.path())).unwrap();

        assert_eq!(planner.add(&guest_attrs("G1")).unwrap(), "Guest added successfully.");
        assert_eq!(
            planner.add(&guest_attrs("G1")).unwrap(),
            "A guest with this ID already exists."
        );
        assert_eq!(planner.count(EntityKind::Guest), 1);
    }

    #[test]
    fn test_display_and_delete() {
        let dir = tempdir().unwrap();
        let mut planner = Planner::open(&PlannerConfig::new(dir.path())).unwrap();
        planner.add(&guest_attrs("G1")).unwrap();

        assert_eq!(
            planner.display(EntityKind::Guest, "G1"),
            "Guest ID: G1, Name: Grace, Address: 7 Bay Rd, Contact: grace@example.com"
        );
        assert_eq!(
            planner.delete(EntityKind::Guest, "G1").unwrap(),
            "Guest deleted successfully."
        );
        assert_eq!(planner.display(EntityKind::Guest, "G1"), "Guest not found.");
    }

    #[test]
    fn test_modify_via_attributes() {
        let dir = tempdir().unwrap();
        let mut planner = Planner::open(&PlannerConfig::new(dir.path())).unwrap();
        planner.add(&guest_attrs("G1")).unwrap();

        let update =
            Attributes::from_pairs(EntityKind::Guest, [("address", "8 Bay Rd")]).unwrap();
        assert_eq!(
            planner.modify("G1", &update).unwrap(),
            "Guest updated successfully."
        );
        assert_eq!(planner.guests().find("G1").unwrap().address, "8 Bay Rd");
        assert_eq!(
            planner.modify("G9", &update).unwrap(),
            "Guest not found."
        );
    }

    #[test]
    fn test_modify_rejects_identifier_change() {
        let dir = tempdir().unwrap();
        let mut planner = Planner::open(&PlannerConfig::new(dir.path())).unwrap();
        planner.add(&guest_attrs("G1")).unwrap();

        let update = Attributes::from_pairs(EntityKind::Guest, [("guest_id", "G2")]).unwrap();
        let err = planner.modify("G1", &update).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Model(ModelError::ImmutableAttribute { .. })
        ));
        assert!(planner.contains(EntityKind::Guest, "G1"));
    }

    #[test]
    fn test_add_with_missing_attribute() {
        let dir = tempdir().unwrap();
        let mut planner = Planner::open(&PlannerConfig::new(dir.path())).unwrap();
        let attrs = Attributes::from_pairs(EntityKind::Venue, [("venue_id", "V1")]).unwrap();

        let err = planner.add(&attrs).unwrap_err();

        assert!(matches!(err, CoreError::Model(ModelError::MissingAttribute { .. })));
        assert_eq!(planner.count(EntityKind::Venue), 0);
    }

    #[test]
    fn test_stores_land_in_stores_dir() {
        let dir = tempdir().unwrap();
        let config = PlannerConfig::new(dir.path());
        let mut planner = Planner::open(&config).unwrap();
        planner.add(&guest_attrs("G1")).unwrap();

        assert!(config.store_path(EntityKind::Guest).exists());
        assert!(!config.store_path(EntityKind::Employee).exists());
    }

    #[test]
    fn test_open_fails_on_corrupt_store() {
        let dir = tempdir().unwrap();
        let config = PlannerConfig::new(dir.path());
        fs::create_dir_all(config.stores_dir()).unwrap();
        fs::write(config.store_path(EntityKind::Event), "{{{").unwrap();

        assert!(Planner::open(&config).is_err());
    }

    #[test]
    fn test_list_json() {
        let dir = tempdir().unwrap();
        let mut planner = Planner::open(&PlannerConfig::new(dir.path())).unwrap();
        planner.add(&guest_attrs("G2")).unwrap();
        planner.add(&guest_attrs("G1")).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&planner.list_json(EntityKind::Guest).unwrap()).unwrap();
        assert_eq!(json[0]["guest_id"], "G1");
        assert_eq!(json[1]["guest_id"], "G2");
        assert_eq!(planner.list(EntityKind::Guest).len(), 2);
    }
}
