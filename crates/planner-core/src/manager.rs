//! Manager - in-memory record collection with whole-collection persistence.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use planner_models::Record;
use planner_persistence::CollectionStore;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::outcome::Outcome;

/// Owns one kind's records and keeps its backing store in step.
///
/// Records are keyed by identifier, so identifiers are unique and lookups
/// are direct. Every successful mutation rewrites the whole store before
/// returning. If that write fails the mutation is undone, so memory never
/// holds changes the store does not.
///
/// # Example
///
/// ```no_run
/// use planner_core::{Manager, Outcome};
/// use planner_models::{Guest, GuestPatch};
///
/// let mut guests: Manager<Guest> = Manager::open_in("/tmp/planner/stores").unwrap();
///
/// let outcome = guests
///     .modify("G1", GuestPatch {
///         address: Some("9 Oak Rd".to_string()),
///         ..Default::default()
///     })
///     .unwrap();
/// if outcome == Outcome::NotFound {
///     println!("no such guest");
/// }
/// ```
pub struct Manager<R: Record> {
    store: CollectionStore<R>,
    records: BTreeMap<R::Id, R>,
}

impl<R: Record> Manager<R> {
    /// Opens a manager over `store`, loading whatever it holds.
    ///
    /// # Errors
    /// Fails if the store exists with content that cannot be read as this
    /// kind's collection. A missing or empty store is not an error.
    pub fn open(store: CollectionStore<R>) -> Result<Self> {
        let records = store.load()?;
        info!(
            kind = %R::KIND,
            count = records.len(),
            path = %store.path().display(),
            "Opened record store"
        );
        Ok(Self { store, records })
    }

    /// Opens a manager over the kind's default store file inside `dir`.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(CollectionStore::in_dir(dir))
    }

    /// Adds a record unless its identifier is taken.
    pub fn add(&mut self, record: R) -> Result<Outcome> {
        let id = record.id().clone();
        if self.records.contains_key::<R::Id>(&id) {
            debug!(kind = %R::KIND, id = %id, "Rejected duplicate identifier");
            return Ok(Outcome::Duplicate);
        }

        self.records.insert(id.clone(), record);
        self.persist_or_undo(|records| {
            records.remove::<R::Id>(&id);
        })?;

        info!(kind = %R::KIND, id = %id, "Added record");
        Ok(Outcome::Added)
    }

    /// Deletes the record with identifier `id`.
    pub fn delete<Q>(&mut self, id: &Q) -> Result<Outcome>
    where
        R::Id: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        let Some((key, removed)) = self.records.remove_entry(id) else {
            debug!(kind = %R::KIND, id = %id, "Delete of unknown identifier");
            return Ok(Outcome::NotFound);
        };

        self.persist_or_undo(move |records| {
            records.insert(key, removed);
        })?;

        info!(kind = %R::KIND, id = %id, "Deleted record");
        Ok(Outcome::Deleted)
    }

    /// Applies `patch` to the record with identifier `id`.
    ///
    /// Nothing is saved when the identifier is unknown.
    pub fn modify<Q>(&mut self, id: &Q, patch: R::Patch) -> Result<Outcome>
    where
        R::Id: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        let Some(record) = self.records.get_mut(id) else {
            debug!(kind = %R::KIND, id = %id, "Modify of unknown identifier");
            return Ok(Outcome::NotFound);
        };

        let previous = record.clone();
        record.apply(patch);

        self.persist_or_undo(move |records| {
            records.insert(previous.id().clone(), previous);
        })?;

        info!(kind = %R::KIND, id = %id, "Updated record");
        Ok(Outcome::Updated)
    }

    /// Returns the record with identifier `id`.
    pub fn find<Q>(&self, id: &Q) -> Option<&R>
    where
        R::Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.records.get(id)
    }

    /// Returns the one-line rendering of the record with identifier `id`.
    pub fn display<Q>(&self, id: &Q) -> Option<String>
    where
        R::Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(id).map(ToString::to_string)
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        R::Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.records.contains_key(id)
    }

    /// Iterates over all records in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    /// All records in identifier order.
    pub fn list(&self) -> Vec<&R> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing store.
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Saves the collection, running `undo` on the in-memory state if the
    /// save fails.
    fn persist_or_undo(&mut self, undo: impl FnOnce(&mut BTreeMap<R::Id, R>)) -> Result<()> {
        if let Err(e) = self.store.save(&self.records) {
            warn!(kind = %R::KIND, error = %e, "Save failed, rolling back change");
            undo(&mut self.records);
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use planner_models::{Employee, EmployeePatch, Supplier};
    use std::fs;
    use tempfile::tempdir;

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            emp_id: id.into(),
            name: name.to_string(),
            department: "Eng".to_string(),
            job_title: "Engineer".to_string(),
            basic_salary: 1000.0,
            age: 30,
            date_of_birth: "1994-01-01".to_string(),
            passport_details: "P1".to_string(),
        }
    }

    fn supplier(id: &str) -> Supplier {
        Supplier {
            supplier_id: id.into(),
            name: "Feast Co".to_string(),
            address: "3 Dock Rd".to_string(),
            contact_details: "555-0101".to_string(),
            services_offered: "catering".to_string(),
        }
    }

    #[test]
    fn test_add_and_find() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Employee> = Manager::open_in(dir.path()).unwrap();

        assert_eq!(manager.add(employee("E1", "Ada")).unwrap(), Outcome::Added);

        assert_eq!(manager.find("E1"), Some(&employee("E1", "Ada")));
        assert!(manager.store_path().exists());
    }

    #[test]
    fn test_duplicate_leaves_collection_unchanged() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Employee> = Manager::open_in(dir.path()).unwrap();

        manager.add(employee("E1", "Ada")).unwrap();
        let outcome = manager.add(employee("E1", "Impostor")).unwrap();

        assert_eq!(outcome, Outcome::Duplicate);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.find("E1").unwrap().name, "Ada");
    }

    #[test]
    fn test_delete_unknown_does_not_touch_store() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Employee> = Manager::open_in(dir.path()).unwrap();

        assert_eq!(manager.delete("E404").unwrap(), Outcome::NotFound);
        assert!(!manager.store_path().exists());
    }

    #[test]
    fn test_modify_unknown_does_not_touch_store() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Employee> = Manager::open_in(dir.path()).unwrap();
        manager.add(employee("E1", "Ada")).unwrap();
        fs::remove_file(manager.store_path()).unwrap();

        let outcome = manager
            .modify("E2", EmployeePatch {
                age: Some(41),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(outcome, Outcome::NotFound);
        assert!(!manager.store_path().exists());
        assert_eq!(manager.find("E1").unwrap().age, 30);
    }

    #[test]
    fn test_modify_with_empty_patch_still_saves() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Employee> = Manager::open_in(dir.path()).unwrap();
        manager.add(employee("E1", "Ada")).unwrap();

        let outcome = manager.modify("E1", EmployeePatch::default()).unwrap();

        assert_eq!(outcome, Outcome::Updated);
        assert_eq!(manager.find("E1"), Some(&employee("E1", "Ada")));
    }

    #[test]
    fn test_typed_identifier_lookup() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Supplier> = Manager::open_in(dir.path()).unwrap();
        manager.add(supplier("S1")).unwrap();

        let id = planner_models::SupplierId::from("S1");
        assert!(manager.contains(&id));
        assert_eq!(
            manager.display(&id).unwrap(),
            "Supplier ID: S1, Name: Feast Co, Address: 3 Dock Rd, Contact: 555-0101, Services: catering"
        );
    }

    #[test]
    fn test_iter_is_ordered_by_identifier() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Supplier> = Manager::open_in(dir.path()).unwrap();
        for id in ["S3", "S1", "S2"] {
            manager.add(supplier(id)).unwrap();
        }

        let ids: Vec<_> = manager.iter().map(|s| s.supplier_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
        assert_eq!(manager.list().len(), 3);
        assert_eq!(manager.list()[0].supplier_id.as_str(), "S1");
    }

    #[test]
    fn test_unreadable_store_fails_open() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("employees.json"), "not json at all").unwrap();

        let result: Result<Manager<Employee>> = Manager::open_in(dir.path());
        assert!(matches!(result, Err(CoreError::Persistence(ref e)) if e.is_unreadable_store()));
    }

    #[test]
    fn test_failed_save_rolls_back_add() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Employee> = Manager::open_in(dir.path()).unwrap();
        // A directory in the store's place makes the rename fail
        fs::create_dir(manager.store_path()).unwrap();

        let result = manager.add(employee("E1", "Ada"));

        assert!(matches!(result, Err(CoreError::Persistence(_))));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_failed_save_rolls_back_delete_and_modify() {
        let dir = tempdir().unwrap();
        let mut manager: Manager<Employee> = Manager::open_in(dir.path()).unwrap();
        manager.add(employee("E1", "Ada")).unwrap();
        fs::remove_file(manager.store_path()).unwrap();
        fs::create_dir(manager.store_path()).unwrap();

        assert!(manager.delete("E1").is_err());
        assert!(manager.contains("E1"));

        let result = manager.modify("E1", EmployeePatch {
            name: Some("Grace".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(manager.find("E1").unwrap().name, "Ada");
    }
}
