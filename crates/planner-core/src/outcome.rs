//! Reported outcomes of manager operations.

use planner_models::EntityKind;

/// Result of an add, delete or modify that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Updated,
    Deleted,
    /// A record with the same identifier already exists.
    Duplicate,
    /// No record has the requested identifier.
    NotFound,
}

impl Outcome {
    /// Returns true if the collection was changed and saved.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Added | Outcome::Updated | Outcome::Deleted)
    }

    /// Operator-facing message for this outcome on a record of `kind`.
    pub fn message(&self, kind: EntityKind) -> String {
        let label = kind.label();
        match self {
            Outcome::Added => format!("{label} added successfully."),
            Outcome::Updated => format!("{label} updated successfully."),
            Outcome::Deleted => format!("{label} deleted successfully."),
            Outcome::Duplicate => format!(
                "{} {} with this ID already exists.",
                kind.article(),
                label.to_lowercase()
            ),
            Outcome::NotFound => format!("{label} not found."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Outcome::Added.message(EntityKind::Employee),
            "Employee added successfully."
        );
        assert_eq!(
            Outcome::Duplicate.message(EntityKind::Employee),
            "An employee with this ID already exists."
        );
        assert_eq!(
            Outcome::Duplicate.message(EntityKind::Supplier),
            "A supplier with this ID already exists."
        );
        assert_eq!(Outcome::NotFound.message(EntityKind::Venue), "Venue not found.");
    }

    #[test]
    fn test_is_success() {
        assert!(Outcome::Deleted.is_success());
        assert!(!Outcome::Duplicate.is_success());
        assert!(!Outcome::NotFound.is_success());
    }
}
