//! Type-safe identifier wrappers for planner records.
//!
//! Identifiers are always supplied by the operator; nothing here generates
//! them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Macro to generate identifier newtypes with common functionality.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from caller-supplied text.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(EmployeeId);
define_id!(EventId);
define_id!(ClientId);
define_id!(GuestId);
define_id!(SupplierId);
define_id!(VenueId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id = EmployeeId::from("E1");
        assert_eq!(id.as_str(), "E1");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = GuestId::new("G-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"G-7\"");

        let parsed: GuestId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = VenueId::new("hall-3");
        assert_eq!(format!("{}", id), "hall-3");
    }

    #[test]
    fn test_ids_order_lexically() {
        let mut ids = vec![ClientId::from("c2"), ClientId::from("c10"), ClientId::from("c1")];
        ids.sort();
        assert_eq!(
            ids.iter().map(ClientId::as_str).collect::<Vec<_>>(),
            vec!["c1", "c10", "c2"]
        );
    }
}
