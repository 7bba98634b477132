//! Entity kind enumeration and the attribute catalogue for each kind.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// The six kinds of record the planner tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Employee,
    Event,
    Client,
    Guest,
    Supplier,
    Venue,
}

const EMPLOYEE_ATTRIBUTES: &[&str] = &[
    "emp_id",
    "name",
    "department",
    "job_title",
    "basic_salary",
    "age",
    "date_of_birth",
    "passport_details",
];

const EVENT_ATTRIBUTES: &[&str] = &[
    "event_id",
    "event_type",
    "theme",
    "date",
    "time",
    "duration",
    "venue_address",
    "client_id",
    "guest_list",
    "catering_company",
    "cleaning_company",
    "decorations_company",
    "entertainment_company",
    "furniture_supply_company",
    "invoice",
];

const CLIENT_ATTRIBUTES: &[&str] = &["client_id", "name", "address", "contact_details", "budget"];

const GUEST_ATTRIBUTES: &[&str] = &["guest_id", "name", "address", "contact_details"];

const SUPPLIER_ATTRIBUTES: &[&str] = &[
    "supplier_id",
    "name",
    "address",
    "contact_details",
    "services_offered",
];

const VENUE_ATTRIBUTES: &[&str] = &[
    "venue_id",
    "name",
    "address",
    "contact_details",
    "min_guests",
    "max_guests",
];

impl EntityKind {
    /// All kinds, in menu order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Employee,
        EntityKind::Event,
        EntityKind::Client,
        EntityKind::Guest,
        EntityKind::Supplier,
        EntityKind::Venue,
    ];

    /// Capitalised label used in outcome messages ("Employee").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Event => "Event",
            Self::Client => "Client",
            Self::Guest => "Guest",
            Self::Supplier => "Supplier",
            Self::Venue => "Venue",
        }
    }

    /// Plural name, used for store file names.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Employee => "employees",
            Self::Event => "events",
            Self::Client => "clients",
            Self::Guest => "guests",
            Self::Supplier => "suppliers",
            Self::Venue => "venues",
        }
    }

    /// Indefinite article for the lowercase label.
    pub fn article(&self) -> &'static str {
        match self {
            Self::Employee | Self::Event => "An",
            _ => "A",
        }
    }

    /// Name of the primary identifier attribute.
    pub fn id_attribute(&self) -> &'static str {
        self.attributes()[0]
    }

    /// Every attribute of the kind, identifier first.
    pub fn attributes(&self) -> &'static [&'static str] {
        match self {
            Self::Employee => EMPLOYEE_ATTRIBUTES,
            Self::Event => EVENT_ATTRIBUTES,
            Self::Client => CLIENT_ATTRIBUTES,
            Self::Guest => GUEST_ATTRIBUTES,
            Self::Supplier => SUPPLIER_ATTRIBUTES,
            Self::Venue => VENUE_ATTRIBUTES,
        }
    }

    /// Returns true if `name` is one of the kind's attributes.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes().contains(&name)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "employee" | "employees" | "emp" => Ok(Self::Employee),
            "event" | "events" => Ok(Self::Event),
            "client" | "clients" => Ok(Self::Client),
            "guest" | "guests" => Ok(Self::Guest),
            "supplier" | "suppliers" => Ok(Self::Supplier),
            "venue" | "venues" => Ok(Self::Venue),
            _ => Err(ModelError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_aliases() {
        assert_eq!("employee".parse::<EntityKind>().unwrap(), EntityKind::Employee);
        assert_eq!("Emp".parse::<EntityKind>().unwrap(), EntityKind::Employee);
        assert_eq!("VENUES".parse::<EntityKind>().unwrap(), EntityKind::Venue);
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert_eq!(
            "caterer".parse::<EntityKind>(),
            Err(ModelError::UnknownKind("caterer".to_string()))
        );
    }

    #[test]
    fn test_id_attribute_is_first() {
        assert_eq!(EntityKind::Employee.id_attribute(), "emp_id");
        assert_eq!(EntityKind::Supplier.id_attribute(), "supplier_id");
        assert_eq!(EntityKind::Event.attributes().len(), 15);
    }

    #[test]
    fn test_display_round_trips() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.to_string().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_articles() {
        assert_eq!(EntityKind::Event.article(), "An");
        assert_eq!(EntityKind::Venue.article(), "A");
    }
}
