//! Venue records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::ids::VenueId;
use crate::kind::EntityKind;
use crate::record::Record;

/// A place events can be held, with its guest capacity.
///
/// `min_guests <= max_guests` is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: VenueId,
    pub name: String,
    pub address: String,
    pub contact_details: String,
    pub min_guests: u32,
    pub max_guests: u32,
}

/// Partial update for a [`Venue`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_details: Option<String>,
    pub min_guests: Option<u32>,
    pub max_guests: Option<u32>,
}

impl Record for Venue {
    type Id = VenueId;
    type Patch = VenuePatch;

    const KIND: EntityKind = EntityKind::Venue;

    fn id(&self) -> &VenueId {
        &self.venue_id
    }

    fn apply(&mut self, patch: VenuePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(contact_details) = patch.contact_details {
            self.contact_details = contact_details;
        }
        if let Some(min_guests) = patch.min_guests {
            self.min_guests = min_guests;
        }
        if let Some(max_guests) = patch.max_guests {
            self.max_guests = max_guests;
        }
    }

    fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            venue_id: attrs.required_text("venue_id")?.into(),
            name: attrs.required_text("name")?,
            address: attrs.required_text("address")?,
            contact_details: attrs.required_text("contact_details")?,
            min_guests: attrs.required_number("min_guests")?,
            max_guests: attrs.required_number("max_guests")?,
        })
    }

    fn patch_from_attributes(attrs: &Attributes) -> Result<VenuePatch> {
        attrs.reject_identifier()?;
        Ok(VenuePatch {
            name: attrs.optional_text("name"),
            address: attrs.optional_text("address"),
            contact_details: attrs.optional_text("contact_details"),
            min_guests: attrs.optional_number("min_guests")?,
            max_guests: attrs.optional_number("max_guests")?,
        })
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Venue ID: {}, Name: {}, Address: {}, Contact: {}, Min Guests: {}, Max Guests: {}",
            self.venue_id,
            self.name,
            self.address,
            self.contact_details,
            self.min_guests,
            self.max_guests
        )
    }
}
