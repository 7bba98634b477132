//! Guest records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::ids::GuestId;
use crate::kind::EntityKind;
use crate::record::Record;

/// A person invited to one or more events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub guest_id: GuestId,
    pub name: String,
    pub address: String,
    pub contact_details: String,
}

/// Partial update for a [`Guest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_details: Option<String>,
}

impl Record for Guest {
    type Id = GuestId;
    type Patch = GuestPatch;

    const KIND: EntityKind = EntityKind::Guest;

    fn id(&self) -> &GuestId {
        &self.guest_id
    }

    fn apply(&mut self, patch: GuestPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(contact_details) = patch.contact_details {
            self.contact_details = contact_details;
        }
    }

    fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            guest_id: attrs.required_text("guest_id")?.into(),
            name: attrs.required_text("name")?,
            address: attrs.required_text("address")?,
            contact_details: attrs.required_text("contact_details")?,
        })
    }

    fn patch_from_attributes(attrs: &Attributes) -> Result<GuestPatch> {
        attrs.reject_identifier()?;
        Ok(GuestPatch {
            name: attrs.optional_text("name"),
            address: attrs.optional_text("address"),
            contact_details: attrs.optional_text("contact_details"),
        })
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest ID: {}, Name: {}, Address: {}, Contact: {}",
            self.guest_id, self.name, self.address, self.contact_details
        )
    }
}
