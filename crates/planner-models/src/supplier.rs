//! Supplier records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::ids::SupplierId;
use crate::kind::EntityKind;
use crate::record::Record;

/// A company providing services for events (catering, cleaning, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: SupplierId,
    pub name: String,
    pub address: String,
    pub contact_details: String,
    pub services_offered: String,
}

/// Partial update for a [`Supplier`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_details: Option<String>,
    pub services_offered: Option<String>,
}

impl Record for Supplier {
    type Id = SupplierId;
    type Patch = SupplierPatch;

    const KIND: EntityKind = EntityKind::Supplier;

    fn id(&self) -> &SupplierId {
        &self.supplier_id
    }

    fn apply(&mut self, patch: SupplierPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(contact_details) = patch.contact_details {
            self.contact_details = contact_details;
        }
        if let Some(services_offered) = patch.services_offered {
            self.services_offered = services_offered;
        }
    }

    fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            supplier_id: attrs.required_text("supplier_id")?.into(),
            name: attrs.required_text("name")?,
            address: attrs.required_text("address")?,
            contact_details: attrs.required_text("contact_details")?,
            services_offered: attrs.required_text("services_offered")?,
        })
    }

    fn patch_from_attributes(attrs: &Attributes) -> Result<SupplierPatch> {
        attrs.reject_identifier()?;
        Ok(SupplierPatch {
            name: attrs.optional_text("name"),
            address: attrs.optional_text("address"),
            contact_details: attrs.optional_text("contact_details"),
            services_offered: attrs.optional_text("services_offered"),
        })
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Supplier ID: {}, Name: {}, Address: {}, Contact: {}, Services: {}",
            self.supplier_id, self.name, self.address, self.contact_details, self.services_offered
        )
    }
}
