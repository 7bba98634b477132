//! Client records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::ids::ClientId;
use crate::kind::EntityKind;
use crate::record::Record;

/// A customer who commissions events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: ClientId,
    pub name: String,
    pub address: String,
    pub contact_details: String,
    /// Spending limit across the client's events.
    pub budget: f64,
}

/// Partial update for a [`Client`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_details: Option<String>,
    pub budget: Option<f64>,
}

impl Record for Client {
    type Id = ClientId;
    type Patch = ClientPatch;

    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> &ClientId {
        &self.client_id
    }

    fn apply(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(contact_details) = patch.contact_details {
            self.contact_details = contact_details;
        }
        if let Some(budget) = patch.budget {
            self.budget = budget;
        }
    }

    fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            client_id: attrs.required_text("client_id")?.into(),
            name: attrs.required_text("name")?,
            address: attrs.required_text("address")?,
            contact_details: attrs.required_text("contact_details")?,
            budget: attrs.required_amount("budget")?,
        })
    }

    fn patch_from_attributes(attrs: &Attributes) -> Result<ClientPatch> {
        attrs.reject_identifier()?;
        Ok(ClientPatch {
            name: attrs.optional_text("name"),
            address: attrs.optional_text("address"),
            contact_details: attrs.optional_text("contact_details"),
            budget: attrs.optional_amount("budget")?,
        })
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client ID: {}, Name: {}, Address: {}, Contact: {}, Budget: {}",
            self.client_id, self.name, self.address, self.contact_details, self.budget
        )
    }
}
