//! Event records.
//!
//! An event names its client and guests by identifier only. Nothing checks
//! that those identifiers exist in the client or guest collections.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::ids::{ClientId, EventId, GuestId};
use crate::kind::EntityKind;
use crate::record::Record;

/// A planned event and the companies booked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Primary identifier.
    pub event_id: EventId,

    /// Kind of occasion (wedding, conference, ...).
    pub event_type: String,

    pub theme: String,

    pub date: String,

    pub time: String,

    /// Length of the event in hours.
    pub duration: f64,

    pub venue_address: String,

    /// Client paying for the event.
    pub client_id: ClientId,

    /// Invited guests, in invitation order.
    #[serde(default)]
    pub guest_list: Vec<GuestId>,

    pub catering_company: String,

    pub cleaning_company: String,

    pub decorations_company: String,

    pub entertainment_company: String,

    pub furniture_supply_company: String,

    /// Invoiced amount.
    pub invoice: f64,
}

/// Partial update for an [`Event`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub event_type: Option<String>,
    pub theme: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<f64>,
    pub venue_address: Option<String>,
    pub client_id: Option<ClientId>,
    pub guest_list: Option<Vec<GuestId>>,
    pub catering_company: Option<String>,
    pub cleaning_company: Option<String>,
    pub decorations_company: Option<String>,
    pub entertainment_company: Option<String>,
    pub furniture_supply_company: Option<String>,
    pub invoice: Option<f64>,
}

impl Event {
    /// Number of invited guests.
    pub fn guest_count(&self) -> usize {
        self.guest_list.len()
    }
}

impl Record for Event {
    type Id = EventId;
    type Patch = EventPatch;

    const KIND: EntityKind = EntityKind::Event;

    fn id(&self) -> &EventId {
        &self.event_id
    }

    fn apply(&mut self, patch: EventPatch) {
        let EventPatch {
            event_type,
            theme,
            date,
            time,
            duration,
            venue_address,
            client_id,
            guest_list,
            catering_company,
            cleaning_company,
            decorations_company,
            entertainment_company,
            furniture_supply_company,
            invoice,
        } = patch;

        if let Some(v) = event_type {
            self.event_type = v;
        }
        if let Some(v) = theme {
            self.theme = v;
        }
        if let Some(v) = date {
            self.date = v;
        }
        if let Some(v) = time {
            self.time = v;
        }
        if let Some(v) = duration {
            self.duration = v;
        }
        if let Some(v) = venue_address {
            self.venue_address = v;
        }
        if let Some(v) = client_id {
            self.client_id = v;
        }
        if let Some(v) = guest_list {
            self.guest_list = v;
        }
        if let Some(v) = catering_company {
            self.catering_company = v;
        }
        if let Some(v) = cleaning_company {
            self.cleaning_company = v;
        }
        if let Some(v) = decorations_company {
            self.decorations_company = v;
        }
        if let Some(v) = entertainment_company {
            self.entertainment_company = v;
        }
        if let Some(v) = furniture_supply_company {
            self.furniture_supply_company = v;
        }
        if let Some(v) = invoice {
            self.invoice = v;
        }
    }

    fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            event_id: attrs.required_text("event_id")?.into(),
            event_type: attrs.required_text("event_type")?,
            theme: attrs.required_text("theme")?,
            date: attrs.required_text("date")?,
            time: attrs.required_text("time")?,
            duration: attrs.required_amount("duration")?,
            venue_address: attrs.required_text("venue_address")?,
            client_id: attrs.required_text("client_id")?.into(),
            guest_list: guest_ids(attrs.required_list("guest_list")?),
            catering_company: attrs.required_text("catering_company")?,
            cleaning_company: attrs.required_text("cleaning_company")?,
            decorations_company: attrs.required_text("decorations_company")?,
            entertainment_company: attrs.required_text("entertainment_company")?,
            furniture_supply_company: attrs.required_text("furniture_supply_company")?,
            invoice: attrs.required_amount("invoice")?,
        })
    }

    fn patch_from_attributes(attrs: &Attributes) -> Result<EventPatch> {
        attrs.reject_identifier()?;
        Ok(EventPatch {
            event_type: attrs.optional_text("event_type"),
            theme: attrs.optional_text("theme"),
            date: attrs.optional_text("date"),
            time: attrs.optional_text("time"),
            duration: attrs.optional_amount("duration")?,
            venue_address: attrs.optional_text("venue_address"),
            client_id: attrs.optional_text("client_id").map(ClientId::from),
            guest_list: attrs.optional_list("guest_list").map(guest_ids),
            catering_company: attrs.optional_text("catering_company"),
            cleaning_company: attrs.optional_text("cleaning_company"),
            decorations_company: attrs.optional_text("decorations_company"),
            entertainment_company: attrs.optional_text("entertainment_company"),
            furniture_supply_company: attrs.optional_text("furniture_supply_company"),
            invoice: attrs.optional_amount("invoice")?,
        })
    }
}

fn guest_ids(raw: Vec<String>) -> Vec<GuestId> {
    raw.into_iter().map(GuestId::from).collect()
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event ID: {}, Type: {}, Theme: {}, Date: {}, Time: {}, Duration: {} hours, Venue: {}, \
             Client ID: {}, Guests: {}, Catering: {}, Cleaning: {}, Decorations: {}, \
             Entertainment: {}, Furniture: {}, Invoice: {}",
            self.event_id,
            self.event_type,
            self.theme,
            self.date,
            self.time,
            self.duration,
            self.venue_address,
            self.client_id,
            self.guest_count(),
            self.catering_company,
            self.cleaning_company,
            self.decorations_company,
            self.entertainment_company,
            self.furniture_supply_company,
            self.invoice
        )
    }
}
