//! Builder patterns for records with many fields.

use crate::event::Event;
use crate::ids::{ClientId, EventId, GuestId};

/// Builder for creating Event instances with a fluent API.
///
/// Fields not set explicitly start empty (text) or zero (numbers).
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Creates a new EventBuilder with the identifier and paying client.
    pub fn new(event_id: impl Into<EventId>, client_id: impl Into<ClientId>) -> Self {
        Self {
            event: Event {
                event_id: event_id.into(),
                event_type: String::new(),
                theme: String::new(),
                date: String::new(),
                time: String::new(),
                duration: 0.0,
                venue_address: String::new(),
                client_id: client_id.into(),
                guest_list: Vec::new(),
                catering_company: String::new(),
                cleaning_company: String::new(),
                decorations_company: String::new(),
                entertainment_company: String::new(),
                furniture_supply_company: String::new(),
                invoice: 0.0,
            },
        }
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event.event_type = event_type.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.event.theme = theme.into();
        self
    }

    /// Sets the date and start time.
    pub fn schedule(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.event.date = date.into();
        self.event.time = time.into();
        self
    }

    /// Sets the duration in hours.
    pub fn duration(mut self, hours: f64) -> Self {
        self.event.duration = hours;
        self
    }

    pub fn venue_address(mut self, address: impl Into<String>) -> Self {
        self.event.venue_address = address.into();
        self
    }

    /// Adds a single guest.
    pub fn guest(mut self, guest_id: impl Into<GuestId>) -> Self {
        self.event.guest_list.push(guest_id.into());
        self
    }

    /// Replaces the guest list.
    pub fn guests(mut self, guest_list: Vec<GuestId>) -> Self {
        self.event.guest_list = guest_list;
        self
    }

    pub fn catering(mut self, company: impl Into<String>) -> Self {
        self.event.catering_company = company.into();
        self
    }

    pub fn cleaning(mut self, company: impl Into<String>) -> Self {
        self.event.cleaning_company = company.into();
        self
    }

    pub fn decorations(mut self, company: impl Into<String>) -> Self {
        self.event.decorations_company = company.into();
        self
    }

    pub fn entertainment(mut self, company: impl Into<String>) -> Self {
        self.event.entertainment_company = company.into();
        self
    }

    pub fn furniture_supply(mut self, company: impl Into<String>) -> Self {
        self.event.furniture_supply_company = company.into();
        self
    }

    /// Sets the invoiced amount.
    pub fn invoice(mut self, amount: f64) -> Self {
        self.event.invoice = amount;
        self
    }

    /// Builds the Event.
    pub fn build(self) -> Event {
        self.event
    }
}

/// Convenience method on Event for creating builders.
impl Event {
    /// Creates a builder for a new event.
    pub fn builder(event_id: impl Into<EventId>, client_id: impl Into<ClientId>) -> EventBuilder {
        EventBuilder::new(event_id, client_id)
    }
}
