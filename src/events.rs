use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::types::{OfferId, Operator};

/// all events that can be emitted by the store and the recharge session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // offer lifecycle events
    OfferCreated {
        offer_id: OfferId,
        title: String,
        active: bool,
    },
    OfferStatusToggled {
        offer_id: OfferId,
        active: bool,
    },
    OfferValidityUpdated {
        offer_id: OfferId,
        new_start: DateTime<Utc>,
        new_end: DateTime<Utc>,
    },

    // application events
    OfferApplied {
        offer_id: OfferId,
        original_amount: Money,
        discount: Money,
        final_amount: Money,
        timestamp: DateTime<Utc>,
    },
    OfferApplicationRejected {
        offer_id: OfferId,
        amount: Money,
        timestamp: DateTime<Utc>,
    },

    // recharge events
    RechargeRecorded {
        transaction_id: Uuid,
        operator: Operator,
        amount: Money,
        charged_amount: Money,
        timestamp: DateTime<Utc>,
    },
    OfferSelectionInvalidated {
        offer_id: OfferId,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
