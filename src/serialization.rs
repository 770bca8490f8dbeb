/// serialization support for store and session state
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::session::RechargeSession;
use crate::store::OfferStore;
use crate::types::{OfferId, Operator, PromotionalOffer, Transaction};

/// serializable view of the offer store
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreView {
    pub offer_count: usize,
    pub offers: Vec<PromotionalOffer>,
}

impl StoreView {
    pub fn from_store(store: &OfferStore) -> Self {
        let offers = store.get_all_offers();
        StoreView {
            offer_count: offers.len(),
            offers,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// serializable view of a recharge session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub draft: DraftView,
    pub transaction_count: usize,
    pub total_spent: Money,
    pub total_saved: Money,
    /// most-recent-first
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftView {
    pub mobile_number: String,
    pub operator: Option<Operator>,
    pub amount: Option<Money>,
    pub selected_offer_id: Option<OfferId>,
    pub listed_offer_ids: Vec<OfferId>,
}

impl SessionView {
    pub fn from_session(session: &RechargeSession) -> Self {
        SessionView {
            draft: DraftView {
                mobile_number: session.mobile_number().to_string(),
                operator: session.operator().map(String::from),
                amount: session.amount(),
                selected_offer_id: session.selected_offer_id(),
                listed_offer_ids: session.offers().iter().map(|o| o.offer_id).collect(),
            },
            transaction_count: session.history().len(),
            total_spent: session.history().total_spent(),
            total_saved: session.history().total_saved(),
            transactions: session.history().iter().cloned().collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
