use hourglass_rs::SafeTimeProvider;

use crate::config::CatalogConfig;
use crate::errors::{RechargeError, Result};
use crate::events::{Event, EventStore};
use crate::history::TransactionLog;
use crate::money::Money;
use crate::offers::selector;
use crate::recharge::RechargeRequest;
use crate::store::OfferStore;
use crate::types::{OfferId, Operator, PromotionalOffer, Transaction, TransactionStatus};

/// client-side recharge session: the form draft plus the session history
///
/// the draft mirrors the recharge form: mobile number, operator, amount, and
/// an optionally selected offer. changing operator or amount invalidates any
/// selection, because an offer eligible under one (operator, amount) pair may
/// be ineligible under another. the local best-offer ranking is authoritative;
/// server listing order is only a hint.
pub struct RechargeSession {
    catalog: CatalogConfig,
    mobile_number: String,
    operator: Option<Operator>,
    amount: Option<Money>,
    listed_offers: Vec<PromotionalOffer>,
    selected_offer_id: Option<OfferId>,
    history: TransactionLog,
    pub events: EventStore,
}

impl RechargeSession {
    pub fn new() -> Self {
        Self::with_catalog(CatalogConfig::default())
    }

    pub fn with_catalog(catalog: CatalogConfig) -> Self {
        Self {
            catalog,
            mobile_number: String::new(),
            operator: None,
            amount: None,
            listed_offers: Vec::new(),
            selected_offer_id: None,
            history: TransactionLog::new(),
            events: EventStore::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    pub fn set_mobile_number(&mut self, number: impl Into<String>) {
        self.mobile_number = number.into();
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    /// pick an operator; a changed value drops the current offer selection
    pub fn set_operator(&mut self, operator: impl Into<Operator>) {
        let operator = operator.into();
        if self.operator.as_deref() != Some(operator.as_str()) {
            self.operator = Some(operator);
            self.invalidate_selection();
            self.listed_offers.clear();
        }
    }

    /// pick an amount; a changed value drops the current offer selection
    pub fn set_amount(&mut self, amount: Money) {
        if self.amount != Some(amount) {
            self.amount = Some(amount);
            self.invalidate_selection();
            self.listed_offers.clear();
        }
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    pub fn amount(&self) -> Option<Money> {
        self.amount
    }

    /// fetch eligible offers from the store for the current draft
    ///
    /// with no operator or amount picked yet there is nothing to ask for and
    /// the listing is empty. a selection that disappears from the new listing
    /// is dropped.
    pub fn refresh_offers(
        &mut self,
        store: &OfferStore,
        time: &SafeTimeProvider,
    ) -> &[PromotionalOffer] {
        self.listed_offers = match (&self.operator, self.amount) {
            (Some(operator), Some(amount)) => store.get_available_offers(operator, amount, time),
            _ => Vec::new(),
        };

        if let Some(selected) = self.selected_offer_id {
            if !self.listed_offers.iter().any(|o| o.offer_id == selected) {
                self.invalidate_selection();
            }
        }

        &self.listed_offers
    }

    /// the last fetched listing
    pub fn offers(&self) -> &[PromotionalOffer] {
        &self.listed_offers
    }

    /// locally ranked recommendation over the last listing
    pub fn best_offer(&self) -> Option<&PromotionalOffer> {
        let amount = self.amount?;
        selector::best_offer(&self.listed_offers, amount)
    }

    /// select an offer from the current listing
    pub fn select_offer(&mut self, offer_id: OfferId) -> Result<()> {
        if !self.listed_offers.iter().any(|o| o.offer_id == offer_id) {
            return Err(RechargeError::OfferNotListed { offer_id });
        }
        self.selected_offer_id = Some(offer_id);
        Ok(())
    }

    pub fn selected_offer_id(&self) -> Option<OfferId> {
        self.selected_offer_id
    }

    pub fn clear_selection(&mut self) {
        self.selected_offer_id = None;
    }

    /// submit the recharge
    ///
    /// validates the draft, applies the selected offer best-effort (a failed
    /// or stale application degrades to "no offer applied", it never aborts
    /// the recharge), records the transaction, and resets the form.
    pub fn submit(
        &mut self,
        store: &mut OfferStore,
        time: &SafeTimeProvider,
    ) -> Result<Transaction> {
        let request = self.validated_request()?;

        let applied = match self.selected_offer_id {
            Some(offer_id) => {
                let applied = store.apply_offer(offer_id, request.amount, time);
                if applied.is_none() {
                    tracing::warn!(
                        offer_id,
                        "offer application failed, proceeding without offer"
                    );
                }
                applied
            }
            None => None,
        };

        let timestamp = time.now();
        let transaction = self.history.record(
            request.mobile_number,
            request.operator,
            request.amount,
            TransactionStatus::Completed,
            applied,
            timestamp,
        );

        self.events.emit(Event::RechargeRecorded {
            transaction_id: transaction.id,
            operator: transaction.operator.clone(),
            amount: transaction.amount,
            charged_amount: transaction.charged_amount(),
            timestamp,
        });

        self.reset_draft();
        Ok(transaction)
    }

    pub fn history(&self) -> &TransactionLog {
        &self.history
    }

    fn validated_request(&self) -> Result<RechargeRequest> {
        let operator = self.operator.as_ref().ok_or(RechargeError::OperatorRequired)?;
        let amount = self.amount.ok_or(RechargeError::AmountRequired)?;

        RechargeRequest::new(self.mobile_number.clone(), operator.clone(), amount, &self.catalog)
    }

    fn invalidate_selection(&mut self) {
        if let Some(offer_id) = self.selected_offer_id.take() {
            tracing::debug!(offer_id, "offer selection invalidated");
            self.events.emit(Event::OfferSelectionInvalidated { offer_id });
        }
    }

    fn reset_draft(&mut self) {
        self.mobile_number.clear();
        self.operator = None;
        self.amount = None;
        self.listed_offers.clear();
        self.selected_offer_id = None;
    }
}

impl Default for RechargeSession {
    fn default() -> Self {
        Self::new()
    }
}
