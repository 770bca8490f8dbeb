use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;

use crate::config::StoreConfig;
use crate::events::{Event, EventStore};
use crate::money::Money;
use crate::offers::{discount, eligibility};
use crate::types::{AppliedOffer, NewOffer, OfferId, PromotionalOffer};

/// in-memory promotional offer store
///
/// offers are keyed by their sequential id in a `BTreeMap`, so `get_all_offers`
/// order is stable within a single store state. the store is the single source
/// of truth for offer application: `apply_offer` always re-derives eligibility,
/// never trusting a client's earlier listing.
pub struct OfferStore {
    config: StoreConfig,
    offers: BTreeMap<OfferId, PromotionalOffer>,
    next_offer_id: OfferId,
    pub events: EventStore,
}

impl OfferStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            offers: BTreeMap::new(),
            next_offer_id: 1,
            events: EventStore::new(),
        }
    }

    /// store a new offer and return its fresh id
    pub fn create_offer(&mut self, new_offer: NewOffer) -> OfferId {
        let offer_id = self.next_offer_id;
        self.next_offer_id += 1;

        let offer = PromotionalOffer {
            offer_id,
            title: new_offer.title,
            description: new_offer.description,
            discount_type: new_offer.discount_type,
            discount_value: new_offer.discount_value,
            max_discount_cap: new_offer.max_discount_cap,
            min_recharge_amount: new_offer.min_recharge_amount,
            applicable_operators: new_offer.applicable_operators,
            validity_start: new_offer.validity_start,
            validity_end: new_offer.validity_end,
            active: self.config.default_active,
        };

        tracing::debug!(offer_id, title = %offer.title, "offer created");
        self.events.emit(Event::OfferCreated {
            offer_id,
            title: offer.title.clone(),
            active: offer.active,
        });

        self.offers.insert(offer_id, offer);
        offer_id
    }

    pub fn get_offer(&self, offer_id: OfferId) -> Option<&PromotionalOffer> {
        self.offers.get(&offer_id)
    }

    /// every stored offer, in ascending id order
    pub fn get_all_offers(&self) -> Vec<PromotionalOffer> {
        self.offers.values().cloned().collect()
    }

    /// server-side eligibility filter
    ///
    /// results are ordered by descending discount for the queried amount, ties
    /// by ascending id, matching the ordering clients rely on for a "best
    /// deal" hint. the clock is read once for the whole listing.
    pub fn get_available_offers(
        &self,
        operator: &str,
        amount: Money,
        time: &SafeTimeProvider,
    ) -> Vec<PromotionalOffer> {
        let now = time.now();

        let mut available: Vec<PromotionalOffer> = self
            .offers
            .values()
            .filter(|offer| eligibility::is_eligible(offer, operator, amount, now))
            .cloned()
            .collect();

        available.sort_by(|a, b| {
            discount::discount_for(b, amount)
                .cmp(&discount::discount_for(a, amount))
                .then(a.offer_id.cmp(&b.offer_id))
        });

        tracing::debug!(
            operator,
            amount = amount.rupees(),
            count = available.len(),
            "listed available offers"
        );

        available
    }

    /// set the active flag; false if the offer is unknown
    pub fn toggle_offer_status(&mut self, offer_id: OfferId, is_active: bool) -> bool {
        match self.offers.get_mut(&offer_id) {
            Some(offer) => {
                offer.active = is_active;
                tracing::debug!(offer_id, active = is_active, "offer status toggled");
                self.events.emit(Event::OfferStatusToggled {
                    offer_id,
                    active: is_active,
                });
                true
            }
            None => {
                tracing::warn!(offer_id, "status toggle for unknown offer");
                false
            }
        }
    }

    /// overwrite the validity window; false if the offer is unknown
    pub fn update_offer_validity(
        &mut self,
        offer_id: OfferId,
        new_start: DateTime<Utc>,
        new_end: DateTime<Utc>,
    ) -> bool {
        match self.offers.get_mut(&offer_id) {
            Some(offer) => {
                offer.validity_start = new_start;
                offer.validity_end = new_end;
                tracing::debug!(offer_id, "offer validity updated");
                self.events.emit(Event::OfferValidityUpdated {
                    offer_id,
                    new_start,
                    new_end,
                });
                true
            }
            None => {
                tracing::warn!(offer_id, "validity update for unknown offer");
                false
            }
        }
    }

    /// apply an offer to a recharge amount
    ///
    /// eligibility is re-derived here from the stored offer, so an offer that
    /// expired or was deactivated after a client listed it comes back as
    /// `None`. the service has no operator context of its own; the offer is
    /// applicable when it is eligible for an operator it names. unknown ids
    /// are an absent result, never an error.
    pub fn apply_offer(
        &mut self,
        offer_id: OfferId,
        recharge_amount: Money,
        time: &SafeTimeProvider,
    ) -> Option<AppliedOffer> {
        let now = time.now();

        let offer = match self.offers.get(&offer_id) {
            Some(offer) => offer,
            None => {
                tracing::debug!(offer_id, "apply requested for unknown offer");
                return None;
            }
        };

        let eligible = offer
            .applicable_operators
            .iter()
            .any(|op| eligibility::is_eligible(offer, op, recharge_amount, now));

        if !eligible {
            tracing::debug!(
                offer_id,
                amount = recharge_amount.rupees(),
                "offer no longer eligible at application time"
            );
            self.events.emit(Event::OfferApplicationRejected {
                offer_id,
                amount: recharge_amount,
                timestamp: now,
            });
            return None;
        }

        let applied = discount::apply(offer, recharge_amount);

        tracing::debug!(
            offer_id,
            discount = applied.discount.rupees(),
            final_amount = applied.final_amount.rupees(),
            "offer applied"
        );
        self.events.emit(Event::OfferApplied {
            offer_id,
            original_amount: applied.original_amount,
            discount: applied.discount,
            final_amount: applied.final_amount,
            timestamp: now,
        });

        Some(applied)
    }

    pub fn offer_count(&self) -> usize {
        self.offers.len()
    }
}

impl Default for OfferStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewOffer;
    use chrono::{Duration, TimeZone};
    use hourglass_rs::TimeSource;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        ))
    }

    fn percentage_offer(time: &SafeTimeProvider, percent: u64, cap: Option<u64>) -> NewOffer {
        let now = time.now();
        let mut builder = NewOffer::builder()
            .title(format!("{percent}% Off"))
            .percentage(percent)
            .min_recharge(Money::from_rupees(50))
            .operator("Airtel")
            .valid_between(now - Duration::days(1), now + Duration::days(30));
        if let Some(cap) = cap {
            builder = builder.cap(Money::from_rupees(cap));
        }
        builder.build().unwrap()
    }

    fn cashback_offer(time: &SafeTimeProvider, value: u64) -> NewOffer {
        let now = time.now();
        NewOffer::builder()
            .title(format!("₹{value} Cashback"))
            .cashback(Money::from_rupees(value))
            .operator("Airtel")
            .valid_between(now - Duration::days(1), now + Duration::days(30))
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let time = test_time();
        let mut store = OfferStore::new();

        let first = store.create_offer(percentage_offer(&time, 10, None));
        let second = store.create_offer(cashback_offer(&time, 30));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.offer_count(), 2);
    }

    #[test]
    fn test_created_offers_respect_default_active() {
        let time = test_time();
        let mut store = OfferStore::with_config(StoreConfig {
            default_active: false,
        });

        let id = store.create_offer(percentage_offer(&time, 10, None));

        assert!(!store.get_offer(id).unwrap().active);
        assert!(store
            .get_available_offers("Airtel", Money::from_rupees(100), &time)
            .is_empty());
    }

    #[test]
    fn test_get_all_order_is_stable() {
        let time = test_time();
        let mut store = OfferStore::new();

        for _ in 0..5 {
            store.create_offer(cashback_offer(&time, 10));
        }

        let ids: Vec<OfferId> = store.get_all_offers().iter().map(|o| o.offer_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_available_offers_ordered_by_descending_discount() {
        let time = test_time();
        let mut store = OfferStore::new();

        // at ₹200: 10% => 20, cashback => 35, 5% capped => 8
        let small = store.create_offer(percentage_offer(&time, 10, None));
        let big = store.create_offer(cashback_offer(&time, 35));
        let capped = store.create_offer(percentage_offer(&time, 5, Some(8)));

        let listed = store.get_available_offers("Airtel", Money::from_rupees(200), &time);
        let ids: Vec<OfferId> = listed.iter().map(|o| o.offer_id).collect();

        assert_eq!(ids, vec![big, small, capped]);
    }

    #[test]
    fn test_available_excludes_below_minimum() {
        let time = test_time();
        let mut store = OfferStore::new();
        store.create_offer(percentage_offer(&time, 10, None));

        assert!(store
            .get_available_offers("Airtel", Money::from_rupees(40), &time)
            .is_empty());
    }

    #[test]
    fn test_toggle_unknown_offer_returns_false() {
        let mut store = OfferStore::new();

        assert!(!store.toggle_offer_status(99, true));
    }

    #[test]
    fn test_toggle_hides_offer_from_listing() {
        let time = test_time();
        let mut store = OfferStore::new();
        let id = store.create_offer(percentage_offer(&time, 10, None));

        assert!(store.toggle_offer_status(id, false));
        assert!(store
            .get_available_offers("Airtel", Money::from_rupees(100), &time)
            .is_empty());

        assert!(store.toggle_offer_status(id, true));
        assert_eq!(
            store
                .get_available_offers("Airtel", Money::from_rupees(100), &time)
                .len(),
            1
        );
    }

    #[test]
    fn test_update_validity_unknown_offer_returns_false() {
        let time = test_time();
        let now = time.now();
        let mut store = OfferStore::new();

        assert!(!store.update_offer_validity(99, now, now + Duration::days(1)));
    }

    #[test]
    fn test_update_validity_revives_expired_offer() {
        let time = test_time();
        let now = time.now();
        let mut store = OfferStore::new();

        let mut expired = percentage_offer(&time, 10, None);
        expired.validity_start = now - Duration::days(10);
        expired.validity_end = now - Duration::days(5);
        let id = store.create_offer(expired);

        assert!(store.apply_offer(id, Money::from_rupees(100), &time).is_none());

        assert!(store.update_offer_validity(id, now - Duration::days(1), now + Duration::days(1)));
        assert!(store.apply_offer(id, Money::from_rupees(100), &time).is_some());
    }

    #[test]
    fn test_apply_unknown_offer_is_absent() {
        let time = test_time();
        let mut store = OfferStore::new();

        assert!(store.apply_offer(42, Money::from_rupees(100), &time).is_none());
    }

    #[test]
    fn test_apply_recomputes_discount() {
        let time = test_time();
        let mut store = OfferStore::new();
        let id = store.create_offer(percentage_offer(&time, 10, Some(15)));

        let applied = store
            .apply_offer(id, Money::from_rupees(200), &time)
            .unwrap();

        assert_eq!(applied.discount, Money::from_rupees(15));
        assert_eq!(applied.final_amount, Money::from_rupees(185));
        assert_eq!(applied.original_amount, Money::from_rupees(200));
    }

    #[test]
    fn test_apply_rejects_after_expiry() {
        let time = test_time();
        let control = time.test_control().unwrap();
        let mut store = OfferStore::new();
        let id = store.create_offer(percentage_offer(&time, 10, None));

        assert!(store.apply_offer(id, Money::from_rupees(100), &time).is_some());

        // listing happened, then the window lapsed before application
        control.advance(Duration::days(60));
        assert!(store.apply_offer(id, Money::from_rupees(100), &time).is_none());
    }

    #[test]
    fn test_apply_rejects_below_minimum() {
        let time = test_time();
        let mut store = OfferStore::new();
        let id = store.create_offer(percentage_offer(&time, 10, None));

        assert!(store.apply_offer(id, Money::from_rupees(40), &time).is_none());
    }

    #[test]
    fn test_lifecycle_events_emitted() {
        let time = test_time();
        let now = time.now();
        let mut store = OfferStore::new();

        let id = store.create_offer(percentage_offer(&time, 10, None));
        store.toggle_offer_status(id, false);
        store.update_offer_validity(id, now, now + Duration::days(1));

        let events = store.events.take_events();
        assert!(matches!(events[0], Event::OfferCreated { offer_id, .. } if offer_id == id));
        assert!(matches!(
            events[1],
            Event::OfferStatusToggled { offer_id, active: false } if offer_id == id
        ));
        assert!(matches!(
            events[2],
            Event::OfferValidityUpdated { offer_id, .. } if offer_id == id
        ));
    }
}
