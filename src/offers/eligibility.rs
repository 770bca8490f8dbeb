use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;

use crate::money::Money;
use crate::types::PromotionalOffer;

/// check every eligibility condition at a fixed instant
///
/// an offer is eligible only if the operator is in its applicable set, the
/// amount meets the minimum (inclusive), the offer is active, and `now` falls
/// within the validity window (both bounds inclusive). offers with an empty
/// operator set are never eligible; an inverted window can never match.
pub fn is_eligible(
    offer: &PromotionalOffer,
    operator: &str,
    amount: Money,
    now: DateTime<Utc>,
) -> bool {
    if !offer.active {
        return false;
    }

    if !offer.applicable_operators.iter().any(|op| op == operator) {
        return false;
    }

    if amount < offer.min_recharge_amount {
        return false;
    }

    offer.validity_start <= now && now <= offer.validity_end
}

/// filter candidates down to the offers that legally apply
///
/// the clock is read exactly once so every offer is judged against the same
/// instant.
pub fn eligible_offers(
    offers: &[PromotionalOffer],
    operator: &str,
    amount: Money,
    time: &SafeTimeProvider,
) -> Vec<PromotionalOffer> {
    let now = time.now();
    offers
        .iter()
        .filter(|offer| is_eligible(offer, operator, amount, now))
        .cloned()
        .collect()
}
