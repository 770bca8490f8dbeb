use crate::money::Money;
use crate::offers::discount::discount_for;
use crate::types::{OfferId, PromotionalOffer};

/// pick the offer yielding the greatest discount for the amount
///
/// ties are broken by the lowest offer id so the selection is deterministic
/// regardless of input order. empty input yields no selection.
pub fn best_offer<'a>(
    offers: &'a [PromotionalOffer],
    amount: Money,
) -> Option<&'a PromotionalOffer> {
    let mut best: Option<(&PromotionalOffer, Money)> = None;

    for candidate in offers {
        let candidate_discount = discount_for(candidate, amount);
        best = match best {
            None => Some((candidate, candidate_discount)),
            Some((current, current_discount)) => {
                if candidate_discount > current_discount
                    || (candidate_discount == current_discount
                        && candidate.offer_id < current.offer_id)
                {
                    Some((candidate, candidate_discount))
                } else {
                    Some((current, current_discount))
                }
            }
        };
    }

    best.map(|(offer, _)| offer)
}

/// id of the best offer, if any
pub fn best_offer_id(offers: &[PromotionalOffer], amount: Money) -> Option<OfferId> {
    best_offer(offers, amount).map(|offer| offer.offer_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountType;
    use chrono::{TimeZone, Utc};

    fn cashback(offer_id: OfferId, value: u64) -> PromotionalOffer {
        PromotionalOffer {
            offer_id,
            title: format!("₹{value} Cashback"),
            description: String::new(),
            discount_type: DiscountType::Cashback,
            discount_value: value,
            max_discount_cap: None,
            min_recharge_amount: Money::ZERO,
            applicable_operators: vec!["Airtel".to_string()],
            validity_start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            validity_end: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
            active: true,
        }
    }

    #[test]
    fn test_greatest_discount_wins() {
        let offers = vec![cashback(1, 50), cashback(2, 80)];

        assert_eq!(best_offer_id(&offers, Money::from_rupees(500)), Some(2));
    }

    #[test]
    fn test_tie_broken_by_lowest_id() {
        let offers = vec![cashback(7, 50), cashback(3, 50)];

        assert_eq!(best_offer_id(&offers, Money::from_rupees(500)), Some(3));
    }

    #[test]
    fn test_empty_input_selects_nothing() {
        assert_eq!(best_offer(&[], Money::from_rupees(100)), None);
    }

    #[test]
    fn test_selection_independent_of_order() {
        let forward = vec![cashback(1, 20), cashback(2, 80), cashback(3, 50)];
        let mut reversed = forward.clone();
        reversed.reverse();

        let amount = Money::from_rupees(500);
        assert_eq!(best_offer_id(&forward, amount), best_offer_id(&reversed, amount));
    }

    #[test]
    fn test_clamping_can_equalize_discounts() {
        // both discounts clamp to the amount, so the lower id wins
        let offers = vec![cashback(5, 80), cashback(2, 90)];

        assert_eq!(best_offer_id(&offers, Money::from_rupees(10)), Some(2));
    }
}
