use crate::money::Money;
use crate::types::{AppliedOffer, DiscountType, PromotionalOffer};

/// discount an offer yields at a given recharge amount
///
/// percentage discounts truncate toward zero; the result is bounded by the
/// offer's cap (when present) and by the amount itself, so the final amount
/// can never go negative.
pub fn discount_for(offer: &PromotionalOffer, amount: Money) -> Money {
    let raw = match offer.discount_type {
        DiscountType::Percentage => amount.percentage_floor(offer.discount_value),
        DiscountType::Cashback => Money::from_rupees(offer.discount_value),
    };

    let capped = match offer.max_discount_cap {
        Some(cap) => raw.min(cap),
        None => raw,
    };

    capped.min(amount)
}

/// build the applied-offer record for a recharge amount
pub fn apply(offer: &PromotionalOffer, amount: Money) -> AppliedOffer {
    let discount = discount_for(offer, amount);

    AppliedOffer {
        offer: offer.clone(),
        original_amount: amount,
        discount,
        final_amount: amount - discount,
    }
}
