/// offer lifecycle - create, toggle, and re-validate offers
use chrono::Duration;
use recharge_offers_rs::{Money, NewOffer, OfferStore, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let now = time.now();
    let mut store = OfferStore::new();

    let offer_id = store.create_offer(
        NewOffer::builder()
            .title("Weekend Special")
            .description("₹20 cashback on BSNL recharges")
            .cashback(Money::from_rupees(20))
            .operator("BSNL")
            .valid_between(now, now + Duration::days(2))
            .build()?,
    );
    println!("created offer {offer_id}");

    let amount = Money::from_rupees(100);
    println!(
        "listed for BSNL at {}: {}",
        amount,
        store.get_available_offers("BSNL", amount, &time).len()
    );

    // deactivate: the offer disappears from listings and cannot be applied
    store.toggle_offer_status(offer_id, false);
    println!(
        "after deactivation: {} listed, apply -> {:?}",
        store.get_available_offers("BSNL", amount, &time).len(),
        store.apply_offer(offer_id, amount, &time).is_some()
    );

    // reactivate and extend the window
    store.toggle_offer_status(offer_id, true);
    store.update_offer_validity(offer_id, now, now + Duration::days(30));

    if let Some(applied) = store.apply_offer(offer_id, amount, &time) {
        println!(
            "applied: discount {}, final {}",
            applied.discount, applied.final_amount
        );
    }

    // lifecycle operations fail soft on unknown ids
    println!("toggle unknown id -> {}", store.toggle_offer_status(999, true));

    for event in store.events.take_events() {
        println!("event: {event:?}");
    }

    Ok(())
}
