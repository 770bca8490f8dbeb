/// quick start - minimal example to get started
use chrono::Duration;
use recharge_offers_rs::{
    Money, NewOffer, OfferStore, RechargeSession, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let now = time.now();

    // seed the store with a couple of offers
    let mut store = OfferStore::new();
    store.create_offer(
        NewOffer::builder()
            .title("10% Off Recharge")
            .description("Save 10% on any recharge above ₹50")
            .percentage(10)
            .cap(Money::from_rupees(50))
            .min_recharge(Money::from_rupees(50))
            .operators(["Airtel", "Jio"])
            .valid_between(now, now + Duration::days(30))
            .build()?,
    );
    store.create_offer(
        NewOffer::builder()
            .title("Flat ₹35 Cashback")
            .cashback(Money::from_rupees(35))
            .operator("Airtel")
            .valid_between(now, now + Duration::days(30))
            .build()?,
    );

    // fill in the recharge form
    let mut session = RechargeSession::new();
    session.set_mobile_number("9876543210");
    session.set_operator("Airtel");
    session.set_amount(Money::from_rupees(200));

    // list eligible offers and take the recommendation
    session.refresh_offers(&store, &time);
    for offer in session.offers() {
        println!("offer {}: {}", offer.offer_id, offer.title);
    }
    let best_id = session.best_offer().map(|offer| {
        println!("best deal: {}", offer.title);
        offer.offer_id
    });
    if let Some(offer_id) = best_id {
        session.select_offer(offer_id)?;
    }

    // submit the recharge
    let tx = session.submit(&mut store, &time)?;
    println!(
        "recharged {} on {} for {}, charged {}",
        tx.mobile_number,
        tx.operator,
        tx.amount,
        tx.charged_amount()
    );

    Ok(())
}
