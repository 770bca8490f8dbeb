/// json state - pretty-printed views of store and session state
use chrono::Duration;
use recharge_offers_rs::{
    Money, NewOffer, OfferStore, RechargeSession, SafeTimeProvider, SessionView, StoreView,
    TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let now = time.now();

    let mut store = OfferStore::new();
    store.create_offer(
        NewOffer::builder()
            .title("10% Off Recharge")
            .percentage(10)
            .cap(Money::from_rupees(50))
            .min_recharge(Money::from_rupees(100))
            .operators(["Airtel", "Jio", "BSNL"])
            .valid_between(now, now + Duration::days(14))
            .build()?,
    );

    let mut session = RechargeSession::new();
    session.set_mobile_number("9876543210");
    session.set_operator("Jio");
    session.set_amount(Money::from_rupees(500));
    session.refresh_offers(&store, &time);
    let best_id = session.best_offer().map(|offer| offer.offer_id);
    if let Some(offer_id) = best_id {
        session.select_offer(offer_id)?;
    }
    session.submit(&mut store, &time)?;

    println!("{}", StoreView::from_store(&store).to_json_pretty()?);
    println!("{}", SessionView::from_session(&session).to_json_pretty()?);

    Ok(())
}
