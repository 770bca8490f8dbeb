/// time control - deterministic offer expiry with a test clock
use chrono::{Duration, TimeZone, Utc};
use recharge_offers_rs::{
    Money, NewOffer, OfferStore, RechargeSession, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    ));
    let controller = time.test_control().ok_or("test control unavailable")?;

    println!("starting at: {}", time.now().format("%Y-%m-%d %H:%M"));

    let mut store = OfferStore::new();
    let offer_id = store.create_offer(
        NewOffer::builder()
            .title("Flash Sale: 15% Off")
            .percentage(15)
            .operator("Jio")
            .valid_between(time.now(), time.now() + Duration::hours(6))
            .build()?,
    );

    let mut session = RechargeSession::new();
    session.set_mobile_number("9876543210");
    session.set_operator("Jio");
    session.set_amount(Money::from_rupees(200));

    // within the window the offer is listed and selectable
    session.refresh_offers(&store, &time);
    println!("offers listed during the sale: {}", session.offers().len());
    session.select_offer(offer_id)?;

    // the user leaves the form open past the end of the sale
    controller.advance(Duration::hours(8));
    println!("\nadvanced to: {}", time.now().format("%Y-%m-%d %H:%M"));

    // application re-validates server-side; the recharge still goes through
    let tx = session.submit(&mut store, &time)?;
    println!(
        "offer applied: {}, charged {}",
        tx.applied_offer.is_some(),
        tx.charged_amount()
    );

    Ok(())
}
