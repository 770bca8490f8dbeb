pub mod discount;
pub mod eligibility;
pub mod selector;

pub use discount::{apply, discount_for};
pub use eligibility::{eligible_offers, is_eligible};
pub use selector::{best_offer, best_offer_id};
