pub mod config;
pub mod errors;
pub mod events;
pub mod history;
pub mod money;
pub mod offers;
pub mod recharge;
pub mod serialization;
pub mod session;
pub mod store;
pub mod types;

// re-export key types
pub use config::{CatalogConfig, StoreConfig};
pub use errors::{RechargeError, Result};
pub use events::{Event, EventStore};
pub use history::TransactionLog;
pub use money::Money;
pub use offers::{best_offer, best_offer_id, discount_for, eligible_offers, is_eligible};
pub use recharge::{is_valid_mobile_number, RechargeRequest};
pub use serialization::{SessionView, StoreView};
pub use session::RechargeSession;
pub use store::OfferStore;
pub use types::{
    AppliedOffer, DiscountType, NewOffer, OfferBuilder, OfferId, Operator, PromotionalOffer,
    Transaction, TransactionStatus,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use uuid::Uuid;
