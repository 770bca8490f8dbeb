use thiserror::Error;

use crate::money::Money;
use crate::types::OfferId;

#[derive(Error, Debug)]
pub enum RechargeError {
    #[error("invalid mobile number: {number}")]
    InvalidMobileNumber {
        number: String,
    },

    #[error("unknown operator: {operator}")]
    UnknownOperator {
        operator: String,
    },

    #[error("operator not selected")]
    OperatorRequired,

    #[error("recharge amount not selected")]
    AmountRequired,

    #[error("invalid recharge amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("offer {offer_id} is not in the current listing")]
    OfferNotListed {
        offer_id: OfferId,
    },

    #[error("invalid offer definition: {message}")]
    InvalidOfferDefinition {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, RechargeError>;
