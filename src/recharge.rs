use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::errors::{RechargeError, Result};
use crate::money::Money;
use crate::types::Operator;

/// validated recharge parameters, ready for submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargeRequest {
    pub mobile_number: String,
    pub operator: Operator,
    pub amount: Money,
}

impl RechargeRequest {
    /// validate the raw form values against the catalog
    ///
    /// amount presets are a form hint, not a constraint; any positive amount
    /// is accepted.
    pub fn new(
        mobile_number: impl Into<String>,
        operator: impl Into<Operator>,
        amount: Money,
        catalog: &CatalogConfig,
    ) -> Result<Self> {
        let mobile_number = mobile_number.into();
        let operator = operator.into();

        if !is_valid_mobile_number(&mobile_number) {
            return Err(RechargeError::InvalidMobileNumber {
                number: mobile_number,
            });
        }

        if operator.is_empty() {
            return Err(RechargeError::OperatorRequired);
        }

        if !catalog.is_known_operator(&operator) {
            return Err(RechargeError::UnknownOperator { operator });
        }

        if amount.is_zero() {
            return Err(RechargeError::InvalidAmount { amount });
        }

        Ok(Self {
            mobile_number,
            operator,
            amount,
        })
    }
}

/// indian mobile number check: exactly 10 digits, leading digit 6-9
pub fn is_valid_mobile_number(number: &str) -> bool {
    let mut chars = number.chars();

    let leading_ok = matches!(chars.next(), Some('6'..='9'));
    leading_ok && number.len() == 10 && number.chars().all(|c| c.is_ascii_digit())
}
