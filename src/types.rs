use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{RechargeError, Result};
use crate::money::Money;

/// unique identifier for a promotional offer, assigned by the store
pub type OfferId = u64;

/// mobile network operator, identified by display name
pub type Operator = String;

/// how an offer's discount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// percentage of the recharge amount (0-100 expected, not enforced)
    Percentage,
    /// flat currency amount
    Cashback,
}

/// a promotional offer held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionalOffer {
    pub offer_id: OfferId,
    pub title: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: u64,
    /// upper bound on the computed discount; absent = uncapped
    pub max_discount_cap: Option<Money>,
    /// offer inapplicable below this recharge amount (inclusive lower bound)
    pub min_recharge_amount: Money,
    pub applicable_operators: Vec<Operator>,
    pub validity_start: DateTime<Utc>,
    pub validity_end: DateTime<Utc>,
    /// manually togglable, independent of the validity window
    pub active: bool,
}

/// creation payload for an offer; the store assigns id and active flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOffer {
    pub title: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: u64,
    pub max_discount_cap: Option<Money>,
    pub min_recharge_amount: Money,
    pub applicable_operators: Vec<Operator>,
    pub validity_start: DateTime<Utc>,
    pub validity_end: DateTime<Utc>,
}

impl NewOffer {
    /// builder for creating offers
    pub fn builder() -> OfferBuilder {
        OfferBuilder::new()
    }
}

/// builder for offer creation payloads
#[derive(Debug, Default)]
pub struct OfferBuilder {
    title: Option<String>,
    description: String,
    discount: Option<(DiscountType, u64)>,
    max_discount_cap: Option<Money>,
    min_recharge_amount: Money,
    applicable_operators: Vec<Operator>,
    validity: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl OfferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// percentage discount (e.g., 10 for 10% off)
    pub fn percentage(mut self, percent: u64) -> Self {
        self.discount = Some((DiscountType::Percentage, percent));
        self
    }

    /// flat cashback discount
    pub fn cashback(mut self, amount: Money) -> Self {
        self.discount = Some((DiscountType::Cashback, amount.rupees()));
        self
    }

    pub fn cap(mut self, cap: Money) -> Self {
        self.max_discount_cap = Some(cap);
        self
    }

    pub fn min_recharge(mut self, amount: Money) -> Self {
        self.min_recharge_amount = amount;
        self
    }

    /// add a single applicable operator
    pub fn operator(mut self, operator: impl Into<Operator>) -> Self {
        self.applicable_operators.push(operator.into());
        self
    }

    /// replace the applicable operator set
    pub fn operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Operator>,
    {
        self.applicable_operators = operators.into_iter().map(Into::into).collect();
        self
    }

    pub fn valid_between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.validity = Some((start, end));
        self
    }

    pub fn build(self) -> Result<NewOffer> {
        let title = self.title.ok_or(RechargeError::InvalidOfferDefinition {
            message: "title is required".to_string(),
        })?;

        let (discount_type, discount_value) =
            self.discount.ok_or(RechargeError::InvalidOfferDefinition {
                message: "discount type and value are required".to_string(),
            })?;

        let (validity_start, validity_end) =
            self.validity.ok_or(RechargeError::InvalidOfferDefinition {
                message: "validity window is required".to_string(),
            })?;

        if self.applicable_operators.is_empty() {
            return Err(RechargeError::InvalidOfferDefinition {
                message: "at least one applicable operator is required".to_string(),
            });
        }

        Ok(NewOffer {
            title,
            description: self.description,
            discount_type,
            discount_value,
            max_discount_cap: self.max_discount_cap,
            min_recharge_amount: self.min_recharge_amount,
            applicable_operators: self.applicable_operators,
            validity_start,
            validity_end,
        })
    }
}

/// result of applying an offer to a recharge amount; derived, never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedOffer {
    pub offer: PromotionalOffer,
    pub original_amount: Money,
    pub discount: Money,
    pub final_amount: Money,
}

/// recharge transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// a completed recharge, held in the session-local history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    /// human-facing reference, e.g. "TXN1706000000000001"
    pub reference: String,
    pub mobile_number: String,
    pub operator: Operator,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
    pub applied_offer: Option<AppliedOffer>,
}

impl Transaction {
    /// amount actually charged after any applied offer
    pub fn charged_amount(&self) -> Money {
        match &self.applied_offer {
            Some(applied) => applied.final_amount,
            None => self.amount,
        }
    }
}
