use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::money::Money;
use crate::types::{AppliedOffer, Operator, Transaction, TransactionStatus};

/// session-local recharge history
///
/// append-only: transactions are never mutated after recording and live only
/// as long as the session. iteration is most-recent-first.
#[derive(Debug, Default)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
    sequence: u32,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// append a recharge and return the recorded entry
    pub fn record(
        &mut self,
        mobile_number: String,
        operator: Operator,
        amount: Money,
        status: TransactionStatus,
        applied_offer: Option<AppliedOffer>,
        timestamp: DateTime<Utc>,
    ) -> Transaction {
        self.sequence += 1;
        let reference = format!("TXN{}{:03}", timestamp.timestamp_millis(), self.sequence);

        let transaction = Transaction {
            id: Uuid::new_v4(),
            reference,
            mobile_number,
            operator,
            amount,
            timestamp,
            status,
            applied_offer,
        };

        tracing::debug!(
            reference = %transaction.reference,
            operator = %transaction.operator,
            amount = transaction.amount.rupees(),
            "recharge recorded"
        );

        self.transactions.push(transaction.clone());
        transaction
    }

    /// most-recent-first iteration
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// total charged across completed recharges, after discounts
    pub fn total_spent(&self) -> Money {
        self.transactions
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Completed)
            .map(Transaction::charged_amount)
            .sum()
    }

    /// total saved through applied offers
    pub fn total_saved(&self) -> Money {
        self.transactions
            .iter()
            .filter_map(|tx| tx.applied_offer.as_ref())
            .map(|applied| applied.discount)
            .sum()
    }
}
