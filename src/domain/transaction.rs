use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AccountNumber, Cents};

pub type TransactionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
    Interest,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Transfer => "Transfer",
            TransactionKind::Interest => "Interest",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single balance change on one account.
/// Transactions are append-only; they are the audit trail of every balance.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    /// Sequential, assigned by the store
    pub id: TransactionId,
    pub account: AccountNumber,
    pub kind: TransactionKind,
    /// Always positive
    pub amount: Cents,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// Other side of a transfer
    pub counterparty: Option<AccountNumber>,
    /// Account balance right after this transaction
    pub balance_after: Cents,
}

impl Transaction {
    pub fn new(
        account: AccountNumber,
        kind: TransactionKind,
        amount: Cents,
        description: impl Into<String>,
        balance_after: Cents,
    ) -> Self {
        assert!(amount > 0, "Transaction amount must be positive");
        Self {
            id: 0, // Will be set by the store
            account,
            kind,
            amount,
            description: description.into(),
            timestamp: Utc::now(),
            counterparty: None,
            balance_after,
        }
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<AccountNumber>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_transfer_leg() {
        let tx = Transaction::new(
            "ACC1000000001".into(),
            TransactionKind::Transfer,
            50000,
            "Transfer to ACC1000000002",
            0,
        )
        .with_counterparty("ACC1000000002");

        assert_eq!(tx.kind, TransactionKind::Transfer);
        assert_eq!(tx.counterparty.as_deref(), Some("ACC1000000002"));
        assert_eq!(tx.id, 0);
    }

    #[test]
    fn test_serialize_transaction() {
        let tx = Transaction::new(
            "ACC1000000001".into(),
            TransactionKind::Interest,
            292,
            "Monthly interest",
            100_292,
        );
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["kind"], "interest");
        assert_eq!(json["amount"], 292);
        assert_eq!(json["balance_after"], 100_292);
        assert!(json["counterparty"].is_null());
    }

    #[test]
    #[should_panic(expected = "Transaction amount must be positive")]
    fn test_transaction_requires_positive_amount() {
        Transaction::new("ACC1".into(), TransactionKind::Deposit, 0, "nothing", 0);
    }
}
