use std::borrow::Borrow;

use thiserror::Error;

use crate::domain::{AccountStatus, Cents, CustomerId, LoanId, LoanStatus, format_cents};

/// Why a ledger operation was refused. A refused operation changes nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Loan not found: {0}")]
    LoanNotFound(LoanId),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error(
        "Insufficient funds in account {account}: balance {}, required {}",
        money(.balance),
        money(.required)
    )]
    InsufficientFunds {
        account: String,
        balance: Cents,
        required: Cents,
    },

    #[error("Account {account} is {status}, not Active")]
    AccountNotActive {
        account: String,
        status: AccountStatus,
    },

    #[error("Cannot transfer to the same account: {0}")]
    SameAccount(String),

    #[error("Cannot close account {account}: balance must be zero (is {})", money(.balance))]
    NonZeroBalance { account: String, balance: Cents },

    #[error("Loan {loan_id} is {actual}, expected {expected}")]
    InvalidLoanStatus {
        loan_id: LoanId,
        expected: LoanStatus,
        actual: LoanStatus,
    },

    #[error(
        "Payment of {} exceeds remaining loan balance {}",
        money(.amount),
        money(.remaining)
    )]
    PaymentExceedsBalance { amount: Cents, remaining: Cents },

    #[error("Amount would overflow the balance of account {0}")]
    BalanceOverflow(String),

    #[error("Invalid loan term: {0} months")]
    InvalidTerm(u32),
}

fn money(cents: impl Borrow<Cents>) -> String {
    format_cents(*cents.borrow())
}
