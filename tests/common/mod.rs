// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use bankdesk::application::Ledger;
use bankdesk::domain::{Account, AccountCategory, CustomerProfile, Loan, LoanCategory};
use bankdesk::storage::Store;

/// Empty ledger with deterministic account numbers
pub fn test_ledger() -> Ledger {
    Ledger::with_store(Store::with_seed(2024))
}

/// Ledger preloaded with the demo customers, accounts and loan
pub fn sample_ledger() -> Ledger {
    test_ledger().with_sample_data()
}

/// Helper to parse a YYYY-MM-DD date
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn profile(first_name: &str, last_name: &str) -> CustomerProfile {
    CustomerProfile {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: "9000000000".to_string(),
        address: "1 Test Street".to_string(),
        id_number: "PAN0000".to_string(),
        date_of_birth: parse_date("1990-01-01"),
        tier: "Regular".to_string(),
    }
}

/// Test fixture: one customer with two funded accounts
pub struct TwoAccounts {
    pub first: Account,
    pub second: Account,
}

impl TwoAccounts {
    /// Savings with `first` and Current with `second`, both in cents
    pub fn open(ledger: &mut Ledger, first: i64, second: i64) -> Result<Self> {
        let customer = ledger.register_customer(profile("Test", "Holder")).customer;
        let first = ledger.open_account(customer.id, AccountCategory::Savings, first)?;
        let second = ledger.open_account(customer.id, AccountCategory::Current, second)?;
        Ok(Self { first, second })
    }
}

/// Walk a fresh loan through approval and activation
pub fn active_loan(
    ledger: &mut Ledger,
    category: LoanCategory,
    principal: i64,
    term_months: u32,
) -> Result<Loan> {
    let customer = ledger.register_customer(profile("Loan", "Taker")).customer;
    let loan = ledger.apply_for_loan(customer.id, category, principal, term_months)?;
    ledger.approve_loan(loan.id)?;
    Ok(ledger.activate_loan(loan.id)?.clone())
}
