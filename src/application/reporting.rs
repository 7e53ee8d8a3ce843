use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::{Account, Cents, Customer, Loan, LoanStatus, Transaction};

use super::Ledger;

#[derive(Debug, Clone, Serialize)]
pub struct BankStatistics {
    pub as_of: DateTime<Utc>,
    pub total_customers: usize,
    pub total_accounts: usize,
    pub total_loans: usize,
    pub total_transactions: usize,
    /// Sum of every account balance
    pub total_deposits: Cents,
    pub active_loans: usize,
    /// Sum of loan principals, whatever their status
    pub total_loan_amount: Cents,
    pub accounts_by_category: BTreeMap<String, usize>,
    pub customers_by_tier: BTreeMap<String, usize>,
    pub recent_transactions: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerRow {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub tier: String,
    pub account_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerReport {
    pub customers: Vec<CustomerRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountRow {
    pub number: String,
    pub customer_id: u32,
    pub category: String,
    pub balance: Cents,
    pub interest_rate: f64,
    pub status: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            number: account.number.clone(),
            customer_id: account.customer_id,
            category: account.category.to_string(),
            balance: account.balance,
            interest_rate: account.interest_rate,
            status: account.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub accounts: Vec<AccountRow>,
    pub total_balance: Cents,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: u64,
    pub account: String,
    pub kind: String,
    pub amount: Cents,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub counterparty: Option<String>,
    pub balance_after: Cents,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            account: tx.account.clone(),
            kind: tx.kind.to_string(),
            amount: tx.amount,
            description: tx.description.clone(),
            timestamp: tx.timestamp,
            counterparty: tx.counterparty.clone(),
            balance_after: tx.balance_after,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionReport {
    pub transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoanRow {
    pub id: u32,
    pub customer_id: u32,
    pub category: String,
    pub principal: Cents,
    pub interest_rate: f64,
    pub term_months: u32,
    pub monthly_payment: Cents,
    pub remaining_balance: Cents,
    pub status: String,
}

impl From<&Loan> for LoanRow {
    fn from(loan: &Loan) -> Self {
        Self {
            id: loan.id,
            customer_id: loan.customer_id,
            category: loan.category.to_string(),
            principal: loan.principal,
            interest_rate: loan.interest_rate,
            term_months: loan.term_months,
            monthly_payment: loan.monthly_payment(),
            remaining_balance: loan.remaining_balance,
            status: loan.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoanPortfolio {
    pub total_loans: usize,
    pub total_principal: Cents,
    pub total_remaining: Cents,
    pub loans: Vec<LoanRow>,
}

/// How far back "recent" transactions reach in the statistics.
pub const RECENT_WINDOW_DAYS: i64 = 7;

impl Ledger {
    /// Bank-wide statistics as of `now`.
    pub fn statistics(&self, now: DateTime<Utc>) -> BankStatistics {
        let accounts = self.accounts();
        let loans = self.loans();
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);

        BankStatistics {
            as_of: now,
            total_customers: self.customers().len(),
            total_accounts: accounts.len(),
            total_loans: loans.len(),
            total_transactions: self.transactions().len(),
            total_deposits: total(accounts.iter().map(|a| a.balance)),
            active_loans: loans
                .iter()
                .filter(|l| l.status == LoanStatus::Active)
                .count(),
            total_loan_amount: total(loans.iter().map(|l| l.principal)),
            accounts_by_category: count_by(accounts, |a| a.category.to_string()),
            customers_by_tier: count_by(self.customers(), |c: &Customer| c.tier.clone()),
            recent_transactions: self
                .transactions()
                .iter()
                .filter(|t| t.timestamp > cutoff)
                .count(),
        }
    }

    pub fn customer_report(&self) -> CustomerReport {
        let customers = self
            .customers()
            .iter()
            .map(|c| CustomerRow {
                id: c.id,
                first_name: c.first_name.clone(),
                last_name: c.last_name.clone(),
                email: c.email.clone(),
                phone: c.phone.clone(),
                tier: c.tier.clone(),
                account_count: self.accounts_for_customer(c.id).len(),
            })
            .collect();
        CustomerReport { customers }
    }

    pub fn account_summary(&self) -> AccountSummary {
        AccountSummary {
            accounts: self.accounts().iter().map(AccountRow::from).collect(),
            total_balance: total(self.accounts().iter().map(|a| a.balance)),
        }
    }

    pub fn transaction_report(&self) -> TransactionReport {
        TransactionReport {
            transactions: self
                .transactions()
                .iter()
                .map(TransactionRow::from)
                .collect(),
        }
    }

    pub fn loan_portfolio(&self) -> LoanPortfolio {
        let loans = self.loans();
        LoanPortfolio {
            total_loans: loans.len(),
            total_principal: total(loans.iter().map(|l| l.principal)),
            total_remaining: total(loans.iter().map(|l| l.remaining_balance)),
            loans: loans.iter().map(LoanRow::from).collect(),
        }
    }
}

fn count_by<T, F>(items: &[T], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&T) -> String,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Sum of amounts, pinned at `Cents::MAX` instead of wrapping.
fn total(amounts: impl Iterator<Item = Cents>) -> Cents {
    amounts.fold(0, Cents::saturating_add)
}
