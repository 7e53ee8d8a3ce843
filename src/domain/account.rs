use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Cents, CustomerId};

/// Account tokens look like `ACC1234567890`.
pub type AccountNumber = String;

pub const ACCOUNT_PREFIX: &str = "ACC";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    Savings,
    Current,
    FixedDeposit,
    RecurringDeposit,
    /// Any other label typed at the counter; earns the fallback rate.
    Unrecognized(String),
}

impl AccountCategory {
    pub fn as_str(&self) -> &str {
        match self {
            AccountCategory::Savings => "Savings",
            AccountCategory::Current => "Current",
            AccountCategory::FixedDeposit => "Fixed Deposit",
            AccountCategory::RecurringDeposit => "Recurring Deposit",
            AccountCategory::Unrecognized(label) => label,
        }
    }

    /// Parse a category label, case-insensitively. Never fails: unknown
    /// labels become `Unrecognized`.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "savings" => AccountCategory::Savings,
            "current" => AccountCategory::Current,
            "fixed deposit" | "fixeddeposit" | "fd" => AccountCategory::FixedDeposit,
            "recurring deposit" | "recurringdeposit" | "rd" => AccountCategory::RecurringDeposit,
            _ => AccountCategory::Unrecognized(trimmed.to_string()),
        }
    }

    /// Annual interest rate in percent.
    pub fn annual_rate(&self) -> f64 {
        match self {
            AccountCategory::Savings => 3.5,
            AccountCategory::Current => 0.0,
            AccountCategory::FixedDeposit => 6.5,
            AccountCategory::RecurringDeposit => 5.5,
            AccountCategory::Unrecognized(_) => 3.0,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AccountCategory::Unrecognized(_))
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Frozen,
    Closed,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Frozen => "Frozen",
            AccountStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub number: AccountNumber,
    /// Owner. Not checked against the customer list.
    pub customer_id: CustomerId,
    pub category: AccountCategory,
    pub balance: Cents,
    /// Annual rate in percent, fixed by category at opening.
    pub interest_rate: f64,
    pub opened_at: DateTime<Utc>,
    pub status: AccountStatus,
}

impl Account {
    pub fn new(
        number: AccountNumber,
        customer_id: CustomerId,
        category: AccountCategory,
        initial_balance: Cents,
    ) -> Self {
        let interest_rate = category.annual_rate();
        Self {
            number,
            customer_id,
            category,
            balance: initial_balance,
            interest_rate,
            opened_at: Utc::now(),
            status: AccountStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Whether `amount` may leave this account right now.
    pub fn can_withdraw(&self, amount: Cents) -> bool {
        amount > 0 && amount <= self.balance && self.is_active()
    }

    /// Monthly savings interest is only paid on active savings accounts.
    pub fn earns_monthly_interest(&self) -> bool {
        self.category == AccountCategory::Savings && self.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_rate_table() {
        assert_eq!(AccountCategory::Savings.annual_rate(), 3.5);
        assert_eq!(AccountCategory::Current.annual_rate(), 0.0);
        assert_eq!(AccountCategory::FixedDeposit.annual_rate(), 6.5);
        assert_eq!(AccountCategory::RecurringDeposit.annual_rate(), 5.5);
        assert_eq!(
            AccountCategory::Unrecognized("Gold".into()).annual_rate(),
            3.0
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(AccountCategory::parse("SAVINGS"), AccountCategory::Savings);
        assert_eq!(
            AccountCategory::parse("fixed deposit"),
            AccountCategory::FixedDeposit
        );
        assert_eq!(
            AccountCategory::parse(" Recurring Deposit "),
            AccountCategory::RecurringDeposit
        );

        let other = AccountCategory::parse("Gold Plus");
        assert!(!other.is_recognized());
        assert_eq!(other.as_str(), "Gold Plus");
    }

    #[test]
    fn test_new_account_is_active_with_category_rate() {
        let account = Account::new(
            "ACC1000000009".into(),
            1001,
            AccountCategory::FixedDeposit,
            10000,
        );
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.interest_rate, 6.5);
        assert_eq!(account.balance, 10000);
    }

    #[test]
    fn test_can_withdraw() {
        let mut account = Account::new("ACC1".into(), 1001, AccountCategory::Current, 5000);
        assert!(account.can_withdraw(5000));
        assert!(!account.can_withdraw(5001));
        assert!(!account.can_withdraw(0));
        assert!(!account.can_withdraw(-1));

        account.status = AccountStatus::Frozen;
        assert!(!account.can_withdraw(100));
    }

    #[test]
    fn test_only_active_savings_earn_interest() {
        let mut savings = Account::new("ACC1".into(), 1001, AccountCategory::Savings, 0);
        let current = Account::new("ACC2".into(), 1001, AccountCategory::Current, 0);
        assert!(savings.earns_monthly_interest());
        assert!(!current.earns_monthly_interest());

        savings.status = AccountStatus::Closed;
        assert!(!savings.earns_monthly_interest());
    }
}
