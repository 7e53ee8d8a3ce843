use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Cents, CustomerId, interest};

pub type LoanId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanCategory {
    Personal,
    Home,
    Auto,
    Business,
    Education,
    /// Any other product name; priced at the fallback rate.
    Unrecognized(String),
}

impl LoanCategory {
    pub fn as_str(&self) -> &str {
        match self {
            LoanCategory::Personal => "Personal",
            LoanCategory::Home => "Home",
            LoanCategory::Auto => "Auto",
            LoanCategory::Business => "Business",
            LoanCategory::Education => "Education",
            LoanCategory::Unrecognized(label) => label,
        }
    }

    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "personal" => LoanCategory::Personal,
            "home" => LoanCategory::Home,
            "auto" => LoanCategory::Auto,
            "business" => LoanCategory::Business,
            "education" => LoanCategory::Education,
            _ => LoanCategory::Unrecognized(trimmed.to_string()),
        }
    }

    /// Nominal annual rate in percent.
    pub fn annual_rate(&self) -> f64 {
        match self {
            LoanCategory::Personal => 10.5,
            LoanCategory::Home => 6.5,
            LoanCategory::Auto => 7.5,
            LoanCategory::Business => 12.0,
            LoanCategory::Education => 8.0,
            LoanCategory::Unrecognized(_) => 11.0,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LoanCategory::Unrecognized(_))
    }
}

impl std::fmt::Display for LoanCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle: Pending -> Approved -> Active -> Paid.
/// Defaulted exists as a state but nothing moves a loan into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Pending,
    Approved,
    Active,
    Paid,
    Defaulted,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::Approved => "Approved",
            LoanStatus::Active => "Active",
            LoanStatus::Paid => "Paid",
            LoanStatus::Defaulted => "Defaulted",
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Loan {
    pub id: LoanId,
    pub customer_id: CustomerId,
    pub category: LoanCategory,
    pub principal: Cents,
    /// Annual rate in percent
    pub interest_rate: f64,
    pub term_months: u32,
    pub started_at: DateTime<Utc>,
    pub remaining_balance: Cents,
    pub status: LoanStatus,
}

impl Loan {
    /// Create a pending loan. The id must be assigned by the store.
    pub fn new(
        id: LoanId,
        customer_id: CustomerId,
        category: LoanCategory,
        principal: Cents,
        term_months: u32,
    ) -> Self {
        let interest_rate = category.annual_rate();
        Self {
            id,
            customer_id,
            category,
            principal,
            interest_rate,
            term_months,
            started_at: Utc::now(),
            remaining_balance: principal,
            status: LoanStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: LoanStatus) -> Self {
        self.status = status;
        self
    }

    /// Advisory installment from the amortization formula.
    pub fn monthly_payment(&self) -> Cents {
        interest::amortized_payment(self.principal, self.interest_rate, self.term_months)
    }

    /// Whether `amount` is an acceptable payment right now.
    pub fn accepts_payment(&self, amount: Cents) -> bool {
        self.status == LoanStatus::Active && amount > 0 && amount <= self.remaining_balance
    }

    /// Apply a payment already validated by `accepts_payment`.
    pub fn apply_payment(&mut self, amount: Cents) {
        self.remaining_balance -= amount;
        if self.remaining_balance == 0 {
            self.status = LoanStatus::Paid;
        }
    }
}
