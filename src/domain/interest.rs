//! Interest and amortization arithmetic.
//!
//! Amounts go in as cents, rates as annual percentages. Intermediate values are
//! `f64`; results are rounded to the cent only when they become money.

use super::{Cents, round_cents};

/// Monthly rate as a fraction, e.g. 12% -> 0.01
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// One month of simple interest on `balance`, rounded to the cent.
///
/// Rounding happens before callers test for a positive amount, so a balance
/// whose monthly interest is under half a cent earns nothing.
pub fn monthly_interest(balance: Cents, annual_rate_percent: f64) -> Cents {
    round_cents(balance as f64 * annual_rate_percent / 12.0 / 100.0)
}

/// Fixed installment that repays `principal` over `term_months`:
/// P * r * (1+r)^n / ((1+r)^n - 1)
///
/// A zero rate degenerates to straight-line repayment.
pub fn amortized_payment(principal: Cents, annual_rate_percent: f64, term_months: u32) -> Cents {
    if term_months == 0 {
        return principal;
    }

    let r = monthly_rate(annual_rate_percent);
    let n = term_months as i32;
    let p = principal as f64;

    if r == 0.0 {
        return round_cents(p / term_months as f64);
    }

    let growth = (1.0 + r).powi(n);
    round_cents(p * r * growth / (growth - 1.0))
}

/// Interest projection for an account or loan, without touching any balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct InterestProjection {
    pub monthly: Cents,
    pub annual: Cents,
}

/// Savings view: annual = balance * rate, monthly = annual / 12.
pub fn project_account_interest(balance: Cents, annual_rate_percent: f64) -> InterestProjection {
    let annual = balance as f64 * annual_rate_percent / 100.0;
    InterestProjection {
        monthly: round_cents(annual / 12.0),
        annual: round_cents(annual),
    }
}

/// Loan view: monthly = remaining * rate / 12, annual = monthly * 12.
pub fn project_loan_interest(remaining: Cents, annual_rate_percent: f64) -> InterestProjection {
    let monthly = remaining as f64 * monthly_rate(annual_rate_percent);
    InterestProjection {
        monthly: round_cents(monthly),
        annual: round_cents(monthly * 12.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_interest_on_savings() {
        // 1000.00 at 3.5% -> 2.9167 -> 2.92
        assert_eq!(monthly_interest(100000, 3.5), 292);
        assert_eq!(monthly_interest(0, 3.5), 0);
        assert_eq!(monthly_interest(100000, 0.0), 0);
    }

    #[test]
    fn test_tiny_balance_rounds_to_no_interest() {
        // 0.10 at 3.5% is 0.03 paise
        assert_eq!(monthly_interest(10, 3.5), 0);
    }

    #[test]
    fn test_amortized_payment() {
        // 50,000 at 10.5% over 24 months
        assert_eq!(amortized_payment(5000000, 10.5, 24), 231880);
        // 1,00,000 at 6.5% over 12 months
        assert_eq!(amortized_payment(10000000, 6.5, 12), 862964);
    }

    #[test]
    fn test_amortized_payment_zero_rate() {
        assert_eq!(amortized_payment(120000, 0.0, 12), 10000);
    }

    #[test]
    fn test_amortized_payment_zero_term() {
        assert_eq!(amortized_payment(120000, 10.5, 0), 120000);
    }

    #[test]
    fn test_projections() {
        let account = project_account_interest(5000000, 3.5);
        assert_eq!(account.annual, 175000);
        assert_eq!(account.monthly, 14583);

        let loan = project_loan_interest(5000000, 12.0);
        assert_eq!(loan.monthly, 50000);
        assert_eq!(loan.annual, 600000);
    }
}
