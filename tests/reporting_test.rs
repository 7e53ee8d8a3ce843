mod common;

use anyhow::Result;
use bankdesk::domain::{AccountCategory, LoanCategory, LoanStatus};
use chrono::{Duration, Utc};
use common::{profile, sample_ledger, test_ledger};

#[test]
fn test_sample_data_contents() -> Result<()> {
    let ledger = sample_ledger();

    let names: Vec<String> = ledger.customers().iter().map(|c| c.full_name()).collect();
    assert_eq!(names, vec!["Raj Sharma", "Priya Patel", "Amit Kumar"]);
    assert_eq!(ledger.customer(1003)?.tier, "VIP");

    let raj_accounts = ledger.accounts_for_customer(1001);
    assert_eq!(raj_accounts.len(), 2);
    assert_eq!(ledger.account("ACC1000000001")?.balance, 5_000_000);
    assert_eq!(ledger.account("ACC1000000004")?.interest_rate, 6.5);

    let history = ledger.statement("ACC1000000001");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].description, "Initial deposit");
    assert_eq!(history[1].balance_after, 5_000_000);

    let loan = ledger.loan(1)?;
    assert_eq!(loan.status, LoanStatus::Active);
    assert_eq!(loan.category, LoanCategory::Personal);
    assert_eq!(loan.monthly_payment(), 231_880);
    Ok(())
}

#[test]
fn test_sample_data_continues_counters() -> Result<()> {
    let mut ledger = sample_ledger();

    let registration = ledger.register_customer(profile("Neha", "Gupta"));
    assert_eq!(registration.customer.id, 1004);

    let tx = ledger.deposit("ACC1000000002", 100)?;
    assert_eq!(tx.id, 3);

    let loan = ledger.apply_for_loan(1002, LoanCategory::Home, 100_000, 12)?;
    assert_eq!(loan.id, 2);
    Ok(())
}

#[test]
fn test_statistics_on_sample_data() {
    let ledger = sample_ledger();
    let stats = ledger.statistics(Utc::now());

    assert_eq!(stats.total_customers, 3);
    assert_eq!(stats.total_accounts, 4);
    assert_eq!(stats.total_loans, 1);
    assert_eq!(stats.total_transactions, 2);
    assert_eq!(stats.total_deposits, 20_500_000);
    assert_eq!(stats.active_loans, 1);
    assert_eq!(stats.total_loan_amount, 5_000_000);
    assert_eq!(stats.accounts_by_category["Savings"], 2);
    assert_eq!(stats.accounts_by_category["Current"], 1);
    assert_eq!(stats.accounts_by_category["Fixed Deposit"], 1);
    assert_eq!(stats.customers_by_tier["Premium"], 1);
    assert_eq!(stats.customers_by_tier["Regular"], 1);
    assert_eq!(stats.recent_transactions, 2);
}

#[test]
fn test_recent_transactions_window() {
    let ledger = sample_ledger();

    let next_month = Utc::now() + Duration::days(30);
    assert_eq!(ledger.statistics(next_month).recent_transactions, 0);
}

#[test]
fn test_statistics_on_empty_ledger() {
    let ledger = test_ledger();
    let stats = ledger.statistics(Utc::now());

    assert_eq!(stats.total_customers, 0);
    assert_eq!(stats.total_deposits, 0);
    assert!(stats.accounts_by_category.is_empty());
}

#[test]
fn test_customer_report_counts_accounts() {
    let ledger = sample_ledger();
    let report = ledger.customer_report();

    let counts: Vec<(u32, usize)> = report
        .customers
        .iter()
        .map(|row| (row.id, row.account_count))
        .collect();
    assert_eq!(counts, vec![(1001, 2), (1002, 1), (1003, 1)]);
}

#[test]
fn test_account_summary_total() {
    let ledger = sample_ledger();
    let summary = ledger.account_summary();

    assert_eq!(summary.accounts.len(), 4);
    assert_eq!(summary.total_balance, 20_500_000);
    assert_eq!(summary.accounts[3].category, "Fixed Deposit");
    assert_eq!(summary.accounts[3].status, "Active");
}

#[test]
fn test_loan_portfolio_tracks_payments() -> Result<()> {
    let mut ledger = sample_ledger();
    ledger.make_loan_payment(1, 1_000_000)?;
    ledger.apply_for_loan(1003, LoanCategory::Home, 2_000_000, 60)?;

    let portfolio = ledger.loan_portfolio();
    assert_eq!(portfolio.total_loans, 2);
    assert_eq!(portfolio.total_principal, 7_000_000);
    assert_eq!(portfolio.total_remaining, 6_000_000);
    assert_eq!(portfolio.loans[1].status, "Pending");
    Ok(())
}

#[test]
fn test_transaction_report_carries_counterparties() -> Result<()> {
    let mut ledger = sample_ledger();
    ledger.transfer("ACC1000000001", "ACC1000000003", 250_000)?;

    let report = ledger.transaction_report();
    assert_eq!(report.transactions.len(), 4);

    let debit = &report.transactions[2];
    assert_eq!(debit.kind, "Transfer");
    assert_eq!(debit.counterparty.as_deref(), Some("ACC1000000003"));
    assert_eq!(debit.balance_after, 4_750_000);
    Ok(())
}

#[test]
fn test_totals_saturate_instead_of_wrapping() -> Result<()> {
    let mut ledger = test_ledger();
    ledger.open_account(1001, AccountCategory::Current, i64::MAX)?;
    ledger.open_account(1001, AccountCategory::Current, i64::MAX)?;

    assert_eq!(ledger.statistics(Utc::now()).total_deposits, i64::MAX);
    assert_eq!(ledger.account_summary().total_balance, i64::MAX);
    Ok(())
}
