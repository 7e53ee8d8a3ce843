mod common;

use anyhow::Result;
use bankdesk::application::Ledger;
use bankdesk::cli::{Console, ReportFormat, Renderer};
use bankdesk::domain::{AccountStatus, LoanStatus};
use common::{sample_ledger, test_ledger};

/// Feed `script` to a console and return the ledger and everything printed.
fn session(ledger: Ledger, script: &str) -> Result<(Ledger, String)> {
    session_with(ledger, script, ReportFormat::Table)
}

fn session_with(ledger: Ledger, script: &str, format: ReportFormat) -> Result<(Ledger, String)> {
    let mut console = Console::new(
        ledger,
        script.as_bytes(),
        Vec::new(),
        Renderer::new("₹", format),
    );
    console.run()?;
    let (ledger, out) = console.into_parts();
    Ok((ledger, String::from_utf8(out)?))
}

#[test]
fn test_exit_immediately() -> Result<()> {
    let (_, out) = session(test_ledger(), "9\n")?;
    assert!(out.contains("1. Customer Management"));
    assert!(out.ends_with("Thank you for using Banking Management System!\n"));
    Ok(())
}

#[test]
fn test_end_of_input_exits() -> Result<()> {
    let (_, out) = session(test_ledger(), "")?;
    assert!(out.contains("Thank you for using Banking Management System!"));
    Ok(())
}

#[test]
fn test_invalid_numbers_reprompt() -> Result<()> {
    let (_, out) = session(test_ledger(), "abc\n\n42\n9\n")?;
    assert_eq!(out.matches("Invalid input! Please enter a number: ").count(), 2);
    assert!(out.contains("Invalid choice! Please try again."));
    Ok(())
}

#[test]
fn test_register_customer() -> Result<()> {
    let script = "1\n1\nAsha\nRao\nasha@example.com\n9000000001\n12 Park Street\nPAN123\n\
                  15-08-1990\n1990-08-15\nPremium\n9\n";
    let (ledger, out) = session(test_ledger(), script)?;

    assert!(out.contains("Invalid date format! Please use YYYY-MM-DD."));
    assert!(out.contains("Customer registered successfully!"));
    assert!(out.contains("Customer ID: 1001"));

    let customer = ledger.customer(1001)?;
    assert_eq!(customer.full_name(), "Asha Rao");
    assert_eq!(customer.date_of_birth.to_string(), "1990-08-15");
    assert_eq!(customer.tier, "Premium");

    let accounts = ledger.accounts_for_customer(1001);
    assert_eq!(accounts.len(), 1);
    assert!(out.contains(&format!("Savings account created: {}", accounts[0].number)));
    Ok(())
}

#[test]
fn test_update_customer() -> Result<()> {
    let (ledger, out) = session(sample_ledger(), "1\n4\n1002\n6\nPremium\n9\n")?;

    assert!(out.contains("6. Customer Type: Regular"));
    assert!(out.contains("Customer information updated successfully!"));
    assert_eq!(ledger.customer(1002)?.tier, "Premium");

    let (_, out) = session(sample_ledger(), "1\n4\n1002\n7\n9\n")?;
    assert!(out.contains("Invalid field number!"));
    Ok(())
}

#[test]
fn test_deposit_and_withdraw() -> Result<()> {
    let script = "3\n1\nACC1000000002\n1,500.50\n3\n2\nACC1000000002\n99999999\n9\n";
    let (ledger, out) = session(sample_ledger(), script)?;

    assert!(out.contains("Deposit successful!"));
    assert!(out.contains("Old Balance: ₹25,000.00"));
    assert!(out.contains("New Balance: ₹26,500.50"));
    assert!(out.contains("Transaction ID: 3"));
    assert!(out.contains("Withdrawal failed! Insufficient funds or account inactive."));
    assert_eq!(ledger.account("ACC1000000002")?.balance, 2_650_050);
    Ok(())
}

#[test]
fn test_deposit_messages_for_bad_input() -> Result<()> {
    let (ledger, out) = session(sample_ledger(), "3\n1\nACC404\n3\n1\nACC1000000001\n0\n9\n")?;

    assert!(out.contains("Account not found!"));
    assert!(out.contains("Invalid amount! Amount must be positive."));
    assert_eq!(ledger.transactions().len(), 2);
    Ok(())
}

#[test]
fn test_deposit_too_large_for_the_balance() -> Result<()> {
    let script = "3\n1\nACC1000000002\n92,233,720,368,547,758.07\n9\n";
    let (ledger, out) = session(sample_ledger(), script)?;

    assert!(out.contains(
        "Deposit failed! Amount would overflow the balance of account ACC1000000002"
    ));
    assert_eq!(ledger.account("ACC1000000002")?.balance, 2_500_000);
    assert_eq!(ledger.transactions().len(), 2);
    Ok(())
}

#[test]
fn test_transfer() -> Result<()> {
    let script = "3\n3\nACC1000000001\nACC1000000003\n500\n3\n3\nACC1000000001\nACC1000000001\n9\n";
    let (ledger, out) = session(sample_ledger(), script)?;

    assert!(out.contains("Transfer successful!"));
    assert!(out.contains("From Account: ACC1000000001 | New Balance: ₹49,500.00"));
    assert!(out.contains("To Account: ACC1000000003 | New Balance: ₹30,500.00"));
    assert!(out.contains("Cannot transfer to the same account!"));
    assert_eq!(ledger.transactions().len(), 4);
    Ok(())
}

#[test]
fn test_open_and_close_account() -> Result<()> {
    let (ledger, out) = session(sample_ledger(), "2\n2\n1003\nCurrent\n0\n9\n")?;
    assert!(out.contains("Account created successfully!"));
    let opened = ledger
        .accounts_for_customer(1003)
        .into_iter()
        .find(|a| a.category.as_str() == "Current")
        .map(|a| a.number.clone())
        .expect("current account opened");

    let (ledger, out) = session(ledger, &format!("2\n3\n{}\n2\n3\nACC1000000001\n9\n", opened))?;
    assert!(out.contains("Account closed successfully!"));
    assert!(out.contains("Cannot close account! Balance must be zero."));
    assert_eq!(ledger.account(&opened)?.status, AccountStatus::Closed);
    assert_eq!(
        ledger.account("ACC1000000001")?.status,
        AccountStatus::Active
    );
    Ok(())
}

#[test]
fn test_open_account_for_unknown_customer() -> Result<()> {
    let (ledger, out) = session(sample_ledger(), "2\n2\n4242\n9\n")?;
    assert!(out.contains("Customer not found!"));
    assert_eq!(ledger.accounts().len(), 4);
    Ok(())
}

#[test]
fn test_loan_application_through_payoff() -> Result<()> {
    let script = "4\n1\n1002\nHome\n100000\n12\n\
                  4\n4\n2\n\
                  4\n3\n2\n\
                  4\n6\n2\n\
                  4\n4\n2\n100000\n\
                  9\n";
    let (ledger, out) = session(sample_ledger(), script)?;

    assert!(out.contains("Loan application submitted successfully!"));
    assert!(out.contains("Loan ID: 2"));
    assert!(out.contains("Estimated Monthly Payment: ₹8,629.64"));
    assert!(out.contains("Loan not found or not active!"));
    assert!(out.contains("Loan approved successfully!"));
    assert!(out.contains("Loan activated successfully!"));
    assert!(out.contains("Payment successful!"));
    assert!(out.contains("Loan fully paid!"));
    assert_eq!(ledger.loan(2)?.status, LoanStatus::Paid);
    Ok(())
}

#[test]
fn test_statistics_screen() -> Result<()> {
    let (_, out) = session(sample_ledger(), "5\n9\n")?;

    assert!(out.contains("=== BANK STATISTICS ==="));
    assert!(out.contains("Total Customers:     3"));
    assert!(out.contains("Total Bank Deposits: ₹205,000.00"));
    assert!(out.contains("  Fixed Deposit: 1"));
    assert!(out.contains("Transactions (last 7 days): 2"));
    Ok(())
}

#[test]
fn test_search_by_name() -> Result<()> {
    let (_, out) = session(sample_ledger(), "6\n1\npat\n9\n")?;
    assert!(out.contains("Found 1 customers:"));
    assert!(out.contains("Priya"));
    Ok(())
}

#[test]
fn test_reports_in_json() -> Result<()> {
    let (_, out) = session_with(sample_ledger(), "7\n4\n9\n", ReportFormat::Json)?;
    assert!(out.contains("--- LOAN PORTFOLIO REPORT ---"));
    assert!(out.contains("\"total_principal\": 5000000"));
    Ok(())
}

#[test]
fn test_interest_menu() -> Result<()> {
    let script = "8\n1\nACC1000000001\n8\n2\n1\n8\n3\n9\n";
    let (ledger, out) = session(sample_ledger(), script)?;

    // 50,000.00 at 3.5%
    assert!(out.contains("Annual Interest: ₹1,750.00"));
    assert!(out.contains("Monthly Interest: ₹145.83"));
    // 50,000.00 loan at 10.5%
    assert!(out.contains("Monthly Interest: ₹437.50"));
    assert!(out.contains("Monthly interest applied to 2 accounts."));
    assert_eq!(ledger.account("ACC1000000001")?.balance, 5_014_583);
    Ok(())
}
