use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::application::{Ledger, LedgerError};
use crate::domain::{
    Account, AccountCategory, Cents, Customer, CustomerField, CustomerProfile, LoanCategory,
    LoanStatus, Transaction, parse_cents,
};

use super::render::Renderer;

/// Raised when stdin closes mid-session; treated like choosing Exit.
#[derive(Debug, Error)]
#[error("end of input")]
struct EndOfInput;

/// Numbered-menu front end over a [`Ledger`].
///
/// Generic over its input and output so sessions can be scripted in tests.
pub struct Console<R, W> {
    ledger: Ledger,
    input: R,
    out: W,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(ledger: Ledger, input: R, out: W, renderer: Renderer) -> Self {
        Self {
            ledger,
            input,
            out,
            renderer,
        }
    }

    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.out)
    }

    /// Run menus until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        match self.main_loop() {
            Ok(()) => {}
            Err(e) if e.is::<EndOfInput>() => {
                tracing::debug!("input closed, leaving console");
                writeln!(self.out)?;
            }
            Err(e) => return Err(e),
        }
        writeln!(self.out, "Thank you for using Banking Management System!")?;
        self.out.flush()?;
        Ok(())
    }

    fn main_loop(&mut self) -> Result<()> {
        writeln!(self.out, "=== BANKING MANAGEMENT SYSTEM ===")?;
        writeln!(self.out, "All data is held in memory for this session.")?;

        loop {
            writeln!(self.out)?;
            writeln!(self.out, "=== BANKING MANAGEMENT SYSTEM ===")?;
            writeln!(self.out, "1. Customer Management")?;
            writeln!(self.out, "2. Account Management")?;
            writeln!(self.out, "3. Transaction Management")?;
            writeln!(self.out, "4. Loan Management")?;
            writeln!(self.out, "5. Bank Statistics")?;
            writeln!(self.out, "6. Search")?;
            writeln!(self.out, "7. Reports")?;
            writeln!(self.out, "8. Interest Calculation")?;
            writeln!(self.out, "9. Exit")?;
            writeln!(self.out, "{}", "=".repeat(33))?;

            match self.prompt_number::<u32>("Enter your choice (1-9): ")? {
                1 => self.customer_menu()?,
                2 => self.account_menu()?,
                3 => self.transaction_menu()?,
                4 => self.loan_menu()?,
                5 => self.show_statistics()?,
                6 => self.search_menu()?,
                7 => self.reports_menu()?,
                8 => self.interest_menu()?,
                9 => return Ok(()),
                _ => writeln!(self.out, "Invalid choice! Please try again.")?,
            }
        }
    }

    /// Print a submenu and read the selection.
    fn submenu(&mut self, title: &str, items: &[&str]) -> Result<usize> {
        writeln!(self.out)?;
        writeln!(self.out, "--- {} ---", title)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, item)?;
        }
        self.prompt_number("Enter your choice: ")
    }

    // ========================
    // Input
    // ========================

    fn read_line(&mut self) -> Result<String> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        Ok(line.trim().to_string())
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{}", label)?;
        self.read_line()
    }

    /// Prompt until the answer parses as a number.
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T> {
        let mut answer = self.prompt(label)?;
        loop {
            if let Ok(value) = answer.parse() {
                return Ok(value);
            }
            write!(self.out, "Invalid input! Please enter a number: ")?;
            answer = self.read_line()?;
        }
    }

    /// Prompt (behind the currency symbol) until the answer parses as money.
    fn prompt_amount(&mut self, label: &str) -> Result<Cents> {
        let label = format!("{}{}", label, self.renderer.currency());
        let mut answer = self.prompt(&label)?;
        loop {
            match parse_cents(&answer) {
                Ok(cents) => return Ok(cents),
                Err(e) => {
                    tracing::debug!(input = %answer, error = %e, "rejected amount");
                }
            }
            write!(self.out, "Invalid input! Please enter a number: ")?;
            answer = self.read_line()?;
        }
    }

    fn prompt_date(&mut self, label: &str) -> Result<NaiveDate> {
        loop {
            let answer = self.prompt(label)?;
            match NaiveDate::parse_from_str(&answer, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(self.out, "Invalid date format! Please use YYYY-MM-DD.")?,
            }
        }
    }

    fn prompt_account(&mut self, label: &str) -> Result<Option<Account>> {
        let number = self.prompt(label)?;
        Ok(self.ledger.account(&number).ok().cloned())
    }

    // ========================
    // Customers
    // ========================

    fn customer_menu(&mut self) -> Result<()> {
        let choice = self.submenu(
            "CUSTOMER MANAGEMENT",
            &[
                "Register New Customer",
                "View All Customers",
                "Find Customer by ID",
                "Update Customer Information",
                "View Customer Accounts",
                "Back to Main Menu",
            ],
        )?;
        match choice {
            1 => self.register_customer(),
            2 => self.list_customers(),
            3 => self.find_customer(),
            4 => self.update_customer(),
            5 => self.customer_accounts(),
            6 => Ok(()),
            _ => Ok(writeln!(self.out, "Invalid choice!")?),
        }
    }

    fn register_customer(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- REGISTER NEW CUSTOMER ---")?;
        let profile = CustomerProfile {
            first_name: self.prompt("First Name: ")?,
            last_name: self.prompt("Last Name: ")?,
            email: self.prompt("Email: ")?,
            phone: self.prompt("Phone: ")?,
            address: self.prompt("Address: ")?,
            id_number: self.prompt("Aadhaar/PAN Number: ")?,
            date_of_birth: self.prompt_date("Date of Birth (YYYY-MM-DD): ")?,
            tier: self.prompt("Customer Type (Regular/Premium/VIP): ")?,
        };

        let registration = self.ledger.register_customer(profile);
        writeln!(self.out, "Customer registered successfully!")?;
        writeln!(self.out, "Customer ID: {}", registration.customer.id)?;
        writeln!(
            self.out,
            "Savings account created: {}",
            registration.savings_account.number
        )?;
        Ok(())
    }

    fn list_customers(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- ALL CUSTOMERS ---")?;
        let customers: Vec<&Customer> = self.ledger.customers().iter().collect();
        if customers.is_empty() {
            writeln!(self.out, "No customers registered.")?;
            return Ok(());
        }
        self.renderer.customers(&mut self.out, &customers)?;
        writeln!(self.out)?;
        writeln!(self.out, "Total customers: {}", customers.len())?;
        Ok(())
    }

    fn find_customer(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Customer ID: ")?;
        match self.ledger.customer(id) {
            Ok(customer) => self.renderer.customer_details(&mut self.out, customer),
            Err(_) => Ok(writeln!(self.out, "Customer not found!")?),
        }
    }

    fn update_customer(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Customer ID to update: ")?;
        let Ok(customer) = self.ledger.customer(id) else {
            writeln!(self.out, "Customer not found!")?;
            return Ok(());
        };

        writeln!(self.out, "Current Information:")?;
        for (i, field) in CustomerField::ALL.iter().enumerate() {
            writeln!(
                self.out,
                "{}. {}: {}",
                i + 1,
                field.label(),
                field.current_value(customer)
            )?;
        }

        let choice: usize = self.prompt_number("Enter field number to update (1-6): ")?;
        let Some(field) = choice
            .checked_sub(1)
            .and_then(|i| CustomerField::ALL.get(i).copied())
        else {
            writeln!(self.out, "Invalid field number!")?;
            return Ok(());
        };

        let value = self.prompt(&format!("Enter new {}: ", field.label()))?;
        match self.ledger.update_customer(id, field, value) {
            Ok(_) => writeln!(self.out, "Customer information updated successfully!")?,
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn customer_accounts(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Customer ID: ")?;
        let accounts = self.ledger.accounts_for_customer(id);
        if accounts.is_empty() {
            writeln!(self.out, "No accounts found for this customer.")?;
            return Ok(());
        }
        writeln!(self.out, "Accounts for Customer ID {}:", id)?;
        self.renderer.accounts(&mut self.out, &accounts)
    }

    // ========================
    // Accounts
    // ========================

    fn account_menu(&mut self) -> Result<()> {
        let choice = self.submenu(
            "ACCOUNT MANAGEMENT",
            &[
                "View All Accounts",
                "Open New Account",
                "Close Account",
                "View Account Details",
                "View Account Statement",
                "Back to Main Menu",
            ],
        )?;
        match choice {
            1 => self.list_accounts(),
            2 => self.open_account(),
            3 => self.close_account(),
            4 => self.account_details(),
            5 => self.account_statement(),
            6 => Ok(()),
            _ => Ok(writeln!(self.out, "Invalid choice!")?),
        }
    }

    fn list_accounts(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- ALL ACCOUNTS ---")?;
        let accounts: Vec<&Account> = self.ledger.accounts().iter().collect();
        if accounts.is_empty() {
            writeln!(self.out, "No accounts available.")?;
            return Ok(());
        }
        self.renderer.accounts(&mut self.out, &accounts)?;
        writeln!(self.out)?;
        writeln!(self.out, "Total accounts: {}", accounts.len())?;
        Ok(())
    }

    fn open_account(&mut self) -> Result<()> {
        let customer_id = self.prompt_number("Enter Customer ID: ")?;
        if self.ledger.customer(customer_id).is_err() {
            writeln!(self.out, "Customer not found!")?;
            return Ok(());
        }

        let category = AccountCategory::parse(
            &self.prompt("Account Type (Savings/Current/Fixed Deposit/Recurring Deposit): ")?,
        );
        let initial = self.prompt_amount("Initial Deposit: ")?;

        match self.ledger.open_account(customer_id, category, initial) {
            Ok(account) => {
                writeln!(self.out, "Account created successfully!")?;
                writeln!(self.out, "Account Number: {}", account.number)?;
                writeln!(self.out, "Account Type: {}", account.category)?;
                writeln!(
                    self.out,
                    "Initial Balance: {}",
                    self.renderer.money(account.balance)
                )?;
            }
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn close_account(&mut self) -> Result<()> {
        let number = self.prompt("Enter Account Number to close: ")?;
        match self.ledger.close_account(&number) {
            Ok(_) => writeln!(self.out, "Account closed successfully!")?,
            Err(LedgerError::NonZeroBalance { .. }) => {
                writeln!(self.out, "Cannot close account! Balance must be zero.")?
            }
            Err(_) => writeln!(self.out, "Account not found!")?,
        }
        Ok(())
    }

    fn account_details(&mut self) -> Result<()> {
        let Some(account) = self.prompt_account("Enter Account Number: ")? else {
            writeln!(self.out, "Account not found!")?;
            return Ok(());
        };
        writeln!(self.out)?;
        writeln!(self.out, "--- ACCOUNT DETAILS ---")?;
        let owner = self.ledger.customer(account.customer_id).ok();
        self.renderer.account_details(&mut self.out, &account, owner)
    }

    fn account_statement(&mut self) -> Result<()> {
        let Some(account) = self.prompt_account("Enter Account Number: ")? else {
            writeln!(self.out, "Account not found!")?;
            return Ok(());
        };
        let history = self.ledger.statement(&account.number);
        if history.is_empty() {
            writeln!(self.out, "No transactions found for this account.")?;
            return Ok(());
        }
        writeln!(self.out, "Transaction History for Account: {}", account.number)?;
        self.renderer.transactions(&mut self.out, &history)
    }

    // ========================
    // Transactions
    // ========================

    fn transaction_menu(&mut self) -> Result<()> {
        let choice = self.submenu(
            "TRANSACTION MANAGEMENT",
            &[
                "Deposit Money",
                "Withdraw Money",
                "Transfer Funds",
                "View All Transactions",
                "View Transaction History",
                "Back to Main Menu",
            ],
        )?;
        match choice {
            1 => self.deposit(),
            2 => self.withdraw(),
            3 => self.transfer(),
            4 => self.list_transactions(),
            5 => self.account_statement(),
            6 => Ok(()),
            _ => Ok(writeln!(self.out, "Invalid choice!")?),
        }
    }

    fn deposit(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- DEPOSIT MONEY ---")?;
        let Some(account) = self.prompt_account("Enter Account Number: ")? else {
            writeln!(self.out, "Account not found!")?;
            return Ok(());
        };
        let amount = self.prompt_amount("Enter deposit amount: ")?;
        if amount <= 0 {
            writeln!(self.out, "Invalid amount! Amount must be positive.")?;
            return Ok(());
        }

        match self.ledger.deposit(&account.number, amount) {
            Ok(tx) => {
                writeln!(self.out, "Deposit successful!")?;
                self.balance_change(account.balance, "Amount Deposited", &tx)?;
            }
            Err(e) => writeln!(self.out, "Deposit failed! {}", e)?,
        }
        Ok(())
    }

    fn withdraw(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- WITHDRAW MONEY ---")?;
        let Some(account) = self.prompt_account("Enter Account Number: ")? else {
            writeln!(self.out, "Account not found!")?;
            return Ok(());
        };
        let amount = self.prompt_amount("Enter withdrawal amount: ")?;
        if amount <= 0 {
            writeln!(self.out, "Invalid amount! Amount must be positive.")?;
            return Ok(());
        }

        match self.ledger.withdraw(&account.number, amount) {
            Ok(tx) => {
                writeln!(self.out, "Withdrawal successful!")?;
                self.balance_change(account.balance, "Amount Withdrawn", &tx)?;
            }
            Err(e) => {
                tracing::debug!(error = %e, "withdrawal refused");
                writeln!(
                    self.out,
                    "Withdrawal failed! Insufficient funds or account inactive."
                )?;
            }
        }
        Ok(())
    }

    fn balance_change(&mut self, old: Cents, label: &str, tx: &Transaction) -> Result<()> {
        writeln!(self.out, "Old Balance: {}", self.renderer.money(old))?;
        writeln!(self.out, "{}: {}", label, self.renderer.money(tx.amount))?;
        writeln!(self.out, "New Balance: {}", self.renderer.money(tx.balance_after))?;
        writeln!(self.out, "Transaction ID: {}", tx.id)?;
        Ok(())
    }

    fn transfer(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- TRANSFER FUNDS ---")?;
        let Some(source) = self.prompt_account("Enter Source Account Number: ")? else {
            writeln!(self.out, "Source account not found!")?;
            return Ok(());
        };
        let Some(target) = self.prompt_account("Enter Target Account Number: ")? else {
            writeln!(self.out, "Target account not found!")?;
            return Ok(());
        };
        if source.number == target.number {
            writeln!(self.out, "Cannot transfer to the same account!")?;
            return Ok(());
        }
        let amount = self.prompt_amount("Enter transfer amount: ")?;
        if amount <= 0 {
            writeln!(self.out, "Invalid amount! Amount must be positive.")?;
            return Ok(());
        }

        match self.ledger.transfer(&source.number, &target.number, amount) {
            Ok(receipt) => {
                writeln!(self.out, "Transfer successful!")?;
                writeln!(self.out, "Amount Transferred: {}", self.renderer.money(amount))?;
                writeln!(
                    self.out,
                    "From Account: {} | New Balance: {}",
                    source.number,
                    self.renderer.money(receipt.debit.balance_after)
                )?;
                writeln!(
                    self.out,
                    "To Account: {} | New Balance: {}",
                    target.number,
                    self.renderer.money(receipt.credit.balance_after)
                )?;
                writeln!(self.out, "Transaction ID: {}", receipt.debit.id)?;
            }
            Err(e) => {
                tracing::debug!(error = %e, "transfer refused");
                writeln!(
                    self.out,
                    "Transfer failed! Insufficient funds or account issues."
                )?;
            }
        }
        Ok(())
    }

    fn list_transactions(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- ALL TRANSACTIONS ---")?;
        let transactions: Vec<&Transaction> = self.ledger.transactions().iter().collect();
        if transactions.is_empty() {
            writeln!(self.out, "No transactions found.")?;
            return Ok(());
        }
        self.renderer.transactions(&mut self.out, &transactions)
    }

    // ========================
    // Loans
    // ========================

    fn loan_menu(&mut self) -> Result<()> {
        let choice = self.submenu(
            "LOAN MANAGEMENT",
            &[
                "Apply for Loan",
                "View All Loans",
                "Approve Loan",
                "Make Loan Payment",
                "View Loan Details",
                "Activate Loan",
                "Back to Main Menu",
            ],
        )?;
        match choice {
            1 => self.apply_for_loan(),
            2 => self.list_loans(),
            3 => self.approve_loan(),
            4 => self.loan_payment(),
            5 => self.loan_details(),
            6 => self.activate_loan(),
            7 => Ok(()),
            _ => Ok(writeln!(self.out, "Invalid choice!")?),
        }
    }

    fn apply_for_loan(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- APPLY FOR LOAN ---")?;
        let customer_id = self.prompt_number("Enter Customer ID: ")?;
        if self.ledger.customer(customer_id).is_err() {
            writeln!(self.out, "Customer not found!")?;
            return Ok(());
        }

        let category =
            LoanCategory::parse(&self.prompt("Loan Type (Personal/Home/Auto/Business/Education): ")?);
        let principal = self.prompt_amount("Loan Amount: ")?;
        let term = self.prompt_number("Term (months): ")?;

        match self.ledger.apply_for_loan(customer_id, category, principal, term) {
            Ok(loan) => {
                writeln!(self.out, "Loan application submitted successfully!")?;
                writeln!(self.out, "Loan ID: {}", loan.id)?;
                writeln!(
                    self.out,
                    "Estimated Monthly Payment: {}",
                    self.renderer.money(loan.monthly_payment())
                )?;
            }
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn list_loans(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- ALL LOANS ---")?;
        let loans: Vec<_> = self.ledger.loans().iter().collect();
        if loans.is_empty() {
            writeln!(self.out, "No loans found.")?;
            return Ok(());
        }
        self.renderer.loans(&mut self.out, &loans)
    }

    fn approve_loan(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Loan ID to approve: ")?;
        match self.ledger.approve_loan(id) {
            Ok(_) => writeln!(self.out, "Loan approved successfully!")?,
            Err(LedgerError::InvalidLoanStatus { .. }) => {
                writeln!(self.out, "Loan is not in pending status.")?
            }
            Err(_) => writeln!(self.out, "Loan not found!")?,
        }
        Ok(())
    }

    fn activate_loan(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Loan ID to activate: ")?;
        match self.ledger.activate_loan(id) {
            Ok(_) => writeln!(self.out, "Loan activated successfully!")?,
            Err(LedgerError::InvalidLoanStatus { .. }) => {
                writeln!(self.out, "Loan is not in approved status.")?
            }
            Err(_) => writeln!(self.out, "Loan not found!")?,
        }
        Ok(())
    }

    fn loan_payment(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Loan ID: ")?;
        let installment = match self.ledger.loan(id) {
            Ok(loan) if loan.status == LoanStatus::Active => loan.monthly_payment(),
            _ => {
                writeln!(self.out, "Loan not found or not active!")?;
                return Ok(());
            }
        };

        writeln!(self.out, "Monthly Payment: {}", self.renderer.money(installment))?;
        let amount = self.prompt_amount("Enter payment amount: ")?;
        match self.ledger.make_loan_payment(id, amount) {
            Ok(loan) => {
                let remaining = loan.remaining_balance;
                let paid_off = loan.status == LoanStatus::Paid;
                writeln!(self.out, "Payment successful!")?;
                writeln!(
                    self.out,
                    "Remaining Balance: {}",
                    self.renderer.money(remaining)
                )?;
                if paid_off {
                    writeln!(self.out, "Loan fully paid!")?;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "loan payment refused");
                writeln!(self.out, "Invalid payment amount!")?;
            }
        }
        Ok(())
    }

    fn loan_details(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Loan ID: ")?;
        let Ok(loan) = self.ledger.loan(id) else {
            writeln!(self.out, "Loan not found!")?;
            return Ok(());
        };
        writeln!(self.out)?;
        writeln!(self.out, "--- LOAN DETAILS ---")?;
        let borrower = self.ledger.customer(loan.customer_id).ok();
        self.renderer.loan_details(&mut self.out, loan, borrower)
    }

    // ========================
    // Statistics, search, reports
    // ========================

    fn show_statistics(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== BANK STATISTICS ===")?;
        let stats = self.ledger.statistics(Utc::now());
        self.renderer.statistics(&mut self.out, &stats)
    }

    fn search_menu(&mut self) -> Result<()> {
        let choice = self.submenu(
            "SEARCH",
            &[
                "Search Customers by Name",
                "Search Accounts by Customer",
                "Search Transactions by Account",
                "Back to Main Menu",
            ],
        )?;
        match choice {
            1 => {
                let query = self.prompt("Enter customer name to search: ")?;
                let found = self.ledger.search_customers(&query);
                writeln!(self.out, "Found {} customers:", found.len())?;
                if found.is_empty() {
                    return Ok(());
                }
                self.renderer.customers(&mut self.out, &found)
            }
            2 => self.customer_accounts(),
            3 => self.account_statement(),
            4 => Ok(()),
            _ => Ok(writeln!(self.out, "Invalid choice!")?),
        }
    }

    fn reports_menu(&mut self) -> Result<()> {
        let choice = self.submenu(
            "REPORTS",
            &[
                "Customer Report",
                "Account Summary Report",
                "Transaction Report",
                "Loan Portfolio Report",
                "Back to Main Menu",
            ],
        )?;
        match choice {
            1 => {
                writeln!(self.out)?;
                writeln!(self.out, "--- CUSTOMER REPORT ---")?;
                let report = self.ledger.customer_report();
                self.renderer.customer_report(&mut self.out, &report)
            }
            2 => {
                writeln!(self.out)?;
                writeln!(self.out, "--- ACCOUNT SUMMARY REPORT ---")?;
                let report = self.ledger.account_summary();
                self.renderer.account_summary(&mut self.out, &report)
            }
            3 => {
                writeln!(self.out)?;
                writeln!(self.out, "--- TRANSACTION REPORT ---")?;
                let report = self.ledger.transaction_report();
                self.renderer.transaction_report(&mut self.out, &report)
            }
            4 => {
                writeln!(self.out)?;
                writeln!(self.out, "--- LOAN PORTFOLIO REPORT ---")?;
                let report = self.ledger.loan_portfolio();
                self.renderer.loan_portfolio(&mut self.out, &report)
            }
            5 => Ok(()),
            _ => Ok(writeln!(self.out, "Invalid choice!")?),
        }
    }

    // ========================
    // Interest
    // ========================

    fn interest_menu(&mut self) -> Result<()> {
        let choice = self.submenu(
            "INTEREST CALCULATION",
            &[
                "Calculate Account Interest",
                "Calculate Loan Interest",
                "Apply Monthly Interest",
                "Back to Main Menu",
            ],
        )?;
        match choice {
            1 => self.account_interest(),
            2 => self.loan_interest(),
            3 => {
                let run = self.ledger.apply_monthly_interest();
                writeln!(
                    self.out,
                    "Monthly interest applied to {} accounts.",
                    run.count()
                )?;
                Ok(())
            }
            4 => Ok(()),
            _ => Ok(writeln!(self.out, "Invalid choice!")?),
        }
    }

    fn account_interest(&mut self) -> Result<()> {
        let number = self.prompt("Enter Account Number: ")?;
        let (account, projection) = match (
            self.ledger.account(&number),
            self.ledger.project_account_interest(&number),
        ) {
            (Ok(account), Ok(projection)) => (account, projection),
            _ => {
                writeln!(self.out, "Account not found!")?;
                return Ok(());
            }
        };

        writeln!(self.out, "Account: {}", account.number)?;
        writeln!(self.out, "Balance: {}", self.renderer.money(account.balance))?;
        writeln!(self.out, "Interest Rate: {}%", account.interest_rate)?;
        writeln!(
            self.out,
            "Monthly Interest: {}",
            self.renderer.money(projection.monthly)
        )?;
        writeln!(
            self.out,
            "Annual Interest: {}",
            self.renderer.money(projection.annual)
        )?;
        Ok(())
    }

    fn loan_interest(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter Loan ID: ")?;
        let (loan, projection) = match (
            self.ledger.loan(id),
            self.ledger.project_loan_interest(id),
        ) {
            (Ok(loan), Ok(projection)) => (loan, projection),
            _ => {
                writeln!(self.out, "Loan not found!")?;
                return Ok(());
            }
        };

        writeln!(self.out, "Loan ID: {}", loan.id)?;
        writeln!(
            self.out,
            "Remaining Balance: {}",
            self.renderer.money(loan.remaining_balance)
        )?;
        writeln!(self.out, "Interest Rate: {}%", loan.interest_rate)?;
        writeln!(
            self.out,
            "Monthly Interest: {}",
            self.renderer.money(projection.monthly)
        )?;
        writeln!(
            self.out,
            "Annual Interest: {}",
            self.renderer.money(projection.annual)
        )?;
        Ok(())
    }
}
