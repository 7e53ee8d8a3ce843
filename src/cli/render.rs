use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::application::reporting::{
    AccountSummary, BankStatistics, CustomerReport, LoanPortfolio, TransactionReport,
};
use crate::domain::{Account, Cents, Customer, Loan, Transaction, format_money};

/// Output format for statistics and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Writes records and reports to the console.
pub struct Renderer {
    currency: String,
    format: ReportFormat,
}

impl Renderer {
    pub fn new(currency: impl Into<String>, format: ReportFormat) -> Self {
        Self {
            currency: currency.into(),
            format,
        }
    }

    pub fn money(&self, cents: Cents) -> String {
        format_money(cents, &self.currency)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    // ========================
    // Record listings
    // ========================

    pub fn customers<W: Write>(&self, out: &mut W, customers: &[&Customer]) -> Result<()> {
        writeln!(
            out,
            "{:<6} {:<15} {:<15} {:<25} {:<12} {:<10}",
            "ID", "FIRST NAME", "LAST NAME", "EMAIL", "PHONE", "TYPE"
        )?;
        writeln!(out, "{}", "-".repeat(88))?;
        for c in customers {
            writeln!(
                out,
                "{:<6} {:<15} {:<15} {:<25} {:<12} {:<10}",
                c.id,
                truncate(&c.first_name, 15),
                truncate(&c.last_name, 15),
                truncate(&c.email, 25),
                c.phone,
                c.tier
            )?;
        }
        Ok(())
    }

    pub fn customer_details<W: Write>(&self, out: &mut W, customer: &Customer) -> Result<()> {
        writeln!(out, "Customer ID:   {}", customer.id)?;
        writeln!(out, "Name:          {}", customer.full_name())?;
        writeln!(out, "Email:         {}", customer.email)?;
        writeln!(out, "Phone:         {}", customer.phone)?;
        writeln!(out, "Address:       {}", customer.address)?;
        writeln!(out, "Aadhaar/PAN:   {}", customer.id_number)?;
        writeln!(out, "Date of Birth: {}", customer.date_of_birth.format("%Y-%m-%d"))?;
        writeln!(out, "Customer Type: {}", customer.tier)?;
        writeln!(
            out,
            "Registered:    {}",
            customer.registered_at.format("%Y-%m-%d %H:%M")
        )?;
        Ok(())
    }

    pub fn accounts<W: Write>(&self, out: &mut W, accounts: &[&Account]) -> Result<()> {
        writeln!(
            out,
            "{:<15} {:<8} {:<18} {:>16} {:>7} {:<10}",
            "ACCOUNT", "CUSTOMER", "TYPE", "BALANCE", "RATE", "STATUS"
        )?;
        writeln!(out, "{}", "-".repeat(79))?;
        for a in accounts {
            writeln!(
                out,
                "{:<15} {:<8} {:<18} {:>16} {:>6.2}% {:<10}",
                a.number,
                a.customer_id,
                truncate(a.category.as_str(), 18),
                self.money(a.balance),
                a.interest_rate,
                a.status
            )?;
        }
        Ok(())
    }

    pub fn account_details<W: Write>(
        &self,
        out: &mut W,
        account: &Account,
        owner: Option<&Customer>,
    ) -> Result<()> {
        writeln!(out, "Account Number: {}", account.number)?;
        writeln!(out, "Account Type:   {}", account.category)?;
        writeln!(out, "Balance:        {}", self.money(account.balance))?;
        writeln!(out, "Interest Rate:  {}%", account.interest_rate)?;
        writeln!(out, "Status:         {}", account.status)?;
        writeln!(
            out,
            "Opened:         {}",
            account.opened_at.format("%Y-%m-%d %H:%M")
        )?;
        if let Some(customer) = owner {
            writeln!(out, "Customer:       {}", customer.full_name())?;
        }
        Ok(())
    }

    pub fn transactions<W: Write>(&self, out: &mut W, transactions: &[&Transaction]) -> Result<()> {
        writeln!(
            out,
            "{:<6} {:<15} {:<10} {:>14} {:>16} {:<17} {}",
            "ID", "ACCOUNT", "TYPE", "AMOUNT", "BALANCE", "DATE", "DESCRIPTION"
        )?;
        writeln!(out, "{}", "-".repeat(100))?;
        for t in transactions {
            writeln!(
                out,
                "{:<6} {:<15} {:<10} {:>14} {:>16} {:<17} {}",
                t.id,
                t.account,
                t.kind,
                self.money(t.amount),
                self.money(t.balance_after),
                t.timestamp.format("%Y-%m-%d %H:%M"),
                t.description
            )?;
        }
        Ok(())
    }

    pub fn loans<W: Write>(&self, out: &mut W, loans: &[&Loan]) -> Result<()> {
        writeln!(
            out,
            "{:<5} {:<8} {:<12} {:>14} {:>7} {:>6} {:>14} {:<10}",
            "ID", "CUSTOMER", "TYPE", "AMOUNT", "RATE", "TERM", "REMAINING", "STATUS"
        )?;
        writeln!(out, "{}", "-".repeat(84))?;
        for l in loans {
            writeln!(
                out,
                "{:<5} {:<8} {:<12} {:>14} {:>6.2}% {:>6} {:>14} {:<10}",
                l.id,
                l.customer_id,
                truncate(l.category.as_str(), 12),
                self.money(l.principal),
                l.interest_rate,
                l.term_months,
                self.money(l.remaining_balance),
                l.status
            )?;
        }
        Ok(())
    }

    pub fn loan_details<W: Write>(
        &self,
        out: &mut W,
        loan: &Loan,
        borrower: Option<&Customer>,
    ) -> Result<()> {
        writeln!(out, "Loan ID:           {}", loan.id)?;
        writeln!(out, "Loan Type:         {}", loan.category)?;
        writeln!(out, "Loan Amount:       {}", self.money(loan.principal))?;
        writeln!(out, "Remaining Balance: {}", self.money(loan.remaining_balance))?;
        writeln!(out, "Interest Rate:     {}%", loan.interest_rate)?;
        writeln!(out, "Term:              {} months", loan.term_months)?;
        writeln!(out, "Monthly Payment:   {}", self.money(loan.monthly_payment()))?;
        writeln!(out, "Status:            {}", loan.status)?;
        if let Some(customer) = borrower {
            writeln!(out, "Customer:          {}", customer.full_name())?;
        }
        Ok(())
    }

    // ========================
    // Reports
    // ========================

    pub fn statistics<W: Write>(&self, out: &mut W, stats: &BankStatistics) -> Result<()> {
        match self.format {
            ReportFormat::Json => json(out, stats),
            ReportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut *out);
                writer.write_record(["metric", "value"])?;
                let totals = [
                    ("total_customers", stats.total_customers.to_string()),
                    ("total_accounts", stats.total_accounts.to_string()),
                    ("total_loans", stats.total_loans.to_string()),
                    ("total_transactions", stats.total_transactions.to_string()),
                    ("total_deposits", stats.total_deposits.to_string()),
                    ("active_loans", stats.active_loans.to_string()),
                    ("total_loan_amount", stats.total_loan_amount.to_string()),
                    ("recent_transactions", stats.recent_transactions.to_string()),
                ];
                for (metric, value) in totals {
                    writer.write_record([metric, value.as_str()])?;
                }
                for (category, count) in &stats.accounts_by_category {
                    writer.write_record([format!("accounts:{}", category), count.to_string()])?;
                }
                for (tier, count) in &stats.customers_by_tier {
                    writer.write_record([format!("customers:{}", tier), count.to_string()])?;
                }
                writer.flush()?;
                Ok(())
            }
            ReportFormat::Table => {
                writeln!(out, "Total Customers:     {}", stats.total_customers)?;
                writeln!(out, "Total Accounts:      {}", stats.total_accounts)?;
                writeln!(out, "Total Loans:         {}", stats.total_loans)?;
                writeln!(out, "Total Transactions:  {}", stats.total_transactions)?;
                writeln!(out, "Total Bank Deposits: {}", self.money(stats.total_deposits))?;
                writeln!(out, "Active Loans:        {}", stats.active_loans)?;
                writeln!(
                    out,
                    "Total Loan Amount:   {}",
                    self.money(stats.total_loan_amount)
                )?;
                writeln!(out)?;
                writeln!(out, "Accounts by Type:")?;
                for (category, count) in &stats.accounts_by_category {
                    writeln!(out, "  {}: {}", category, count)?;
                }
                writeln!(out)?;
                writeln!(out, "Customers by Type:")?;
                for (tier, count) in &stats.customers_by_tier {
                    writeln!(out, "  {}: {}", tier, count)?;
                }
                writeln!(out)?;
                writeln!(
                    out,
                    "Transactions (last 7 days): {}",
                    stats.recent_transactions
                )?;
                Ok(())
            }
        }
    }

    pub fn customer_report<W: Write>(&self, out: &mut W, report: &CustomerReport) -> Result<()> {
        match self.format {
            ReportFormat::Json => json(out, report),
            ReportFormat::Csv => csv_rows(out, &report.customers),
            ReportFormat::Table => {
                writeln!(
                    out,
                    "{:<6} {:<15} {:<15} {:<25} {:<12} {:<10} {:>8}",
                    "ID", "FIRST NAME", "LAST NAME", "EMAIL", "PHONE", "TYPE", "ACCOUNTS"
                )?;
                writeln!(out, "{}", "-".repeat(97))?;
                for row in &report.customers {
                    writeln!(
                        out,
                        "{:<6} {:<15} {:<15} {:<25} {:<12} {:<10} {:>8}",
                        row.id,
                        truncate(&row.first_name, 15),
                        truncate(&row.last_name, 15),
                        truncate(&row.email, 25),
                        row.phone,
                        row.tier,
                        row.account_count
                    )?;
                }
                writeln!(out)?;
                writeln!(out, "Total customers: {}", report.customers.len())?;
                Ok(())
            }
        }
    }

    pub fn account_summary<W: Write>(&self, out: &mut W, report: &AccountSummary) -> Result<()> {
        match self.format {
            ReportFormat::Json => json(out, report),
            ReportFormat::Csv => csv_rows(out, &report.accounts),
            ReportFormat::Table => {
                writeln!(
                    out,
                    "{:<15} {:<8} {:<18} {:>16} {:>7} {:<10}",
                    "ACCOUNT", "CUSTOMER", "TYPE", "BALANCE", "RATE", "STATUS"
                )?;
                writeln!(out, "{}", "-".repeat(79))?;
                for row in &report.accounts {
                    writeln!(
                        out,
                        "{:<15} {:<8} {:<18} {:>16} {:>6.2}% {:<10}",
                        row.number,
                        row.customer_id,
                        truncate(&row.category, 18),
                        self.money(row.balance),
                        row.interest_rate,
                        row.status
                    )?;
                }
                writeln!(out, "{}", "-".repeat(79))?;
                writeln!(
                    out,
                    "{:<43} {:>16}",
                    "TOTAL",
                    self.money(report.total_balance)
                )?;
                Ok(())
            }
        }
    }

    pub fn transaction_report<W: Write>(
        &self,
        out: &mut W,
        report: &TransactionReport,
    ) -> Result<()> {
        match self.format {
            ReportFormat::Json => json(out, report),
            ReportFormat::Csv => csv_rows(out, &report.transactions),
            ReportFormat::Table => {
                writeln!(
                    out,
                    "{:<6} {:<15} {:<10} {:>14} {:>16} {:<15} {}",
                    "ID", "ACCOUNT", "TYPE", "AMOUNT", "BALANCE", "COUNTERPARTY", "DESCRIPTION"
                )?;
                writeln!(out, "{}", "-".repeat(100))?;
                for row in &report.transactions {
                    writeln!(
                        out,
                        "{:<6} {:<15} {:<10} {:>14} {:>16} {:<15} {}",
                        row.id,
                        row.account,
                        row.kind,
                        self.money(row.amount),
                        self.money(row.balance_after),
                        row.counterparty.as_deref().unwrap_or("-"),
                        row.description
                    )?;
                }
                writeln!(out)?;
                writeln!(out, "Total transactions: {}", report.transactions.len())?;
                Ok(())
            }
        }
    }

    pub fn loan_portfolio<W: Write>(&self, out: &mut W, report: &LoanPortfolio) -> Result<()> {
        match self.format {
            ReportFormat::Json => json(out, report),
            ReportFormat::Csv => csv_rows(out, &report.loans),
            ReportFormat::Table => {
                writeln!(
                    out,
                    "{:<5} {:<8} {:<12} {:>14} {:>7} {:>6} {:>14} {:>14} {:<10}",
                    "ID", "CUSTOMER", "TYPE", "AMOUNT", "RATE", "TERM", "MONTHLY", "REMAINING",
                    "STATUS"
                )?;
                writeln!(out, "{}", "-".repeat(99))?;
                for row in &report.loans {
                    writeln!(
                        out,
                        "{:<5} {:<8} {:<12} {:>14} {:>6.2}% {:>6} {:>14} {:>14} {:<10}",
                        row.id,
                        row.customer_id,
                        truncate(&row.category, 12),
                        self.money(row.principal),
                        row.interest_rate,
                        row.term_months,
                        self.money(row.monthly_payment),
                        self.money(row.remaining_balance),
                        row.status
                    )?;
                }
                writeln!(out, "{}", "-".repeat(99))?;
                writeln!(out, "Total Loans:     {}", report.total_loans)?;
                writeln!(out, "Total Principal: {}", self.money(report.total_principal))?;
                writeln!(out, "Total Remaining: {}", self.money(report.total_remaining))?;
                Ok(())
            }
        }
    }
}

fn json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// One CSV record per row, headers taken from the row's field names.
fn csv_rows<W: Write, T: Serialize>(out: &mut W, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
