use crate::domain::{
    Account, AccountCategory, AccountStatus, Cents, Customer, CustomerField, CustomerId,
    CustomerProfile, InterestProjection, Loan, LoanCategory, LoanId, LoanStatus, Transaction,
    TransactionKind, interest,
};
use crate::storage::{Store, StoreCounts};

use super::LedgerError;

/// The bank's books: every customer, account, transaction and loan, plus the
/// rules for moving money between them.
///
/// Every operation either applies completely or returns an error and leaves
/// the books untouched.
pub struct Ledger {
    store: Store,
}

/// Result of registering a customer
#[derive(Debug, Clone)]
pub struct Registration {
    pub customer: Customer,
    /// Savings account opened automatically at registration
    pub savings_account: Account,
}

/// Result of a transfer: one transaction per side.
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    pub debit: Transaction,
    pub credit: Transaction,
}

/// Result of a monthly interest run
#[derive(Debug, Clone)]
pub struct InterestRun {
    pub credited: Vec<Transaction>,
}

impl InterestRun {
    pub fn count(&self) -> usize {
        self.credited.len()
    }

    pub fn total(&self) -> Cents {
        self.credited.iter().map(|t| t.amount).sum()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    pub(crate) fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn counts(&self) -> StoreCounts {
        self.store.counts()
    }

    // ========================
    // Customer operations
    // ========================

    /// Register a customer and open their default savings account.
    pub fn register_customer(&mut self, profile: CustomerProfile) -> Registration {
        let id = self.store.next_customer_id();
        let customer = Customer::new(id, profile);
        self.store.insert_customer(customer.clone());
        tracing::info!(customer_id = id, name = %customer.full_name(), "customer registered");

        let savings_account = self.insert_account(id, AccountCategory::Savings, 0);

        Registration {
            customer,
            savings_account,
        }
    }

    pub fn customer(&self, id: CustomerId) -> Result<&Customer, LedgerError> {
        self.store
            .customer(id)
            .ok_or(LedgerError::CustomerNotFound(id))
    }

    pub fn customers(&self) -> &[Customer] {
        self.store.customers()
    }

    pub fn update_customer(
        &mut self,
        id: CustomerId,
        field: CustomerField,
        value: String,
    ) -> Result<&Customer, LedgerError> {
        let customer = self
            .store
            .customer_mut(id)
            .ok_or(LedgerError::CustomerNotFound(id))?;
        customer.update(field, value);
        tracing::info!(customer_id = id, field = field.label(), "customer updated");
        Ok(&*customer)
    }

    /// Customers whose full name contains `query`, case-insensitively.
    pub fn search_customers(&self, query: &str) -> Vec<&Customer> {
        self.store
            .customers()
            .iter()
            .filter(|c| c.name_matches(query))
            .collect()
    }

    // ========================
    // Account operations
    // ========================

    /// Open an account with a freshly generated number.
    /// The owner id is recorded as given; it is not checked.
    pub fn open_account(
        &mut self,
        customer_id: CustomerId,
        category: AccountCategory,
        initial_balance: Cents,
    ) -> Result<Account, LedgerError> {
        if initial_balance < 0 {
            return Err(LedgerError::InvalidAmount(
                "Initial balance cannot be negative".to_string(),
            ));
        }

        Ok(self.insert_account(customer_id, category, initial_balance))
    }

    fn insert_account(
        &mut self,
        customer_id: CustomerId,
        category: AccountCategory,
        initial_balance: Cents,
    ) -> Account {
        if !category.is_recognized() {
            tracing::debug!(category = %category, "unrecognized account type, using fallback rate");
        }
        let number = self.store.generate_account_number();
        let account = Account::new(number, customer_id, category, initial_balance);
        self.store.insert_account(account.clone());
        tracing::info!(
            account = %account.number,
            customer_id,
            category = %account.category,
            "account opened"
        );
        account
    }

    /// Close an account whose balance is exactly zero.
    pub fn close_account(&mut self, number: &str) -> Result<&Account, LedgerError> {
        let account = self
            .store
            .account_mut(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))?;

        if account.balance != 0 {
            return Err(LedgerError::NonZeroBalance {
                account: number.to_string(),
                balance: account.balance,
            });
        }

        account.status = AccountStatus::Closed;
        tracing::info!(account = number, "account closed");
        Ok(&*account)
    }

    pub fn account(&self, number: &str) -> Result<&Account, LedgerError> {
        self.store
            .account(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))
    }

    pub fn accounts(&self) -> &[Account] {
        self.store.accounts()
    }

    pub fn accounts_for_customer(&self, customer_id: CustomerId) -> Vec<&Account> {
        self.store.accounts_for_customer(customer_id)
    }

    // ========================
    // Money movement
    // ========================

    /// Credit `amount` to an account. Account status is not checked.
    pub fn deposit(&mut self, number: &str, amount: Cents) -> Result<Transaction, LedgerError> {
        self.credit(number, amount, TransactionKind::Deposit, "Cash deposit", None)
    }

    /// Debit `amount` from an active account with sufficient funds.
    pub fn withdraw(&mut self, number: &str, amount: Cents) -> Result<Transaction, LedgerError> {
        self.ensure_withdrawable(number, amount)?;
        self.debit(number, amount, TransactionKind::Withdrawal, "Cash withdrawal", None)
    }

    /// Move `amount` from `source` to `target`, recording one transaction per side.
    pub fn transfer(
        &mut self,
        source: &str,
        target: &str,
        amount: Cents,
    ) -> Result<TransferReceipt, LedgerError> {
        self.account(source)?;
        self.account(target)?;
        if source == target {
            return Err(LedgerError::SameAccount(source.to_string()));
        }
        self.ensure_withdrawable(source, amount)?;
        self.ensure_creditable(target, amount)?;

        // Both legs are validated above, so neither can fail halfway.
        let debit = self.debit(
            source,
            amount,
            TransactionKind::Transfer,
            &format!("Transfer to {}", target),
            Some(target),
        )?;
        let credit = self.credit(
            target,
            amount,
            TransactionKind::Transfer,
            &format!("Transfer from {}", source),
            Some(source),
        )?;

        tracing::info!(source, target, amount, "transfer completed");
        Ok(TransferReceipt { debit, credit })
    }

    fn ensure_withdrawable(&self, number: &str, amount: Cents) -> Result<(), LedgerError> {
        let account = self.account(number)?;
        if account.can_withdraw(amount) {
            return Ok(());
        }

        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(
                "Amount must be positive".to_string(),
            ));
        }
        if !account.is_active() {
            return Err(LedgerError::AccountNotActive {
                account: number.to_string(),
                status: account.status,
            });
        }
        Err(LedgerError::InsufficientFunds {
            account: number.to_string(),
            balance: account.balance,
            required: amount,
        })
    }

    fn ensure_creditable(&self, number: &str, amount: Cents) -> Result<(), LedgerError> {
        let account = self.account(number)?;
        match account.balance.checked_add(amount) {
            Some(_) => Ok(()),
            None => Err(LedgerError::BalanceOverflow(number.to_string())),
        }
    }

    fn credit(
        &mut self,
        number: &str,
        amount: Cents,
        kind: TransactionKind,
        description: &str,
        counterparty: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        if amount <= 0 {
            tracing::debug!(account = number, amount, "rejected non-positive credit");
            return Err(LedgerError::InvalidAmount(
                "Amount must be positive".to_string(),
            ));
        }

        let account = self
            .store
            .account_mut(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow(number.to_string()))?;
        let balance_after = account.balance;

        Ok(self.record(number, kind, amount, description, counterparty, balance_after))
    }

    /// Callers must have checked `ensure_withdrawable`.
    fn debit(
        &mut self,
        number: &str,
        amount: Cents,
        kind: TransactionKind,
        description: &str,
        counterparty: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        let account = self
            .store
            .account_mut(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.to_string()))?;
        let balance_after = account
            .balance
            .checked_sub(amount)
            .filter(|b| *b >= 0)
            .ok_or_else(|| LedgerError::InsufficientFunds {
                account: number.to_string(),
                balance: account.balance,
                required: amount,
            })?;
        account.balance = balance_after;

        Ok(self.record(number, kind, amount, description, counterparty, balance_after))
    }

    fn record(
        &mut self,
        number: &str,
        kind: TransactionKind,
        amount: Cents,
        description: &str,
        counterparty: Option<&str>,
        balance_after: Cents,
    ) -> Transaction {
        let mut transaction =
            Transaction::new(number.to_string(), kind, amount, description, balance_after);
        if let Some(other) = counterparty {
            transaction = transaction.with_counterparty(other);
        }

        transaction.id = self.store.append_transaction(transaction.clone());
        tracing::info!(
            id = transaction.id,
            account = number,
            kind = %kind,
            amount,
            balance_after,
            "transaction recorded"
        );
        transaction
    }

    /// Transactions touching one account, oldest first.
    pub fn statement(&self, number: &str) -> Vec<&Transaction> {
        self.store.transactions_for_account(number)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    // ========================
    // Interest
    // ========================

    /// Credit one month of interest to every active savings account.
    /// Running it twice pays twice.
    pub fn apply_monthly_interest(&mut self) -> InterestRun {
        let due: Vec<(String, Cents)> = self
            .store
            .accounts()
            .iter()
            .filter(|a| a.earns_monthly_interest())
            .map(|a| {
                (
                    a.number.clone(),
                    interest::monthly_interest(a.balance, a.interest_rate),
                )
            })
            .filter(|(_, amount)| *amount > 0)
            .collect();

        let mut credited = Vec::with_capacity(due.len());
        for (number, amount) in due {
            match self.credit(
                &number,
                amount,
                TransactionKind::Interest,
                "Monthly interest",
                None,
            ) {
                Ok(tx) => credited.push(tx),
                Err(error) => {
                    tracing::warn!(account = %number, %error, "interest credit skipped");
                }
            }
        }

        tracing::info!(accounts = credited.len(), "monthly interest applied");
        InterestRun { credited }
    }

    pub fn project_account_interest(
        &self,
        number: &str,
    ) -> Result<InterestProjection, LedgerError> {
        let account = self.account(number)?;
        Ok(interest::project_account_interest(
            account.balance,
            account.interest_rate,
        ))
    }

    pub fn project_loan_interest(&self, id: LoanId) -> Result<InterestProjection, LedgerError> {
        let loan = self.loan(id)?;
        Ok(interest::project_loan_interest(
            loan.remaining_balance,
            loan.interest_rate,
        ))
    }

    // ========================
    // Loans
    // ========================

    /// File a loan application. The borrower id is recorded as given.
    pub fn apply_for_loan(
        &mut self,
        customer_id: CustomerId,
        category: LoanCategory,
        principal: Cents,
        term_months: u32,
    ) -> Result<Loan, LedgerError> {
        if principal <= 0 {
            return Err(LedgerError::InvalidAmount(
                "Loan amount must be positive".to_string(),
            ));
        }
        if term_months == 0 {
            return Err(LedgerError::InvalidTerm(term_months));
        }

        if !category.is_recognized() {
            tracing::debug!(category = %category, "unrecognized loan type, using fallback rate");
        }

        let id = self.store.next_loan_id();
        let loan = Loan::new(id, customer_id, category, principal, term_months);
        self.store.insert_loan(loan.clone());
        tracing::info!(
            loan_id = id,
            customer_id,
            category = %loan.category,
            principal,
            "loan application filed"
        );
        Ok(loan)
    }

    pub fn approve_loan(&mut self, id: LoanId) -> Result<&Loan, LedgerError> {
        self.transition_loan(id, LoanStatus::Pending, LoanStatus::Approved)
    }

    /// Disburse an approved loan, making it eligible for payments.
    pub fn activate_loan(&mut self, id: LoanId) -> Result<&Loan, LedgerError> {
        self.transition_loan(id, LoanStatus::Approved, LoanStatus::Active)
    }

    fn transition_loan(
        &mut self,
        id: LoanId,
        from: LoanStatus,
        to: LoanStatus,
    ) -> Result<&Loan, LedgerError> {
        let loan = self
            .store
            .loan_mut(id)
            .ok_or(LedgerError::LoanNotFound(id))?;

        if loan.status != from {
            return Err(LedgerError::InvalidLoanStatus {
                loan_id: id,
                expected: from,
                actual: loan.status,
            });
        }

        loan.status = to;
        if to == LoanStatus::Active {
            loan.started_at = chrono::Utc::now();
        }
        tracing::info!(loan_id = id, from = %from, to = %to, "loan status changed");
        Ok(&*loan)
    }

    /// Pay down an active loan. Paying off the exact remainder marks it Paid.
    pub fn make_loan_payment(&mut self, id: LoanId, amount: Cents) -> Result<&Loan, LedgerError> {
        let loan = self
            .store
            .loan_mut(id)
            .ok_or(LedgerError::LoanNotFound(id))?;

        if !loan.accepts_payment(amount) {
            return Err(if loan.status != LoanStatus::Active {
                LedgerError::InvalidLoanStatus {
                    loan_id: id,
                    expected: LoanStatus::Active,
                    actual: loan.status,
                }
            } else if amount <= 0 {
                LedgerError::InvalidAmount("Payment must be positive".to_string())
            } else {
                LedgerError::PaymentExceedsBalance {
                    amount,
                    remaining: loan.remaining_balance,
                }
            });
        }

        loan.apply_payment(amount);
        tracing::info!(
            loan_id = id,
            amount,
            remaining = loan.remaining_balance,
            status = %loan.status,
            "loan payment applied"
        );
        Ok(&*loan)
    }

    pub fn loan(&self, id: LoanId) -> Result<&Loan, LedgerError> {
        self.store.loan(id).ok_or(LedgerError::LoanNotFound(id))
    }

    pub fn loans(&self) -> &[Loan] {
        self.store.loans()
    }
}
