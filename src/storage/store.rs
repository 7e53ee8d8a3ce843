use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{
    ACCOUNT_PREFIX, Account, AccountNumber, Customer, CustomerId, FIRST_CUSTOMER_ID, Loan, LoanId,
    Transaction, TransactionId,
};

/// Account numbers are drawn from [1_000_000_000, 1_900_000_000).
const ACCOUNT_NUMBER_RANGE: std::ops::Range<u64> = 1_000_000_000..1_900_000_000;

/// Collection sizes, mostly for statistics and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub customers: usize,
    pub accounts: usize,
    pub transactions: usize,
    pub loans: usize,
}

/// In-memory home of the four record collections and their identity counters.
/// Records are kept in insertion order; lookups are linear scans.
pub struct Store {
    customers: Vec<Customer>,
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    loans: Vec<Loan>,
    next_customer_id: CustomerId,
    next_transaction_id: TransactionId,
    next_loan_id: LoanId,
    rng: StdRng,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic account numbers, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            customers: Vec::new(),
            accounts: Vec::new(),
            transactions: Vec::new(),
            loans: Vec::new(),
            next_customer_id: FIRST_CUSTOMER_ID,
            next_transaction_id: 1,
            next_loan_id: 1,
            rng,
        }
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            customers: self.customers.len(),
            accounts: self.accounts.len(),
            transactions: self.transactions.len(),
            loans: self.loans.len(),
        }
    }

    // ========================
    // Customers
    // ========================

    /// Reserve the next customer id. Ids are never reused.
    pub fn next_customer_id(&mut self) -> CustomerId {
        let id = self.next_customer_id;
        self.next_customer_id += 1;
        id
    }

    pub fn insert_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    // ========================
    // Accounts
    // ========================

    /// Draw a fresh account number, retrying until it is not already taken.
    pub fn generate_account_number(&mut self) -> AccountNumber {
        loop {
            let candidate = format!(
                "{}{}",
                ACCOUNT_PREFIX,
                self.rng.gen_range(ACCOUNT_NUMBER_RANGE)
            );
            if self.account(&candidate).is_none() {
                return candidate;
            }
            tracing::debug!(number = %candidate, "account number collision, drawing again");
        }
    }

    pub fn insert_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number == number)
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number == number)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_for_customer(&self, customer_id: CustomerId) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .collect()
    }

    // ========================
    // Transactions
    // ========================

    /// Append a transaction, assigning its sequential id.
    pub fn append_transaction(&mut self, mut transaction: Transaction) -> TransactionId {
        transaction.id = self.next_transaction_id;
        self.next_transaction_id += 1;
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transactions_for_account(&self, number: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account == number)
            .collect()
    }

    // ========================
    // Loans
    // ========================

    pub fn next_loan_id(&mut self) -> LoanId {
        let id = self.next_loan_id;
        self.next_loan_id += 1;
        id
    }

    pub fn insert_loan(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    pub fn loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    pub fn loan_mut(&mut self, id: LoanId) -> Option<&mut Loan> {
        self.loans.iter_mut().find(|l| l.id == id)
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }
}
