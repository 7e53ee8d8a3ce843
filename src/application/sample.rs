use chrono::NaiveDate;

use crate::domain::{
    Account, AccountCategory, Customer, CustomerProfile, Loan, LoanCategory, LoanStatus, Transaction,
    TransactionKind,
};

use super::Ledger;

struct SampleCustomer {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
    id_number: &'static str,
    born: (i32, u32, u32),
    tier: &'static str,
}

const CUSTOMERS: [SampleCustomer; 3] = [
    SampleCustomer {
        first_name: "Raj",
        last_name: "Sharma",
        email: "raj.sharma@email.com",
        phone: "9876543210",
        address: "123 MG Road, Mumbai",
        id_number: "AADHAAR1001",
        born: (1985, 3, 15),
        tier: "Premium",
    },
    SampleCustomer {
        first_name: "Priya",
        last_name: "Patel",
        email: "priya.patel@email.com",
        phone: "9876543211",
        address: "456 Connaught Place, Delhi",
        id_number: "AADHAAR1002",
        born: (1990, 7, 22),
        tier: "Regular",
    },
    SampleCustomer {
        first_name: "Amit",
        last_name: "Kumar",
        email: "amit.kumar@email.com",
        phone: "9876543212",
        address: "789 Brigade Road, Bangalore",
        id_number: "AADHAAR1003",
        born: (1978, 11, 30),
        tier: "VIP",
    },
];

/// (number, owner, category, opening balance in paise)
const ACCOUNTS: [(&str, u32, AccountCategory, i64); 4] = [
    ("ACC1000000001", 1001, AccountCategory::Savings, 5_000_000),
    ("ACC1000000002", 1001, AccountCategory::Current, 2_500_000),
    ("ACC1000000003", 1002, AccountCategory::Savings, 3_000_000),
    ("ACC1000000004", 1003, AccountCategory::FixedDeposit, 10_000_000),
];

impl Ledger {
    /// Demo books: three customers, four accounts, two deposits and one
    /// active personal loan.
    ///
    /// Customers are inserted directly, so no default savings accounts are
    /// opened for them, and the seeded account balances already include the
    /// two seeded deposits.
    pub fn with_sample_data(mut self) -> Self {
        let store = self.store_mut();

        for sample in &CUSTOMERS {
            let id = store.next_customer_id();
            let (year, month, day) = sample.born;
            let profile = CustomerProfile {
                first_name: sample.first_name.to_string(),
                last_name: sample.last_name.to_string(),
                email: sample.email.to_string(),
                phone: sample.phone.to_string(),
                address: sample.address.to_string(),
                id_number: sample.id_number.to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
                tier: sample.tier.to_string(),
            };
            store.insert_customer(Customer::new(id, profile));
        }

        for (number, owner, category, balance) in ACCOUNTS {
            store.insert_account(Account::new(number.to_string(), owner, category, balance));
        }

        store.append_transaction(Transaction::new(
            "ACC1000000001".to_string(),
            TransactionKind::Deposit,
            1_000_000,
            "Initial deposit",
            1_000_000,
        ));
        store.append_transaction(Transaction::new(
            "ACC1000000001".to_string(),
            TransactionKind::Deposit,
            4_000_000,
            "Salary credit",
            5_000_000,
        ));

        let loan_id = store.next_loan_id();
        store.insert_loan(
            Loan::new(loan_id, 1001, LoanCategory::Personal, 5_000_000, 24)
                .with_status(LoanStatus::Active),
        );

        tracing::debug!(counts = ?store.counts(), "sample data seeded");
        self
    }
}
