use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

pub type CustomerId = u32;

/// First identity handed out by the ledger.
pub const FIRST_CUSTOMER_ID: CustomerId = 1001;

/// Personal details captured at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Government identity document (Aadhaar, PAN, ...)
    pub id_number: String,
    pub date_of_birth: NaiveDate,
    /// Regular, Premium, VIP. Free-form.
    pub tier: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub id_number: String,
    pub date_of_birth: NaiveDate,
    pub registered_at: DateTime<Utc>,
    pub tier: String,
}

impl Customer {
    /// Create a customer. The id must be assigned by the store.
    pub fn new(id: CustomerId, profile: CustomerProfile) -> Self {
        Self {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone: profile.phone,
            address: profile.address,
            id_number: profile.id_number,
            date_of_birth: profile.date_of_birth,
            registered_at: Utc::now(),
            tier: profile.tier,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match against the full name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.full_name()
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }

    pub fn update(&mut self, field: CustomerField, value: String) {
        match field {
            CustomerField::FirstName => self.first_name = value,
            CustomerField::LastName => self.last_name = value,
            CustomerField::Phone => self.phone = value,
            CustomerField::Email => self.email = value,
            CustomerField::Address => self.address = value,
            CustomerField::Tier => self.tier = value,
        }
    }
}

/// Fields that may be edited after registration.
/// Identity, government id, birth date and registration time are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    FirstName,
    LastName,
    Phone,
    Email,
    Address,
    Tier,
}

impl CustomerField {
    pub const ALL: [CustomerField; 6] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::Phone,
        CustomerField::Email,
        CustomerField::Address,
        CustomerField::Tier,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "First Name",
            CustomerField::LastName => "Last Name",
            CustomerField::Phone => "Phone",
            CustomerField::Email => "Email",
            CustomerField::Address => "Address",
            CustomerField::Tier => "Customer Type",
        }
    }

    pub fn current_value<'a>(&self, customer: &'a Customer) -> &'a str {
        match self {
            CustomerField::FirstName => &customer.first_name,
            CustomerField::LastName => &customer.last_name,
            CustomerField::Phone => &customer.phone,
            CustomerField::Email => &customer.email,
            CustomerField::Address => &customer.address,
            CustomerField::Tier => &customer.tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer::new(
            FIRST_CUSTOMER_ID,
            CustomerProfile {
                first_name: "Priya".into(),
                last_name: "Patel".into(),
                email: "priya.patel@email.com".into(),
                phone: "9876543211".into(),
                address: "456 Connaught Place, Delhi".into(),
                id_number: "AADHAAR1002".into(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 7, 22).unwrap(),
                tier: "Regular".into(),
            },
        )
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_customer().full_name(), "Priya Patel");
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let customer = sample_customer();
        assert!(customer.name_matches("priya"));
        assert!(customer.name_matches("A PAT"));
        assert!(!customer.name_matches("sharma"));
    }

    #[test]
    fn test_update_field() {
        let mut customer = sample_customer();
        customer.update(CustomerField::Tier, "VIP".into());
        customer.update(CustomerField::Phone, "9000000000".into());

        assert_eq!(customer.tier, "VIP");
        assert_eq!(CustomerField::Phone.current_value(&customer), "9000000000");
    }
}
