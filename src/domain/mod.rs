mod account;
mod customer;
pub mod interest;
mod loan;
mod money;
mod transaction;

pub use account::*;
pub use customer::*;
pub use interest::InterestProjection;
pub use loan::*;
pub use money::*;
pub use transaction::*;
