// Application layer: the Ledger and its read-only projections.
// The console in `cli` only talks to this layer.

mod error;
mod ledger;
pub mod reporting;
mod sample;

pub use error::*;
pub use ledger::*;
