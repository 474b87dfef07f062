pub mod ledger;
pub mod seed;

pub use ledger::{Ledger, LedgerState};
