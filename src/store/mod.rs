//! Store module
//!
//! In-memory collections and the entities they hold:
//! - Model definitions (cards, sale events, history events)
//! - The card store (ordered, mutated by create/update/delete)
//! - The append-only sales ledger

pub mod cards;
pub mod ledger;
pub mod models;

pub use cards::CardStore;
pub use ledger::SalesLedger;
pub use models::*;
