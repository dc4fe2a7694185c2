//! Services module
//!
//! Business logic coordinating the stores, the audit log, and persistence:
//! - `cards`: card lifecycle with audit logging and the atomic sell
//! - `sales`: sales ledger ownership and revenue aggregations
//! - `history`: change diffing and the persisted audit log
//! - `preferences`: persisted interface preference flags

pub mod cards;
pub mod history;
pub mod preferences;
pub mod sales;

pub use cards::CardsService;
pub use history::{describe_update, HistoryLog};
pub use preferences::Preferences;
pub use sales::SalesService;
