//! Storage module
//!
//! Provides per-key string storage for persisted state (preference flags,
//! the change-history log).

pub mod local_store;

pub use local_store::LocalStore;
