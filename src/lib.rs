//! Cardstock library
//!
//! Headless core for a product-card inventory dashboard: stores, derived-view
//! and sales-aggregation pipelines, change history, form validation, and
//! preference persistence. A UI shell drives these APIs; no rendering,
//! routing, or widget code lives here.

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod services;
pub mod storage;
pub mod store;
pub mod view;
