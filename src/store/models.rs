//! Model definitions
//!
//! Rust structs representing the entities the dashboard manages.
//! All models use serde for serialization to a UI shell and to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a card is offered for sale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    Active,
    Inactive,
}

impl CardStatus {
    /// Display label shown in the interface
    pub fn label(self) -> &'static str {
        match self {
            CardStatus::Active => "Activo",
            CardStatus::Inactive => "Inactivo",
        }
    }
}

/// A product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: CardStatus,
    /// Decimal price string as entered in the form; empty when the card
    /// has no sale price
    pub price: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    /// Base64 data URL of the card image
    pub image: Option<String>,
}

impl ProductCard {
    /// Numeric value of the price string, if present and well-formed
    pub fn unit_price(&self) -> Option<f64> {
        if self.price.is_empty() {
            return None;
        }
        self.price.parse().ok()
    }
}

/// Create card request: everything the store assigns itself is absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub status: CardStatus,
    pub price: String,
    pub quantity: u32,
    pub image: Option<String>,
}

/// One recorded sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEvent {
    pub card_id: u32,
    pub title: String,
    pub unit_price: f64,
    /// Always 1 on the canonical "mark as sold" path
    pub quantity: u32,
    pub sold_at: DateTime<Utc>,
}

impl SaleEvent {
    /// Revenue contributed by this event
    pub fn revenue(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Kind of change a history event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Create,
    Update,
    Delete,
}

/// One audit-trail entry describing a card mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: HistoryAction,
    pub card_id: u32,
    pub card_title: String,
    pub details: String,
}
