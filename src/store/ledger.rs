//! Sales ledger
//!
//! Append-only list of recorded sale events, the source of truth for
//! revenue metrics. Events are never mutated or deleted once created.

use super::models::SaleEvent;

/// Append-only list of sale events
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    events: Vec<SaleEvent>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sale
    pub fn append(&mut self, event: SaleEvent) {
        tracing::debug!(
            "Recorded sale of card {} for {}",
            event.card_id,
            event.unit_price
        );
        self.events.push(event);
    }

    /// All recorded sales in the order they happened
    pub fn events(&self) -> &[SaleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
