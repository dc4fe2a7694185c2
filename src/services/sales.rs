//! Sales service
//!
//! Owns the append-only sales ledger and derives every revenue metric the
//! analytics view needs. All aggregations are pure folds over the ledger;
//! entries are never mutated.
//!
//! Monthly buckets are keyed by calendar month only, conflating the same
//! month across different years. That matches the observed behavior of the
//! dashboard charts and is kept as-is.

use crate::config::MONTH_LABELS;
use crate::store::{ProductCard, SaleEvent, SalesLedger};
use chrono::{DateTime, Datelike, TimeZone, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Sales ledger ownership plus revenue aggregations
#[derive(Debug, Clone, Default)]
pub struct SalesService {
    ledger: SalesLedger,
}

impl SalesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying ledger
    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    /// Record one sale of a card. Cards without a price are silently
    /// skipped: nothing is appended and no error is raised. Returns
    /// whether an event was recorded.
    pub fn mark_as_sold(&mut self, card: &ProductCard, sold_at: DateTime<Utc>) -> bool {
        let Some(unit_price) = card.unit_price() else {
            tracing::debug!("Skipping sale of card {} without a price", card.id);
            return false;
        };

        self.ledger.append(SaleEvent {
            card_id: card.id,
            title: card.title.clone(),
            unit_price,
            quantity: 1,
            sold_at,
        });
        true
    }

    /// Sum of revenue over every event ever recorded
    pub fn total_revenue(&self) -> f64 {
        self.ledger.events().iter().map(SaleEvent::revenue).sum()
    }

    /// Revenue per calendar month, indexed like [`MONTH_LABELS`]
    pub fn revenue_by_month(&self) -> [f64; 12] {
        let mut totals = [0.0; 12];
        for event in self.ledger.events() {
            totals[event.sold_at.month0() as usize] += event.revenue();
        }
        totals
    }

    /// Number of individual sales per calendar month, indexed like
    /// [`MONTH_LABELS`]
    pub fn sales_count_by_month(&self) -> [u32; 12] {
        let mut counts = [0; 12];
        for event in self.ledger.events() {
            counts[event.sold_at.month0() as usize] += 1;
        }
        counts
    }

    /// Labelled monthly revenue series for the chart
    pub fn monthly_revenue_series(&self) -> Vec<(&'static str, f64)> {
        MONTH_LABELS
            .iter()
            .copied()
            .zip(self.revenue_by_month())
            .collect()
    }

    /// Average daily revenue since January 1 of the current year,
    /// inclusive on both ends. Elapsed days are rounded up and never
    /// below one, so the division is always defined. Returns 0 when no
    /// sale falls inside the window.
    pub fn average_daily_revenue_since_january(&self, now: DateTime<Utc>) -> f64 {
        let start_of_year = Utc
            .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(now);

        let qualifying: Vec<&SaleEvent> = self
            .ledger
            .events()
            .iter()
            .filter(|event| event.sold_at >= start_of_year && event.sold_at <= now)
            .collect();

        if qualifying.is_empty() {
            return 0.0;
        }

        let revenue: f64 = qualifying.iter().map(|event| event.revenue()).sum();

        // Span is non-negative: start_of_year is never after now
        let elapsed_seconds = (now - start_of_year).num_seconds();
        let days_elapsed = ((elapsed_seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY).max(1);

        revenue / days_elapsed as f64
    }
}
