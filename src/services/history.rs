//! Change history
//!
//! Append-only audit log of card mutations, persisted as a JSON array and
//! reloaded on startup. Each update event carries a human-readable summary
//! of what changed, computed by diffing the old and new card snapshots.
//! Persistence is best-effort: failures are logged and never surfaced.

use crate::config::HISTORY_STORAGE_KEY;
use crate::storage::LocalStore;
use crate::store::{HistoryAction, HistoryEvent, ProductCard};
use chrono::Utc;
use uuid::Uuid;

/// Compare two card snapshots and render one comma-joined summary of the
/// observable changes, in the interface language. An edit that changes
/// nothing still yields a fixed "no changes" clause.
pub fn describe_update(old: &ProductCard, new: &ProductCard) -> String {
    let mut changes: Vec<String> = Vec::new();

    if old.title != new.title {
        changes.push(format!(
            "título cambiado de \"{}\" a \"{}\"",
            old.title, new.title
        ));
    }

    if old.status != new.status {
        changes.push(format!(
            "estado cambiado de \"{}\" a \"{}\"",
            old.status.label(),
            new.status.label()
        ));
    }

    if old.description != new.description {
        changes.push("descripción actualizada".to_string());
    }

    // Only presence matters for images, not the encoded bytes
    let old_image = old.image.as_deref().unwrap_or("");
    let new_image = new.image.as_deref().unwrap_or("");
    if old_image != new_image {
        let clause = if new_image.is_empty() {
            "imagen eliminada"
        } else if old_image.is_empty() {
            "imagen añadida"
        } else {
            "imagen actualizada"
        };
        changes.push(clause.to_string());
    }

    if changes.is_empty() {
        changes.push("sin cambios detectados".to_string());
    }

    format!("Tarjeta actualizada: {}", changes.join(", "))
}

/// Audit log of card mutations, newest first
#[derive(Debug, Clone)]
pub struct HistoryLog {
    events: Vec<HistoryEvent>,
    store: LocalStore,
}

impl HistoryLog {
    /// Load persisted history. A missing key starts empty; malformed JSON
    /// is logged and also starts empty, never crashing.
    pub async fn load(store: LocalStore) -> Self {
        let events = match store.get(HISTORY_STORAGE_KEY).await {
            Some(json) => match serde_json::from_str(&json) {
                Ok(events) => events,
                Err(e) => {
                    tracing::warn!("Discarding malformed history: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        tracing::info!("Loaded {} history events", events.len());
        Self { events, store }
    }

    /// All events, newest first
    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Record a card creation
    pub async fn log_creation(&mut self, card: &ProductCard) {
        let details = format!("Tarjeta creada con estado: {}", card.status.label());
        self.push(HistoryAction::Create, card.id, card.title.clone(), details)
            .await;
    }

    /// Record a card update, diffing the old and new snapshots. The event
    /// is recorded even when nothing observable changed.
    pub async fn log_update(&mut self, old: &ProductCard, new: &ProductCard) {
        let details = describe_update(old, new);
        self.push(HistoryAction::Update, new.id, new.title.clone(), details)
            .await;
    }

    /// Record a card deletion
    pub async fn log_deletion(&mut self, card: &ProductCard) {
        self.push(
            HistoryAction::Delete,
            card.id,
            card.title.clone(),
            "Tarjeta eliminada".to_string(),
        )
        .await;
    }

    /// Drop all history
    pub async fn clear(&mut self) {
        self.events.clear();
        self.persist().await;
    }

    async fn push(&mut self, action: HistoryAction, card_id: u32, card_title: String, details: String) {
        let event = HistoryEvent {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            card_id,
            card_title,
            details,
        };

        self.events.insert(0, event);
        self.persist().await;
    }

    /// Best-effort write after each change; a failure keeps the in-memory
    /// log intact and is only logged.
    async fn persist(&self) {
        let json = match serde_json::to_string(&self.events) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize history: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(HISTORY_STORAGE_KEY, &json).await {
            tracing::warn!("Failed to persist history: {}", e);
        }
    }
}
