//! Cards service
//!
//! Card lifecycle operations, each paired with its audit event: creation,
//! wholesale update (with change diffing), deletion, and the atomic sell
//! that records a ledger event and decrements stock as one operation.

use super::history::HistoryLog;
use super::sales::SalesService;
use crate::error::{AppError, Result};
use crate::store::{CardDraft, CardStore, HistoryEvent, ProductCard};
use chrono::{DateTime, Utc};

/// Service for managing product cards
#[derive(Debug, Clone)]
pub struct CardsService {
    store: CardStore,
    history: HistoryLog,
}

impl CardsService {
    pub fn new(history: HistoryLog) -> Self {
        Self {
            store: CardStore::new(),
            history,
        }
    }

    /// All cards in insertion order
    pub fn cards(&self) -> &[ProductCard] {
        self.store.cards()
    }

    /// Get a card by id
    pub fn get(&self, id: u32) -> Option<&ProductCard> {
        self.store.get(id)
    }

    /// All recorded history events, newest first
    pub fn history(&self) -> &[HistoryEvent] {
        self.history.events()
    }

    /// Create a card and record the creation
    pub async fn create_card(&mut self, draft: CardDraft) -> ProductCard {
        tracing::info!("Creating card: {}", draft.title);

        let card = self.store.insert(draft).clone();
        self.history.log_creation(&card).await;

        tracing::info!("Card created successfully: {}", card.id);
        card
    }

    /// Replace a card by id and record what changed. The event is
    /// recorded even when the edit changed nothing observable.
    pub async fn update_card(&mut self, card: ProductCard) -> Result<ProductCard> {
        tracing::debug!("Updating card: {}", card.id);

        let (old, stored) = self.store.replace(card)?;
        let updated = stored.clone();
        self.history.log_update(&old, &updated).await;

        Ok(updated)
    }

    /// Delete a card permanently and record the deletion
    pub async fn delete_card(&mut self, id: u32) -> Result<ProductCard> {
        tracing::info!("Deleting card: {}", id);

        let card = self.store.remove(id)?;
        self.history.log_deletion(&card).await;

        Ok(card)
    }

    /// Attach, replace, or remove a card's image. Image-only changes made
    /// directly on a card are not audited.
    pub fn set_card_image(&mut self, id: u32, image: Option<String>) -> Result<()> {
        self.store.set_image(id, image)
    }

    /// Sell one unit: append a sale event to the ledger and decrement the
    /// card's quantity as a single guarded operation. Refuses when the
    /// card is missing, has no usable price, or is out of stock; in every
    /// refusal neither the ledger nor the store changes. Returns the
    /// remaining quantity.
    pub fn sell_card(
        &mut self,
        id: u32,
        sales: &mut SalesService,
        now: DateTime<Utc>,
    ) -> Result<u32> {
        let card = self.store.get(id).ok_or(AppError::CardNotFound(id))?.clone();

        // A malformed price string would make mark_as_sold skip the event
        // while the decrement still ran, so it is refused up front
        if card.unit_price().is_none() {
            return Err(AppError::MissingPrice(id));
        }
        if card.quantity == 0 {
            return Err(AppError::OutOfStock(id));
        }

        // Both mutations are guarded above, so neither can fail halfway
        sales.mark_as_sold(&card, now);
        let remaining = self.store.decrement_quantity(id)?;

        tracing::info!("Sold card {}: {} remaining", id, remaining);
        Ok(remaining)
    }

    /// Drop all recorded history
    pub async fn clear_history(&mut self) {
        self.history.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStore;
    use crate::store::{CardStatus, HistoryAction};
    use tempfile::TempDir;

    fn draft(title: &str, price: &str, quantity: u32) -> CardDraft {
        CardDraft {
            title: title.to_string(),
            description: "Una descripción suficientemente larga".to_string(),
            status: CardStatus::Active,
            price: price.to_string(),
            quantity,
            image: None,
        }
    }

    async fn create_test_service() -> (CardsService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path().join("storage"));
        store.initialize().await.unwrap();
        let history = HistoryLog::load(store).await;
        (CardsService::new(history), temp_dir)
    }

    #[tokio::test]
    async fn test_create_card_records_history() {
        let (mut service, _temp) = create_test_service().await;

        let card = service.create_card(draft("Radio", "100", 2)).await;

        assert_eq!(card.id, 1);
        assert_eq!(service.history().len(), 1);
        assert_eq!(service.history()[0].action, HistoryAction::Create);
        assert_eq!(
            service.history()[0].details,
            "Tarjeta creada con estado: Activo"
        );
    }

    #[tokio::test]
    async fn test_update_card_diffs_against_old_snapshot() {
        let (mut service, _temp) = create_test_service().await;

        let card = service.create_card(draft("Radio", "100", 2)).await;
        let mut edited = card.clone();
        edited.title = "Radio antigua".to_string();

        service.update_card(edited).await.unwrap();

        let event = &service.history()[0];
        assert_eq!(event.action, HistoryAction::Update);
        assert_eq!(event.card_title, "Radio antigua");
        assert_eq!(
            event.details,
            "Tarjeta actualizada: título cambiado de \"Radio\" a \"Radio antigua\""
        );
    }

    #[tokio::test]
    async fn test_delete_card_records_history() {
        let (mut service, _temp) = create_test_service().await;

        let card = service.create_card(draft("Radio", "100", 2)).await;
        service.delete_card(card.id).await.unwrap();

        assert!(service.cards().is_empty());
        assert_eq!(service.history()[0].action, HistoryAction::Delete);
        assert_eq!(service.history()[0].details, "Tarjeta eliminada");
    }

    #[tokio::test]
    async fn test_sell_card_appends_and_decrements_together() {
        let (mut service, _temp) = create_test_service().await;
        let mut sales = SalesService::new();

        let card = service.create_card(draft("Radio", "100", 2)).await;

        let remaining = service.sell_card(card.id, &mut sales, Utc::now()).unwrap();

        assert_eq!(remaining, 1);
        assert_eq!(service.get(card.id).unwrap().quantity, 1);
        assert_eq!(sales.ledger().len(), 1);
        assert_eq!(sales.total_revenue(), 100.0);
    }

    #[tokio::test]
    async fn test_sell_card_refuses_when_out_of_stock() {
        let (mut service, _temp) = create_test_service().await;
        let mut sales = SalesService::new();

        let card = service.create_card(draft("Radio", "100", 0)).await;
        let result = service.sell_card(card.id, &mut sales, Utc::now());

        assert!(matches!(result, Err(AppError::OutOfStock(_))));
        assert!(sales.ledger().is_empty());
        assert_eq!(service.get(card.id).unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_sell_card_refuses_without_price() {
        let (mut service, _temp) = create_test_service().await;
        let mut sales = SalesService::new();

        let card = service.create_card(draft("Radio", "", 2)).await;
        let result = service.sell_card(card.id, &mut sales, Utc::now());

        assert!(matches!(result, Err(AppError::MissingPrice(_))));
        assert!(sales.ledger().is_empty());
        assert_eq!(service.get(card.id).unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_sell_card_refuses_malformed_price() {
        let (mut service, _temp) = create_test_service().await;
        let mut sales = SalesService::new();

        let card = service.create_card(draft("Radio", "12.3.4", 2)).await;
        let result = service.sell_card(card.id, &mut sales, Utc::now());

        // Neither half of the sale may run
        assert!(matches!(result, Err(AppError::MissingPrice(_))));
        assert!(sales.ledger().is_empty());
        assert_eq!(service.get(card.id).unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_set_card_image_is_not_audited() {
        let (mut service, _temp) = create_test_service().await;

        let card = service.create_card(draft("Radio", "100", 2)).await;
        let history_len = service.history().len();

        service
            .set_card_image(card.id, Some("data:image/png;base64,AAAA".to_string()))
            .unwrap();

        assert!(service.get(card.id).unwrap().image.is_some());
        assert_eq!(service.history().len(), history_len);
    }
}
