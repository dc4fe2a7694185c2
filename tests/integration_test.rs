//! Integration tests for cardstock
//!
//! These tests verify end-to-end functionality including:
//! - Card lifecycle with audit history
//! - The derived-view pipeline over live application state
//! - The atomic sell operation and the revenue aggregations
//! - History persistence across application restarts

use cardstock::app::AppState;
use cardstock::error::AppError;
use cardstock::forms::CardForm;
use cardstock::store::{CardDraft, CardStatus, HistoryAction};
use cardstock::view::{FilterSortSpec, PageRequest, SortKey, StatusFilter};
use tempfile::TempDir;

/// Helper to create application state in a temp data directory
async fn create_test_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let state = AppState::load(temp_dir.path().join("appdata")).await.unwrap();
    (state, temp_dir)
}

fn draft(title: &str, price: &str, quantity: u32) -> CardDraft {
    CardDraft {
        title: title.to_string(),
        description: format!("Descripción detallada de {}", title),
        status: CardStatus::Active,
        price: price.to_string(),
        quantity,
        image: None,
    }
}

#[tokio::test]
async fn test_card_lifecycle_with_history() {
    let (mut state, _temp) = create_test_state().await;

    // Create
    let card = state.cards.create_card(draft("Radio", "100", 2)).await;
    assert_eq!(card.id, 1);

    // Edit: rename and deactivate
    let mut edited = card.clone();
    edited.title = "Radio antigua".to_string();
    edited.status = CardStatus::Inactive;
    state.cards.update_card(edited).await.unwrap();

    // Edit again without changing anything observable
    let unchanged = state.cards.get(1).unwrap().clone();
    state.cards.update_card(unchanged).await.unwrap();

    // Delete
    state.cards.delete_card(1).await.unwrap();
    assert!(state.cards.cards().is_empty());

    // History is newest first: delete, no-change update, update, create
    let history = state.cards.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].action, HistoryAction::Delete);
    assert_eq!(history[0].details, "Tarjeta eliminada");
    assert_eq!(
        history[1].details,
        "Tarjeta actualizada: sin cambios detectados"
    );
    assert_eq!(
        history[2].details,
        "Tarjeta actualizada: título cambiado de \"Radio\" a \"Radio antigua\", \
         estado cambiado de \"Activo\" a \"Inactivo\""
    );
    assert_eq!(history[3].action, HistoryAction::Create);
    assert_eq!(history[3].details, "Tarjeta creada con estado: Activo");
}

#[tokio::test]
async fn test_history_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("appdata");

    let recorded;
    {
        let mut state = AppState::load(data_dir.clone()).await.unwrap();
        let card = state.cards.create_card(draft("Radio", "100", 2)).await;
        state.cards.delete_card(card.id).await.unwrap();
        recorded = state.cards.history().to_vec();
    }

    // Cards live in page memory and are gone; history was persisted
    let state = AppState::load(data_dir).await.unwrap();
    assert!(state.cards.cards().is_empty());
    assert_eq!(state.cards.history(), recorded.as_slice());
}

#[tokio::test]
async fn test_preferences_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("appdata");

    {
        let mut state = AppState::load(data_dir.clone()).await.unwrap();
        state.prefs.set_dark_mode(true).await;
        state.prefs.set_language("en").await.unwrap();
    }

    let state = AppState::load(data_dir).await.unwrap();
    assert!(state.prefs.dark_mode());
    assert!(!state.prefs.is_sidebar_open());
    assert_eq!(state.prefs.language(), "en");
}

#[tokio::test]
async fn test_dashboard_walkthrough() {
    let (mut state, _temp) = create_test_state().await;

    state.cards.create_card(draft("Radio", "100", 2)).await;
    // Keep the two creation timestamps distinct for the "recents" sort
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let mut lamp = draft("Lamp", "50", 0);
    lamp.status = CardStatus::Inactive;
    state.cards.create_card(lamp).await;

    // Default filters (all / recents), one card per page
    state.set_items_per_page(1);
    let view = state.visible_cards();
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].id, 2);
    assert_eq!(view.total_pages, 2);

    // Selling the radio records one sale of 100
    state.sell_card(1).unwrap();
    assert_eq!(state.sales.ledger().len(), 1);
    assert_eq!(state.sales.total_revenue(), 100.0);
    assert_eq!(state.cards.get(1).unwrap().quantity, 1);
}

#[tokio::test]
async fn test_selling_until_out_of_stock() {
    let (mut state, _temp) = create_test_state().await;

    let card = state.cards.create_card(draft("Radio", "25", 2)).await;

    assert_eq!(state.sell_card(card.id).unwrap(), 1);
    assert_eq!(state.sell_card(card.id).unwrap(), 0);

    // Third sale is refused and changes nothing
    let result = state.sell_card(card.id);
    assert!(matches!(result, Err(AppError::OutOfStock(_))));
    assert_eq!(state.sales.ledger().len(), 2);
    assert_eq!(state.sales.total_revenue(), 50.0);
    assert_eq!(state.cards.get(card.id).unwrap().quantity, 0);
}

#[tokio::test]
async fn test_filtering_and_pagination_over_live_state() {
    let (mut state, _temp) = create_test_state().await;

    for i in 1..=12 {
        let mut d = draft(&format!("Item {:02}", i), "10", 1);
        if i % 3 == 0 {
            d.status = CardStatus::Inactive;
        }
        state.cards.create_card(d).await;
    }

    // 8 active cards, 5 per page
    state.set_items_per_page(5);
    state.set_current_page(2);
    state.set_filters(FilterSortSpec {
        status: StatusFilter::Only(CardStatus::Active),
        sort: SortKey::Name,
        ..Default::default()
    });

    // set_filters moved back to page 1
    assert_eq!(state.page(), PageRequest::new(5, 1));

    let view = state.visible_cards();
    assert_eq!(view.filtered_len, 8);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.visible.len(), 5);

    state.set_current_page(2);
    let second = state.visible_cards();
    assert_eq!(second.visible.len(), 3);

    // Search narrows further
    state.set_filters(FilterSortSpec {
        status: StatusFilter::Only(CardStatus::Active),
        sort: SortKey::Name,
        search: "item 01".to_string(),
    });
    let searched = state.visible_cards();
    assert_eq!(searched.filtered_len, 1);
    assert_eq!(searched.visible[0].title, "Item 01");
}

#[tokio::test]
async fn test_form_to_store_flow() {
    let (mut state, _temp) = create_test_state().await;

    // A blocked submission leaves the store untouched
    let incomplete = CardForm {
        title: "Ra".to_string(),
        ..Default::default()
    };
    assert!(incomplete.validate().is_err());
    assert!(state.cards.cards().is_empty());

    // A valid submission flows into the store
    let form = CardForm {
        title: "Radio".to_string(),
        price: "100".to_string(),
        quantity: "2".to_string(),
        description: "Una radio antigua en buen estado".to_string(),
        status: CardStatus::Active,
        image: Some("data:image/png;base64,AAAA".to_string()),
    };
    let card = state.cards.create_card(form.validate().unwrap()).await;

    assert_eq!(card.title, "Radio");
    assert_eq!(card.quantity, 2);
    assert_eq!(state.cards.history().len(), 1);
}
