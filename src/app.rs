//! Application state and initialization
//!
//! Wires every service together for a UI shell and carries the transient
//! interface state (filter selection, pagination) that resets on reload.

use crate::error::Result;
use crate::services::{CardsService, HistoryLog, Preferences, SalesService};
use crate::storage::LocalStore;
use crate::view::{derive_view, DerivedView, FilterSortSpec, PageRequest};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Central application state holding all services
#[derive(Debug, Clone)]
pub struct AppState {
    pub cards: CardsService,
    pub sales: SalesService,
    pub prefs: Preferences,
    filters: FilterSortSpec,
    page: PageRequest,
    app_data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application: create the data directory, open the
    /// local store, and restore persisted history and preferences. Cards
    /// and the sales ledger live in page memory and start empty.
    pub async fn load(app_data_dir: PathBuf) -> Result<Self> {
        tracing::info!("Initializing application state at {:?}", app_data_dir);

        std::fs::create_dir_all(&app_data_dir)?;

        let store = LocalStore::new(app_data_dir.join("storage"));
        store.initialize().await?;

        let history = HistoryLog::load(store.clone()).await;
        let prefs = Preferences::load(store).await;

        tracing::info!("Application state initialized successfully");

        Ok(Self {
            cards: CardsService::new(history),
            sales: SalesService::new(),
            prefs,
            filters: FilterSortSpec::default(),
            page: PageRequest::default(),
            app_data_dir,
        })
    }

    pub fn app_data_dir(&self) -> &Path {
        &self.app_data_dir
    }

    pub fn filters(&self) -> &FilterSortSpec {
        &self.filters
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// Replace the filter selection. Changing filters always moves back
    /// to the first page, discharging the pipeline's caller obligation.
    pub fn set_filters(&mut self, filters: FilterSortSpec) {
        self.filters = filters;
        self.page.current_page = 1;
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.page.items_per_page = items_per_page.max(1);
    }

    pub fn set_current_page(&mut self, current_page: usize) {
        self.page.current_page = current_page.max(1);
    }

    /// Run the derived-view pipeline over the current state
    pub fn visible_cards(&self) -> DerivedView {
        derive_view(self.cards.cards(), &self.filters, self.page)
    }

    /// Sell one unit of a card now: ledger append plus quantity decrement
    /// as one guarded operation
    pub fn sell_card(&mut self, id: u32) -> Result<u32> {
        self.cards.sell_card(id, &mut self.sales, Utc::now())
    }
}

/// Install the logging subscriber. Call once at shell startup.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardstock=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
