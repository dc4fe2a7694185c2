//! Derived view pipeline
//!
//! Pure function chain that turns the full card collection plus the current
//! filter/sort selection and pagination settings into the exact slice of
//! cards to display, together with the total page count.
//!
//! The pipeline is total: an empty store yields an empty slice and zero
//! pages. It never resets pagination itself; callers must move back to
//! page 1 whenever the filter spec changes (see `AppState::set_filters`).

use crate::config::DEFAULT_ITEMS_PER_PAGE;
use crate::store::{CardStatus, ProductCard};
use serde::{Deserialize, Serialize};

/// Status selection applied to the card list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Keep every card
    #[default]
    All,
    /// Keep only cards with exactly this status
    Only(CardStatus),
}

impl StatusFilter {
    /// Display label shown in the status select
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Parse the select's string value; unknown values keep everything
    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Only(CardStatus::Active),
            "inactive" => StatusFilter::Only(CardStatus::Inactive),
            _ => StatusFilter::All,
        }
    }

    pub fn matches(self, status: CardStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Newest first
    #[default]
    Recents,
    /// Oldest first
    Oldest,
    /// Ascending by title
    Name,
    /// Leave the input order untouched
    Unsorted,
}

impl SortKey {
    /// Display label shown in the sort select
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recents => "Más recientes",
            SortKey::Oldest => "Más antiguos",
            SortKey::Name => "Nombre",
            SortKey::Unsorted => "Sin ordenar",
        }
    }

    /// Parse the select's string value; unrecognized values sort nothing
    pub fn from_value(value: &str) -> Self {
        match value {
            "recents" => SortKey::Recents,
            "oldest" => SortKey::Oldest,
            "name" => SortKey::Name,
            _ => SortKey::Unsorted,
        }
    }
}

/// The current status/sort/search selection. Transient: held in memory only
/// and reset to defaults on reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSortSpec {
    pub status: StatusFilter,
    pub sort: SortKey,
    pub search: String,
}

/// Pagination settings. `new()` clamps both fields to at least 1, and the
/// pipeline clamps again, so a hand-built request with zeros cannot panic
/// the page math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub items_per_page: usize,
    pub current_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            current_page: 1,
        }
    }
}

impl PageRequest {
    pub fn new(items_per_page: usize, current_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            current_page: current_page.max(1),
        }
    }
}

/// Result of running the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// The slice of cards the current page shows
    pub visible: Vec<ProductCard>,
    /// ceil(filtered / items_per_page); 0 when nothing matched
    pub total_pages: usize,
    /// How many cards survived filtering, before pagination
    pub filtered_len: usize,
}

/// Run the full pipeline: status filter, text search, stable sort, paginate.
pub fn derive_view(cards: &[ProductCard], spec: &FilterSortSpec, page: PageRequest) -> DerivedView {
    let mut filtered: Vec<ProductCard> = cards
        .iter()
        .filter(|card| spec.status.matches(card.status))
        .filter(|card| matches_search(card, &spec.search))
        .cloned()
        .collect();

    sort_cards(&mut filtered, spec.sort);

    let items_per_page = page.items_per_page.max(1);
    let current_page = page.current_page.max(1);

    let filtered_len = filtered.len();
    let total_pages = filtered_len.div_ceil(items_per_page);

    let start = (current_page - 1) * items_per_page;
    let visible: Vec<ProductCard> = filtered
        .into_iter()
        .skip(start)
        .take(items_per_page)
        .collect();

    DerivedView {
        visible,
        total_pages,
        filtered_len,
    }
}

/// Case-insensitive substring match over title or description. An empty
/// search keeps everything.
fn matches_search(card: &ProductCard, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    card.title.to_lowercase().contains(&needle)
        || card.description.to_lowercase().contains(&needle)
}

/// Stable sort, so cards with equal keys keep their insertion order
fn sort_cards(cards: &mut [ProductCard], key: SortKey) {
    match key {
        SortKey::Recents => cards.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => cards.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Name => cards.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Unsorted => {}
    }
}
