//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and validation boundaries used throughout the application.

// ===== Card Form Validation Limits =====

/// Minimum length for a card title
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum length for a card description
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Maximum size for an uploaded card image (5MB source file)
pub const MAX_IMAGE_SIZE_BYTES: usize = 5 * 1024 * 1024;

// ===== Pagination =====

/// Default number of cards shown per page
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page sizes offered by the per-page selector
pub const ITEMS_PER_PAGE_OPTIONS: &[usize] = &[10, 25, 50, 100];

// ===== Sales Analytics =====

/// Abbreviated calendar-month labels for the revenue charts, in Spanish.
/// Fixed calendar-year labels, not rolling.
pub const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

// ===== Persisted State Keys =====

/// Whether the sidebar is expanded, stored as the string "true" or "false"
pub const SIDEBAR_STORAGE_KEY: &str = "isSidebarOpen";

/// Whether dark mode is enabled, stored as the string "true" or "false"
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Selected interface language, stored as its language code
pub const LANGUAGE_STORAGE_KEY: &str = "app-language";

/// Change-history log, stored as a JSON array of events
pub const HISTORY_STORAGE_KEY: &str = "card-history-storage";

// ===== Language Settings =====

/// Language codes the settings page offers
pub const VALID_LANGUAGES: &[&str] = &["es", "en"];

/// Language used when nothing valid is stored
pub const DEFAULT_LANGUAGE: &str = "es";
