//! Career guide store: local personalization state over a key-value medium.
mod error;
mod file_store;
pub mod keys;
mod medium;
mod prefs;
mod user_state;

pub use error::StoreError;
pub use file_store::{ensure_storage_dir, FileStore};
pub use medium::{KeyValueStore, MemoryStore};
pub use prefs::{theme_color_by_name, Locale, NamedColor, Theme, ThemeColor, THEME_COLORS};
pub use user_state::{
    CompareToggle, UserStateStore, COMPARE_LIMIT, RECENTLY_VIEWED_LIMIT, SEARCH_HISTORY_LIMIT,
};
