use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use career_logging::{career_debug, career_error, career_warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::prefs::{Locale, Theme, ThemeColor};
use crate::{keys, KeyValueStore};

pub const RECENTLY_VIEWED_LIMIT: usize = 10;
pub const SEARCH_HISTORY_LIMIT: usize = 10;
pub const COMPARE_LIMIT: usize = 3;

/// Outcome of [`UserStateStore::toggle_compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    Added,
    Removed,
    /// The list already holds [`COMPARE_LIMIT`] other jobs; nothing changed.
    Full,
}

/// Personalization state over a key-value medium.
///
/// Every operation reads the whole collection, changes it and writes the whole
/// value back. Reads never fail: a missing, unreadable or undecodable value is
/// the collection's default. Failed writes are logged and dropped.
#[derive(Debug)]
pub struct UserStateStore<S> {
    medium: S,
}

impl<S: KeyValueStore> UserStateStore<S> {
    pub fn new(medium: S) -> Self {
        Self { medium }
    }

    pub fn medium(&self) -> &S {
        &self.medium
    }

    // Favorites

    pub fn favorites(&self) -> Vec<String> {
        dedup_by(self.read::<Vec<String>>(keys::FAVORITES), |id| id.clone())
    }

    pub fn add_favorite(&mut self, job_id: &str) {
        let mut favorites = self.favorites();
        if favorites.iter().any(|id| id == job_id) {
            return;
        }
        favorites.push(job_id.to_owned());
        self.write(keys::FAVORITES, &favorites);
    }

    pub fn remove_favorite(&mut self, job_id: &str) {
        let mut favorites = self.favorites();
        favorites.retain(|id| id != job_id);
        self.write(keys::FAVORITES, &favorites);
    }

    pub fn is_favorite(&self, job_id: &str) -> bool {
        self.favorites().iter().any(|id| id == job_id)
    }

    /// Flips membership and returns whether the job is now a favorite.
    pub fn toggle_favorite(&mut self, job_id: &str) -> bool {
        if self.is_favorite(job_id) {
            self.remove_favorite(job_id);
            false
        } else {
            self.add_favorite(job_id);
            true
        }
    }

    // Recently viewed

    pub fn recently_viewed(&self) -> Vec<String> {
        let mut recent = dedup_by(self.read::<Vec<String>>(keys::RECENTLY_VIEWED), |id| {
            id.clone()
        });
        recent.truncate(RECENTLY_VIEWED_LIMIT);
        recent
    }

    /// Moves `job_id` to the front, dropping the oldest entry past the limit.
    pub fn add_recently_viewed(&mut self, job_id: &str) {
        let mut recent = self.recently_viewed();
        recent.retain(|id| id != job_id);
        recent.insert(0, job_id.to_owned());
        recent.truncate(RECENTLY_VIEWED_LIMIT);
        self.write(keys::RECENTLY_VIEWED, &recent);
    }

    // Search history

    pub fn search_history(&self) -> Vec<String> {
        let mut history = self.read::<Vec<String>>(keys::SEARCH_HISTORY);
        history.retain(|query| !query.trim().is_empty());
        let mut history = dedup_by(history, |query| query.to_lowercase());
        history.truncate(SEARCH_HISTORY_LIMIT);
        history
    }

    /// Prepends `query`, replacing any entry equal to it ignoring case.
    /// Blank queries are ignored.
    pub fn add_search_history(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        let folded = query.to_lowercase();
        let mut history = self.search_history();
        history.retain(|entry| entry.to_lowercase() != folded);
        history.insert(0, query.to_owned());
        history.truncate(SEARCH_HISTORY_LIMIT);
        self.write(keys::SEARCH_HISTORY, &history);
    }

    pub fn clear_search_history(&mut self) {
        self.clear(keys::SEARCH_HISTORY);
    }

    // Compare list

    pub fn compare_list(&self) -> Vec<String> {
        let mut list = dedup_by(self.read::<Vec<String>>(keys::COMPARE_LIST), |id| id.clone());
        list.truncate(COMPARE_LIMIT);
        list
    }

    /// Returns `false` only when the list is full and `job_id` is not in it.
    pub fn add_to_compare(&mut self, job_id: &str) -> bool {
        let mut list = self.compare_list();
        if list.iter().any(|id| id == job_id) {
            return true;
        }
        if list.len() >= COMPARE_LIMIT {
            career_debug!("Compare list full, rejecting {}", job_id);
            return false;
        }
        list.push(job_id.to_owned());
        self.write(keys::COMPARE_LIST, &list);
        true
    }

    pub fn remove_from_compare(&mut self, job_id: &str) {
        let mut list = self.compare_list();
        list.retain(|id| id != job_id);
        self.write(keys::COMPARE_LIST, &list);
    }

    pub fn clear_compare_list(&mut self) {
        self.clear(keys::COMPARE_LIST);
    }

    pub fn is_in_compare_list(&self, job_id: &str) -> bool {
        self.compare_list().iter().any(|id| id == job_id)
    }

    pub fn toggle_compare(&mut self, job_id: &str) -> CompareToggle {
        if self.is_in_compare_list(job_id) {
            self.remove_from_compare(job_id);
            CompareToggle::Removed
        } else if self.add_to_compare(job_id) {
            CompareToggle::Added
        } else {
            CompareToggle::Full
        }
    }

    // View counts

    pub fn increment_view_count(&mut self, job_id: &str) {
        let mut counts = self.all_view_counts();
        let count = counts.entry(job_id.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
        self.write(keys::VIEW_COUNT, &counts);
    }

    pub fn view_count(&self, job_id: &str) -> u64 {
        self.all_view_counts().get(job_id).copied().unwrap_or(0)
    }

    pub fn all_view_counts(&self) -> BTreeMap<String, u64> {
        self.read(keys::VIEW_COUNT)
    }

    /// Bookkeeping for opening a job's detail page.
    pub fn record_job_view(&mut self, job_id: &str) {
        self.add_recently_viewed(job_id);
        self.increment_view_count(job_id);
    }

    // Preferences

    pub fn theme(&self) -> Theme {
        self.read(keys::THEME)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.write(keys::THEME, &theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme().toggled();
        self.set_theme(theme);
        theme
    }

    pub fn theme_color(&self) -> ThemeColor {
        self.read(keys::THEME_COLOR)
    }

    pub fn set_theme_color(&mut self, color: ThemeColor) {
        self.write(keys::THEME_COLOR, &color);
    }

    pub fn locale(&self) -> Locale {
        self.read(keys::LANGUAGE)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.write(keys::LANGUAGE, &locale);
    }

    // Medium access

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.medium.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                career_warn!("Failed to read {}: {}", key, err);
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                career_warn!("Discarding malformed value under {}: {}", key, err);
                T::default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(err) => {
                career_error!("Failed to encode value for {}: {}", key, err);
                return;
            }
        };
        if let Err(err) = self.medium.set(key, &encoded) {
            career_error!("Failed to write {}: {}", key, err);
        }
    }

    fn clear(&mut self, key: &str) {
        if let Err(err) = self.medium.remove(key) {
            career_error!("Failed to remove {}: {}", key, err);
        }
    }
}

/// Keeps the first occurrence of each key, preserving order.
fn dedup_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
