//! User-adjustable display parameters for verdash.
//!
//! Holds the sort mode, view window and language, and mediates between
//! the consent manager and the preference store. Every persisted
//! mutation re-reads the consent state at call time: a declined or
//! pending consent silently skips the write, never queues it.

use crate::managers::consent_manager::{ConsentManager, ConsentManagerTrait};
use crate::services::preference_store::{
    PreferenceStore, PreferenceStoreTrait, DASHBOARD_TTL_DAYS, LANGUAGE_KEY, LONG_TTL_DAYS,
    SORT_TYPE_KEY, VISIBLE_ITEMS_KEY,
};
use crate::services::transform;
use crate::types::errors::PreferenceError;
use crate::types::preferences::{Language, PageSize, SortMode, ViewWindow};

/// Trait defining the view-state manager interface.
pub trait ViewStateManagerTrait {
    fn sort_mode(&self) -> SortMode;
    fn window(&self) -> ViewWindow;
    fn language(&self) -> Language;
    fn set_sort_mode(
        &mut self,
        mode: SortMode,
        consent: &ConsentManager,
    ) -> Result<(), PreferenceError>;
    fn set_page_size(
        &mut self,
        size: PageSize,
        consent: &ConsentManager,
    ) -> Result<(), PreferenceError>;
    /// Ephemeral scroll position: clamped, never persisted.
    fn set_offset(&mut self, offset: usize, total_items: usize);
    fn set_language(
        &mut self,
        language: Language,
        consent: &ConsentManager,
    ) -> Result<(), PreferenceError>;
}

/// View-state manager backed by the preference store.
pub struct ViewStateManager {
    store: PreferenceStore,
    sort_mode: SortMode,
    window: ViewWindow,
    language: Language,
    /// Cleared after the first `set_language` call. While set, a call
    /// that re-applies the freshly loaded value skips the persistence
    /// write so startup does not rewrite the record it just read.
    language_sync_pending: bool,
}

impl ViewStateManager {
    /// Loads persisted display preferences when consent is already
    /// accepted; otherwise starts from defaults. Unreadable or
    /// unparsable records degrade to defaults; preference storage must
    /// never block rendering.
    pub fn new(store: PreferenceStore, consent: &ConsentManager) -> Self {
        let mut sort_mode = SortMode::default();
        let mut page_size = PageSize::default();
        let mut language = Language::default();

        if consent.allows_persistence() {
            if let Ok(Some(value)) = store.get(SORT_TYPE_KEY) {
                if let Some(parsed) = SortMode::from_str(&value) {
                    sort_mode = parsed;
                }
            }
            if let Ok(Some(value)) = store.get(VISIBLE_ITEMS_KEY) {
                if let Some(parsed) = value.parse().ok().and_then(PageSize::from_value) {
                    page_size = parsed;
                }
            }
            if let Ok(Some(value)) = store.get(LANGUAGE_KEY) {
                if let Some(parsed) = Language::from_code(&value) {
                    language = parsed;
                }
            }
        }

        Self {
            store,
            sort_mode,
            window: ViewWindow {
                page_size,
                offset: 0,
            },
            language,
            language_sync_pending: true,
        }
    }
}

impl ViewStateManagerTrait for ViewStateManager {
    fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    fn window(&self) -> ViewWindow {
        self.window
    }

    fn language(&self) -> Language {
        self.language
    }

    /// Changes the sort mode and rewinds the window to the start.
    fn set_sort_mode(
        &mut self,
        mode: SortMode,
        consent: &ConsentManager,
    ) -> Result<(), PreferenceError> {
        self.sort_mode = mode;
        self.window.offset = 0;
        if consent.allows_persistence() {
            self.store
                .set(SORT_TYPE_KEY, mode.as_str(), DASHBOARD_TTL_DAYS)?;
        }
        Ok(())
    }

    /// Changes the page size and rewinds the window to the start.
    fn set_page_size(
        &mut self,
        size: PageSize,
        consent: &ConsentManager,
    ) -> Result<(), PreferenceError> {
        self.window.page_size = size;
        self.window.offset = 0;
        if consent.allows_persistence() {
            self.store.set(
                VISIBLE_ITEMS_KEY,
                &size.value().to_string(),
                DASHBOARD_TTL_DAYS,
            )?;
        }
        Ok(())
    }

    fn set_offset(&mut self, offset: usize, total_items: usize) {
        self.window.offset =
            transform::clamp_offset(offset, total_items, self.window.page_size.value());
    }

    fn set_language(
        &mut self,
        language: Language,
        consent: &ConsentManager,
    ) -> Result<(), PreferenceError> {
        let sync_pending = self.language_sync_pending;
        self.language_sync_pending = false;

        // Initial-render guard: the first call that merely re-applies the
        // loaded value must not rewrite the record it came from.
        if sync_pending && language == self.language {
            return Ok(());
        }

        self.language = language;
        if consent.allows_persistence() {
            self.store
                .set(LANGUAGE_KEY, language.code(), LONG_TTL_DAYS)?;
        }
        Ok(())
    }
}
