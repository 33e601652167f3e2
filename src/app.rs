//! App Core for verdash.
//!
//! Central struct wiring the database, preference store, consent and
//! view-state managers, localization engine and dashboard together, with
//! an explicit startup sequence. Dependencies are constructed here and
//! passed down, no ambient singletons.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::consent_manager::{ConsentManager, ConsentManagerTrait};
use crate::managers::dashboard_manager::DashboardManager;
use crate::managers::view_state_manager::{ViewStateManager, ViewStateManagerTrait};
use crate::services::api_client::ApiClient;
use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::services::preference_store::{PreferenceStore, PreferenceStoreTrait, LANGUAGE_KEY};
use crate::types::preferences::Language;

/// Central application struct holding all managers and services.
pub struct App {
    pub db: Arc<Database>,
    pub store: PreferenceStore,
    pub consent_manager: ConsentManager,
    pub view_state: ViewStateManager,
    pub localization_engine: LocalizationEngine,
    pub dashboard: DashboardManager,
    pub api_client: ApiClient,
}

impl App {
    /// Creates a new App, initializing all managers and services.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let store = PreferenceStore::new(db.clone());

        let consent_manager = ConsentManager::new(store.clone());
        let view_state = ViewStateManager::new(store.clone(), &consent_manager);

        let mut localization_engine = LocalizationEngine::with_default_path();
        // Missing locale files degrade to key-echo rendering
        let _ = localization_engine.initialize();
        // Needs no consent, so the consent prompt itself already renders
        // in the system language; startup() may override with a
        // persisted preference afterwards.
        let detected = localization_engine.detect_system_locale();
        let _ = localization_engine.set_locale(&detected);

        Ok(Self {
            db,
            store,
            consent_manager,
            view_state,
            localization_engine,
            dashboard: DashboardManager::new(),
            api_client: ApiClient::new(),
        })
    }

    /// Startup sequence: resolve the UI language and sync the engine.
    ///
    /// Priority: persisted preference (only when consent is accepted) →
    /// system locale when it is a supported code → the hard default.
    pub fn startup(&mut self) {
        let persisted = if self.consent_manager.allows_persistence() {
            self.store
                .get(LANGUAGE_KEY)
                .ok()
                .flatten()
                .and_then(|code| Language::from_code(&code))
        } else {
            None
        };

        let resolved = persisted.unwrap_or_else(|| {
            let detected = self.localization_engine.detect_system_locale();
            Language::from_code(&detected).unwrap_or_default()
        });

        let _ = self
            .view_state
            .set_language(resolved, &self.consent_manager);
        let _ = self.localization_engine.set_locale(resolved.code());
    }
}
