//! Consent state for verdash.
//!
//! Tracks whether the user has opted in to persisted preferences and
//! gates every preference write made elsewhere. A declined decision also
//! scrubs previously written preference records so no stale
//! personalization lingers.

use crate::services::preference_store::{
    PreferenceStore, PreferenceStoreTrait, CONSENT_KEY, LONG_TTL_DAYS,
};
use crate::types::errors::PreferenceError;
use crate::types::preferences::ConsentState;

/// Trait defining the consent manager interface.
pub trait ConsentManagerTrait {
    fn state(&self) -> ConsentState;
    /// True only when the user has explicitly accepted.
    fn allows_persistence(&self) -> bool;
    fn is_dialog_open(&self) -> bool;
    fn accept_all(&mut self) -> Result<(), PreferenceError>;
    fn decline_all(&mut self) -> Result<(), PreferenceError>;
    fn open_dialog(&mut self);
    fn close_dialog(&mut self);
}

/// Consent manager backed by the preference store.
pub struct ConsentManager {
    store: PreferenceStore,
    state: ConsentState,
    dialog_open: bool,
}

impl ConsentManager {
    /// Adopts a previously persisted decision if one exists; otherwise the
    /// state is `Pending` and the prompt opens once per session start.
    ///
    /// A storage read failure degrades to `Pending` rather than blocking
    /// startup.
    pub fn new(store: PreferenceStore) -> Self {
        let persisted = store
            .get(CONSENT_KEY)
            .ok()
            .flatten()
            .and_then(|v| ConsentState::from_str(&v));

        match persisted {
            Some(state) => Self {
                store,
                state,
                dialog_open: false,
            },
            None => Self {
                store,
                state: ConsentState::Pending,
                dialog_open: true,
            },
        }
    }
}

impl ConsentManagerTrait for ConsentManager {
    fn state(&self) -> ConsentState {
        self.state
    }

    fn allows_persistence(&self) -> bool {
        self.state == ConsentState::Accepted
    }

    fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Accepts persistence: the in-memory state flips first so a storage
    /// failure cannot leave the session blocked on the prompt.
    fn accept_all(&mut self) -> Result<(), PreferenceError> {
        self.state = ConsentState::Accepted;
        self.dialog_open = false;
        self.store
            .set(CONSENT_KEY, ConsentState::Accepted.as_str(), LONG_TTL_DAYS)
    }

    /// Declines persistence and removes every previously written
    /// preference record (sort mode, page size, language).
    fn decline_all(&mut self) -> Result<(), PreferenceError> {
        self.state = ConsentState::Declined;
        self.dialog_open = false;
        self.store
            .set(CONSENT_KEY, ConsentState::Declined.as_str(), LONG_TTL_DAYS)?;
        self.store.remove_dashboard_preferences()
    }

    fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    fn close_dialog(&mut self) {
        self.dialog_open = false;
    }
}
