//! Dashboard orchestration for verdash.
//!
//! Drives the fetch-and-render cycle through a single tagged state:
//! `Loading → {Ready, Empty, Failed}`, with `Refreshing` keeping the
//! previous data on screen during a manual refresh. A refresh while one
//! is already outstanding is ignored: the triggering control is
//! disabled, not queued, and there is no cancellation.

use crate::services::api_client::ApiClient;
use crate::types::client_data::ClientData;
use crate::types::dashboard::DashboardState;
use crate::types::errors::FetchError;

/// Notice key emitted after a successful refresh, resolved through the
/// localization engine by the rendering layer.
pub const DATA_REFRESHED_NOTICE: &str = "dashboard.dataRefreshed";

/// Trait defining the dashboard manager interface.
pub trait DashboardManagerTrait {
    fn state(&self) -> &DashboardState;
    /// Whether the refresh control is currently enabled.
    fn can_refresh(&self) -> bool;
    /// Takes the pending user notice, if any (one-shot).
    fn take_notice(&mut self) -> Option<String>;
}

/// Dashboard state machine.
pub struct DashboardManager {
    state: DashboardState,
    notice: Option<String>,
}

impl DashboardManager {
    /// A new dashboard starts in `Loading`; the initial fetch is assumed
    /// to be issued immediately after construction.
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
            notice: None,
        }
    }

    /// Issues the initial fetch (or a retry from `Empty`/`Failed`).
    pub async fn load(&mut self, client: &ApiClient) {
        if !self.begin_load() {
            return;
        }
        let result = client.fetch().await;
        self.apply_fetch_result(result);
    }

    /// Issues a manual refresh, keeping current data visible meanwhile.
    pub async fn refresh(&mut self, client: &ApiClient) {
        if !self.begin_refresh() {
            return;
        }
        let result = client.fetch().await;
        self.apply_fetch_result(result);
    }

    /// Transitions into `Loading` unless a fetch is already outstanding.
    /// Returns whether the caller should proceed with the fetch.
    pub fn begin_load(&mut self) -> bool {
        if self.state.is_fetching() && !matches!(self.state, DashboardState::Loading) {
            return false;
        }
        self.state = DashboardState::Loading;
        true
    }

    /// Transitions into `Refreshing` (or `Loading` when there is no data
    /// to keep visible). Returns false while a fetch is outstanding so
    /// concurrent refresh triggers are dropped rather than queued.
    pub fn begin_refresh(&mut self) -> bool {
        if self.state.is_fetching() {
            return false;
        }
        self.state = match std::mem::replace(&mut self.state, DashboardState::Loading) {
            DashboardState::Ready(data) => DashboardState::Refreshing(data),
            _ => DashboardState::Loading,
        };
        true
    }

    /// Folds a fetch outcome into the state machine.
    ///
    /// Success with data → `Ready` plus a refreshed notice; success with
    /// an empty map → `Empty` (not an error); failure → `Failed` with the
    /// error message, retry left to the user.
    pub fn apply_fetch_result(&mut self, result: Result<ClientData, FetchError>) {
        self.state = match result {
            Ok(data) if data.is_empty() => DashboardState::Empty,
            Ok(data) => {
                self.notice = Some(DATA_REFRESHED_NOTICE.to_string());
                DashboardState::Ready(data)
            }
            Err(e) => DashboardState::Failed(e.to_string()),
        };
    }
}

impl Default for DashboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardManagerTrait for DashboardManager {
    fn state(&self) -> &DashboardState {
        &self.state
    }

    fn can_refresh(&self) -> bool {
        !self.state.is_fetching()
    }

    fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
