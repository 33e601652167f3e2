use crate::types::client_data::ClientData;

/// Aggregate statistics computed over the full (unsorted) data set.
///
/// Shares are percentages of the total client count; they are 0.0 when
/// the total is zero so rendering never divides by zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_clients: u64,
    pub version_count: usize,
    pub top_version: String,
    pub top_count: u64,
    pub top_share: f64,
    pub latest_version: String,
    pub latest_count: u64,
    pub latest_share: f64,
}

/// Request-lifecycle state of the dashboard.
///
/// A single tagged variant instead of `is_loading`/`error` flags, so
/// contradictory combinations cannot be represented. `Refreshing` keeps
/// the previous data visible while a manual refresh is outstanding.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(ClientData),
    Empty,
    Refreshing(ClientData),
    Failed(String),
}

impl DashboardState {
    /// The data currently visible, if any.
    pub fn data(&self) -> Option<&ClientData> {
        match self {
            DashboardState::Ready(data) | DashboardState::Refreshing(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, DashboardState::Loading | DashboardState::Refreshing(_))
    }
}
