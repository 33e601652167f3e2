//! Console rendering of the dashboard.
//!
//! Pure string-building functions: summary cards, an ASCII bar chart of
//! the visible slice, and the raw-data table, all localized through the
//! engine. Keeping these free of I/O makes the whole rendering path
//! unit-testable.

use std::collections::HashMap;

use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::services::transform;
use crate::types::client_data::ClientEntry;
use crate::types::dashboard::{DashboardState, Summary};
use crate::types::preferences::{SortMode, ViewWindow};

/// Maximum bar length in characters.
const CHART_WIDTH: usize = 40;

/// The four summary cards: totals, most popular and latest version.
pub fn render_summary(summary: &Summary, loc: &LocalizationEngine) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {}\n",
        loc.t("summary.totalClients", None),
        summary.total_clients
    ));
    out.push_str(&format!(
        "{}: {}\n",
        loc.t("summary.versionCount", None),
        summary.version_count
    ));
    out.push_str(&format!(
        "{}: {} - {} {} ({:.1}%)\n",
        loc.t("summary.popularVersion", None),
        summary.top_version,
        summary.top_count,
        loc.t("summary.clients", None),
        summary.top_share
    ));
    out.push_str(&format!(
        "{}: {} - {} {} ({:.1}%)\n",
        loc.t("summary.latestVersion", None),
        summary.latest_version,
        summary.latest_count,
        loc.t("summary.clients", None),
        summary.latest_share
    ));
    out
}

/// Bars for the visible slice, widths scaled to the largest visible count.
pub fn render_bar_chart(visible: &[ClientEntry], total: usize, loc: &LocalizationEngine) -> String {
    let mut out = String::new();

    let mut params = HashMap::new();
    params.insert("count".to_string(), visible.len().to_string());
    params.insert("total".to_string(), total.to_string());
    out.push_str(&loc.t("chart.showingVersions", Some(&params)));
    out.push('\n');

    let max = visible.iter().map(|e| e.count).max().unwrap_or(0);
    for entry in visible {
        // Widened so counts near u64::MAX cannot overflow the product
        let width = if max == 0 {
            0
        } else {
            (entry.count as u128 * CHART_WIDTH as u128).div_ceil(max as u128) as usize
        };
        out.push_str(&format!(
            "{:<14} {} {}\n",
            entry.version,
            "█".repeat(width),
            entry.count
        ));
    }
    out
}

/// The raw-data table over the full ordered sequence.
pub fn render_table(entries: &[ClientEntry], loc: &LocalizationEngine) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<14} | {}\n",
        loc.t("dashboard.version", None),
        loc.t("dashboard.clientCount", None)
    ));
    out.push_str(&format!("{:-<14}-+{:-<16}\n", "", ""));
    for entry in entries {
        out.push_str(&format!("{:<14} | {}\n", entry.version, entry.count));
    }
    out
}

/// Composes the full dashboard view for the current state.
///
/// The chart shows the visible window of the sorted sequence; the table
/// always shows the whole sorted sequence.
pub fn render_dashboard(
    state: &DashboardState,
    sort_mode: SortMode,
    window: ViewWindow,
    loc: &LocalizationEngine,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", loc.t("dashboard.title", None)));

    match state {
        DashboardState::Loading => {
            out.push_str(&loc.t("dashboard.loading", None));
            out.push('\n');
        }
        DashboardState::Empty => {
            out.push_str(&loc.t("dashboard.noData", None));
            out.push('\n');
        }
        DashboardState::Failed(message) => {
            out.push_str(&format!(
                "{}: {}\n{}\n",
                loc.t("dashboard.error", None),
                message,
                loc.t("dashboard.retry", None)
            ));
        }
        DashboardState::Ready(data) | DashboardState::Refreshing(data) => {
            if matches!(state, DashboardState::Refreshing(_)) {
                out.push_str(&loc.t("dashboard.refreshing", None));
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&render_summary(&transform::summarize(data), loc));

            let sorted = transform::sorted_entries(data, sort_mode);
            let visible = transform::visible_slice(&sorted, window);
            out.push('\n');
            out.push_str(&render_bar_chart(visible, sorted.len(), loc));

            out.push('\n');
            out.push_str(&format!("{}\n", loc.t("dashboard.rawData", None)));
            out.push_str(&render_table(&sorted, loc));
        }
    }
    out
}
