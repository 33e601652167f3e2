//! Unit tests for the console rendering against the shipped locale
//! tables: state-specific layouts, chart paging, and the full-table
//! invariant.

use verdash::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use verdash::types::client_data::ClientData;
use verdash::types::dashboard::DashboardState;
use verdash::types::preferences::{PageSize, SortMode, ViewWindow};
use verdash::ui::console::render_dashboard;

fn engine(locale: &str) -> LocalizationEngine {
    let mut engine = LocalizationEngine::with_default_path();
    engine.initialize().expect("load shipped locale files");
    engine.set_locale(locale).expect("supported locale");
    engine
}

fn many_versions(n: usize) -> ClientData {
    let mut data = ClientData::new();
    for i in 0..n {
        data.insert(&format!("1.{:02}.0", i), (i as u64 + 1) * 10);
    }
    data
}

#[test]
fn test_loading_state_renders_localized_message() {
    let out = render_dashboard(
        &DashboardState::Loading,
        SortMode::ByVersion,
        ViewWindow::default(),
        &engine("en"),
    );
    assert!(out.contains("Loading"));
    assert!(!out.contains('█'));
}

#[test]
fn test_empty_state_in_each_language() {
    for (locale, message) in [("en", "No Data"), ("zh", "没有数据"), ("ja", "データなし")] {
        let out = render_dashboard(
            &DashboardState::Empty,
            SortMode::ByVersion,
            ViewWindow::default(),
            &engine(locale),
        );
        assert!(out.contains(message), "{locale} should render {message}");
    }
}

#[test]
fn test_failed_state_shows_message_and_retry() {
    let out = render_dashboard(
        &DashboardState::Failed("Transport error: timeout".to_string()),
        SortMode::ByVersion,
        ViewWindow::default(),
        &engine("en"),
    );
    assert!(out.contains("Transport error: timeout"));
    assert!(out.contains("Retry"));
}

#[test]
fn test_chart_pages_but_table_shows_everything() {
    let data = many_versions(25);
    let out = render_dashboard(
        &DashboardState::Ready(data),
        SortMode::ByVersion,
        ViewWindow {
            page_size: PageSize::Ten,
            offset: 0,
        },
        &engine("en"),
    );

    // The caption reflects the visible window, not the whole data set
    assert!(out.contains("Showing 10 of 25 versions"));
    // The table still lists the last version even though the chart does not bar it
    assert!(out.contains("1.24.0"));
}

#[test]
fn test_overrun_offset_clamps_to_a_full_last_page() {
    let data = many_versions(25);
    let out = render_dashboard(
        &DashboardState::Ready(data),
        SortMode::ByVersion,
        ViewWindow {
            page_size: PageSize::Ten,
            offset: 20,
        },
        &engine("en"),
    );
    // Offset 20 clamps to 15, so the chart still shows a full page
    assert!(out.contains("Showing 10 of 25 versions"));
    // The charted page covers 1.15.0 through 1.24.0
    let after_caption = out.split("Showing 10 of 25 versions").nth(1).unwrap();
    let chart_section = after_caption.split("Raw Data").next().unwrap();
    assert!(chart_section.contains("1.15.0"));
    assert!(!chart_section.contains("1.14.0"));
}

#[test]
fn test_refreshing_keeps_summary_and_table_visible() {
    let data = many_versions(3);
    let out = render_dashboard(
        &DashboardState::Refreshing(data),
        SortMode::ByVersion,
        ViewWindow::default(),
        &engine("en"),
    );
    assert!(out.contains("Refreshing"));
    assert!(out.contains("Total Clients"));
    assert!(out.contains('█'));
}

#[test]
fn test_summary_percentages_use_one_decimal() {
    let data = ClientData::from_pairs(&[("1.0.0", 1), ("1.1.0", 2)]);
    let out = render_dashboard(
        &DashboardState::Ready(data),
        SortMode::ByVersion,
        ViewWindow::default(),
        &engine("en"),
    );
    assert!(out.contains("66.7%"));
}

#[test]
fn test_count_sort_orders_the_chart() {
    let data = ClientData::from_pairs(&[("1.0.0", 5), ("1.1.0", 50), ("1.2.0", 20)]);
    let out = render_dashboard(
        &DashboardState::Ready(data),
        SortMode::CountDescending,
        ViewWindow::default(),
        &engine("en"),
    );

    let pos_top = out.find("1.1.0").unwrap();
    let pos_mid = out.find("1.2.0").unwrap();
    let pos_low = out.find("1.0.0").unwrap();
    assert!(pos_top < pos_mid && pos_mid < pos_low);
}
