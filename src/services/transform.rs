//! Data shaping for the dashboard.
//!
//! Pure functions turning the raw version→count association into the
//! sorted sequence, the visible page slice, and the summary aggregates.
//! No I/O and no hidden state, so everything here is unit-testable
//! without a rendering environment.

use std::cmp::Ordering;

use crate::types::client_data::{ClientData, ClientEntry};
use crate::types::dashboard::Summary;
use crate::types::preferences::{SortMode, ViewWindow};

/// Produces the display ordering for the given sort mode.
///
/// Version sort is plain lexicographic, not version-aware,
/// matching the display behavior users see. Count sorts are stable, so
/// ties keep the original map order.
pub fn sorted_entries(data: &ClientData, mode: SortMode) -> Vec<ClientEntry> {
    let mut entries: Vec<ClientEntry> = data.entries().to_vec();
    match mode {
        SortMode::ByVersion => entries.sort_by(|a, b| a.version.cmp(&b.version)),
        SortMode::CountAscending => entries.sort_by(|a, b| a.count.cmp(&b.count)),
        SortMode::CountDescending => entries.sort_by(|a, b| b.count.cmp(&a.count)),
    }
    entries
}

/// Clamps a requested offset into `[0, max(0, total - page_size)]`.
pub fn clamp_offset(offset: usize, total: usize, page_size: usize) -> usize {
    offset.min(total.saturating_sub(page_size))
}

/// The visible page of an ordered sequence.
///
/// The window offset is clamped before slicing, so the result length is
/// `min(page_size, total - clamped_offset)` and never out of bounds.
pub fn visible_slice(entries: &[ClientEntry], window: ViewWindow) -> &[ClientEntry] {
    let page_size = window.page_size.value();
    let offset = clamp_offset(window.offset, entries.len(), page_size);
    let end = (offset + page_size).min(entries.len());
    &entries[offset..end]
}

/// Compares two version labels by dot-separated numeric components.
///
/// Missing components count as zero, so `1.2` == `1.2.0`. Components
/// that do not parse as numbers also count as zero. Used for
/// latest-version detection only; the display sort stays lexicographic,
/// and the latest-version scan breaks `Equal` ties by insertion order.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        v.trim_start_matches('v')
            .split('.')
            .map(|s| s.parse().unwrap_or(0))
            .collect()
    };
    let ca = parse(a);
    let cb = parse(b);
    let len = ca.len().max(cb.len());
    for i in 0..len {
        let x = ca.get(i).copied().unwrap_or(0);
        let y = cb.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Computes the summary aggregates from the full (unsorted) data.
///
/// Empty data yields zero counts, empty labels, and 0.0 shares; the
/// percentage division is guarded so an all-zero data set cannot divide
/// by zero.
pub fn summarize(data: &ClientData) -> Summary {
    if data.is_empty() {
        return Summary::default();
    }

    let total_clients: u64 = data.entries().iter().map(|e| e.count).sum();

    // Most popular version: first-seen wins on count ties.
    let mut top: Option<&ClientEntry> = None;
    for entry in data.entries() {
        if top.map_or(true, |t| entry.count > t.count) {
            top = Some(entry);
        }
    }
    // data is non-empty here, so the accumulator is always filled
    let top = top.unwrap_or(&data.entries()[0]);

    // Latest version per the numeric comparator; insertion order already
    // breaks exact ties because later entries only win with Greater.
    let mut latest = &data.entries()[0];
    for entry in &data.entries()[1..] {
        if compare_versions(&entry.version, &latest.version) == Ordering::Greater {
            latest = entry;
        }
    }

    let share = |count: u64| -> f64 {
        if total_clients == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total_clients as f64
        }
    };

    Summary {
        total_clients,
        version_count: data.len(),
        top_version: top.version.clone(),
        top_count: top.count,
        top_share: share(top.count),
        latest_version: latest.version.clone(),
        latest_count: latest.count,
        latest_share: share(latest.count),
    }
}
