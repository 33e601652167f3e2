use serde::{Deserialize, Serialize};

/// The ordering rule applied to client data before display.
///
/// Serialized with the wire strings the original preference records use:
/// `"default"` / `"asc"` / `"desc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Lexicographic ascending on the version label (the default).
    #[serde(rename = "default")]
    ByVersion,
    /// Numeric ascending on the count, insertion order breaking ties.
    #[serde(rename = "asc")]
    CountAscending,
    /// Numeric descending on the count, insertion order breaking ties.
    #[serde(rename = "desc")]
    CountDescending,
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::ByVersion
    }
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::ByVersion => "default",
            SortMode::CountAscending => "asc",
            SortMode::CountDescending => "desc",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "default" => Some(SortMode::ByVersion),
            "asc" => Some(SortMode::CountAscending),
            "desc" => Some(SortMode::CountDescending),
            _ => None,
        }
    }
}

/// Enumerated page sizes offered by the display-count selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    Ten,
    Twenty,
    Thirty,
    Fifty,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Ten
    }
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Thirty,
        PageSize::Fifty,
    ];

    pub fn value(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
        }
    }

    pub fn from_value(value: usize) -> Option<Self> {
        match value {
            10 => Some(PageSize::Ten),
            20 => Some(PageSize::Twenty),
            30 => Some(PageSize::Thirty),
            50 => Some(PageSize::Fifty),
            _ => None,
        }
    }
}

/// Pagination parameters controlling the visible chart slice.
///
/// Invariant: `offset <= max(0, total_items - page_size.value())`; the
/// view-state manager clamps on every mutation and resets the offset to
/// zero whenever the page size or sort mode changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub page_size: PageSize,
    pub offset: usize,
}

/// Tri-state flag gating preference persistence.
///
/// `Pending` means the user has not answered the consent prompt yet;
/// it blocks all preference reads and writes until resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    Pending,
    Accepted,
    Declined,
}

impl ConsentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentState::Pending => "pending",
            ConsentState::Accepted => "accepted",
            ConsentState::Declined => "declined",
        }
    }

    /// Parses a persisted decision. `Pending` is never persisted, so only
    /// the two terminal states round-trip.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ConsentState::Accepted),
            "declined" => Some(ConsentState::Declined),
            _ => None,
        }
    }
}

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ja")]
    Ja,
}

impl Default for Language {
    fn default() -> Self {
        Language::Zh
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Zh, Language::En, Language::Ja];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(Language::Zh),
            "en" => Some(Language::En),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }
}
