use std::fmt;

// === FetchError ===

/// Errors surfaced by the upstream data fetch.
///
/// Transport and application failures are deliberately distinct: a non-2xx
/// HTTP status is `Transport`, while a well-formed response carrying an
/// error code from the service is `Api` with the upstream message verbatim.
#[derive(Debug)]
pub enum FetchError {
    /// Network failure or non-2xx HTTP status.
    Transport(String),
    /// Well-formed response with a non-success application code.
    Api(String),
    /// The response body could not be interpreted as client data.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Api(msg) => write!(f, "API error: {}", msg),
            FetchError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// === PreferenceError ===

/// Errors related to the preference record store.
#[derive(Debug)]
pub enum PreferenceError {
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::DatabaseError(msg) => {
                write!(f, "Preference database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}

// === LocaleError ===

/// Errors related to localization engine operations.
#[derive(Debug)]
pub enum LocaleError {
    /// The requested locale is not supported.
    UnsupportedLocale(String),
    /// The locale file was not found or could not be parsed.
    FileNotFound(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnsupportedLocale(locale) => {
                write!(f, "Unsupported locale: {}", locale)
            }
            LocaleError::FileNotFound(path) => write!(f, "Locale file not found: {}", path),
        }
    }
}

impl std::error::Error for LocaleError {}
