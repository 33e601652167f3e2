//! Preference record store for verdash.
//!
//! The one environment-coupled piece of the preference pipeline: a thin
//! adapter over SQLite holding small string records with absolute expiry
//! timestamps, the cookie-jar equivalent for a terminal process. Whether
//! a record may be written at all is decided elsewhere (consent manager
//! and view-state manager); this adapter only reads and writes.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use crate::database::connection::Database;
use crate::types::errors::PreferenceError;

/// Record key for the persisted UI language.
pub const LANGUAGE_KEY: &str = "preferred_language";
/// Record key for the persisted sort mode.
pub const SORT_TYPE_KEY: &str = "client_dashboard_sort_type";
/// Record key for the persisted page size.
pub const VISIBLE_ITEMS_KEY: &str = "client_dashboard_visible_items";
/// Record key for the persisted consent decision.
pub const CONSENT_KEY: &str = "cookie_consent";

/// Expiry horizon for the language and consent records.
pub const LONG_TTL_DAYS: u32 = 365;
/// Expiry horizon for the dashboard display records.
pub const DASHBOARD_TTL_DAYS: u32 = 30;

const SECONDS_PER_DAY: i64 = 86_400;

/// Trait defining the preference store interface.
pub trait PreferenceStoreTrait {
    fn set(&self, key: &str, value: &str, ttl_days: u32) -> Result<(), PreferenceError>;
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn remove(&self, key: &str) -> Result<(), PreferenceError>;
    /// Removes every dashboard preference record (language, sort mode,
    /// page size). The consent record itself is kept.
    fn remove_dashboard_preferences(&self) -> Result<(), PreferenceError>;
}

/// SQLite-backed preference store.
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<Database>,
}

impl PreferenceStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl PreferenceStoreTrait for PreferenceStore {
    /// Writes a record with an expiry `ttl_days` from now.
    ///
    /// Idempotent: replaying the same write replaces the record in place,
    /// so there is no duplication or drift.
    fn set(&self, key: &str, value: &str, ttl_days: u32) -> Result<(), PreferenceError> {
        let expires_at = Self::now() + i64::from(ttl_days) * SECONDS_PER_DAY;
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO preferences (key, value, expires_at) VALUES (?1, ?2, ?3)",
                params![key, value, expires_at],
            )
            .map_err(|e| PreferenceError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Reads a record; an expired record is treated as absent and pruned.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let conn = self.db.connection();
        let result = conn.query_row(
            "SELECT value, expires_at FROM preferences WHERE key = ?1",
            params![key],
            |row| {
                let value: String = row.get(0)?;
                let expires_at: i64 = row.get(1)?;
                Ok((value, expires_at))
            },
        );

        match result {
            Ok((value, expires_at)) => {
                if expires_at <= Self::now() {
                    conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])
                        .map_err(|e| PreferenceError::DatabaseError(e.to_string()))?;
                    Ok(None)
                } else {
                    Ok(Some(value))
                }
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PreferenceError::DatabaseError(e.to_string())),
        }
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        self.db
            .connection()
            .execute("DELETE FROM preferences WHERE key = ?1", params![key])
            .map_err(|e| PreferenceError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn remove_dashboard_preferences(&self) -> Result<(), PreferenceError> {
        for key in [LANGUAGE_KEY, SORT_TYPE_KEY, VISIBLE_ITEMS_KEY] {
            self.remove(key)?;
        }
        Ok(())
    }
}
