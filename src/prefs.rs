use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::collections::HashMap;

use crate::error::StoreError;

pub type PrefPool = Pool<SqliteConnectionManager>;

// Preference keys used by the feature layer.
pub const THEME_KEY: &str = "portfolioTheme";
pub const TEXT_SIZE_KEY: &str = "portfolioTextSize";
pub const SOUNDS_KEY: &str = "portfolioSoundsEnabled";
pub const MUSIC_KEY: &str = "portfolioMusicEnabled";
pub const PARTICLES_KEY: &str = "portfolioParticlesEnabled";
pub const DEBUG_KEY: &str = "DEBUG";

pub struct PrefStore {
    pool: PrefPool,
}

impl PrefStore {
    /// Open (or create) a preference database. The path may also be a
    /// SQLite URI such as `file:name?mode=memory&cache=shared`.
    pub fn open(path: &str) -> Result<PrefStore, StoreError> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(2).build(manager)?;

        let conn = pool.get()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT
            );",
        )?;

        Ok(PrefStore { pool })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let conn = self.pool.get().ok()?;
        conn.query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .ok()
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// A stored `"false"` disables; any other stored value enables.
    /// Absent keys fall back to `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(v) => v != "false",
            None => default,
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn set_many(&self, prefs: &HashMap<String, String>) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        for (key, value) in prefs {
            conn.execute(
                "INSERT INTO preferences (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = ?2",
                params![key, value],
            )?;
        }
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(())
    }

    pub fn all(&self) -> HashMap<String, String> {
        let conn = match self.pool.get() {
            Ok(c) => c,
            Err(_) => return HashMap::new(),
        };

        let mut stmt = match conn.prepare("SELECT key, value FROM preferences") {
            Ok(s) => s,
            Err(_) => return HashMap::new(),
        };

        stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map(|rows| rows.filter_map(|r| r.ok()).collect())
        .unwrap_or_default()
    }
}
