use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use cube::CubeState;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Durable home of the one cube state record. A single logical row,
/// upserted on every save: last write wins.
#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

#[derive(Debug, Clone)]
pub struct StoredCubeState {
    pub state: CubeState,
    pub saved_at: DateTime<Utc>,
}

const CUBE_ROW_ID: i64 = 1;

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;
        let storage = Self { pool };
        storage.ensure_cube_table().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    async fn ensure_cube_table(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cube (
                id       INTEGER PRIMARY KEY CHECK (id = 1),
                state    TEXT NOT NULL,
                saved_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("failed to ensure cube table exists")?;
        Ok(())
    }

    /// Loads the persisted cube state, or `None` on a fresh store.
    pub async fn load_state(&self) -> Result<Option<StoredCubeState>> {
        let row = sqlx::query("SELECT state, saved_at FROM cube WHERE id = ?")
            .bind(CUBE_ROW_ID)
            .fetch_optional(&self.pool)
            .await
            .context("failed to load the cube state")?;

        row.map(|row| {
            let raw: String = row.get(0);
            let saved_at: DateTime<Utc> = row.get(1);
            let state = serde_json::from_str(&raw)
                .context("persisted cube state is not a valid cube JSON object")?;
            Ok(StoredCubeState { state, saved_at })
        })
        .transpose()
    }

    pub async fn save_state(&self, state: &CubeState) -> Result<()> {
        let raw = serde_json::to_string(state).context("failed to serialize cube state")?;
        sqlx::query(
            "INSERT INTO cube (id, state) VALUES (?, ?)
             ON CONFLICT(id) DO UPDATE SET state = excluded.state, saved_at = CURRENT_TIMESTAMP",
        )
        .bind(CUBE_ROW_ID)
        .bind(raw)
        .execute(&self.pool)
        .await
        .context("failed to save the cube state")?;
        Ok(())
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;
    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url == "sqlite::memory:" || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
