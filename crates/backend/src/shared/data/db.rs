use once_cell::sync::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;

use crate::dashboards::d405_app_level_retn_rem::repository;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Build the sqlite URL for a database file (creating its directory)
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);

    let mut options = ConnectOptions::new(db_url);
    options.sqlx_logging(false);
    let conn = Database::connect(options).await?;

    // Ensure report tables exist (schema comes from the column catalog)
    repository::ensure_tables(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Single-connection in-memory database with the report schema
#[cfg(test)]
pub async fn memory_database() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite should open");
    repository::ensure_tables(&conn)
        .await
        .expect("schema bootstrap should succeed");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let dir = std::env::temp_dir().join("retn_rem_db_url_test");
        let url = sqlite_url(&dir.join("app.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("app.db?mode=rwc"));
        assert!(!url.contains('\\'));
    }
}
