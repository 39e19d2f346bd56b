use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables owned by the aggregates. List-valued columns are JSON text.
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_housing_facility",
        r#"
        CREATE TABLE IF NOT EXISTS a001_housing_facility (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            location TEXT NOT NULL,
            price_range TEXT NOT NULL,
            capacity INTEGER NOT NULL DEFAULT 0,
            amenities_json TEXT NOT NULL DEFAULT '[]',
            rating REAL NOT NULL DEFAULT 0,
            reviews INTEGER NOT NULL DEFAULT 0,
            image TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
    (
        "a002_care_home",
        r#"
        CREATE TABLE IF NOT EXISTS a002_care_home (
            id TEXT PRIMARY KEY NOT NULL,
            position INTEGER NOT NULL DEFAULT 0,
            name TEXT NOT NULL,
            location TEXT NOT NULL,
            monthly_price INTEGER NOT NULL,
            facilities_json TEXT NOT NULL DEFAULT '[]',
            rating REAL NOT NULL DEFAULT 0,
            occupancy INTEGER NOT NULL DEFAULT 0,
            medical_staff INTEGER NOT NULL DEFAULT 0,
            visiting_hours TEXT NOT NULL DEFAULT '',
            meal_options_json TEXT NOT NULL DEFAULT '[]'
        );
    "#,
    ),
    (
        "a003_donation",
        r#"
        CREATE TABLE IF NOT EXISTS a003_donation (
            id TEXT PRIMARY KEY NOT NULL,
            amount INTEGER NOT NULL,
            donor_name TEXT NOT NULL,
            donor_email TEXT NOT NULL,
            is_monthly INTEGER NOT NULL DEFAULT 0,
            is_anonymous INTEGER NOT NULL DEFAULT 0,
            message TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );
    "#,
    ),
    (
        "a003_donation_created_at_idx",
        r#"
        CREATE INDEX IF NOT EXISTS idx_a003_donation_created_at
            ON a003_donation (created_at);
    "#,
    ),
    (
        "a004_disability_profile",
        r#"
        CREATE TABLE IF NOT EXISTS a004_disability_profile (
            id TEXT PRIMARY KEY NOT NULL,
            disability_type TEXT NOT NULL,
            disability_background TEXT NOT NULL DEFAULT '',
            accommodations_json TEXT NOT NULL DEFAULT '[]',
            work_experience TEXT NOT NULL DEFAULT '',
            has_resume INTEGER NOT NULL DEFAULT 0,
            preferred_language TEXT NOT NULL DEFAULT 'english',
            created_at TEXT NOT NULL
        );
    "#,
    ),
];

/// Build the sqlite connection url for a database file
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Windows paths need forward slashes and a leading slash before the drive
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Create missing tables; existing data is left untouched
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (name, sql) in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await
        .map_err(|e| anyhow::anyhow!("schema step {} failed: {}", name, e))?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/tmp/app.db")).unwrap();
        assert_eq!(url, "sqlite:///tmp/app.db?mode=rwc");
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        ensure_schema(&conn).await.unwrap();
        ensure_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        assert!(names.contains(&"a003_donation".to_string()));
        assert!(names.contains(&"a004_disability_profile".to_string()));
    }
}
