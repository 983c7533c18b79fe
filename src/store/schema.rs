//! Bootstrap DDL for the content tables. Idempotent; not a migration tool.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const TABLES: &[(&str, &str)] = &[
    (
        "hero_sections",
        r#"
        CREATE TABLE IF NOT EXISTS hero_sections (
            id SERIAL PRIMARY KEY,
            headline TEXT NOT NULL,
            subheadline TEXT NOT NULL,
            mission_statement TEXT NOT NULL,
            primary_cta_text TEXT NOT NULL,
            primary_cta_url TEXT NOT NULL,
            secondary_cta_text TEXT NOT NULL,
            secondary_cta_url TEXT NOT NULL,
            code_snippet TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "sdk_showcases",
        r#"
        CREATE TABLE IF NOT EXISTS sdk_showcases (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            version TEXT NOT NULL,
            description TEXT NOT NULL,
            install_command TEXT NOT NULL,
            code_example TEXT NOT NULL,
            documentation_url TEXT NOT NULL,
            github_url TEXT NOT NULL,
            package_url TEXT NOT NULL,
            is_featured BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "sdk_features",
        r#"
        CREATE TABLE IF NOT EXISTS sdk_features (
            id SERIAL PRIMARY KEY,
            sdk_id INTEGER NOT NULL REFERENCES sdk_showcases (id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            icon TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "code_comparisons",
        r#"
        CREATE TABLE IF NOT EXISTS code_comparisons (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            before_code TEXT NOT NULL,
            after_code TEXT NOT NULL,
            before_label TEXT NOT NULL,
            after_label TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "community_stats",
        r#"
        CREATE TABLE IF NOT EXISTS community_stats (
            id SERIAL PRIMARY KEY,
            github_stars INTEGER NOT NULL,
            total_downloads INTEGER NOT NULL,
            contributors INTEGER NOT NULL,
            repositories INTEGER NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "roadmap_items",
        r#"
        CREATE TABLE IF NOT EXISTS roadmap_items (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            status roadmap_status NOT NULL DEFAULT 'planned',
            expected_date TEXT,
            priority INTEGER NOT NULL DEFAULT 1,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

/// Create the `roadmap_status` enum and the six content tables if they do not exist.
/// Order matters: the enum precedes `roadmap_items`, `sdk_showcases` precedes `sdk_features`.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    // CREATE TYPE has no IF NOT EXISTS.
    sqlx::query(
        r#"
        DO $$ BEGIN
            CREATE TYPE roadmap_status AS ENUM ('planned', 'in_progress', 'completed');
        EXCEPTION
            WHEN duplicate_object THEN NULL;
        END $$
        "#,
    )
    .execute(pool)
    .await?;

    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    sqlx::query("CREATE INDEX IF NOT EXISTS sdk_features_sdk_id_idx ON sdk_features (sdk_id)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| ConfigError::InvalidValue {
        key: "DATABASE_URL",
        value: e.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| ConfigError::InvalidValue {
        key: "DATABASE_URL",
        value: "no database path".into(),
    })? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_name() {
        let (admin, db) = parse_db_name_from_url("postgres://user:pw@localhost:5432/landing?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(db, "landing");
    }

    #[test]
    fn url_without_path_is_a_config_error() {
        let err = parse_db_name_from_url("localhost").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidValue { key: "DATABASE_URL", .. })));
    }

    #[tokio::test]
    async fn unparsable_database_url_is_a_config_error() {
        let err = ensure_database_exists("postgres://localhost:notaport/landing").await.unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidValue { key: "DATABASE_URL", .. })));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("landing"), "\"landing\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn features_table_follows_showcases() {
        let names: Vec<&str> = TABLES.iter().map(|(n, _)| *n).collect();
        let sdk = names.iter().position(|n| *n == "sdk_showcases").unwrap();
        let feat = names.iter().position(|n| *n == "sdk_features").unwrap();
        assert!(sdk < feat);
    }
}
