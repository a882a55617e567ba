use std::collections::HashSet;
use std::path::Path;

use deadpool_postgres::Pool;

use super::error::DbError;
use super::types::Collection;

pub const MIGRATIONS_DIR: &str = "migrations";

/// Table DDL shared by every collection: the JSON key is the primary key.
fn collection_table_sql(collection: Collection) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" (
            doc_key JSONB PRIMARY KEY,
            doc JSONB NOT NULL,
            updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
        )",
        collection.as_str()
    )
}

/// Create the collection tables, then apply pending `*.sql` files from
/// `dir` in file-name order. Applied files are recorded in `_migrations`.
pub async fn run(pool: &Pool, dir: &Path) -> Result<(), DbError> {
    let client = pool.get().await?;

    client
        .execute(
            "CREATE TABLE IF NOT EXISTS _migrations (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL UNIQUE,
                applied_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
            )",
            &[],
        )
        .await?;

    for collection in Collection::ALL {
        client
            .batch_execute(&collection_table_sql(collection))
            .await?;
    }

    let rows = client.query("SELECT name FROM _migrations", &[]).await?;
    let applied: HashSet<String> = rows.iter().map(|row| row.get(0)).collect();

    if !dir.exists() {
        tracing::info!("No migrations directory at {}, skipping", dir.display());
        return Ok(());
    }

    let entries = std::fs::read_dir(dir).map_err(|source| DbError::MigrationFile {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut pending: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|x| x == "sql").unwrap_or(false))
        .map(|e| (e.file_name().to_string_lossy().to_string(), e.path()))
        .filter(|(name, _)| !applied.contains(name))
        .collect();
    pending.sort();

    for (name, path) in pending {
        let sql = std::fs::read_to_string(&path)
            .map_err(|source| DbError::MigrationFile { path, source })?;

        let mut client = pool.get().await?;
        let tx = client.transaction().await?;

        tx.batch_execute(&sql)
            .await
            .map_err(|source| DbError::Migration {
                name: name.clone(),
                source,
            })?;

        tx.execute("INSERT INTO _migrations (name) VALUES ($1)", &[&name])
            .await?;

        tx.commit().await?;

        tracing::info!("Applied migration: {}", name);
    }

    tracing::info!("All migrations up to date");
    Ok(())
}
