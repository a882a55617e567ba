use std::path::PathBuf;

use thiserror::Error;

use super::types::Collection;

/// Failure while writing a block's documents to a sink.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database URL is not a valid connection string: {0}")]
    InvalidDatabaseUrl(#[source] tokio_postgres::Error),

    #[error("Failed to build connection pool: {0}")]
    PoolBuild(#[from] deadpool_postgres::BuildError),

    #[error("No database connection available: {0}")]
    Connection(#[from] deadpool_postgres::PoolError),

    #[error("{}", describe_pg_error(.0))]
    Postgres(#[from] tokio_postgres::Error),

    #[error("Upsert into {collection} failed: {}", describe_pg_error(.source))]
    Upsert {
        collection: Collection,
        source: tokio_postgres::Error,
    },

    #[error("Failed to read migration {}: {source}", .path.display())]
    MigrationFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Migration {name} failed: {}", describe_pg_error(.source))]
    Migration {
        name: String,
        source: tokio_postgres::Error,
    },

    #[error("Failed to write documents to stdout: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Server errors carry a SQLSTATE code plus optional detail and constraint.
fn describe_pg_error(e: &tokio_postgres::Error) -> String {
    let Some(db_err) = e.as_db_error() else {
        return format!("PostgreSQL error: {}", e);
    };

    let mut msg = format!(
        "PostgreSQL error [{}]: {}",
        db_err.code().code(),
        db_err.message()
    );
    if let Some(detail) = db_err.detail() {
        msg.push_str(&format!(" ({})", detail));
    }
    if let Some(constraint) = db_err.constraint() {
        msg.push_str(&format!(" on constraint {}", constraint));
    }
    msg
}
