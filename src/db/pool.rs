use std::path::Path;

use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::types::ToSql;
use tokio_postgres::NoTls;

use super::error::DbError;
use super::sink::DocumentSink;
use super::types::{Collection, UpsertDescriptor, WriteMode};

pub struct DbPool {
    pool: Pool,
}

impl DbPool {
    pub async fn new(database_url: &str) -> Result<Self, DbError> {
        let config = database_url
            .parse::<tokio_postgres::Config>()
            .map_err(DbError::InvalidDatabaseUrl)?;

        let manager_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };

        let manager = Manager::from_config(config, NoTls, manager_config);

        let pool = Pool::builder(manager)
            .max_size(16)
            .runtime(Runtime::Tokio1)
            .build()?;

        let _conn = pool.get().await?;
        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Apply a batch of upserts in a single transaction, in order.
    pub async fn execute_transaction(&self, batch: &[UpsertDescriptor]) -> Result<(), DbError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut client = self.pool.get().await?;
        let transaction = client.transaction().await?;

        for descriptor in batch {
            let sql = build_upsert_sql(descriptor.collection, descriptor.mode);
            let key = descriptor.identity_json();
            let doc = descriptor.update_json();
            let params: [&(dyn ToSql + Sync); 2] = [&key, &doc];

            if let Err(source) = transaction.execute(sql.as_str(), &params).await {
                let err = DbError::Upsert {
                    collection: descriptor.collection,
                    source,
                };
                tracing::error!("SQL execution failed\n  SQL: {}\n  Error: {}", sql, err);
                return Err(err);
            }
        }

        transaction.commit().await?;
        Ok(())
    }

    pub async fn run_migrations(&self, dir: &Path) -> Result<(), DbError> {
        super::migrations::run(&self.pool, dir).await
    }
}

#[async_trait]
impl DocumentSink for DbPool {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn apply(&self, block_number: u64, batch: &[UpsertDescriptor]) -> Result<(), DbError> {
        self.execute_transaction(batch).await?;
        tracing::debug!(
            "Block {}: wrote {} document upsert(s)",
            block_number,
            batch.len()
        );
        Ok(())
    }
}

/// Wrap a table name in double quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name)
}

/// Upsert by key. `Insert` replaces the stored document, `Update` merges the
/// new fields over it with the JSONB `||` operator.
fn build_upsert_sql(collection: Collection, mode: WriteMode) -> String {
    let table = quote_ident(collection.as_str());
    let on_conflict = match mode {
        WriteMode::Insert => "doc = EXCLUDED.doc".to_string(),
        WriteMode::Update => format!("doc = {}.doc || EXCLUDED.doc", table),
    };
    format!(
        "INSERT INTO {} (doc_key, doc) VALUES ($1, $2) ON CONFLICT (doc_key) DO UPDATE SET {}",
        table, on_conflict
    )
}
