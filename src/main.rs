mod db;
mod decoding;
mod raw_data;
mod transformations;
mod types;

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use db::{ConsoleSink, DbPool, DocumentSink};
use raw_data::blocks::{stream_blocks_from_file, BlockFilter, BlockSourceError, StreamStats};
use transformations::{build_registry, RunStats, TransformationEngine};
use types::block::Block;
use types::config::indexer::{IndexerConfig, DEFAULT_CONFIG_PATH};
use types::config::sink::SinkConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = config_path_from_args(&args)?;

    let config = IndexerConfig::load(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    tracing::info!(
        "Loaded config: game {}, start block {}, blocks from {}",
        decoding::format_selector(config.game_address),
        config.start_block,
        config.blocks_path.display()
    );

    if let Some(var) = config.sink.required_env_var() {
        load_required_env_vars(&[var])?;
    }

    let sink = build_sink(&config.sink).await?;
    run_pipeline(&config, sink).await
}

/// `--config <path>` overrides the default config location.
fn config_path_from_args(args: &[String]) -> anyhow::Result<PathBuf> {
    match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args
                .get(i + 1)
                .context("--config requires a path argument")?;
            Ok(PathBuf::from(path))
        }
        None => Ok(PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

async fn build_sink(config: &SinkConfig) -> anyhow::Result<Arc<dyn DocumentSink>> {
    match config {
        SinkConfig::Console => Ok(Arc::new(ConsoleSink::new())),
        SinkConfig::Postgres {
            database_url_env_var,
            migrations_dir,
        } => {
            let database_url = env::var(database_url_env_var)
                .with_context(|| format!("{} is not set", database_url_env_var))?;

            let pool = DbPool::new(&database_url)
                .await
                .context("failed to connect to database")?;
            pool.run_migrations(Path::new(migrations_dir))
                .await
                .context("failed to run migrations")?;
            tracing::info!("Database migrations applied from {}", migrations_dir);

            Ok(Arc::new(pool))
        }
    }
}

/// Ensures all required env vars are set, loading .env if needed.
fn load_required_env_vars(required: &[&str]) -> anyhow::Result<()> {
    let missing: Vec<&&str> = required
        .iter()
        .filter(|var| env::var(var).is_err())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    dotenvy::dotenv().with_context(|| {
        format!(
            "Missing env vars {:?} and failed to load .env file",
            missing
        )
    })?;

    let still_missing: Vec<&str> = required
        .iter()
        .filter(|var| env::var(var).is_err())
        .copied()
        .collect();

    anyhow::ensure!(
        still_missing.is_empty(),
        "Missing required env vars after loading .env: {:?}",
        still_missing
    );

    Ok(())
}

async fn run_pipeline(
    config: &IndexerConfig,
    sink: Arc<dyn DocumentSink>,
) -> anyhow::Result<()> {
    let (block_tx, block_rx) = mpsc::channel(config.channel_capacity);
    let filter = BlockFilter {
        game_address: config.game_address,
        start_block: config.start_block,
    };

    let path = config.blocks_path.clone();
    let source =
        tokio::spawn(async move { stream_blocks_from_file(&path, filter, block_tx).await });

    drain_pipeline(source, block_rx, sink).await?;

    tracing::info!("Indexing complete");
    Ok(())
}

/// Run the engine until the channel closes.
///
/// The engine is always awaited, so blocks the source queued before it
/// failed still reach the sink. An engine failure is reported first since
/// it closes the channel under the source.
async fn drain_pipeline(
    source: JoinHandle<Result<StreamStats, BlockSourceError>>,
    block_rx: mpsc::Receiver<Block>,
    sink: Arc<dyn DocumentSink>,
) -> anyhow::Result<RunStats> {
    let engine = TransformationEngine::new(Arc::new(build_registry()));
    let engine_task = tokio::spawn(async move { engine.run(block_rx, sink).await });

    let source_result = source.await;
    let engine_result = engine_task.await;

    let stats = engine_result
        .context("transformation engine task panicked")?
        .context("transformation engine failed")?;
    source_result
        .context("block source task panicked")?
        .context("block source failed")?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use db::{Collection, MemoryStore};
    use decoding::test_support::{key_for, AdventurerFixture};
    use decoding::EventKind;
    use raw_data::blocks::stream_blocks;
    use transformations::test_support::start_game_wire;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_path_from_args() {
        assert_eq!(
            config_path_from_args(&args(&["indexer"])).unwrap(),
            PathBuf::from(DEFAULT_CONFIG_PATH)
        );
        assert_eq!(
            config_path_from_args(&args(&["indexer", "--config", "other.json"])).unwrap(),
            PathBuf::from("other.json")
        );
        assert!(config_path_from_args(&args(&["indexer", "--config"])).is_err());
    }

    fn start_game_line(block_number: u64, adventurer_id: u64) -> String {
        let fixture = AdventurerFixture {
            adventurer_id,
            ..AdventurerFixture::default()
        };
        serde_json::json!({
            "header": {"blockNumber": block_number, "timestamp": 1_700_000_000u64},
            "events": [{
                "event": {
                    "fromAddress": "0x1",
                    "keys": [key_for(&EventKind::StartGame)],
                    "data": start_game_wire(&fixture),
                },
                "receipt": {"transactionHash": format!("{:#x}", block_number)},
            }],
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_source_failure_keeps_queued_blocks() {
        let input = format!(
            "{}\n{}\n{}\n{{truncated\n",
            start_game_line(1, 7),
            start_game_line(2, 8),
            start_game_line(3, 9)
        );
        let filter = BlockFilter {
            game_address: U256::from(1u64),
            start_block: 0,
        };
        let (block_tx, block_rx) = mpsc::channel(1);
        let source = tokio::spawn(async move {
            stream_blocks(std::io::Cursor::new(input.into_bytes()), filter, block_tx).await
        });
        let store = Arc::new(MemoryStore::new());

        let err = drain_pipeline(source, block_rx, store.clone())
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("line 4"));
        assert_eq!(store.count(Collection::Adventurers).await, 3);
        assert_eq!(store.count(Collection::Items).await, 3 * 101);
    }
}
