//! readstash: a Telegram bot that stashes links and notes and hands them
//! back one random item at a time.

use std::{path::PathBuf, sync::Arc, time::Duration};

use {
    anyhow::{Context, Result},
    clap::Parser,
    tokio_util::sync::CancellationToken,
    tracing::{error, info},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    readstash_consumer::Consumer,
    readstash_dispatch::Processor,
    readstash_storage::FileStorage,
    readstash_telegram::{TelegramChannel, TelegramConfig},
};

#[derive(Parser)]
#[command(name = "readstash", about = "Link and note stash over Telegram", version)]
struct Cli {
    /// Bot token from @BotFather.
    #[arg(long, env = "READSTASH_TOKEN", hide_env_values = true)]
    token: String,

    /// Directory for stored items (defaults to the platform data dir).
    #[arg(long, env = "READSTASH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Maximum number of updates to pull per poll.
    #[arg(long, default_value_t = 100)]
    batch_size: usize,

    /// Wait between polls when there is nothing new, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    idle_delay_ms: u64,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "readstash starting");

    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    info!(data_dir = %data_dir.display(), "using storage directory");

    let storage = Arc::new(FileStorage::new(data_dir));
    let channel = Arc::new(
        TelegramChannel::connect(&TelegramConfig::new(cli.token.clone()))
            .await
            .context("connect to telegram")?,
    );
    let processor = Arc::new(Processor::new(storage, channel.clone()));
    let consumer = Consumer::new(channel, processor, cli.batch_size)
        .with_idle_delay(Duration::from_millis(cli.idle_delay_ms));

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            shutdown.cancel();
        }
    });

    if let Err(e) = consumer.run(cancel).await {
        error!(error = %e, "consumer stopped with a fatal error");
        return Err(e);
    }
    Ok(())
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "readstash")
        .context("cannot determine a platform data directory")?;
    Ok(dirs.data_dir().join("items"))
}
