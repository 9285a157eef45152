pub mod cli;
mod commands;
pub mod config;
pub mod properties;
pub mod util; // doctestのためpubにする
pub mod youtube;

use clap::Parser;
use thiserror::Error;

use cli::Cli;
use config::{ConfigError, Settings};
use properties::PropertyStore;
use youtube::{client::YouTubeClient, errors::YouTubeError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    YouTube(#[from] YouTubeError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// 1回の実行で共有する状態
///
/// 起動時に1度だけ構築し、各コマンドへ参照で渡す。
pub struct AppContext {
    pub client: YouTubeClient,
    pub settings: Settings,
    pub store: PropertyStore,
}

impl AppContext {
    pub fn new(
        api_key: Option<&str>,
        channel_id: Option<&str>,
        api_base_url: Option<&str>,
        store: PropertyStore,
    ) -> Result<Self, AppError> {
        let settings = Settings::resolve(
            api_key,
            channel_id,
            api_base_url,
            store.properties(),
            store.path(),
        )?;
        let client = YouTubeClient::with_base_url(settings.api_key.clone(), &settings.api_base_url)?;

        Ok(Self {
            client,
            settings,
            store,
        })
    }
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => PropertyStore::default_path()?,
    };
    let store = PropertyStore::open(path)?;

    let mut ctx = AppContext::new(
        cli.api_key.as_deref(),
        cli.channel_id.as_deref(),
        cli.api_base_url.as_deref(),
        store,
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(cli.command, &mut ctx, &mut out).await
}
