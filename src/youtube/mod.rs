//! YouTube Data API v3 連携（ライブ動画検索・配信詳細・チャット取得）

pub mod client;
pub mod errors;
pub mod poller;
pub mod resolver;
pub mod state;
pub mod types;
