// =============================================================================
// 共通設定・定数モジュール
// =============================================================================
// 定数と、CLI引数・環境変数・プロパティファイルから実行時設定を組み立てる処理
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::properties::Properties;
use crate::util::mask_api_key;

/// アプリケーション名（設定ディレクトリ名として使用）
pub const APP_NAME: &str = "ytwee";

/// プロパティファイル名
pub const PROPERTIES_FILE: &str = "properties.json";

/// YouTube Data API v3 のベースURL
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// 1回のポーリングで取得するメッセージの上限
pub const MAX_MESSAGES_PER_PAGE: u32 = 200;

/// ポーリング間隔の下限（ミリ秒）
pub const MIN_POLLING_INTERVAL_MILLIS: u64 = 5000;

/// HTTPリクエストのデフォルトタイムアウト（秒）
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// HTTPリクエストのデフォルトタイムアウト（Duration）
pub fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is required (set YTAPIKEY, --api-key, or yt-api-key in {0})")]
    MissingApiKey(PathBuf),

    #[error("channel id is not set (set YTCHANNELID, --channel-id, or run `ytwee chanid <id>`)")]
    MissingChannelId,

    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 実行時設定
///
/// 優先順位: CLI引数 / 環境変数 → プロパティファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub channel_id: Option<String>,
    pub api_base_url: String,
}

impl Settings {
    pub fn resolve(
        api_key: Option<&str>,
        channel_id: Option<&str>,
        api_base_url: Option<&str>,
        props: &Properties,
        props_path: &std::path::Path,
    ) -> Result<Self, ConfigError> {
        let api_key = non_empty(api_key)
            .or_else(|| non_empty(props.api_key.as_deref()))
            .ok_or_else(|| ConfigError::MissingApiKey(props_path.to_path_buf()))?;

        let channel_id = non_empty(channel_id).or_else(|| non_empty(props.channel_id.as_deref()));

        let api_base_url = non_empty(api_base_url).unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        log::debug!(
            "Settings resolved (key: {}, channel: {:?}, base: {})",
            mask_api_key(&api_key),
            channel_id,
            api_base_url
        );

        Ok(Self {
            api_key,
            channel_id,
            api_base_url,
        })
    }

    /// チャンネルIDを要求するコマンド用
    pub fn require_channel_id(&self) -> Result<&str, ConfigError> {
        self.channel_id
            .as_deref()
            .ok_or(ConfigError::MissingChannelId)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_http_timeout_duration() {
        assert_eq!(http_timeout(), Duration::from_secs(HTTP_TIMEOUT_SECS));
    }

    #[test]
    fn test_cli_values_override_properties() {
        let props = Properties {
            api_key: Some("file-key".to_string()),
            channel_id: Some("UCfile".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(
            Some("env-key"),
            Some("UCenv"),
            None,
            &props,
            Path::new("props.json"),
        )
        .unwrap();

        assert_eq!(settings.api_key, "env-key");
        assert_eq!(settings.channel_id.as_deref(), Some("UCenv"));
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_properties_fallback() {
        let props = Properties {
            api_key: Some("file-key".to_string()),
            channel_id: Some("UCfile".to_string()),
            ..Default::default()
        };
        let settings =
            Settings::resolve(None, Some(""), None, &props, Path::new("props.json")).unwrap();

        assert_eq!(settings.api_key, "file-key");
        assert_eq!(settings.require_channel_id().unwrap(), "UCfile");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let result = Settings::resolve(
            None,
            Some("UCabc"),
            None,
            &Properties::default(),
            Path::new("props.json"),
        );
        assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    }

    #[test]
    fn test_missing_channel_id() {
        let settings = Settings::resolve(
            Some("key"),
            None,
            Some("http://localhost:8080"),
            &Properties::default(),
            Path::new("props.json"),
        )
        .unwrap();

        assert_eq!(settings.api_base_url, "http://localhost:8080");
        assert!(matches!(
            settings.require_channel_id(),
            Err(ConfigError::MissingChannelId)
        ));
    }
}
