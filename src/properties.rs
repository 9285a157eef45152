//! 永続化プロパティ（チャンネルID・APIキー・ページトークン）
//!
//! `<config_dir>/ytwee/properties.json` にJSONで保存する。
//! 1プロセス1ライターを前提とし、プロセス間の排他は行わない。

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::config::{ConfigError, APP_NAME, PROPERTIES_FILE};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "yt-channel-id", default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(rename = "yt-api-key", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "yt-chat-next-page", default, skip_serializing_if = "Option::is_none")]
    pub chat_next_page: Option<String>,

    /// `yt-chat-next-page` が属するチャットID
    #[serde(rename = "yt-chat-id", default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

pub struct PropertyStore {
    path: PathBuf,
    props: Properties,
}

impl PropertyStore {
    /// デフォルトの保存先
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(APP_NAME).join(PROPERTIES_FILE))
    }

    /// ファイルを読み込む（存在しない場合は空）
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();

        let props = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Properties::default(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Properties file not found, starting empty: {:?}", path);
                Properties::default()
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        Ok(Self { path, props })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn properties(&self) -> &Properties {
        &self.props
    }

    /// チャンネルIDを保存
    pub fn set_channel_id(&mut self, channel_id: &str) -> Result<(), ConfigError> {
        self.props.channel_id = Some(channel_id.to_string());
        self.save()?;
        log::info!("Channel ID saved: {}", channel_id);
        Ok(())
    }

    /// ページトークンをチャットIDと一緒に保存
    pub fn set_chat_cursor(&mut self, chat_id: &str, token: &str) -> Result<(), ConfigError> {
        if self.props.chat_id.as_deref() == Some(chat_id)
            && self.props.chat_next_page.as_deref() == Some(token)
        {
            return Ok(());
        }

        self.props.chat_id = Some(chat_id.to_string());
        self.props.chat_next_page = Some(token.to_string());
        self.save()?;
        log::debug!("Page token saved for chat {}: {}", chat_id, token);
        Ok(())
    }

    fn save(&self) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_err)?;

        let json = serde_json::to_string_pretty(&self.props).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        // 同じディレクトリの一時ファイルに書いてから置き換える（途中で落ちても元のファイルは壊れない）
        let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
        writeln!(tmp, "{}", json).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}
