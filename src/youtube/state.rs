use std::time::Duration;

use super::types::MessagePage;
use crate::config::MIN_POLLING_INTERVAL_MILLIS;

/// ポーリング状態（チャットIDとページトークンの組）
///
/// ページトークンは同じチャットIDに対して直前に成功したポーリングの値のみを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCursor {
    /// 現在のライブチャットID
    pub live_chat_id: String,
    /// 次回リクエスト用のページトークン（空文字列 = 先頭から）
    pub next_page_token: String,
    /// 推奨ポーリング間隔（ミリ秒）
    pub polling_interval_millis: u64,
    /// ポーリング成功回数
    pub poll_count: u64,
}

impl ChatCursor {
    pub fn new(live_chat_id: String) -> Self {
        Self {
            live_chat_id,
            next_page_token: String::new(),
            polling_interval_millis: MIN_POLLING_INTERVAL_MILLIS,
            poll_count: 0,
        }
    }

    /// 保存済みのトークンから再開する
    ///
    /// 保存時のチャットIDが異なる場合はトークンを捨てて先頭から始める。
    pub fn resume(live_chat_id: String, saved_chat_id: Option<&str>, saved_token: Option<&str>) -> Self {
        let mut cursor = Self::new(live_chat_id);

        match (saved_chat_id, saved_token) {
            (Some(saved), Some(token)) if saved == cursor.live_chat_id => {
                cursor.next_page_token = token.to_string();
            }
            (_, Some(token)) if !token.is_empty() => {
                log::info!(
                    "Chat ID changed ({} -> {}), discarding cached page token",
                    saved_chat_id.unwrap_or("<none>"),
                    cursor.live_chat_id
                );
            }
            _ => {}
        }

        cursor
    }

    /// リクエストに付けるページトークン（空なら付けない）
    pub fn page_token(&self) -> Option<&str> {
        Some(self.next_page_token.as_str()).filter(|t| !t.is_empty())
    }

    /// ポーリング間隔をDurationとして取得
    ///
    /// 最低5秒を保証
    pub fn polling_interval(&self) -> Duration {
        Duration::from_millis(self.polling_interval_millis.max(MIN_POLLING_INTERVAL_MILLIS))
    }

    /// 成功したポーリング結果で状態を進める
    pub fn advance(&mut self, page: &MessagePage) {
        self.next_page_token = page.next_cursor.clone();
        self.polling_interval_millis = page.polling_interval_millis.max(MIN_POLLING_INTERVAL_MILLIS);
        self.poll_count += 1;
    }
}
