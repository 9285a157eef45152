use serde::{Deserialize, Serialize};

/// チャットメッセージ1件（表示用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub author: String,
    pub text: String,
    pub published_at: String, // ISO-8601のまま保持
}

impl ChatMessage {
    /// `<author> <text>` 形式の1行
    pub fn display_line(&self) -> String {
        format!("{} {}", self.author, self.text)
    }
}

impl From<LiveChatMessageItem> for ChatMessage {
    fn from(item: LiveChatMessageItem) -> Self {
        Self {
            id: item.id,
            author: item.author_details.display_name,
            text: item.snippet.display_message,
            published_at: item.snippet.published_at,
        }
    }
}

/// 1回のポーリング結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePage {
    pub messages: Vec<ChatMessage>,
    /// 次回リクエスト用のページトークン
    pub next_cursor: String,
    /// サーバー推奨のポーリング間隔（ミリ秒）
    pub polling_interval_millis: u64,
}

/// チャットID解決の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIdResolution {
    Resolved(String),
    NotLive,
}

// YouTube API レスポンス型

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LiveChatMessagesResponse {
    #[serde(rename = "pollingIntervalMillis", default)]
    pub polling_interval_millis: u64,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub items: Vec<LiveChatMessageItem>,
}

#[derive(Debug, Deserialize)]
pub struct LiveChatMessageItem {
    pub id: String,
    pub snippet: MessageSnippet,
    #[serde(rename = "authorDetails")]
    pub author_details: AuthorDetails,
}

#[derive(Debug, Deserialize)]
pub struct MessageSnippet {
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    // 削除済みメッセージ等ではdisplayMessageが無い
    #[serde(rename = "displayMessage", default)]
    pub display_message: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthorDetails {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    #[serde(rename = "liveStreamingDetails")]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

/// ライブ配信メタデータ（`details` コマンドでそのままJSON出力する）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_viewers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_live_chat_id: Option<String>,
}
