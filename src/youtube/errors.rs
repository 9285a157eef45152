use thiserror::Error;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API key is invalid or missing")]
    InvalidApiKey,

    #[error("no video found for {0}")]
    VideoNotFound(String),

    /// 空の動画IDで詳細取得が呼ばれた（ネットワークには出ない）
    #[error("video id is empty")]
    EmptyVideoId,

    #[error("Live chat not found or disabled")]
    LiveChatNotFound,

    #[error("Live chat is disabled for this video")]
    LiveChatDisabled,

    #[error("Quota exceeded - please try again tomorrow")]
    QuotaExceeded,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Unexpected API response: {status} - {body}")]
    Api { status: u16, body: String },
}

impl YouTubeError {
    /// 「配信していない」に相当するエラーかどうか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            YouTubeError::VideoNotFound(_)
                | YouTubeError::EmptyVideoId
                | YouTubeError::LiveChatNotFound
        )
    }
}
