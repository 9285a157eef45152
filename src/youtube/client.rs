use reqwest::{Client, Response, StatusCode};

use super::{errors::YouTubeError, types::*};
use crate::config::{http_timeout, MAX_MESSAGES_PER_PAGE};
use crate::util::mask_api_key;

pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// ベースURLを指定して作成（モックサーバー向け）
    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self, YouTubeError> {
        let client = Client::builder().timeout(http_timeout()).build()?;

        log::debug!(
            "YouTube client created (base: {}, key: {})",
            base_url,
            mask_api_key(&api_key)
        );

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// チャンネルの配信中動画IDを検索（search.listでクォータ100消費）
    ///
    /// 配信していない場合は `Ok(None)`。
    pub async fn search_live_video(&self, channel_id: &str) -> Result<Option<String>, YouTubeError> {
        log::info!(
            "Searching live video for channel: {} (quota cost: 100 units)",
            channel_id
        );

        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "id,snippet"),
                ("channelId", channel_id),
                ("eventType", "live"),
                ("type", "video"),
                ("maxResults", "1"),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        let data: SearchResponse = check_status(response).await?.json().await?;

        let video_id = data
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id.video_id)
            .filter(|id| !id.is_empty());

        match &video_id {
            Some(id) => log::info!("Live video found: {}", id),
            None => log::info!("Channel {} is not live", channel_id),
        }
        Ok(video_id)
    }

    /// 動画IDからライブ配信メタデータを取得（videos.listでクォータ1消費）
    pub async fn get_stream_details(
        &self,
        video_id: &str,
    ) -> Result<LiveStreamingDetails, YouTubeError> {
        if video_id.is_empty() {
            return Err(YouTubeError::EmptyVideoId);
        }

        log::info!(
            "Fetching live streaming details for video: {} (quota cost: 1 unit)",
            video_id
        );

        let url = format!("{}/videos", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "liveStreamingDetails"),
                ("id", video_id),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            log::warn!("Video not found: {}", video_id);
            return Err(YouTubeError::VideoNotFound(video_id.to_string()));
        }

        let data: VideoResponse = check_status(response).await?.json().await?;

        let item = data
            .items
            .into_iter()
            .next()
            .ok_or_else(|| YouTubeError::VideoNotFound(video_id.to_string()))?;

        Ok(item.live_streaming_details.unwrap_or_default())
    }

    /// ライブチャットメッセージ取得
    pub async fn get_live_chat_messages(
        &self,
        live_chat_id: &str,
        page_token: Option<&str>,
    ) -> Result<LiveChatMessagesResponse, YouTubeError> {
        log::info!(
            "Fetching live chat messages for chat ID: {} (quota cost: ~5 units)",
            live_chat_id
        );

        let url = format!("{}/liveChat/messages", self.base_url);
        let max_results = MAX_MESSAGES_PER_PAGE.to_string();

        let mut query_params = vec![
            ("liveChatId", live_chat_id),
            ("part", "snippet,authorDetails"),
            ("maxResults", max_results.as_str()),
            ("key", self.api_key.as_str()),
        ];

        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
            log::debug!("Using page token: {}", token);
        }

        let response = self.client.get(&url).query(&query_params).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            log::warn!("Live chat not found - stream may have ended");
            return Err(YouTubeError::LiveChatNotFound);
        }

        let data: LiveChatMessagesResponse = check_status(response).await?.json().await?;
        log::info!(
            "Successfully fetched {} messages (polling interval: {}ms)",
            data.items.len(),
            data.polling_interval_millis
        );
        Ok(data)
    }
}

/// ステータスコードをYouTubeErrorに変換する
async fn check_status(response: Response) -> Result<Response, YouTubeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::BAD_REQUEST if body.contains("keyInvalid") => {
            log::error!("API key is invalid");
            Err(YouTubeError::InvalidApiKey)
        }
        StatusCode::UNAUTHORIZED => {
            log::error!("Unauthorized - API key invalid");
            Err(YouTubeError::InvalidApiKey)
        }
        StatusCode::FORBIDDEN => {
            if body.contains("quotaExceeded") {
                log::error!("Quota exceeded - daily limit reached");
                Err(YouTubeError::QuotaExceeded)
            } else if body.contains("rateLimitExceeded") {
                log::warn!("Rate limit exceeded");
                Err(YouTubeError::RateLimitExceeded)
            } else if body.contains("liveChatDisabled") {
                log::warn!("Live chat is disabled");
                Err(YouTubeError::LiveChatDisabled)
            } else {
                log::error!("API key invalid or insufficient permissions");
                Err(YouTubeError::InvalidApiKey)
            }
        }
        status => {
            log::error!(
                "Unexpected API response - status: {}, body: {}",
                status,
                body
            );
            Err(YouTubeError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}
