//! チャンネルID → 配信中動画 → ライブチャットID の解決

use super::{client::YouTubeClient, errors::YouTubeError, types::ChatIdResolution};

/// チャンネルのライブチャットIDを解決
///
/// - 配信していない → `NotLive`
/// - 動画詳細の取得失敗 → ログを出して `NotLive`
/// - 検索APIの失敗 → エラーをそのまま返す
pub async fn resolve_chat_id(
    client: &YouTubeClient,
    channel_id: &str,
) -> Result<ChatIdResolution, YouTubeError> {
    let Some(video_id) = client.search_live_video(channel_id).await? else {
        return Ok(ChatIdResolution::NotLive);
    };

    chat_id_for_video(client, &video_id).await
}

/// 動画IDからライブチャットIDを解決（失敗は `NotLive` に落とす）
pub async fn chat_id_for_video(
    client: &YouTubeClient,
    video_id: &str,
) -> Result<ChatIdResolution, YouTubeError> {
    let details = match client.get_stream_details(video_id).await {
        Ok(details) => details,
        Err(e) => {
            if e.is_not_found() {
                log::info!("No live details for {}: {}", video_id, e);
            } else {
                log::warn!("Failed to fetch live details for {}: {}", video_id, e);
            }
            return Ok(ChatIdResolution::NotLive);
        }
    };

    match details.active_live_chat_id.filter(|id| !id.is_empty()) {
        Some(chat_id) => {
            log::info!("Live chat ID retrieved: {}", chat_id);
            Ok(ChatIdResolution::Resolved(chat_id))
        }
        None => {
            log::info!("Video {} has no active live chat", video_id);
            Ok(ChatIdResolution::NotLive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> YouTubeClient {
        YouTubeClient::with_base_url("test-api-key".to_string(), &server.url()).unwrap()
    }

    async fn mock_search(server: &mut mockito::ServerGuard, body: &str) -> mockito::Mock {
        server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("channelId".into(), "UCabc".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_not_live_skips_details_lookup() {
        let mut server = mockito::Server::new_async().await;
        let _search = mock_search(&mut server, r#"{"items":[]}"#).await;
        let details = server
            .mock("GET", "/videos")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let resolution = resolve_chat_id(&client, "UCabc").await.unwrap();

        assert_eq!(resolution, ChatIdResolution::NotLive);
        details.assert_async().await;
    }

    #[tokio::test]
    async fn test_resolves_chat_id() {
        let mut server = mockito::Server::new_async().await;
        let _search = mock_search(&mut server, r#"{"items":[{"id":{"videoId":"vid42"}}]}"#).await;
        let _mock = server
            .mock("GET", "/videos")
            .match_query(Matcher::UrlEncoded("id".into(), "vid42".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items":[{"liveStreamingDetails":{"activeLiveChatId":"chat123"}}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let resolution = resolve_chat_id(&client, "UCabc").await.unwrap();

        assert_eq!(resolution, ChatIdResolution::Resolved("chat123".to_string()));
    }

    #[tokio::test]
    async fn test_details_failure_degrades_to_not_live() {
        let mut server = mockito::Server::new_async().await;
        let _search = mock_search(&mut server, r#"{"items":[{"id":{"videoId":"vid42"}}]}"#).await;
        let _mock = server
            .mock("GET", "/videos")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server);
        let resolution = resolve_chat_id(&client, "UCabc").await.unwrap();

        assert_eq!(resolution, ChatIdResolution::NotLive);
    }

    #[tokio::test]
    async fn test_video_without_chat_is_not_live() {
        let mut server = mockito::Server::new_async().await;
        let _search = mock_search(&mut server, r#"{"items":[{"id":{"videoId":"vid42"}}]}"#).await;
        let _mock = server
            .mock("GET", "/videos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items":[{"liveStreamingDetails":{"actualStartTime":"2024-01-01T00:00:00Z"}}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let resolution = resolve_chat_id(&client, "UCabc").await.unwrap();

        assert_eq!(resolution, ChatIdResolution::NotLive);
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = resolve_chat_id(&client, "UCabc").await;

        assert!(matches!(result, Err(YouTubeError::InvalidApiKey)));
    }
}
