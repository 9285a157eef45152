use super::{
    client::YouTubeClient,
    errors::YouTubeError,
    state::ChatCursor,
    types::{ChatMessage, MessagePage},
};
use crate::config::MAX_MESSAGES_PER_PAGE;
use tokio::time::sleep;

/// ライブチャットメッセージを1ページ取得
///
/// `cursor` が空文字列なら先頭から取得する。サーバーが次のトークンを返さなかった場合は
/// `cursor` をそのまま返す。失敗時は何も返さないので、呼び出し側のトークンは進まない。
pub async fn poll_messages(
    client: &YouTubeClient,
    chat_id: &str,
    cursor: &str,
) -> Result<MessagePage, YouTubeError> {
    let page_token = Some(cursor).filter(|c| !c.is_empty());
    let response = client.get_live_chat_messages(chat_id, page_token).await?;

    let messages: Vec<ChatMessage> = response
        .items
        .into_iter()
        .take(MAX_MESSAGES_PER_PAGE as usize)
        .map(ChatMessage::from)
        .collect();

    let next_cursor = response
        .next_page_token
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| cursor.to_string());

    Ok(MessagePage {
        messages,
        next_cursor,
        polling_interval_millis: response.polling_interval_millis,
    })
}

/// リレーループの終了理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStop {
    /// Ctrl-Cで停止
    Interrupted,
    /// 指定回数のポーリングを終えた
    PollLimit,
}

/// 連続リレー（`start` コマンド）
///
/// 1リクエストずつ順番に実行し、ページ間はサーバー推奨の間隔だけ待つ。
/// エラー時はリトライせずにそのまま返す。
pub struct ChatRelay<'a> {
    client: &'a YouTubeClient,
    cursor: ChatCursor,
    max_polls: Option<u64>,
}

impl<'a> ChatRelay<'a> {
    pub fn new(client: &'a YouTubeClient, cursor: ChatCursor, max_polls: Option<u64>) -> Self {
        Self {
            client,
            cursor,
            max_polls,
        }
    }

    pub fn cursor(&self) -> &ChatCursor {
        &self.cursor
    }

    fn limit_reached(&self) -> bool {
        self.max_polls
            .is_some_and(|max| self.cursor.poll_count >= max)
    }

    /// ループを実行
    ///
    /// `on_page` は成功したページごとに、進めた後のカーソルと一緒に呼ばれる。
    pub async fn run<F, E>(&mut self, mut on_page: F) -> Result<RelayStop, E>
    where
        F: FnMut(&MessagePage, &ChatCursor) -> Result<(), E>,
        E: From<YouTubeError>,
    {
        log::info!("Relay started for chat {}", self.cursor.live_chat_id);

        // ハンドラは一度だけ登録する（処理中のCtrl-Cも次の待機で拾える）
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            if self.limit_reached() {
                log::info!("Relay stopped after {} polls", self.cursor.poll_count);
                return Ok(RelayStop::PollLimit);
            }

            let page = poll_messages(
                self.client,
                &self.cursor.live_chat_id,
                &self.cursor.next_page_token,
            )
            .await
            .map_err(|e| {
                log::error!("Polling error: {}", e);
                e
            })?;

            self.cursor.advance(&page);
            on_page(&page, &self.cursor)?;

            if self.limit_reached() {
                log::info!("Relay stopped after {} polls", self.cursor.poll_count);
                return Ok(RelayStop::PollLimit);
            }

            let interval = self.cursor.polling_interval();
            log::debug!("Next poll in {:?}", interval);

            tokio::select! {
                _ = &mut ctrl_c => {
                    log::info!("Interrupted, stopping relay");
                    return Ok(RelayStop::Interrupted);
                }
                _ = sleep(interval) => {}
            }
        }
    }
}
