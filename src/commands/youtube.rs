use std::io::Write;

use crate::util::print_line;
use crate::youtube::{
    poller::{poll_messages, ChatRelay, RelayStop},
    resolver::{chat_id_for_video, resolve_chat_id},
    state::ChatCursor,
    types::{ChatIdResolution, ChatMessage},
};
use crate::{AppContext, AppError};

/// 配信中の動画IDを表示（配信していなければ何も出さない）
pub async fn video<W: Write>(ctx: &AppContext, out: &mut W) -> Result<(), AppError> {
    let channel_id = ctx.settings.require_channel_id()?;
    if let Some(video_id) = ctx.client.search_live_video(channel_id).await? {
        print_line(out, &video_id)?;
    }
    Ok(())
}

pub async fn islive<W: Write>(ctx: &AppContext, out: &mut W) -> Result<(), AppError> {
    let channel_id = ctx.settings.require_channel_id()?;
    let live = ctx.client.search_live_video(channel_id).await?.is_some();
    print_line(out, if live { "true" } else { "false" })?;
    Ok(())
}

pub async fn chatid<W: Write>(ctx: &AppContext, out: &mut W) -> Result<(), AppError> {
    let channel_id = ctx.settings.require_channel_id()?;
    if let ChatIdResolution::Resolved(chat_id) = resolve_chat_id(&ctx.client, channel_id).await? {
        print_line(out, &chat_id)?;
    }
    Ok(())
}

/// 配信メタデータをJSONで表示
pub async fn details<W: Write>(ctx: &AppContext, out: &mut W) -> Result<(), AppError> {
    let channel_id = ctx.settings.require_channel_id()?;
    let Some(video_id) = ctx.client.search_live_video(channel_id).await? else {
        return Ok(());
    };

    let details = ctx.client.get_stream_details(&video_id).await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?;
    Ok(())
}

/// 新着メッセージを1ページ表示し、ページトークンを保存
///
/// 表示に成功してからトークンを保存する（失敗時は次回同じページを取り直す）。
pub async fn messages<W: Write>(ctx: &mut AppContext, out: &mut W) -> Result<(), AppError> {
    let Some(mut cursor) = resume_cursor(ctx).await? else {
        return Ok(());
    };

    let page = poll_messages(&ctx.client, &cursor.live_chat_id, &cursor.next_page_token).await?;
    write_messages(out, &page.messages)?;

    cursor.advance(&page);
    ctx.store
        .set_chat_cursor(&cursor.live_chat_id, &cursor.next_page_token)?;
    Ok(())
}

/// 連続リレー
pub async fn start<W: Write>(
    ctx: &mut AppContext,
    out: &mut W,
    max_polls: Option<u64>,
) -> Result<(), AppError> {
    let Some(cursor) = resume_cursor(ctx).await? else {
        log::info!("Channel is not live, nothing to relay");
        return Ok(());
    };

    let store = &mut ctx.store;
    let mut relay = ChatRelay::new(&ctx.client, cursor, max_polls);

    let stop = relay
        .run(|page, cursor| -> Result<(), AppError> {
            write_messages(out, &page.messages)?;
            store.set_chat_cursor(&cursor.live_chat_id, &cursor.next_page_token)?;
            Ok(())
        })
        .await?;

    if stop == RelayStop::Interrupted {
        log::info!(
            "Relay interrupted after {} polls",
            relay.cursor().poll_count
        );
    }
    Ok(())
}

/// チャットIDを解決し、保存済みトークンから再開するカーソルを作る
async fn resume_cursor(ctx: &AppContext) -> Result<Option<ChatCursor>, AppError> {
    let channel_id = ctx.settings.require_channel_id()?;

    let Some(video_id) = ctx.client.search_live_video(channel_id).await? else {
        return Ok(None);
    };
    let ChatIdResolution::Resolved(chat_id) = chat_id_for_video(&ctx.client, &video_id).await?
    else {
        return Ok(None);
    };

    let props = ctx.store.properties();
    Ok(Some(ChatCursor::resume(
        chat_id,
        props.chat_id.as_deref(),
        props.chat_next_page.as_deref(),
    )))
}

fn write_messages<W: Write>(out: &mut W, messages: &[ChatMessage]) -> std::io::Result<()> {
    for message in messages {
        writeln!(out, "{}", message.display_line())?;
    }
    Ok(())
}
