use std::io::Write;

use crate::util::print_line;
use crate::{AppContext, AppError};

/// 保存済みのページトークンを表示（通信しない）
pub fn nextpage<W: Write>(ctx: &AppContext, out: &mut W) -> Result<(), AppError> {
    let token = ctx
        .store
        .properties()
        .chat_next_page
        .as_deref()
        .unwrap_or_default();
    print_line(out, token)?;
    Ok(())
}

/// チャンネルIDの取得・設定
pub fn chanid<W: Write>(
    ctx: &mut AppContext,
    out: &mut W,
    value: Option<&str>,
) -> Result<(), AppError> {
    match value {
        Some(channel_id) => {
            ctx.store.set_channel_id(channel_id)?;
            ctx.settings.channel_id = Some(channel_id.to_string());
        }
        None => {
            print_line(out, ctx.settings.channel_id.as_deref().unwrap_or_default())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::properties::PropertyStore;
    use std::fs;
    use tempfile::tempdir;

    // 通信しないコマンドなので接続先は使われない
    const UNUSED_URL: &str = "http://127.0.0.1:9";

    #[test]
    fn test_nextpage_prints_cached_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("properties.json");
        fs::write(&path, r#"{"yt-chat-next-page":"tok7"}"#).unwrap();

        let ctx = context(UNUSED_URL, &path);
        let mut out = Vec::new();
        nextpage(&ctx, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "tok7\n");
    }

    #[test]
    fn test_nextpage_empty_when_unset() {
        let dir = tempdir().unwrap();
        let ctx = context(UNUSED_URL, &dir.path().join("properties.json"));
        let mut out = Vec::new();
        nextpage(&ctx, &mut out).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_chanid_set_then_get() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("properties.json");

        let mut ctx = context(UNUSED_URL, &path);
        let mut out = Vec::new();
        chanid(&mut ctx, &mut out, Some("UCnew")).unwrap();
        assert!(out.is_empty());

        chanid(&mut ctx, &mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "UCnew\n");

        let reopened = PropertyStore::open(&path).unwrap();
        assert_eq!(reopened.properties().channel_id.as_deref(), Some("UCnew"));
    }
}
