/// APIキーをマスキングしてログ出力用の文字列を生成
///
/// 先頭4文字と末尾4文字のみ残す。8文字以下のキーは全体を隠す。
///
/// # Examples
/// ```
/// use ytwee_lib::util::mask_api_key;
///
/// assert_eq!(mask_api_key("AIzaSyABC123def456GHI789"), "AIza***I789");
/// ```
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", prefix, suffix)
}

/// コマンド出力用に1行書き出す（空文字列なら何も出さない）
pub fn print_line<W: std::io::Write>(out: &mut W, value: &str) -> std::io::Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", value)
}
