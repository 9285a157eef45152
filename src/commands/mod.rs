mod settings;
mod youtube;

use std::io::Write;

use crate::cli::Command;
use crate::{AppContext, AppError};

pub async fn dispatch<W: Write>(
    command: Command,
    ctx: &mut AppContext,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Start { max_polls } => youtube::start(ctx, out, max_polls).await,
        Command::Video => youtube::video(ctx, out).await,
        Command::Messages => youtube::messages(ctx, out).await,
        Command::Details => youtube::details(ctx, out).await,
        Command::Chatid => youtube::chatid(ctx, out).await,
        Command::Islive => youtube::islive(ctx, out).await,
        Command::Nextpage => settings::nextpage(ctx, out),
        Command::Chanid { value } => settings::chanid(ctx, out, value.as_deref()),
    }
}
