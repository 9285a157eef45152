use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ytwee",
    version,
    about = "relay chat messages from YouTube to WeeChat",
    arg_required_else_help = true
)]
pub struct Cli {
    /// YouTube Data API key (yt-api-key)
    #[arg(long, env = "YTAPIKEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Target channel id (yt-channel-id)
    #[arg(long, env = "YTCHANNELID", global = true)]
    pub channel_id: Option<String>,

    /// Override the API base URL (e.g. a local mock server)
    #[arg(long, env = "YTAPIBASEURL", global = true)]
    pub api_base_url: Option<String>,

    /// Path to the properties file
    #[arg(long, env = "YTWEECONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// start relaying messages
    Start {
        /// Stop after this many successful polls
        #[arg(long)]
        max_polls: Option<u64>,
    },

    /// unique id of current live stream video
    #[command(
        long_about = "Unique id of the current live stream video.\n\n\
                      This is the most expensive operation available (search costs 100 quota \
                      units), so use it with caution: call it once per stream and cache the \
                      result somewhere."
    )]
    Video,

    /// print up to 200 new chat messages
    Messages,

    /// live stream details
    Details,

    /// live stream chat unique identifier
    Chatid,

    /// print the next page token that has been cached
    Nextpage,

    /// set or get the channel ID
    Chanid {
        /// New channel id to persist
        value: Option<String>,
    },

    /// check if the channel is live
    Islive,
}
