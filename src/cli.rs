//! Command line surface of `rclip`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::bootstrap::config::{parse_duration, CONFIG_ENV, PASSWORD_FILE_ENV, SERVER_ENV};

#[derive(Parser)]
#[command(name = "rclip")]
#[command(about = "Remote clipboard client", long_about = None, version)]
pub struct Cli {
    /// Config file [default: <config dir>/rclip/config.toml when present]
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Paste to stdout
    #[command(after_help = "Example:\n  export RCLIP_SERVER=http://192.168.11.5:9090\n  rclip paste >hello.txt")]
    Paste(PasteArgs),
}

/// Flags of `rclip paste`. Unset values fall back to the config file, then
/// to the built-in defaults.
#[derive(Args, Default)]
pub struct PasteArgs {
    /// Address of the clipboard server
    #[arg(long, env = SERVER_ENV)]
    pub server: Option<String>,

    /// Time limit for requests, e.g. 5s, 500ms, 1m [default: 5s]
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Password for encryption/decryption
    #[arg(short, long)]
    pub password: Option<String>,

    /// Basic authentication, username:password
    #[arg(short = 'a', long)]
    pub basic_auth: Option<String>,

    /// Max data size with unit [default: 500mb]
    #[arg(long)]
    pub max_size: Option<String>,

    /// File holding the password, read only when --password is empty.
    /// An empty value counts as unset.
    #[arg(long, env = PASSWORD_FILE_ENV)]
    pub password_file: Option<OsString>,
}
