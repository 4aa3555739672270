use std::path::PathBuf;

use archive_client::http::DEFAULT_BASE_URL;
use clap::Parser;

/// Interactive Chat Archive client: ingest a URL or file, summarise it, and
/// ask questions about it.
#[derive(Parser, Debug)]
#[command(name = "archive_cli", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the archive server.
    #[arg(long, env = "ARCHIVE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Answer requests in-process instead of calling the server.
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Directory that `save` writes into.
    #[arg(long, default_value = ".")]
    pub download_dir: PathBuf,
}
