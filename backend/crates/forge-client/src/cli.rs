use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Forge page client: assets, local identity and email signup")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// URL the page is served from; relative endpoints and utm_* / assets_url
    /// query parameters are taken from it
    #[arg(long, global = true)]
    pub(crate) page_url: Option<String>,

    /// JSON file with the injected page settings (ASSETS_URL, IDENTITY_POST_URL, ...)
    #[arg(long, global = true)]
    pub(crate) settings: Option<PathBuf>,

    /// Directory for locally persisted state
    #[arg(long, global = true)]
    pub(crate) storage_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
