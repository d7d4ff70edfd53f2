use std::{io, path::PathBuf};

use clap::Parser;
use drive_ls::{list, Config, DriveClient, ListFilesArgs, Pathfinder};
use log::warn;

/// List files in Google Drive
#[derive(Parser)]
#[command(name = "drive-ls")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Drive search query, e.g. "name contains 'report'"
    #[arg(short, long, default_value = "trashed = false and 'me' in owners")]
    query: String,

    /// Sort order, e.g. "folder,modifiedTime desc,name"
    #[arg(long, default_value = "")]
    order: String,

    /// Predefined filter replacing --query:
    /// 1 shared files, 2 shared files and folders, 3 shared starred files
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=3))]
    selection: i64,

    /// Maximum number of files to list, 0 for all
    #[arg(short, long, default_value_t = 30)]
    max: i64,

    /// Width of the name column, 0 for no truncation
    #[arg(long, default_value_t = 40)]
    name_width: usize,

    /// Do not print the header row
    #[arg(long)]
    no_header: bool,

    /// Show sizes in bytes
    #[arg(long)]
    bytes: bool,

    /// Show absolute paths instead of names
    #[arg(long)]
    absolute: bool,

    /// JSON file holding the access token, ignored when GDRIVE_ACCESS_TOKEN is set
    #[arg(long, default_value = "gd_config.json")]
    config: PathBuf,
}

impl From<&Cli> for ListFilesArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            query: cli.query.clone(),
            sort_order: cli.order.clone(),
            selection: cli.selection,
            max_files: cli.max,
            name_width: cli.name_width,
            skip_header: cli.no_header,
            size_in_bytes: cli.bytes,
            abs_path: cli.absolute,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::from_env_or_file(&cli.config).await?;
    if !config.is_valid()? {
        warn!("Access token has expired, requests will likely be rejected");
    }

    let client = DriveClient::from_config(&config);
    let mut pathfinder = Pathfinder::new(&client);
    let mut out = io::stdout().lock();

    list(&client, &mut pathfinder, &ListFilesArgs::from(&cli), &mut out).await?;

    Ok(())
}
