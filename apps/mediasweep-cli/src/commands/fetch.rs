//! Fetch command - persist the media inventory referenced by WordPress

use crate::config::{ConfigPaths, Settings};
use crate::error::CliResult;
use crate::output::{print_success, print_warning};
use clap::Args;
use mediasweep_core::{inventory, PublicIdExtractor};
use mediasweep_wordpress::WordPressClient;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the fetch command
#[derive(Args)]
pub struct FetchArgs {
    /// Output file for the inventory
    #[arg(long, default_value = "images.json")]
    pub output: PathBuf,
}

/// Execute the fetch command
pub async fn execute(args: FetchArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let settings = Settings::load(&paths)?;

    let client = WordPressClient::new(&settings.graphql_url)?;
    let fetch = client.fetch_all_media().await?;

    info!(
        pages = fetch.pages,
        items = fetch.nodes.len(),
        complete = fetch.complete,
        "Fetched media inventory"
    );

    let extractor = PublicIdExtractor::new(&settings.prefix)?;
    let public_ids: Vec<String> = fetch
        .nodes
        .iter()
        .filter_map(|node| node.source_url.as_deref())
        .filter_map(|url| extractor.extract(url))
        .collect();

    inventory::save(&args.output, &public_ids)?;

    if !fetch.complete {
        print_warning("the endpoint failed mid-fetch; the inventory holds partial results");
    }
    print_success(&format!(
        "Saved {} image ids to {}",
        public_ids.len(),
        args.output.display()
    ));

    Ok(())
}
