//! Reconcile command - diff the inventory against Cloudinary and delete
//! unreferenced resources in bounded batches

use crate::config::{ConfigPaths, Settings};
use crate::error::CliResult;
use crate::output::{print_examples, print_key_value, print_success, print_warning};
use clap::Args;
use mediasweep_cloudinary::{CloudinaryClient, DELETE_BATCH_SIZE, MAX_LIST_RESULTS};
use mediasweep_core::{inventory, report, ReconciliationReport};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Arguments for the reconcile command
#[derive(Args)]
pub struct ReconcileArgs {
    /// Inventory file written by the fetch command
    #[arg(long, default_value = "images.json")]
    pub input: PathBuf,

    /// Directory for the timestamped report files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Compute and write the reports without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON summary of a reconcile run
#[derive(Serialize)]
struct ReconcileSummary {
    source_count: usize,
    remote_count: usize,
    remote_truncated: bool,
    in_use: usize,
    not_in_use: usize,
    missing_in_cloudinary: usize,
    deleted: usize,
    failed_batches: usize,
    dry_run: bool,
    report_files: Vec<String>,
}

/// Execute the reconcile command
pub async fn execute(args: ReconcileArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let settings = Settings::load(&paths)?;

    let source = inventory::load(&args.input)?;
    info!(count = source.len(), "Loaded source inventory");

    let client = match settings.api_host.as_deref() {
        Some(host) => CloudinaryClient::with_api_host(host, settings.credentials.clone())?,
        None => CloudinaryClient::new(settings.credentials.clone())?,
    };
    let listing = client
        .list_resources(&settings.prefix, MAX_LIST_RESULTS)
        .await?;

    let remote_truncated = listing.truncated();
    if remote_truncated {
        // Known limitation: the listing is a single request capped at
        // MAX_LIST_RESULTS. Resources beyond the cap are invisible here and
        // would be treated as unreferenced on a later, larger account.
        warn!(
            cap = MAX_LIST_RESULTS,
            fetched = listing.resources.len(),
            "Remote listing hit the request cap; resources beyond it are not compared"
        );
        print_warning(&format!(
            "Cloudinary returned the maximum of {MAX_LIST_RESULTS} resources; \
             the comparison may be incomplete"
        ));
    }

    let remote: Vec<String> = listing
        .resources
        .into_iter()
        .map(|r| r.public_id)
        .collect();
    info!(count = remote.len(), "Fetched remote resource listing");

    let result = ReconciliationReport::compute(&source, &remote);

    let timestamp = report::timestamp_now();
    let report_paths = report::write_report(&args.out_dir, &result, &timestamp)?;

    let (deleted, failed_batches) = if args.dry_run || result.not_in_use.is_empty() {
        (0, 0)
    } else {
        delete_unreferenced(&client, &result.not_in_use).await
    };

    if args.json {
        let summary = ReconcileSummary {
            source_count: source.len(),
            remote_count: remote.len(),
            remote_truncated,
            in_use: result.in_use.len(),
            not_in_use: result.not_in_use.len(),
            missing_in_cloudinary: result.missing_in_remote.len(),
            deleted,
            failed_batches,
            dry_run: args.dry_run,
            report_files: vec![
                report_paths.in_use.display().to_string(),
                report_paths.to_delete.display().to_string(),
                report_paths.missing.display().to_string(),
            ],
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    print_key_value("Images in WordPress", &source.len().to_string());
    print_key_value("Resources in Cloudinary", &remote.len().to_string());
    print_key_value("Resources in use", &result.in_use.len().to_string());
    print_key_value("Resources not in use", &result.not_in_use.len().to_string());
    print_key_value(
        "Missing in Cloudinary",
        &result.missing_in_remote.len().to_string(),
    );
    println!();
    print_examples(
        "WordPress images not found in Cloudinary",
        &result.missing_in_remote,
        10,
    );

    print_key_value("Report: in use", &report_paths.in_use.display().to_string());
    print_key_value(
        "Report: to delete",
        &report_paths.to_delete.display().to_string(),
    );
    print_key_value(
        "Report: missing",
        &report_paths.missing.display().to_string(),
    );
    println!();

    if args.dry_run {
        print_success(&format!(
            "Dry run: {} resources would be deleted",
            result.not_in_use.len()
        ));
    } else if result.not_in_use.is_empty() {
        print_success("Nothing to delete");
    } else if failed_batches > 0 {
        print_warning(&format!(
            "Deleted {deleted} resources; {failed_batches} batch(es) failed (see log)"
        ));
    } else {
        print_success(&format!("Deleted {deleted} unreferenced resources"));
    }

    Ok(())
}

/// Delete the not-in-use set in batches of [`DELETE_BATCH_SIZE`].
///
/// A failed batch is logged and skipped; the loop always advances to the
/// next batch. Returns the number of ids submitted in successful calls and
/// the number of failed batches.
async fn delete_unreferenced(client: &CloudinaryClient, public_ids: &[String]) -> (usize, usize) {
    info!(
        count = public_ids.len(),
        batch_size = DELETE_BATCH_SIZE,
        "Deleting unreferenced resources"
    );

    let mut deleted = 0;
    let mut failed_batches = 0;

    for batch in public_ids.chunks(DELETE_BATCH_SIZE) {
        match client.delete_resources(batch).await {
            Ok(response) => {
                deleted += batch.len();
                if response.partial {
                    warn!(batch_len = batch.len(), "Delete response marked partial");
                }
            }
            Err(e) => {
                failed_batches += 1;
                error!(batch_len = batch.len(), error = %e, "Delete batch failed");
            }
        }
    }

    (deleted, failed_batches)
}
