//! eBay Finding API CLI binary.
//!
//! A command-line interface for searching eBay listings.

use clap::Parser;
use ebay_finding::cli::{Cli, Command, Format};
use ebay_finding::{FindingClient, FindingError, Item, PrettyPrint};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set EBAY_APP_ID environment variable or pass --app-id");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> ebay_finding::Result<FindingClient> {
    let client = match cli.app_id.as_deref() {
        Some(app_id) => FindingClient::new(app_id)?,
        None => {
            return Err(FindingError::ConfigMissing(
                "an application id is required".to_string(),
            ))
        }
    };

    Ok(match cli.endpoint.as_deref() {
        Some(endpoint) => client.with_endpoint(endpoint),
        None => client,
    })
}

fn run(client: &FindingClient, cli: &Cli) -> ebay_finding::Result<()> {
    let format = cli.output_format();
    match &cli.command {
        Command::Search { query, bin_only } => {
            let response = client.find_items_by_keywords(
                query.site,
                &query.keywords(),
                query.count,
                *bin_only,
            )?;
            output(&response, &response.items, &response.timestamp, format)
        }
        Command::Sold { query } => {
            let response =
                client.find_completed_items(query.site, &query.keywords(), query.count)?;
            output(&response, &response.items, &response.timestamp, format)
        }
    }
}

fn output<T>(response: &T, items: &[Item], timestamp: &str, format: Format) -> ebay_finding::Result<()>
where
    T: Serialize + PrettyPrint,
{
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(response)?),
        Format::Pretty => println!("{}", response.pretty_print()),
        Format::Table => {
            let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
            println!("{}", Table::new(rows));
            println!("\n{} items ({timestamp})", items.len());
        }
    }
    Ok(())
}

// Table row type for non-JSON output

#[derive(Tabled)]
struct ItemRow {
    id: String,
    title: String,
    price: String,
    shipping: String,
    #[tabled(rename = "buy it now")]
    bin: String,
    location: String,
}

impl From<&Item> for ItemRow {
    fn from(i: &Item) -> Self {
        Self {
            id: i.item_id.clone(),
            title: i.title.clone(),
            price: format!("{:.2}", i.current_price),
            shipping: format!("{:.2}", i.shipping_price),
            bin: if i.has_buy_it_now() {
                format!("{:.2}", i.bin_price)
            } else {
                String::new()
            },
            location: i.location.clone(),
        }
    }
}
