//! `houses` subcommand: page through a tile's house feed.

use crate::error::CliError;
use clap::Args;
use hexscout::cell::CellId;
use hexscout::config::ScoutConfig;
use hexscout::service::ScoutService;

#[derive(Args)]
pub struct HousesArgs {
    /// Cell identifier of the tile to browse
    #[arg(long)]
    cell: String,

    /// Number of pages to fetch
    #[arg(long, default_value = "1")]
    pages: usize,
}

pub async fn run(config: ScoutConfig, args: HousesArgs) -> Result<(), CliError> {
    let service = ScoutService::new(config)?;
    service.bootstrap().await;

    let cell = CellId::from(args.cell.as_str());
    let tile = service
        .map_snapshot()
        .tiles
        .into_iter()
        .find(|t| t.cell_id == cell)
        .ok_or_else(|| CliError::UnknownCell(args.cell.clone()))?;

    service.select_tile(Some(tile)).await;

    let mut pages = 1;
    while pages < args.pages && service.feed_snapshot().has_more {
        service.load_more_houses().await;
        pages += 1;
    }

    let feed = service.feed_snapshot();
    for house in &feed.items {
        println!("{:<40} {:>10.5} {:>10.5}  {}", house.address, house.lat, house.lng, house.url);
    }
    println!(
        "{} houses in cell {}{}",
        feed.items.len(),
        cell,
        if feed.has_more { " (more available)" } else { "" }
    );

    Ok(())
}
