//! `map` subcommand: submit requirements and print the scored tile table.

use crate::error::CliError;
use clap::Args;
use hexscout::cell::CellId;
use hexscout::config::ScoutConfig;
use hexscout::map_sync::MapStatus;
use hexscout::requirement::{Location, TravelMode};
use hexscout::service::ScoutService;

#[derive(Debug, Clone)]
pub struct RequirementSpec {
    address: String,
    cell: String,
    lat: f64,
    lng: f64,
    minutes: u32,
    mode: TravelMode,
}

/// Parses "ADDRESS;CELL;LAT;LNG;MINUTES;MODE".
fn parse_requirement_spec(spec: &str) -> Result<RequirementSpec, String> {
    let parts: Vec<&str> = spec.split(';').collect();
    if parts.len() != 6 {
        return Err(format!(
            "expected 6 ';'-separated fields (ADDRESS;CELL;LAT;LNG;MINUTES;MODE), got {}",
            parts.len()
        ));
    }
    let lat: f64 = parts[2]
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", parts[2]))?;
    let lng: f64 = parts[3]
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", parts[3]))?;
    let minutes: u32 = parts[4]
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration '{}'", parts[4]))?;
    if minutes == 0 {
        return Err("duration must be at least 1 minute".to_string());
    }
    let mode: TravelMode = parts[5].trim().parse()?;

    Ok(RequirementSpec {
        address: parts[0].trim().to_string(),
        cell: parts[1].trim().to_string(),
        lat,
        lng,
        minutes,
        mode,
    })
}

#[derive(Args)]
pub struct MapArgs {
    /// Requirement as "ADDRESS;CELL;LAT;LNG;MINUTES;MODE" (repeatable)
    #[arg(long = "require", value_parser = parse_requirement_spec)]
    requirements: Vec<RequirementSpec>,

    /// Maximum number of tiles to print
    #[arg(long, default_value = "20")]
    top: usize,
}

pub async fn run(config: ScoutConfig, args: MapArgs) -> Result<(), CliError> {
    let service = ScoutService::new(config)?;

    for spec in &args.requirements {
        let mut requirement = service.add_requirement();
        requirement.duration_minutes = spec.minutes;
        requirement.travel_mode = spec.mode;
        requirement.location = Some(Location {
            address: spec.address.clone(),
            cell_id: CellId::from(spec.cell.as_str()),
            lat: spec.lat,
            lng: spec.lng,
        });
        service.update_requirement(requirement).await;
    }
    service.bootstrap().await;

    if let Some(error) = service.submission_error() {
        eprintln!("Warning: last requirement submission failed: {}", error);
    }

    let snapshot = service.map_snapshot();
    if snapshot.status == MapStatus::Failed && snapshot.tiles.is_empty() {
        return Err(CliError::MapUnavailable);
    }

    let mut tiles = snapshot.tiles;
    tiles.sort_by(|a, b| b.mean_score.total_cmp(&a.mean_score));

    println!("{:<20} {:>8}  per-requirement", "cell", "mean");
    for tile in tiles.iter().take(args.top) {
        let scores: Vec<String> = tile
            .requirement_scores
            .iter()
            .map(|s| format!("{:.0}", s.score))
            .collect();
        println!(
            "{:<20} {:>8.1}  [{}]",
            tile.cell_id,
            tile.mean_score,
            scores.join(", ")
        );
    }
    println!("{} tiles scored", tiles.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requirement_spec() {
        let spec =
            parse_requirement_spec("12 Smith St;abcd1;-34.92;138.60;30;drive").unwrap();
        assert_eq!(spec.address, "12 Smith St");
        assert_eq!(spec.cell, "abcd1");
        assert_eq!(spec.minutes, 30);
        assert_eq!(spec.mode, TravelMode::Drive);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(parse_requirement_spec("12 Smith St;abcd1").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(parse_requirement_spec("a;c;north;138.6;30;drive").is_err());
        assert!(parse_requirement_spec("a;c;-34.9;138.6;0;drive").is_err());
        assert!(parse_requirement_spec("a;c;-34.9;138.6;30;teleport").is_err());
    }
}
