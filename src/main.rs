use std::error::Error;

use clap::Parser;
use geodistance::GeoPoint;

#[derive(Debug, thiserror::Error)]
#[error("({0}, {1}) -> ({2}, {3}): {4}")]
struct QueryError(f64, f64, f64, f64, #[source] geodistance::DistanceError);

/// Prints the WGS-84 distance between two points as JSON.
#[derive(Parser)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Latitude of the source point
    lat1: f64,

    /// Longitude of the source point
    lon1: f64,

    /// Latitude of the target point
    lat2: f64,

    /// Longitude of the target point
    lon2: f64,

    /// Print the unrounded distance in meters instead of the JSON report
    #[arg(long)]
    meters: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let source = GeoPoint {
        lat: cli.lat1,
        lon: cli.lon1,
    };
    let target = GeoPoint {
        lat: cli.lat2,
        lon: cli.lon2,
    };

    let query_error = |e| QueryError(source.lat, source.lon, target.lat, target.lon, e);

    if cli.meters {
        let meters = geodistance::distance(source.lat, source.lon, target.lat, target.lon)
            .map_err(query_error)?;
        log::info!("{:?} -> {:?}: {} m", source, target, meters);
        println!("{}", meters);
    } else {
        let report = geodistance::DistanceReport::new(source, target).map_err(query_error)?;
        log::info!("{:?} -> {:?}: {} km", source, target, report.dist_km);
        println!("{}", report.to_json());
    }

    Ok(())
}
