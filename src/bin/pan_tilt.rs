use clap::Parser;
use geopoint::{GeodeticPoint, Mount, config::MountConfig};
use std::path::PathBuf;
use tracing::{error, info};
use uom::si::{angle::degree, length::meter};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON file describing the mount position and orientation.
    #[arg(short, long)]
    mount: PathBuf,

    /// Target latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    latitude: f64,

    /// Target longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    longitude: f64,

    /// Target height above the ellipsoid in meters.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    height: f64,
}

fn main() {
    // Register an event subscriber that prints events to STDOUT.
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let args = Args::parse();

    let config = MountConfig::from_path(&args.mount).expect("failed to load mount config");
    info!(?config, "loaded mount config");

    let mount = Mount::from(config);
    let target = GeodeticPoint::from_degrees(args.latitude, args.longitude, args.height);

    match mount.spherical_to(target) {
        Ok(spherical) => {
            println!(
                "pan: {:.2}, tilt: {:.2}, range: {:.2}",
                spherical.azimuth().get::<degree>(),
                spherical.elevation().get::<degree>(),
                spherical.range().get::<meter>(),
            );
        }
        Err(err) => {
            error!(%err, "cannot aim at target");
            std::process::exit(1);
        }
    }
}
