//! Command line reward calculator

use anyhow::Context;
use clap::Parser;
use go_green_rewards::achievements::Achievement;
use go_green_rewards::goals::MonthlyGoals;
use go_green_rewards::profile::UserProfile;
use go_green_rewards::*;
use log::info;
use serde::Serialize;

/// Compute the rewards earned for a sustainable trip.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Start of the trip as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    from: Coordinate,

    /// End of the trip as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    to: Coordinate,

    /// Current points total of the user
    #[arg(long, requires = "carbon")]
    points: Option<u64>,

    /// Current kg CO2 saved by the user
    #[arg(long, requires = "trips")]
    carbon: Option<f64>,

    /// Current number of trips logged by the user
    #[arg(long, requires = "points")]
    trips: Option<u32>,
}

#[derive(Serialize)]
struct ProfileReport {
    profile: UserProfile,
    goals: goals::GoalProgress,
    achievements: Vec<String>,
}

#[derive(Serialize)]
struct Report {
    trip: TripComputation,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<ProfileReport>,
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env()
        .context("Failed to load configuration from environment")?;

    // Try to load log configuration from the provided log file.
    // Will default to stdout debug logging if the file can not be loaded.
    if let Err(e) = load_logger_config_from_file(config.log_config.as_str()).await {
        log::error!("(main) {}", e);
    }

    info!("(main) Computing trip {} -> {}.", args.from, args.to);

    let trip = plan_trip(Some(args.from), Some(args.to))?;

    let updated = match (args.points, args.carbon, args.trips) {
        (Some(points), Some(carbon), Some(trips)) => {
            let profile = UserProfile::new(points, carbon, trips).record_trip(&trip);
            let goals = MonthlyGoals::from(&config).progress(&profile);
            let achievements = Achievement::earned(&profile)
                .iter()
                .map(Achievement::to_string)
                .collect();
            Some(ProfileReport {
                profile,
                goals,
                achievements,
            })
        }
        _ => None,
    };

    let report = Report { trip, updated };
    println!("{}", serde_json::to_string_pretty(&report)?);

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    Ok(())
}
