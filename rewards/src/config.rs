//! # Config
//!
//! Define and implement config options for module

use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// path to log configuration YAML file
    pub log_config: String,

    /// maximum number of users shown on the leaderboard
    pub leaderboard_size: usize,

    /// monthly points target used for goal progress
    pub monthly_points_goal: u64,

    /// monthly CO2 savings target (kg) used for goal progress
    pub monthly_carbon_goal_kg: f64,

    /// monthly number of logged trips used for goal progress
    pub monthly_trips_goal: u32,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            log_config: String::from("log4rs.yaml"),
            leaderboard_size: 10,
            monthly_points_goal: 1000,
            monthly_carbon_goal_kg: 50.0,
            monthly_trips_goal: 20,
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("log_config", default_config.log_config)?
            .set_default("leaderboard_size", default_config.leaderboard_size as u64)?
            .set_default("monthly_points_goal", default_config.monthly_points_goal)?
            .set_default(
                "monthly_carbon_goal_kg",
                default_config.monthly_carbon_goal_kg,
            )?
            .set_default("monthly_trips_goal", default_config.monthly_trips_goal)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;
    use serial_test::serial;

    const ENV_KEYS: [&str; 5] = [
        "LOG_CONFIG",
        "LEADERBOARD_SIZE",
        "MONTHLY_POINTS_GOAL",
        "MONTHLY_CARBON_GOAL_KG",
        "MONTHLY_TRIPS_GOAL",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_config_from_default() {
        crate::get_log_handle().await;
        ut_info!("(test_config_from_default) Start.");

        let config = Config::default();

        assert_eq!(config.log_config, String::from("log4rs.yaml"));
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.monthly_points_goal, 1000);
        assert_eq!(config.monthly_carbon_goal_kg, 50.0);
        assert_eq!(config.monthly_trips_goal, 20);

        ut_info!("(test_config_from_default) Success.");
    }

    #[tokio::test]
    #[serial]
    async fn test_config_from_env() {
        crate::get_log_handle().await;
        ut_info!("(test_config_from_env) Start.");

        std::env::set_var("LOG_CONFIG", "config_file.yaml");
        std::env::set_var("LEADERBOARD_SIZE", "25");
        std::env::set_var("MONTHLY_POINTS_GOAL", "2500");
        std::env::set_var("MONTHLY_CARBON_GOAL_KG", "75.5");
        std::env::set_var("MONTHLY_TRIPS_GOAL", "30");

        let config = Config::try_from_env();
        clear_env();
        assert!(config.is_ok());
        let config = config.unwrap();

        assert_eq!(config.log_config, String::from("config_file.yaml"));
        assert_eq!(config.leaderboard_size, 25);
        assert_eq!(config.monthly_points_goal, 2500);
        assert_eq!(config.monthly_carbon_goal_kg, 75.5);
        assert_eq!(config.monthly_trips_goal, 30);

        ut_info!("(test_config_from_env) Success.");
    }

    #[tokio::test]
    #[serial]
    async fn test_config_from_env_falls_back_to_defaults() {
        crate::get_log_handle().await;
        clear_env();

        let config = Config::try_from_env().unwrap();
        assert_eq!(config.log_config, String::from("log4rs.yaml"));
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.monthly_trips_goal, 20);
    }

    #[tokio::test]
    #[serial]
    async fn test_config_from_env_rejects_invalid_number() {
        crate::get_log_handle().await;
        clear_env();
        std::env::set_var("LEADERBOARD_SIZE", "lots");

        let config = Config::try_from_env();
        clear_env();
        assert!(config.is_err());
    }
}
