use rocket::figment::Figment;
use serde::Deserialize;

use crate::internal_error::InternalResult;

pub const DEFAULT_DATABASE: &str = "taskboard.db";

/// Application settings read from the same figment Rocket is configured with,
/// so `Rocket.toml` and `ROCKET_DATABASE` both work.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            database: default_database(),
        }
    }
}

impl AppConfig {
    pub fn from_figment(figment: &Figment) -> InternalResult<AppConfig> {
        Ok(figment.extract()?)
    }
}
