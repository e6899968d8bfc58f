//! Service settings, read through Rocket's figment.
//!
//! On top of Rocket's own sources (`Rocket.toml`, `ROCKET_*`), the
//! `SUPERHERO_*` variables fill [`AppConfig`] and a bare `PORT` variable
//! sets the listening port.

use log::warn;
use rocket::figment::providers::Env;
use rocket::figment::Figment;
use rocket::serde::{Deserialize, Serialize};

use crate::combat::fight::DEFAULT_MAX_TURNS;

pub const DEFAULT_API_URL: &str = "https://superheroapi.com";

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", default)]
pub struct AppConfig {
    pub api_url: String,
    pub api_token: String,
    pub max_turns: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

pub fn figment() -> Figment {
    rocket::Config::figment()
        .merge(Env::raw().only(&["port"]).global())
        .merge(Env::prefixed("SUPERHERO_").global())
}

/// Extracts [`AppConfig`], falling back to defaults when the figment holds
/// malformed values.
pub fn load(figment: &Figment) -> AppConfig {
    match figment.extract::<AppConfig>() {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid configuration, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
