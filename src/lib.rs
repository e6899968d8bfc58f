//! # Superhero Fight
//!
//! A web service that pits two teams of five superheroes against each other
//! in a turn-based fight and reports how it went.
//!
//! ## Overview
//!
//! Characters are drawn at random from an external superhero API, split in
//! two teams and handed to the [`combat`] core, which runs the fight to
//! completion in one synchronous pass. The outcome is served as JSON or as a
//! readable log.
//!
//! ## Architecture
//!
//! The API is built using the Rocket web framework with OpenAPI documentation
//! support. Each request builds and owns its own fight; the only shared
//! state is the [`arena::Arena`], which holds the character source and the
//! turn cap.

// Rocket makes this a bit tricky to support
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate rocket;

use std::sync::Arc;

use log::warn;
use rocket::figment::Figment;
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub mod arena;
pub mod combat;
pub mod config;
pub mod fight_log;
pub mod randomizer;
pub mod roster;
pub mod status_messages;

use crate::arena::Arena;
use crate::roster::{CharacterSource, SuperheroApi};

/// Initializes and configures the Rocket web server against the superhero API.
///
/// # Returns
///
/// A configured Rocket instance ready to be launched.
///
/// # Example
///
/// ```no_run
/// use superhero_fight::rocket_initialize;
///
/// #[rocket::main]
/// async fn main() {
///     rocket_initialize().launch().await.expect("Failed to launch rocket");
/// }
/// ```
pub fn rocket_initialize() -> rocket::Rocket<rocket::Build> {
    #[allow(clippy::no_effect_underscore_binding)]
    let _ = env_logger::try_init();

    let figment = config::figment();
    let app_config = config::load(&figment);
    if app_config.api_token.is_empty() {
        warn!("SUPERHERO_API_TOKEN is not set, character lookups will be rejected");
    }

    let source = Arc::new(SuperheroApi::from_config(&app_config));
    build_rocket(figment, source, app_config.max_turns)
}

/// Same server as [`rocket_initialize`], with characters taken from `source`.
pub fn rocket_with_source(
    source: Arc<dyn CharacterSource>,
    max_turns: u32,
) -> rocket::Rocket<rocket::Build> {
    #[allow(clippy::no_effect_underscore_binding)]
    let _ = env_logger::try_init();

    build_rocket(config::figment(), source, max_turns)
}

fn build_rocket(
    figment: Figment,
    source: Arc<dyn CharacterSource>,
    max_turns: u32,
) -> rocket::Rocket<rocket::Build> {
    use crate::arena::{
        get_fight, get_fight_log, not_found, okapi_add_operation_for_get_fight_,
        okapi_add_operation_for_get_fight_log_,
    };

    rocket::custom(figment)
        .mount("/", openapi_get_routes![get_fight, get_fight_log])
        .mount("/swagger", make_swagger_ui(&get_docs()))
        .register("/", catchers![not_found])
        .manage(Arena::new(source, max_turns))
}

fn get_docs() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/openapi.json".to_string(),
        ..Default::default()
    }
}
