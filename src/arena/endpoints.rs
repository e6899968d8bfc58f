use log::{info, warn};
use rocket::response::content::RawHtml;
use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use super::{Arena, ArenaError};
use crate::combat::FightOutcome;
use crate::fight_log::render_fight_log;
use crate::status_messages::{new_status, Status};

/// Run a fight between two random teams and return its full record.
///
/// Pass `seed` to replay the same fight.
#[openapi]
#[get("/api/fight?<seed>")]
pub async fn get_fight(
    seed: Option<u64>,
    arena: &State<Arena>,
) -> Result<Json<FightOutcome>, BadRequest<Json<Status>>> {
    let outcome = arena.fight(seed).await.map_err(reject)?;
    if let Ok(json) = rocket::serde::json::to_string(&outcome) {
        info!("{}", json);
    }
    Ok(Json(outcome))
}

/// Run a fight and return it as a readable, line-per-event log, served as
/// `text/html`.
#[openapi]
#[get("/api/fight/log?<seed>")]
pub async fn get_fight_log(
    seed: Option<u64>,
    arena: &State<Arena>,
) -> Result<RawHtml<String>, BadRequest<Json<Status>>> {
    let outcome = arena.fight(seed).await.map_err(reject)?;
    Ok(RawHtml(render_fight_log(&outcome)))
}

#[catch(404)]
pub fn not_found() -> Json<Status> {
    new_status("Not found".to_string())
}

fn reject(error: ArenaError) -> BadRequest<Json<Status>> {
    warn!("Fight could not be held: {}", error);
    BadRequest(new_status(error.to_string()))
}
