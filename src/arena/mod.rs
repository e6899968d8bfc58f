//! Assembles a fight from the character source and runs it to completion.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};
use rocket::futures::future::try_join_all;

use crate::combat::team::REQUIRED_TEAM_SIZE;
use crate::combat::{Character, Fight, FightOutcome, Team};
use crate::randomizer::{Randomizer, SeededRandomizer};
use crate::roster::{CharacterSource, SuperheroRecord};

pub mod endpoints;
mod error;

pub use endpoints::{
    get_fight, get_fight_log, not_found, okapi_add_operation_for_get_fight_,
    okapi_add_operation_for_get_fight_log_,
};
pub use error::ArenaError;

/// Characters drawn for one fight, both teams together.
pub const FIGHTERS_PER_FIGHT: usize = REQUIRED_TEAM_SIZE * 2;

/// Shared, request-independent fight setup managed by Rocket.
pub struct Arena {
    source: Arc<dyn CharacterSource>,
    max_turns: u32,
}

impl Arena {
    pub fn new(source: Arc<dyn CharacterSource>, max_turns: u32) -> Self {
        Arena { source, max_turns }
    }

    /// Draws ten distinct characters, splits them in two teams and fights.
    ///
    /// With a seed, the same source data always produces the same outcome.
    pub async fn fight(&self, seed: Option<u64>) -> Result<FightOutcome, ArenaError> {
        let mut rng = SeededRandomizer::from_optional_seed(seed);

        let available_ids = self.source.available_ids().await?;
        let picked_ids = pick_unique_ids(&available_ids, FIGHTERS_PER_FIGHT, &mut rng)?;
        debug!("Picked characters {:?}", picked_ids);

        let records = try_join_all(picked_ids.iter().map(|id| self.source.character(id))).await?;

        run_fight(&records, rng, self.max_turns)
    }
}

/// Draws indexes into `ids` until `count` distinct ids are collected, in
/// draw order.
pub fn pick_unique_ids(
    ids: &[String],
    count: usize,
    rng: &mut dyn Randomizer,
) -> Result<Vec<String>, ArenaError> {
    let distinct: HashSet<&String> = ids.iter().collect();
    if distinct.len() < count {
        return Err(ArenaError::NotEnoughCharacters {
            required: count,
            available: distinct.len(),
        });
    }

    let mut seen: HashSet<&String> = HashSet::with_capacity(count);
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let candidate = &ids[rng.next(ids.len() as u32) as usize % ids.len()];
        if seen.insert(candidate) {
            picked.push(candidate.clone());
        }
    }
    Ok(picked)
}

/// Builds both teams from `records` (first five, last five) and runs the
/// fight with `rng`.
pub fn run_fight<R: Randomizer>(
    records: &[SuperheroRecord],
    mut rng: R,
    max_turns: u32,
) -> Result<FightOutcome, ArenaError> {
    let mut first_team = Vec::with_capacity(records.len());
    for record in records {
        first_team.push(Character::new(record.to_sheet()?, &mut rng)?);
    }
    let second_team = first_team.split_off(first_team.len().min(REQUIRED_TEAM_SIZE));
    let teams = vec![Team::new(first_team)?, Team::new(second_team)?];

    let mut fight = Fight::new(teams, rng)?.with_max_turns(max_turns);
    fight.start()?;

    let outcome = fight.outcome();
    info!(
        "{} fought {} for {} turns",
        outcome.teams[0].name, outcome.teams[1].name, outcome.turns
    );
    Ok(outcome)
}
