use std::collections::{HashMap, HashSet};

use log::debug;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::character::Character;
use super::error::CombatError;
use crate::randomizer::Randomizer;

pub const REQUIRED_TEAM_SIZE: usize = 5;

const MAX_FILIATION_BONUS: u32 = 9;
const BASE_FILIATION_BONUS: f64 = 1.0;
const ALIGNMENT_FACTOR: i32 = 1;
const NON_ALIGNMENT_FACTOR: i32 = -1;

/// What an attacking side reports after one attack.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct AttackReport {
    pub attacker: String,
    pub damage: f64,
}

/// What a defending side reports after absorbing one attack.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct DamageReport {
    pub defender: String,
    pub hp: f64,
}

/// One side of a fight, as seen by the turn loop.
///
/// [`Team`] is the real implementation; the trait lets a fight be driven by
/// scripted sides.
pub trait Contender {
    fn name(&self) -> &str;

    fn member_names(&self) -> Vec<String>;

    /// Applies a filiation coefficient to the active fighter unless it is
    /// already ready to fight.
    fn prepare_current_fighter(&mut self, rng: &mut dyn Randomizer) -> Result<(), CombatError>;

    fn perform_attack(&mut self, rng: &mut dyn Randomizer) -> Result<AttackReport, CombatError>;

    fn take_damage(&mut self, amount: f64) -> Result<DamageReport, CombatError>;

    fn is_current_fighter_defeated(&self) -> bool;

    fn recover_current_fighter(&mut self) -> Result<f64, CombatError>;

    /// Moves to the next fighter and returns its name, or `None` when the
    /// roster is exhausted.
    fn switch_fighter(&mut self) -> Option<&str>;

    fn is_defeated(&self) -> bool;
}

/// Five characters fighting one at a time, in roster order.
#[derive(Clone, Debug)]
pub struct Team {
    name: String,
    alignment: String,
    characters: Vec<Character>,
    current_fighter_index: usize,
}

impl Team {
    pub fn new(characters: Vec<Character>) -> Result<Self, CombatError> {
        if characters.len() != REQUIRED_TEAM_SIZE {
            return Err(CombatError::InvalidTeamSize {
                required: REQUIRED_TEAM_SIZE,
                actual: characters.len(),
            });
        }

        let ids: HashSet<u32> = characters.iter().map(Character::id).collect();
        if ids.len() != characters.len() {
            return Err(CombatError::DuplicateCharacters);
        }

        let name = format!("{}'s team", characters[0].name());
        let alignment = determine_alignment(&characters);

        Ok(Team {
            name,
            alignment,
            characters,
            current_fighter_index: 0,
        })
    }

    pub fn alignment(&self) -> &str {
        &self.alignment
    }

    pub fn current_fighter(&self) -> Option<&Character> {
        self.characters.get(self.current_fighter_index)
    }

    fn current_fighter_mut(&mut self) -> Result<&mut Character, CombatError> {
        self.characters
            .get_mut(self.current_fighter_index)
            .ok_or(CombatError::NoActiveFighters)
    }

    /// `(1 + bonus)` for a fighter sharing the team alignment, its reciprocal
    /// otherwise. The bonus is drawn in `[0, 9)` on every call.
    pub fn filiation_coefficient(&self, alignment: &str, rng: &mut dyn Randomizer) -> f64 {
        let filiation_bonus = BASE_FILIATION_BONUS + rng.next(MAX_FILIATION_BONUS) as f64;
        let factor = if alignment == self.alignment {
            ALIGNMENT_FACTOR
        } else {
            NON_ALIGNMENT_FACTOR
        };
        filiation_bonus.powi(factor)
    }
}

impl Contender for Team {
    fn name(&self) -> &str {
        &self.name
    }

    fn member_names(&self) -> Vec<String> {
        self.characters.iter().map(|c| c.name().to_string()).collect()
    }

    fn prepare_current_fighter(&mut self, rng: &mut dyn Randomizer) -> Result<(), CombatError> {
        let alignment = match self.current_fighter() {
            Some(fighter) if !fighter.is_ready_to_fight() => fighter.alignment().to_string(),
            Some(_) => return Ok(()),
            None => return Err(CombatError::NoActiveFighters),
        };
        let coefficient = self.filiation_coefficient(&alignment, rng);
        self.current_fighter_mut()?
            .set_fight_stats_and_attacks(coefficient)
    }

    fn perform_attack(&mut self, rng: &mut dyn Randomizer) -> Result<AttackReport, CombatError> {
        self.prepare_current_fighter(rng)?;
        let fighter = self.current_fighter().ok_or(CombatError::NoActiveFighters)?;
        Ok(AttackReport {
            attacker: fighter.name().to_string(),
            damage: fighter.perform_random_attack(rng),
        })
    }

    fn take_damage(&mut self, amount: f64) -> Result<DamageReport, CombatError> {
        let fighter = self.current_fighter_mut()?;
        let hp = fighter.take_damage(amount);
        Ok(DamageReport {
            defender: fighter.name().to_string(),
            hp,
        })
    }

    fn is_current_fighter_defeated(&self) -> bool {
        self.current_fighter()
            .map(Character::is_defeated)
            .unwrap_or(false)
    }

    fn recover_current_fighter(&mut self) -> Result<f64, CombatError> {
        Ok(self.current_fighter_mut()?.recover())
    }

    fn switch_fighter(&mut self) -> Option<&str> {
        if self.current_fighter_index < self.characters.len() {
            self.current_fighter_index += 1;
        }
        match self.characters.get(self.current_fighter_index) {
            Some(next) => {
                debug!("{} sends in {}", self.name, next.name());
                Some(next.name())
            }
            None => {
                debug!("{} has no fighters left", self.name);
                None
            }
        }
    }

    fn is_defeated(&self) -> bool {
        self.current_fighter_index >= self.characters.len()
    }
}

/// Most frequent alignment in the roster. On a tie the alignment that reached
/// the top count first during the tally wins.
fn determine_alignment(characters: &[Character]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<(&str, usize)> = None;
    for character in characters {
        let alignment = character.alignment();
        let count = counts.entry(alignment).or_insert(0);
        *count += 1;
        if best.map_or(true, |(_, best_count)| *count > best_count) {
            best = Some((alignment, *count));
        }
    }
    best.map(|(alignment, _)| alignment.to_string())
        .unwrap_or_default()
}
