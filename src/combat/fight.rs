use log::{debug, info};
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::error::CombatError;
use super::team::{AttackReport, Contender, DamageReport, Team};
use crate::randomizer::{Randomizer, SeededRandomizer};

pub const REQUIRED_TEAMS: usize = 2;
pub const DEFAULT_MAX_TURNS: u32 = 10_000;

/// One attack/defense exchange.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct TurnRecord {
    pub id: u32,
    pub attacker: String,
    pub damage: f64,
    pub defender: String,
    pub hp: f64,
}

/// Why a fight stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum Termination {
    /// The defending team ran out of fighters.
    Knockout,
    /// The turn cap was reached with both teams standing.
    TurnLimit,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct TeamSummary {
    pub name: String,
    pub members: Vec<String>,
}

/// Serializable result of a completed fight.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct FightOutcome {
    pub turns: u32,
    pub teams: Vec<TeamSummary>,
    /// Name of the winning team, `None` when the turn cap ended the fight.
    pub winner: Option<String>,
    pub termination: Option<Termination>,
    pub history: Vec<TurnRecord>,
}

/// Two contenders trading blows until one of them has no fighters left.
///
/// `teams[0]` attacks first. The randomizer is owned by the fight and lent
/// to the teams for every filiation and attack draw.
pub struct Fight<T: Contender = Team, R: Randomizer = SeededRandomizer> {
    teams: [T; REQUIRED_TEAMS],
    rng: R,
    turn: u32,
    current_team_index: usize,
    termination: Option<Termination>,
    history: Vec<TurnRecord>,
    max_turns: u32,
}

impl<T: Contender, R: Randomizer> Fight<T, R> {
    pub fn new(teams: Vec<T>, rng: R) -> Result<Self, CombatError> {
        let teams: [T; REQUIRED_TEAMS] = teams.try_into().map_err(|rejected: Vec<T>| {
            CombatError::InvalidTeamCount {
                required: REQUIRED_TEAMS,
                actual: rejected.len(),
            }
        })?;

        Ok(Fight {
            teams,
            rng,
            turn: 1,
            current_team_index: 0,
            termination: None,
            history: Vec::new(),
            max_turns: DEFAULT_MAX_TURNS,
        })
    }

    /// Caps the number of turns; a cap of zero is treated as one.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn teams(&self) -> &[T; REQUIRED_TEAMS] {
        &self.teams
    }

    pub fn active_team_index(&self) -> usize {
        self.current_team_index
    }

    pub fn active_team(&self) -> &T {
        &self.teams[self.current_team_index]
    }

    pub fn inactive_team(&self) -> &T {
        &self.teams[self.next_team_index()]
    }

    /// The team that landed the final blow; `None` while ongoing or after a
    /// turn-limit stop.
    pub fn winner(&self) -> Option<&T> {
        match self.termination {
            Some(Termination::Knockout) => Some(self.active_team()),
            _ => None,
        }
    }

    pub fn turn_history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Plays turns until the fight ends. Does nothing on a finished fight.
    pub fn start(&mut self) -> Result<(), CombatError> {
        while !self.is_finished() {
            self.play_turn()?;
        }
        info!(
            "Fight ended on turn {} ({:?}), winner: {}",
            self.turn,
            self.termination,
            self.winner().map(Contender::name).unwrap_or("nobody")
        );
        Ok(())
    }

    /// Plays one turn and returns its record, or `None` if the fight is over.
    pub fn play_turn(&mut self) -> Result<Option<TurnRecord>, CombatError> {
        if self.is_finished() {
            return Ok(None);
        }

        let [first, second] = &mut self.teams;
        let (attacking_team, defending_team) = if self.current_team_index == 0 {
            (first, second)
        } else {
            (second, first)
        };

        attacking_team.prepare_current_fighter(&mut self.rng)?;
        let AttackReport { attacker, damage } = attacking_team.perform_attack(&mut self.rng)?;
        let DamageReport { defender, hp } = defending_team.take_damage(damage)?;

        if defending_team.is_current_fighter_defeated() {
            attacking_team.recover_current_fighter()?;
            defending_team.switch_fighter();
        }

        if defending_team.is_defeated() {
            self.termination = Some(Termination::Knockout);
        }

        let record = TurnRecord {
            id: self.turn,
            attacker,
            damage,
            defender,
            hp,
        };
        debug!(
            "Turn {}: {} hits {} for {:.2}, {:.2} hp left",
            record.id, record.attacker, record.defender, record.damage, record.hp
        );
        self.history.push(record.clone());

        if !self.is_finished() {
            if self.turn >= self.max_turns {
                self.termination = Some(Termination::TurnLimit);
            } else {
                self.current_team_index = self.next_team_index();
                self.turn += 1;
            }
        }

        Ok(Some(record))
    }

    pub fn outcome(&self) -> FightOutcome {
        FightOutcome {
            turns: self.turn,
            teams: self
                .teams
                .iter()
                .map(|team| TeamSummary {
                    name: team.name().to_string(),
                    members: team.member_names(),
                })
                .collect(),
            winner: self.winner().map(|team| team.name().to_string()),
            termination: self.termination,
            history: self.history.clone(),
        }
    }

    fn next_team_index(&self) -> usize {
        (self.current_team_index + 1) % REQUIRED_TEAMS
    }
}
