//! Where fighters come from: the character source contract and the
//! conversion of raw superhero records into [`CharacterSheet`]s.

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use crate::arena::ArenaError;
use crate::combat::{BaseStats, CharacterSheet};

pub mod superhero_api;

pub use superhero_api::SuperheroApi;

/// Value given to stats the source leaves empty, unparseable or at zero,
/// so every character is able to fight.
pub const MIN_STAT_VALUE: f64 = 1.0;

/// Supplies character ids and the attribute record behind each id.
#[rocket::async_trait]
pub trait CharacterSource: Send + Sync {
    async fn available_ids(&self) -> Result<Vec<String>, ArenaError>;

    async fn character(&self, id: &str) -> Result<SuperheroRecord, ArenaError>;
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", default)]
pub struct PowerStats {
    pub intelligence: String,
    pub strength: String,
    pub speed: String,
    pub durability: String,
    pub power: String,
    pub combat: String,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", default)]
pub struct Biography {
    pub alignment: String,
}

/// A character as the superhero API describes it. Stats arrive as strings
/// and may be `"null"`.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", default)]
pub struct SuperheroRecord {
    pub response: String,
    pub error: Option<String>,
    pub id: String,
    pub name: String,
    pub powerstats: PowerStats,
    pub biography: Biography,
}

impl SuperheroRecord {
    /// Converts the record, defaulting missing stats to [`MIN_STAT_VALUE`].
    pub fn to_sheet(&self) -> Result<CharacterSheet, ArenaError> {
        let id = self
            .id
            .trim()
            .parse::<u32>()
            .map_err(|_| ArenaError::InvalidId(self.id.clone()))?;
        let stats = &self.powerstats;
        Ok(CharacterSheet {
            id,
            name: self.name.clone(),
            alignment: self.biography.alignment.clone(),
            stats: BaseStats {
                combat: stat_value(&stats.combat),
                durability: stat_value(&stats.durability),
                intelligence: stat_value(&stats.intelligence),
                power: stat_value(&stats.power),
                speed: stat_value(&stats.speed),
                strength: stat_value(&stats.strength),
            },
        })
    }

    pub fn is_error(&self) -> bool {
        self.response == "error"
    }
}

fn stat_value(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => MIN_STAT_VALUE,
    }
}

/// A fixed, in-memory list of records.
#[derive(Clone, Debug, Default)]
pub struct StaticRoster {
    records: Vec<SuperheroRecord>,
}

impl StaticRoster {
    pub fn new(records: Vec<SuperheroRecord>) -> Self {
        StaticRoster { records }
    }
}

#[rocket::async_trait]
impl CharacterSource for StaticRoster {
    async fn available_ids(&self) -> Result<Vec<String>, ArenaError> {
        Ok(self.records.iter().map(|r| r.id.clone()).collect())
    }

    async fn character(&self, id: &str) -> Result<SuperheroRecord, ArenaError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ArenaError::Upstream {
                id: id.to_string(),
                message: "character with given id not found".to_string(),
            })
    }
}
