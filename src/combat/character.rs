use log::debug;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::error::CombatError;
use crate::randomizer::Randomizer;

const MAX_STAMINA: u32 = 10;

const BASE_HP: f64 = 100.0;
const HP_STRENGTH_WEIGHT: f64 = 0.8;
const HP_DURABILITY_WEIGHT: f64 = 0.7;
const HP_STATS_MODIFIER: f64 = 0.5;
const HP_STAMINA_WEIGHT: f64 = 0.1;
const BASE_STAMINA: f64 = 1.0;

const FIGHT_STAT_WEIGHT: f64 = 2.0;
const FIGHT_STAT_MODIFIER: f64 = 1.1;

/// The six attributes every character carries.
///
/// Used both for the raw values received from the roster source and for
/// the coefficient-scaled values a fighter attacks with.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BaseStats {
    pub combat: f64,
    pub durability: f64,
    pub intelligence: f64,
    pub power: f64,
    pub speed: f64,
    pub strength: f64,
}

impl BaseStats {
    /// All six stats set to `value`.
    pub fn uniform(value: f64) -> Self {
        BaseStats {
            combat: value,
            durability: value,
            intelligence: value,
            power: value,
            speed: value,
            strength: value,
        }
    }

    fn all_finite(&self) -> bool {
        [
            self.combat,
            self.durability,
            self.intelligence,
            self.power,
            self.speed,
            self.strength,
        ]
        .iter()
        .all(|s| s.is_finite())
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        BaseStats {
            combat: f(self.combat),
            durability: f(self.durability),
            intelligence: f(self.intelligence),
            power: f(self.power),
            speed: f(self.speed),
            strength: f(self.strength),
        }
    }
}

/// Validated-on-construction input for a [`Character`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct CharacterSheet {
    pub id: u32,
    pub name: String,
    pub alignment: String,
    #[serde(default)]
    pub stats: BaseStats,
}

/// The three attack formulas a fighter picks from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum Attack {
    Mental,
    Strong,
    Fast,
}

impl Attack {
    pub const ALL: [Attack; 3] = [Attack::Mental, Attack::Strong, Attack::Fast];
}

/// A combat participant.
///
/// Stamina and max HP are fixed at creation. Fight stats stay at zero until
/// the owning team applies a filiation coefficient through
/// [`Character::set_fight_stats_and_attacks`].
#[derive(Clone, Debug)]
pub struct Character {
    id: u32,
    name: String,
    alignment: String,
    base_stats: BaseStats,
    stamina: u32,
    max_hp: f64,
    current_hp: f64,
    filiation_coefficient: Option<f64>,
    fight_stats: BaseStats,
}

impl Character {
    /// Builds a character, drawing its stamina from `rng`.
    pub fn new(sheet: CharacterSheet, rng: &mut dyn Randomizer) -> Result<Self, CombatError> {
        if sheet.id == 0 {
            return Err(CombatError::MissingId);
        }
        if sheet.name.is_empty() {
            return Err(CombatError::MissingName);
        }
        if sheet.alignment.is_empty() {
            return Err(CombatError::MissingAlignment);
        }
        if !sheet.stats.all_finite() {
            return Err(CombatError::InvalidStats);
        }

        let stamina = rng.next(MAX_STAMINA);
        let max_hp = initial_hp(&sheet.stats, stamina);

        Ok(Character {
            id: sheet.id,
            name: sheet.name,
            alignment: sheet.alignment,
            base_stats: sheet.stats,
            stamina,
            max_hp,
            current_hp: max_hp,
            filiation_coefficient: None,
            fight_stats: BaseStats::default(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alignment(&self) -> &str {
        &self.alignment
    }

    /// Coefficient-scaled stats; all zero until the fighter is ready.
    pub fn fight_stats(&self) -> &BaseStats {
        &self.fight_stats
    }

    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    pub fn max_hp(&self) -> f64 {
        self.max_hp
    }

    pub fn hp(&self) -> f64 {
        self.current_hp
    }

    pub fn filiation_coefficient(&self) -> Option<f64> {
        self.filiation_coefficient
    }

    pub fn is_ready_to_fight(&self) -> bool {
        self.filiation_coefficient.is_some()
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0.0
    }

    /// Derives the fight stats from the base stats and `filiation_coefficient`.
    ///
    /// Allowed once per character; the coefficient must be positive and finite.
    pub fn set_fight_stats_and_attacks(
        &mut self,
        filiation_coefficient: f64,
    ) -> Result<(), CombatError> {
        if !filiation_coefficient.is_finite() || filiation_coefficient <= 0.0 {
            return Err(CombatError::InvalidFiliationCoefficient(
                filiation_coefficient,
            ));
        }
        if self.is_ready_to_fight() {
            return Err(CombatError::AlreadyReadyToFight(self.name.clone()));
        }

        let stamina = self.stamina as f64;
        self.fight_stats = self.base_stats.map(|stat| {
            ((FIGHT_STAT_WEIGHT * stat + stamina) / FIGHT_STAT_MODIFIER) * filiation_coefficient
        });
        self.filiation_coefficient = Some(filiation_coefficient);
        debug!(
            "{} is ready to fight with filiation coefficient {}",
            self.name, filiation_coefficient
        );
        Ok(())
    }

    pub fn mental_attack(&self) -> f64 {
        const INTELLIGENCE_WEIGHT: f64 = 0.7;
        const SPEED_WEIGHT: f64 = 0.2;
        const COMBAT_WEIGHT: f64 = 0.1;
        let stats = &self.fight_stats;
        (stats.intelligence * INTELLIGENCE_WEIGHT
            + stats.speed * SPEED_WEIGHT
            + stats.combat * COMBAT_WEIGHT)
            * self.coefficient()
    }

    pub fn strong_attack(&self) -> f64 {
        const STRENGTH_WEIGHT: f64 = 0.6;
        const POWER_WEIGHT: f64 = 0.2;
        const COMBAT_WEIGHT: f64 = 0.2;
        let stats = &self.fight_stats;
        (stats.strength * STRENGTH_WEIGHT
            + stats.power * POWER_WEIGHT
            + stats.combat * COMBAT_WEIGHT)
            * self.coefficient()
    }

    pub fn fast_attack(&self) -> f64 {
        const SPEED_WEIGHT: f64 = 0.55;
        const DURABILITY_WEIGHT: f64 = 0.25;
        const STRENGTH_WEIGHT: f64 = 0.2;
        let stats = &self.fight_stats;
        (stats.speed * SPEED_WEIGHT
            + stats.durability * DURABILITY_WEIGHT
            + stats.strength * STRENGTH_WEIGHT)
            * self.coefficient()
    }

    pub fn attack(&self, attack: Attack) -> f64 {
        match attack {
            Attack::Mental => self.mental_attack(),
            Attack::Strong => self.strong_attack(),
            Attack::Fast => self.fast_attack(),
        }
    }

    /// Picks one of the three attacks uniformly and returns its damage.
    pub fn perform_random_attack(&self, rng: &mut dyn Randomizer) -> f64 {
        let index = rng.next(Attack::ALL.len() as u32) as usize % Attack::ALL.len();
        self.attack(Attack::ALL[index])
    }

    /// Removes `amount` HP, floored at zero. Returns the remaining HP.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        self.current_hp = (self.current_hp - amount.max(0.0)).max(0.0);
        self.current_hp
    }

    /// Restores HP to the value computed at creation.
    pub fn recover(&mut self) -> f64 {
        self.current_hp = self.max_hp;
        self.current_hp
    }

    fn coefficient(&self) -> f64 {
        self.filiation_coefficient.unwrap_or(0.0)
    }
}

fn initial_hp(stats: &BaseStats, stamina: u32) -> f64 {
    let weighted_stats = (stats.strength * HP_STRENGTH_WEIGHT
        + stats.durability * HP_DURABILITY_WEIGHT
        + stats.power)
        * HP_STATS_MODIFIER;
    let weighted_stamina = BASE_STAMINA + stamina as f64 * HP_STAMINA_WEIGHT;
    weighted_stats * weighted_stamina + BASE_HP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomizer::ScriptedRandomizer;

    #[test]
    fn unprepared_fighter_deals_no_damage() {
        let sheet = CharacterSheet {
            id: 3,
            name: "Storm".to_string(),
            alignment: "good".to_string(),
            stats: BaseStats::uniform(80.0),
        };
        let character = Character::new(sheet, &mut ScriptedRandomizer::repeat(4)).unwrap();
        for attack in Attack::ALL {
            assert_eq!(character.attack(attack), 0.0);
        }
    }
}
