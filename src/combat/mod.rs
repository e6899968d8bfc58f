//! The combat simulation core: characters, teams and the turn loop.
//!
//! Everything in here is synchronous and owned by the caller that builds
//! the fight; randomness comes in only through a [`crate::randomizer::Randomizer`].

pub mod character;
pub mod error;
pub mod fight;
pub mod team;

pub use character::{Attack, BaseStats, Character, CharacterSheet};
pub use error::CombatError;
pub use fight::{Fight, FightOutcome, TeamSummary, Termination, TurnRecord};
pub use team::{AttackReport, Contender, DamageReport, Team};
