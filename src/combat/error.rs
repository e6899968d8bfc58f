use thiserror::Error;

/// Validation and rule errors raised by the combat core.
///
/// None of these are retried; they point at malformed roster data or at an
/// operation that is illegal in the current combat state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombatError {
    #[error("Character must have an id")]
    MissingId,
    #[error("Character must have a name")]
    MissingName,
    #[error("Character must have an alignment")]
    MissingAlignment,
    #[error("All stats must be numbers")]
    InvalidStats,
    #[error("Filiation coefficient must be a positive finite number, got {0}")]
    InvalidFiliationCoefficient(f64),
    #[error("Fighter {0} is already ready to fight")]
    AlreadyReadyToFight(String),
    #[error("A team must contain {required} characters, got {actual}")]
    InvalidTeamSize { required: usize, actual: usize },
    #[error("A team can only have unique characters")]
    DuplicateCharacters,
    #[error("There are no more active fighters in the team!")]
    NoActiveFighters,
    #[error("A fight can only be held between {required} teams, got {actual}")]
    InvalidTeamCount { required: usize, actual: usize },
}
