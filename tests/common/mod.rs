#![allow(dead_code)]

use std::sync::Arc;

use superhero_fight::roster::{Biography, PowerStats, StaticRoster, SuperheroRecord};

const NAMES: [&str; 12] = [
    "A-Bomb",
    "Abe Sapien",
    "Batman",
    "Bane",
    "Catwoman",
    "Cyclops",
    "Deadpool",
    "Dr Doom",
    "Elektra",
    "Flash",
    "Gambit",
    "Hulk",
];

pub fn record(id: u32, name: &str, alignment: &str, stat: &str) -> SuperheroRecord {
    SuperheroRecord {
        response: "success".to_string(),
        error: None,
        id: id.to_string(),
        name: name.to_string(),
        powerstats: PowerStats {
            intelligence: stat.to_string(),
            strength: stat.to_string(),
            speed: stat.to_string(),
            durability: stat.to_string(),
            power: stat.to_string(),
            combat: stat.to_string(),
        },
        biography: Biography {
            alignment: alignment.to_string(),
        },
    }
}

/// `count` good-aligned records with varied stats, some of them `"null"`.
///
/// Keeping everyone aligned with their team keeps every filiation
/// coefficient at 1 or above, so fights stay short.
pub fn records(count: usize) -> Vec<SuperheroRecord> {
    (0..count)
        .map(|i| {
            let stat = if i % 4 == 3 {
                "null".to_string()
            } else {
                (20 + i * 7).to_string()
            };
            record(i as u32 + 1, NAMES[i % NAMES.len()], "good", &stat)
        })
        .collect()
}

pub fn roster(count: usize) -> Arc<StaticRoster> {
    Arc::new(StaticRoster::new(records(count)))
}
