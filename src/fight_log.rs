//! Renders a finished fight as a play-by-play text log.

use crate::combat::{FightOutcome, TeamSummary, TurnRecord};

const TURN_SEPARATOR: &str = "------------------";

pub fn render_fight_log(outcome: &FightOutcome) -> String {
    let mut events = start_messages(outcome);
    for record in &outcome.history {
        events.extend(turn_messages(record));
    }
    events.extend(end_messages(outcome));
    events.join("\n")
}

fn start_messages(outcome: &FightOutcome) -> Vec<String> {
    let empty = TeamSummary {
        name: String::new(),
        members: Vec::new(),
    };
    let team_a = outcome.teams.first().unwrap_or(&empty);
    let team_b = outcome.teams.get(1).unwrap_or(&empty);
    vec![
        "A new fight is starting!".to_string(),
        format!("{} is fighting {}!", team_a.name, team_b.name),
        format!(
            "Fighting for {} are: {}.",
            team_a.name,
            team_a.members.join(", ")
        ),
        format!("For {} we have {}.", team_b.name, team_b.members.join(", ")),
        "Get ready!!!".to_string(),
    ]
}

fn turn_messages(record: &TurnRecord) -> Vec<String> {
    let mut events = vec![
        TURN_SEPARATOR.to_string(),
        format!("Starting turn {}", record.id),
        format!(
            "{} hits {} for {}!",
            record.attacker,
            record.defender,
            record.damage.ceil()
        ),
        format!("{}'s remaining hp is {}.", record.defender, record.hp.ceil()),
    ];
    if record.hp == 0.0 {
        events.push(format!("{} has been defeated!", record.defender));
    }
    events.push(format!("Ending turn {}", record.id));
    events.push(TURN_SEPARATOR.to_string());
    events
}

fn end_messages(outcome: &FightOutcome) -> Vec<String> {
    let verdict = match &outcome.winner {
        Some(winner) => format!("The winner is {}", winner),
        None => "Nobody won, the turn limit was reached".to_string(),
    };
    vec![
        format!("The fight has ended on turn {}!", outcome.turns),
        verdict,
    ]
}
