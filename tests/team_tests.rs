use approx::assert_relative_eq;
use superhero_fight::combat::{BaseStats, Character, CharacterSheet, CombatError, Contender, Team};
use superhero_fight::randomizer::ScriptedRandomizer;

fn hero(index: u32, alignment: &str) -> Character {
    Character::new(
        CharacterSheet {
            id: index + 1,
            name: format!("hero-{}", index),
            alignment: alignment.to_string(),
            stats: BaseStats::uniform(1.0),
        },
        &mut ScriptedRandomizer::repeat(9),
    )
    .expect("valid character")
}

fn roster(alignments: [&str; 5]) -> Vec<Character> {
    alignments
        .iter()
        .enumerate()
        .map(|(i, a)| hero(i as u32, a))
        .collect()
}

fn good_team() -> Team {
    Team::new(roster(["good"; 5])).expect("valid team")
}

fn exhaust(team: &mut Team) {
    for _ in 0..5 {
        team.switch_fighter();
    }
}

#[test]
fn test_team_requires_five_characters() {
    assert_eq!(
        Team::new(vec![]).unwrap_err(),
        CombatError::InvalidTeamSize {
            required: 5,
            actual: 0
        }
    );

    let mut six = roster(["good"; 5]);
    six.push(hero(5, "good"));
    assert!(matches!(
        Team::new(six),
        Err(CombatError::InvalidTeamSize { actual: 6, .. })
    ));
}

#[test]
fn test_team_requires_unique_characters() {
    let same: Vec<Character> = (0..5).map(|_| hero(0, "good")).collect();
    let err = Team::new(same).unwrap_err();
    assert_eq!(err, CombatError::DuplicateCharacters);
    assert_eq!(err.to_string(), "A team can only have unique characters");
}

#[test]
fn test_team_name_comes_from_leader() {
    let team = good_team();
    assert_eq!(team.name(), "hero-0's team");
    assert_eq!(
        team.member_names(),
        vec!["hero-0", "hero-1", "hero-2", "hero-3", "hero-4"]
    );
}

#[test]
fn test_team_alignment_is_the_most_common() {
    let team = Team::new(roster(["bad", "good", "bad", "good", "bad"])).unwrap();
    assert_eq!(team.alignment(), "bad");

    let team = Team::new(roster(["neutral", "good", "good", "good", "bad"])).unwrap();
    assert_eq!(team.alignment(), "good");
}

#[test]
fn test_team_alignment_tie_goes_to_first_to_reach_top_count() {
    let team = Team::new(roster(["good", "bad", "bad", "good", "neutral"])).unwrap();
    assert_eq!(team.alignment(), "bad");

    let team = Team::new(roster(["-", "neutral", "neutral", "-", "good"])).unwrap();
    assert_eq!(team.alignment(), "neutral");

    let team = Team::new(roster(["neutral", "bad", "good", "bad", "good"])).unwrap();
    assert_eq!(team.alignment(), "bad");
}

#[test]
fn test_current_fighter_rotation() {
    let mut team = good_team();
    assert_eq!(team.current_fighter().unwrap().name(), "hero-0");
    assert!(!team.is_defeated());

    assert_eq!(team.switch_fighter(), Some("hero-1"));
    assert_eq!(team.current_fighter().unwrap().name(), "hero-1");
    assert!(!team.is_defeated());
}

#[test]
fn test_team_defeated_after_five_switches() {
    let mut team = good_team();
    exhaust(&mut team);

    assert!(team.is_defeated());
    assert!(team.current_fighter().is_none());
    assert_eq!(team.switch_fighter(), None);
    assert!(team.is_defeated());
}

#[test]
fn test_defeated_team_cannot_fight() {
    let mut team = good_team();
    exhaust(&mut team);
    let mut rng = ScriptedRandomizer::repeat(0);

    assert_eq!(
        team.perform_attack(&mut rng).unwrap_err(),
        CombatError::NoActiveFighters
    );
    assert_eq!(
        team.take_damage(100.0).unwrap_err().to_string(),
        "There are no more active fighters in the team!"
    );
    assert!(team.recover_current_fighter().is_err());
    assert!(team.prepare_current_fighter(&mut rng).is_err());
    assert!(!team.is_current_fighter_defeated());
}

#[test]
fn test_perform_attack_reports_attacker_and_damage() {
    let mut team = good_team();
    let report = team
        .perform_attack(&mut ScriptedRandomizer::repeat(0))
        .unwrap();
    assert_eq!(report.attacker, "hero-0");
    // coefficient 1, every fight stat 10
    assert_relative_eq!(report.damage, 10.0);
}

#[test]
fn test_take_damage_hits_current_fighter() {
    let mut team = good_team();
    let report = team.take_damage(50.0).unwrap();
    assert_eq!(report.defender, "hero-0");
    assert_relative_eq!(report.hp, 52.375);
    assert_relative_eq!(team.current_fighter().unwrap().hp(), 52.375);
    assert!(!team.is_current_fighter_defeated());

    team.take_damage(100.0).unwrap();
    assert!(team.is_current_fighter_defeated());
}

#[test]
fn test_recover_current_fighter() {
    let mut team = good_team();
    team.take_damage(50.0).unwrap();
    let hp = team.recover_current_fighter().unwrap();
    assert_relative_eq!(hp, 102.375);
    assert_relative_eq!(team.current_fighter().unwrap().hp(), 102.375);
}

#[test]
fn test_prepare_marks_fighter_ready() {
    let mut team = good_team();
    assert!(!team.current_fighter().unwrap().is_ready_to_fight());

    team.prepare_current_fighter(&mut ScriptedRandomizer::repeat(0))
        .unwrap();

    assert!(team.current_fighter().unwrap().is_ready_to_fight());
}

#[test]
fn test_prepare_draws_once_per_fighter() {
    let mut team = good_team();
    let mut rng = ScriptedRandomizer::repeat(3);

    team.prepare_current_fighter(&mut rng).unwrap();
    team.prepare_current_fighter(&mut rng).unwrap();
    assert_eq!(rng.draws(), 1);
    assert_eq!(
        team.current_fighter().unwrap().filiation_coefficient(),
        Some(4.0)
    );

    team.switch_fighter();
    team.prepare_current_fighter(&mut rng).unwrap();
    assert_eq!(rng.draws(), 2);
}

#[test]
fn test_filiation_coefficient_follows_alignment() {
    let mut team = Team::new(roster(["good", "bad", "bad", "bad", "bad"])).unwrap();
    let mut rng = ScriptedRandomizer::repeat(1);

    team.prepare_current_fighter(&mut rng).unwrap();
    assert_eq!(
        team.current_fighter().unwrap().filiation_coefficient(),
        Some(0.5)
    );

    team.switch_fighter();
    team.prepare_current_fighter(&mut rng).unwrap();
    assert_eq!(
        team.current_fighter().unwrap().filiation_coefficient(),
        Some(2.0)
    );
}

#[test]
fn test_filiation_bonus_stays_below_ten() {
    let team = good_team();
    let coefficient = team.filiation_coefficient("good", &mut ScriptedRandomizer::repeat(8));
    assert_eq!(coefficient, 9.0);
    let coefficient = team.filiation_coefficient("bad", &mut ScriptedRandomizer::repeat(9));
    assert_eq!(coefficient, 1.0);
}
