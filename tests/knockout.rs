//! Integration tests for the knockout bracket builder.

use tournament_scheduler::{advancement_tokens, build_knockout, group_key, Entrant, Group, Participant, Stage};

fn tokens(n: usize) -> Vec<Entrant> {
    (1..=n).map(|i| Entrant::placeholder(format!("Seed {i}"))).collect()
}

fn stages(rounds: &[tournament_scheduler::KnockoutRound]) -> Vec<Stage> {
    rounds.iter().map(|r| r.stage.clone()).collect()
}

#[test]
fn four_tokens_get_semis_third_place_and_final() {
    let rounds = build_knockout(tokens(4));
    assert_eq!(
        stages(&rounds),
        vec![Stage::Semifinal, Stage::ThirdPlace, Stage::Final]
    );
    assert_eq!(rounds[0].pairings.len(), 2);
    assert_eq!(
        rounds[0].pairings[1],
        (Entrant::placeholder("Seed 3"), Entrant::placeholder("Seed 4"))
    );
    assert_eq!(
        rounds[2].pairings,
        vec![(
            Entrant::placeholder("Winner Semifinal 1"),
            Entrant::placeholder("Winner Semifinal 2")
        )]
    );
}

#[test]
fn eight_tokens_have_no_third_place() {
    let rounds = build_knockout(tokens(8));
    assert_eq!(
        stages(&rounds),
        vec![Stage::Quarterfinal, Stage::Semifinal, Stage::Final]
    );
    assert_eq!(rounds[0].pairings.len(), 4);
    assert_eq!(rounds[1].pairings.len(), 2);
    assert_eq!(
        rounds[1].pairings[1],
        (
            Entrant::placeholder("Winner Quarterfinal 3"),
            Entrant::placeholder("Winner Quarterfinal 4")
        )
    );
}

#[test]
fn odd_leftover_plays_tbd() {
    let rounds = build_knockout(tokens(5));
    assert_eq!(
        stages(&rounds),
        vec![Stage::Quarterfinal, Stage::Semifinal, Stage::Final]
    );
    assert_eq!(rounds[0].pairings[2], (Entrant::placeholder("Seed 5"), Entrant::tbd()));
    assert_eq!(
        rounds[1].pairings[1],
        (Entrant::placeholder("Winner Quarterfinal 3"), Entrant::tbd())
    );
    assert!(rounds[0].pairings[2].1.is_placeholder());
}

#[test]
fn fewer_than_four_tokens_collapse_to_final() {
    let rounds = build_knockout(tokens(3));
    assert_eq!(stages(&rounds), vec![Stage::Final]);
    assert_eq!(
        rounds[0].pairings,
        vec![(Entrant::placeholder("Seed 1"), Entrant::placeholder("Seed 2"))]
    );

    let single = build_knockout(tokens(1));
    assert_eq!(single[0].pairings, vec![(Entrant::placeholder("Seed 1"), Entrant::tbd())]);

    assert!(build_knockout(Vec::new()).is_empty());
}

#[test]
fn large_brackets_are_named_by_size() {
    let rounds = build_knockout(tokens(12));
    assert_eq!(
        stages(&rounds),
        vec![Stage::RoundOf(16), Stage::Quarterfinal, Stage::Semifinal, Stage::Final]
    );
    assert_eq!(rounds[1].pairings[0].0, Entrant::placeholder("Winner Round of 16 1"));
}

#[test]
fn tokens_cross_groups() {
    let group = |i: usize, size: usize| Group {
        key: group_key(i),
        members: (0..size)
            .map(|j| Participant::new(format!("{i}-{j}"), format!("Team {i}-{j}")))
            .collect(),
    };
    let groups = vec![group(0, 3), group(1, 3), group(2, 1)];
    let labels: Vec<String> = advancement_tokens(&groups)
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Winner Group A",
            "Runner-up Group B",
            "Winner Group B",
            "Winner Group C",
            "Runner-up Group A",
        ]
    );
}

#[test]
fn group_keys_continue_past_z() {
    assert_eq!(group_key(0), "A");
    assert_eq!(group_key(25), "Z");
    assert_eq!(group_key(26), "AA");
    assert_eq!(group_key(27), "AB");
}
