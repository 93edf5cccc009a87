//! Knockout bracket skeleton: quarterfinals, semifinals, third place, final.
//!
//! Entrants stay symbolic ("Winner Semifinal 1"); substituting real teams once
//! results are known happens outside the scheduler.

use crate::logic::groups::Group;
use crate::models::{Entrant, Stage};

/// One knockout round: its stage and its pairings in bracket order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KnockoutRound {
    pub stage: Stage,
    pub pairings: Vec<(Entrant, Entrant)>,
}

/// Advancement tokens for the bracket, ordered so consecutive pairs cross groups.
///
/// `Winner Group i` is followed by `Runner-up Group i+1` (wrapping), so with two
/// groups the semifinals are A1-B2 and B1-A2.
pub fn advancement_tokens(groups: &[Group]) -> Vec<Entrant> {
    let count = groups.len();
    let mut tokens = Vec::with_capacity(count * 2);
    for (i, group) in groups.iter().enumerate() {
        tokens.extend(group.winner_token());
        tokens.extend(groups[(i + 1) % count].runner_up_token());
    }
    tokens
}

/// Build the bracket rounds from the advancement tokens.
///
/// Tokens are paired in order (0-1, 2-3, ...); an odd leftover plays "tbd". Each
/// pair sends a "Winner <Stage> <n>" token to the next round. Fewer than 4 tokens
/// go straight to a final. When the bracket opens with a 4-token semifinal, a
/// third-place match between the semifinal losers comes before the final.
pub fn build_knockout(mut tokens: Vec<Entrant>) -> Vec<KnockoutRound> {
    if tokens.is_empty() {
        return Vec::new();
    }
    if tokens.len() < 4 {
        tokens.truncate(2);
        if tokens.len() == 1 {
            tokens.push(Entrant::tbd());
        }
    }
    let third_place = tokens.len() == 4;

    let mut rounds = Vec::new();
    while tokens.len() >= 2 {
        let stage = Stage::for_knockout(tokens.len());
        let pairings = pair_consecutive(tokens);
        tokens = (1..=pairings.len())
            .map(|i| Entrant::placeholder(format!("Winner {} {}", stage, i)))
            .collect();

        let semifinal = stage == Stage::Semifinal;
        rounds.push(KnockoutRound { stage, pairings });
        if semifinal && third_place {
            rounds.push(KnockoutRound {
                stage: Stage::ThirdPlace,
                pairings: vec![(
                    Entrant::placeholder("Loser Semifinal 1"),
                    Entrant::placeholder("Loser Semifinal 2"),
                )],
            });
        }
    }
    rounds
}

fn pair_consecutive(tokens: Vec<Entrant>) -> Vec<(Entrant, Entrant)> {
    let mut pairings = Vec::with_capacity(tokens.len().div_ceil(2));
    let mut tokens = tokens.into_iter();
    while let Some(home) = tokens.next() {
        let away = tokens.next().unwrap_or_else(Entrant::tbd);
        pairings.push((home, away));
    }
    pairings
}
