//! Round-robin pairings by the circle method (Berger tables).

use crate::logic::timeline::Timeline;
use crate::models::{Participant, Stage};

/// Compute all rounds of a single round robin over `items`.
///
/// `items[0]` stays fixed while the others rotate around it. An odd count gets a
/// bye appended; pairings against the bye are dropped, so every round has
/// `items.len() / 2` pairings and every unordered pair occurs exactly once.
/// Fewer than 2 items yields no rounds.
pub fn round_robin_rounds<T: Clone>(items: &[T]) -> Vec<Vec<(T, T)>> {
    let n = items.len();
    if n < 2 {
        return Vec::new();
    }
    // Index `n` is the bye when n is odd.
    let m = n + n % 2;
    let ring = m - 1;

    (0..ring)
        .map(|r| {
            let mut indices = Vec::with_capacity(m / 2);
            indices.push((0, r + 1));
            for k in 1..m / 2 {
                let home = (r + ring - k) % ring + 1;
                let away = (r + k) % ring + 1;
                indices.push((home, away));
            }
            indices
                .into_iter()
                .filter(|&(home, away)| home < n && away < n)
                .map(|(home, away)| (items[home].clone(), items[away].clone()))
                .collect()
        })
        .collect()
}

/// Schedule a plain round robin: one round after the other, labelled "Round N".
pub(crate) fn schedule_round_robin(participants: &[Participant], timeline: &mut Timeline) {
    for (r, pairs) in round_robin_rounds(participants).into_iter().enumerate() {
        let round = r as u32 + 1;
        for (home, away) in pairs {
            timeline.emit(round, home.into(), away.into(), Stage::Round(round), None);
        }
        timeline.end_round();
    }
}
