//! Group allocation for the group phase.

use crate::models::{Entrant, Participant};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One group of the group phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// "A", "B", ... in allocation order.
    pub key: String,
    pub members: Vec<Participant>,
}

impl Group {
    /// Placeholder for the group winner; `None` for an empty group.
    pub fn winner_token(&self) -> Option<Entrant> {
        (!self.members.is_empty()).then(|| Entrant::placeholder(format!("Winner Group {}", self.key)))
    }

    /// Placeholder for the runner-up; only groups of two or more have one.
    pub fn runner_up_token(&self) -> Option<Entrant> {
        (self.members.len() >= 2)
            .then(|| Entrant::placeholder(format!("Runner-up Group {}", self.key)))
    }
}

/// Spreadsheet-style key for the group at `index`: A..Z, then AA, AB, ...
pub fn group_key(index: usize) -> String {
    let mut letters = Vec::new();
    let mut i = index + 1;
    while i > 0 {
        i -= 1;
        letters.push(char::from(b'A' + (i % 26) as u8));
        i /= 26;
    }
    letters.iter().rev().collect()
}

/// Split participants into `group_count` groups whose sizes differ by at most one.
///
/// 1. Shuffle the input with `rng` (no positional bias from input order).
/// 2. The first `n % group_count` groups get `n / group_count + 1` members, the rest `n / group_count`.
///
/// Pass a seeded RNG for reproducible groups. `group_count == 0` yields no groups.
pub fn allocate_groups<R: Rng + ?Sized>(
    participants: &[Participant],
    group_count: usize,
    rng: &mut R,
) -> Vec<Group> {
    if group_count == 0 {
        return Vec::new();
    }
    let mut pool = participants.to_vec();
    pool.shuffle(rng);

    let base = pool.len() / group_count;
    let remainder = pool.len() % group_count;
    let mut pool = pool.into_iter();

    (0..group_count)
        .map(|i| {
            let size = base + usize::from(i < remainder);
            Group {
                key: group_key(i),
                members: pool.by_ref().take(size).collect(),
            }
        })
        .collect()
}
