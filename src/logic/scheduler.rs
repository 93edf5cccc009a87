//! Tournament scheduling: picks the game mode, lays out matches, stamps times.

use crate::logic::groups::{allocate_groups, Group};
use crate::logic::knockout::{advancement_tokens, build_knockout};
use crate::logic::pairing::{round_robin_rounds, schedule_round_robin};
use crate::logic::timeline::Timeline;
use crate::models::{
    GameMode, MatchRecord, Participant, ScheduleConfig, ScheduleError, Stage, VenueTopology,
};
use rand::Rng;
use std::collections::VecDeque;

/// Below this, group mode falls back to a plain round robin.
pub const MIN_PARTICIPANTS_FOR_GROUPS: usize = 4;

/// Generate the full schedule, shuffling groups with the thread RNG.
///
/// Never fails: fewer than 2 participants give an empty schedule, and group mode
/// with fewer than 4 participants gives the round-robin schedule instead. The
/// config is trusted; see [`try_generate_schedule`] for the validating variant.
pub fn generate_schedule(participants: &[Participant], config: &ScheduleConfig) -> Vec<MatchRecord> {
    generate_schedule_with_rng(participants, config, &mut rand::thread_rng())
}

/// Validate `config`, then generate the schedule.
pub fn try_generate_schedule(
    participants: &[Participant],
    config: ScheduleConfig,
) -> Result<Vec<MatchRecord>, ScheduleError> {
    let config = config.validate()?;
    Ok(generate_schedule(participants, &config))
}

/// Generate the full schedule with an injected RNG (only group membership depends on it).
pub fn generate_schedule_with_rng<R: Rng + ?Sized>(
    participants: &[Participant],
    config: &ScheduleConfig,
    rng: &mut R,
) -> Vec<MatchRecord> {
    if participants.len() < 2 {
        log::debug!("{} participant(s): nothing to schedule", participants.len());
        return Vec::new();
    }

    let mut timeline = Timeline::new(config);
    match config.game_mode {
        GameMode::RoundRobin => schedule_round_robin(participants, &mut timeline),
        GameMode::GroupsWithFinals if participants.len() < MIN_PARTICIPANTS_FOR_GROUPS => {
            log::debug!(
                "{} participants are too few for groups, scheduling a round robin",
                participants.len()
            );
            schedule_round_robin(participants, &mut timeline);
        }
        GameMode::GroupsWithFinals => {
            let groups = allocate_groups(participants, config.group_count, rng);
            schedule_group_stage(&groups, &mut timeline);
            schedule_knockout(&groups, &mut timeline);
        }
    }

    let matches = timeline.into_matches();
    log::info!(
        "Scheduled {} match(es) for {} participants ({:?}, {:?})",
        matches.len(),
        participants.len(),
        config.game_mode,
        config.venue_topology
    );
    matches
}

/// Group phase. Sequential: one match from each group in turn so teams rest
/// between their own matches. Parallel: round `r` of every group shares one time.
fn schedule_group_stage(groups: &[Group], timeline: &mut Timeline) {
    let group_rounds: Vec<_> = groups.iter().map(|g| round_robin_rounds(&g.members)).collect();

    match timeline.topology() {
        VenueTopology::Sequential => {
            let mut queues: Vec<VecDeque<_>> = group_rounds
                .into_iter()
                .map(|rounds| {
                    rounds
                        .into_iter()
                        .enumerate()
                        .flat_map(|(r, pairs)| {
                            pairs.into_iter().map(move |(home, away)| (r as u32 + 1, home, away))
                        })
                        .collect()
                })
                .collect();

            while queues.iter().any(|q| !q.is_empty()) {
                for (group, queue) in groups.iter().zip(queues.iter_mut()) {
                    if let Some((round, home, away)) = queue.pop_front() {
                        timeline.emit(
                            round,
                            home.into(),
                            away.into(),
                            Stage::Group(group.key.clone()),
                            Some(group.key.clone()),
                        );
                    }
                }
            }
        }
        VenueTopology::Parallel => {
            let round_count = group_rounds.iter().map(Vec::len).max().unwrap_or(0);
            for r in 0..round_count {
                for (group, rounds) in groups.iter().zip(&group_rounds) {
                    for (home, away) in rounds.get(r).into_iter().flatten() {
                        timeline.emit(
                            r as u32 + 1,
                            home.clone().into(),
                            away.clone().into(),
                            Stage::Group(group.key.clone()),
                            Some(group.key.clone()),
                        );
                    }
                }
                timeline.end_round();
            }
        }
    }
    log::debug!(
        "Group stage: {} group(s), {} round(s)",
        groups.len(),
        timeline.last_round()
    );
}

/// Knockout rounds continue the clock and the round numbering of the group stage.
fn schedule_knockout(groups: &[Group], timeline: &mut Timeline) {
    let first_round = timeline.last_round() + 1;
    for (i, ko_round) in build_knockout(advancement_tokens(groups)).into_iter().enumerate() {
        let round = first_round + i as u32;
        log::debug!("Knockout round {}: {}", round, ko_round.stage);
        for (home, away) in ko_round.pairings {
            timeline.emit(round, home, away, ko_round.stage.clone(), None);
        }
        timeline.end_round();
    }
}
