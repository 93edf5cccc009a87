//! Tournament scheduler: round-robin and group-stage-with-finals fixture generation.

pub mod logic;
pub mod models;

pub use logic::{
    advancement_tokens, allocate_groups, build_knockout, generate_schedule,
    generate_schedule_with_rng, group_key, participants_from_csv, round_robin_rounds,
    schedule_to_csv, try_generate_schedule, write_schedule_csv, Group, KnockoutRound,
    MIN_PARTICIPANTS_FOR_GROUPS,
};
pub use models::{
    Entrant, GameMode, MatchRecord, Participant, ParticipantId, ScheduleConfig, ScheduleError,
    Stage, VenueTopology, MAX_SLOT_MINUTES, TBD,
};
