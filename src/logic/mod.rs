//! Scheduling logic: pairings, groups, knockout bracket, orchestration, CSV.

mod export;
mod groups;
mod knockout;
mod pairing;
mod scheduler;
mod timeline;

pub use export::{participants_from_csv, schedule_to_csv, write_schedule_csv};
pub use groups::{allocate_groups, group_key, Group};
pub use knockout::{advancement_tokens, build_knockout, KnockoutRound};
pub use pairing::round_robin_rounds;
pub use scheduler::{
    generate_schedule, generate_schedule_with_rng, try_generate_schedule,
    MIN_PARTICIPANTS_FOR_GROUPS,
};
