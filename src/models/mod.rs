//! Data structures for the scheduler: participants, configuration, match records.

mod config;
mod participant;
mod schedule;

pub use config::{GameMode, ScheduleConfig, ScheduleError, VenueTopology, MAX_SLOT_MINUTES};
pub use participant::{Participant, ParticipantId};
pub use schedule::{Entrant, MatchRecord, Stage, TBD};
