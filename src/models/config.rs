//! ScheduleConfig and the errors raised when validating it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a config or moving schedules in and out of CSV.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// A config field is out of range.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: &'static str,
    },
    /// Reading or writing CSV failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// Flushing exported CSV failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// How the tournament is played.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Everyone plays everyone once.
    #[default]
    RoundRobin,
    /// Round robin inside groups, then a knockout bracket.
    GroupsWithFinals,
}

/// How many matches may run at the same time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueTopology {
    /// One shared venue: one match per time slot.
    #[default]
    Sequential,
    /// Several venues: a whole round shares one time slot.
    Parallel,
}

/// Longest allowed match plus break: one day.
pub const MAX_SLOT_MINUTES: u32 = 24 * 60;

fn default_group_count() -> usize {
    2
}

/// Everything the scheduler needs besides the participant list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub game_mode: GameMode,
    pub venue_topology: VenueTopology,
    pub match_duration_minutes: u32,
    pub break_duration_minutes: u32,
    pub start_timestamp: DateTime<Utc>,
    /// Only read in `GroupsWithFinals` mode.
    #[serde(default = "default_group_count")]
    pub group_count: usize,
}

impl ScheduleConfig {
    pub fn new(
        game_mode: GameMode,
        venue_topology: VenueTopology,
        match_duration_minutes: u32,
        break_duration_minutes: u32,
        start_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            game_mode,
            venue_topology,
            match_duration_minutes,
            break_duration_minutes,
            start_timestamp,
            group_count: default_group_count(),
        }
    }

    pub fn with_group_count(self, group_count: usize) -> Self {
        Self {
            group_count,
            ..self
        }
    }

    /// Distance between two consecutive time slots: match plus break.
    pub fn slot_length(&self) -> Duration {
        Duration::minutes(
            i64::from(self.match_duration_minutes) + i64::from(self.break_duration_minutes),
        )
    }

    /// Check field ranges. The scheduler itself trusts its input; call this at the boundary.
    pub fn validate(self) -> Result<Self, ScheduleError> {
        if self.match_duration_minutes == 0 {
            return Err(ScheduleError::InvalidConfiguration {
                field: "matchDurationMinutes",
                reason: "must be positive",
            });
        }
        if self.break_duration_minutes == 0 {
            return Err(ScheduleError::InvalidConfiguration {
                field: "breakDurationMinutes",
                reason: "must be positive",
            });
        }
        if u64::from(self.match_duration_minutes) + u64::from(self.break_duration_minutes)
            > u64::from(MAX_SLOT_MINUTES)
        {
            return Err(ScheduleError::InvalidConfiguration {
                field: "matchDurationMinutes",
                reason: "plus breakDurationMinutes must not exceed one day",
            });
        }
        if self.game_mode == GameMode::GroupsWithFinals && self.group_count < 2 {
            return Err(ScheduleError::InvalidConfiguration {
                field: "groupCount",
                reason: "must be at least 2",
            });
        }
        Ok(self)
    }
}
