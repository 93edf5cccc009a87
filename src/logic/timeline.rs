//! Virtual clock and slot counter shared by every stage of one schedule.

use crate::models::{Entrant, MatchRecord, ScheduleConfig, Stage, VenueTopology};
use chrono::{DateTime, Duration, Utc};

/// Collects matches in emission order, numbering slots and stamping times.
///
/// Sequential topology moves the clock after every match; parallel topology only
/// when a round is closed with [`Timeline::end_round`].
pub(crate) struct Timeline {
    cursor: DateTime<Utc>,
    step: Duration,
    topology: VenueTopology,
    matches: Vec<MatchRecord>,
}

impl Timeline {
    pub(crate) fn new(config: &ScheduleConfig) -> Self {
        Self {
            cursor: config.start_timestamp,
            step: config.slot_length(),
            topology: config.venue_topology,
            matches: Vec::new(),
        }
    }

    pub(crate) fn topology(&self) -> VenueTopology {
        self.topology
    }

    /// Append a match at the current cursor.
    pub(crate) fn emit(
        &mut self,
        round: u32,
        home: Entrant,
        away: Entrant,
        stage: Stage,
        group: Option<String>,
    ) {
        let slot = self.matches.len() as u32 + 1;
        self.matches.push(MatchRecord {
            round,
            slot,
            home_participant: home,
            away_participant: away,
            scheduled_at: self.cursor,
            stage,
            group,
        });
        if self.topology == VenueTopology::Sequential {
            self.advance();
        }
    }

    /// Close a round of simultaneous matches.
    pub(crate) fn end_round(&mut self) {
        if self.topology == VenueTopology::Parallel {
            self.advance();
        }
    }

    /// Past chrono's last representable instant the cursor stays where it is.
    fn advance(&mut self) {
        match self.cursor.checked_add_signed(self.step) {
            Some(next) => self.cursor = next,
            None => log::warn!(
                "Schedule clock overflowed at {} (slot {}), holding time",
                self.cursor,
                self.matches.len()
            ),
        }
    }

    /// Highest round number emitted so far (0 when empty).
    pub(crate) fn last_round(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    pub(crate) fn into_matches(self) -> Vec<MatchRecord> {
        self.matches
    }
}
