//! CSV import of participants and CSV export of a schedule.

use crate::models::{MatchRecord, Participant, ScheduleError};
use chrono::SecondsFormat;
use serde::Deserialize;
use std::io;

const SCHEDULE_HEADER: [&str; 7] = ["slot", "round", "scheduled_at", "stage", "group", "home", "away"];

#[derive(Deserialize)]
struct ParticipantRow {
    #[serde(default)]
    id: String,
    label: String,
}

/// Read participants from `id,label` rows (header required). A blank or missing id gets a new UUID.
pub fn participants_from_csv<R: io::Read>(reader: R) -> Result<Vec<Participant>, ScheduleError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.deserialize::<ParticipantRow>()
        .map(|row| {
            let row = row?;
            Ok(if row.id.is_empty() {
                Participant::with_label(row.label)
            } else {
                Participant::new(row.id, row.label)
            })
        })
        .collect()
}

/// Write the schedule as CSV, one row per match in slot order. Entrants are written by label.
pub fn write_schedule_csv<W: io::Write>(writer: W, matches: &[MatchRecord]) -> Result<(), ScheduleError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(SCHEDULE_HEADER)?;
    for m in matches {
        wtr.write_record([
            m.slot.to_string(),
            m.round.to_string(),
            m.scheduled_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            m.stage.to_string(),
            m.group.clone().unwrap_or_default(),
            m.home_participant.label().to_string(),
            m.away_participant.label().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_schedule_csv`] into a string.
pub fn schedule_to_csv(matches: &[MatchRecord]) -> Result<String, ScheduleError> {
    let mut buf = Vec::new();
    write_schedule_csv(&mut buf, matches)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
