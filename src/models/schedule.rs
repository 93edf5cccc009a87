//! MatchRecord, Entrant and Stage: the output of the scheduler.

use crate::models::participant::Participant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for an opponent that does not exist yet (odd bracket leftover).
pub const TBD: &str = "tbd";

/// One side of a match: a known participant, or a bracket slot still to be decided.
///
/// Serialized untagged: a participant is an `{id, label}` object, a placeholder a bare string.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entrant {
    Participant(Participant),
    /// e.g. "Winner Semifinal 1", "Runner-up Group B", "tbd".
    Placeholder(String),
}

impl Entrant {
    pub fn placeholder(description: impl Into<String>) -> Self {
        Entrant::Placeholder(description.into())
    }

    pub fn tbd() -> Self {
        Entrant::placeholder(TBD)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Entrant::Placeholder(_))
    }

    /// The concrete participant, if this slot is resolved.
    pub fn participant(&self) -> Option<&Participant> {
        match self {
            Entrant::Participant(p) => Some(p),
            Entrant::Placeholder(_) => None,
        }
    }

    /// Label for display and export.
    pub fn label(&self) -> &str {
        match self {
            Entrant::Participant(p) => &p.label,
            Entrant::Placeholder(d) => d,
        }
    }
}

impl From<Participant> for Entrant {
    fn from(p: Participant) -> Self {
        Entrant::Participant(p)
    }
}

impl std::fmt::Display for Entrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase of the tournament a match belongs to. Serialized as its display label.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Stage {
    /// Round-robin round, 1-based.
    Round(u32),
    /// Group phase, carrying the group key.
    Group(String),
    /// Knockout round above the quarterfinals, named by bracket size (16, 32, ...).
    RoundOf(usize),
    Quarterfinal,
    Semifinal,
    ThirdPlace,
    Final,
}

impl Stage {
    /// Knockout stage for a round entered by `entrants` tokens.
    pub fn for_knockout(entrants: usize) -> Self {
        match entrants {
            0..=2 => Stage::Final,
            3..=4 => Stage::Semifinal,
            5..=8 => Stage::Quarterfinal,
            n => Stage::RoundOf(n.next_power_of_two()),
        }
    }

    pub fn is_knockout(&self) -> bool {
        !matches!(self, Stage::Round(_) | Stage::Group(_))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Round(n) => write!(f, "Round {}", n),
            Stage::Group(key) => write!(f, "Group Stage (Group {})", key),
            Stage::RoundOf(n) => write!(f, "Round of {}", n),
            Stage::Quarterfinal => write!(f, "Quarterfinal"),
            Stage::Semifinal => write!(f, "Semifinal"),
            Stage::ThirdPlace => write!(f, "Third Place"),
            Stage::Final => write!(f, "Final"),
        }
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.to_string()
    }
}

impl TryFrom<String> for Stage {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        let parsed = match label.as_str() {
            "Quarterfinal" => Some(Stage::Quarterfinal),
            "Semifinal" => Some(Stage::Semifinal),
            "Third Place" => Some(Stage::ThirdPlace),
            "Final" => Some(Stage::Final),
            other => {
                if let Some(key) = other
                    .strip_prefix("Group Stage (Group ")
                    .and_then(|rest| rest.strip_suffix(')'))
                {
                    Some(Stage::Group(key.to_string()))
                } else if let Some(n) = other.strip_prefix("Round of ") {
                    n.parse().ok().map(Stage::RoundOf)
                } else {
                    other
                        .strip_prefix("Round ")
                        .and_then(|n| n.parse().ok())
                        .map(Stage::Round)
                }
            }
        };
        parsed.ok_or_else(|| format!("unknown stage label: {}", label))
    }
}

/// A single scheduled match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// 1-based round number.
    pub round: u32,
    /// 1-based position in the whole schedule; contiguous.
    pub slot: u32,
    pub home_participant: Entrant,
    pub away_participant: Entrant,
    pub scheduled_at: DateTime<Utc>,
    pub stage: Stage,
    /// Group key, set for group-phase matches only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl MatchRecord {
    /// True if both sides are the given participants, in either order.
    pub fn involves_pair(&self, a: &Participant, b: &Participant) -> bool {
        let (home, away) = (self.home_participant.participant(), self.away_participant.participant());
        (home == Some(a) && away == Some(b)) || (home == Some(b) && away == Some(a))
    }
}
