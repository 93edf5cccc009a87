//! Participant: a team (or player) entered into the tournament.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque participant identifier supplied by the caller.
pub type ParticipantId = String;

/// A participant in the tournament. Immutable once handed to the scheduler.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub label: String,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Create a participant with a freshly generated id (UUID v4).
    pub fn with_label(label: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), label)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
