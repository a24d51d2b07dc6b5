use thiserror::Error;

use crate::models::MatchId;

/// Input-validation and export failures. Sparse history is never an error.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Match {match_id}: missing required field `{field}`")]
    MissingField { match_id: MatchId, field: &'static str },

    #[error("Duplicate match id: {0}")]
    DuplicateMatchId(MatchId),

    #[error("Match {match_id}: {team} cannot play itself")]
    SameTeam { match_id: MatchId, team: String },

    #[error("Match {match_id}: {field} `{team}` is neither {team1} nor {team2}")]
    UnknownParticipant {
        match_id: MatchId,
        field: &'static str,
        team: String,
        team1: String,
        team2: String,
    },

    #[error("Match {match_id}: invalid result margin {margin}")]
    InvalidMargin { match_id: MatchId, margin: f64 },

    #[error("Delivery #{row} (match {match_id}): {message}")]
    InvalidDelivery {
        row: usize,
        match_id: MatchId,
        message: String,
    },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
