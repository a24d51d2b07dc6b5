//! Validated, immutable in-memory match and delivery tables.
//!
//! Rows keep the order the caller supplied. Recency windows ("last N
//! matches") are taken by row position, so match tables must already be
//! sorted chronologically; an out-of-order table is logged, never re-sorted.

use std::collections::HashSet;
use std::ops::Deref;

use crate::error::{Result, StatsError};
use crate::models::{Delivery, MatchId, MatchRecord};

#[derive(Debug, Clone, Default)]
pub struct MatchTable {
    rows: Vec<MatchRecord>,
}

impl MatchTable {
    pub fn new(rows: Vec<MatchRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(rows.len());
        for record in &rows {
            validate_match(record)?;
            if !seen.insert(record.id) {
                return Err(StatsError::DuplicateMatchId(record.id));
            }
        }

        if !is_chronological(&rows) {
            tracing::warn!(
                "Match table is not in chronological order; recency windows follow row order"
            );
        }

        tracing::info!("Loaded match table with {} rows", rows.len());
        Ok(Self { rows })
    }

    pub fn by_id(&self, id: MatchId) -> Option<&MatchRecord> {
        self.rows.iter().find(|m| m.id == id)
    }

    /// Position of a match in table order
    pub fn position(&self, id: MatchId) -> Option<usize> {
        self.rows.iter().position(|m| m.id == id)
    }
}

impl Deref for MatchTable {
    type Target = [MatchRecord];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeliveryTable {
    rows: Vec<Delivery>,
}

impl DeliveryTable {
    pub fn new(rows: Vec<Delivery>) -> Result<Self> {
        for (row, delivery) in rows.iter().enumerate() {
            validate_delivery(row, delivery)?;
        }

        tracing::info!("Loaded delivery table with {} rows", rows.len());
        Ok(Self { rows })
    }

    /// Deliveries of one innings, in table order
    pub fn innings(&self, match_id: MatchId, inning: u8) -> impl Iterator<Item = &Delivery> {
        self.rows
            .iter()
            .filter(move |d| d.match_id == match_id && d.inning == inning)
    }
}

impl Deref for DeliveryTable {
    type Target = [Delivery];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

pub fn is_chronological(rows: &[MatchRecord]) -> bool {
    rows.windows(2).all(|pair| pair[0].date <= pair[1].date)
}

fn validate_match(record: &MatchRecord) -> Result<()> {
    let required = [
        ("season", &record.season),
        ("team1", &record.team1),
        ("team2", &record.team2),
        ("toss_winner", &record.toss_winner),
        ("venue", &record.venue),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(StatsError::MissingField {
                match_id: record.id,
                field,
            });
        }
    }

    if record.team1 == record.team2 {
        return Err(StatsError::SameTeam {
            match_id: record.id,
            team: record.team1.clone(),
        });
    }

    let participants = [
        ("toss_winner", Some(&record.toss_winner)),
        ("winner", record.winner.as_ref()),
    ];
    for (field, team) in participants {
        if let Some(team) = team {
            if !record.involves(team) {
                return Err(StatsError::UnknownParticipant {
                    match_id: record.id,
                    field,
                    team: team.clone(),
                    team1: record.team1.clone(),
                    team2: record.team2.clone(),
                });
            }
        }
    }

    if let Some(margin) = record.result_margin {
        if !margin.is_finite() || margin < 0.0 {
            return Err(StatsError::InvalidMargin {
                match_id: record.id,
                margin,
            });
        }
    }

    Ok(())
}

fn validate_delivery(row: usize, delivery: &Delivery) -> Result<()> {
    let invalid = |message: String| StatsError::InvalidDelivery {
        row,
        match_id: delivery.match_id,
        message,
    };

    if delivery.inning == 0 {
        return Err(invalid("inning must start at 1".to_string()));
    }
    if delivery.over == 0 {
        return Err(invalid("over must start at 1".to_string()));
    }
    if delivery.batsman.trim().is_empty() {
        return Err(invalid("missing batsman".to_string()));
    }
    if delivery.bowler.trim().is_empty() {
        return Err(invalid("missing bowler".to_string()));
    }
    if delivery.batsman_runs.checked_add(delivery.extra_runs) != Some(delivery.total_runs) {
        return Err(invalid(format!(
            "total_runs {} != batsman_runs {} + extra_runs {}",
            delivery.total_runs, delivery.batsman_runs, delivery.extra_runs
        )));
    }

    Ok(())
}
