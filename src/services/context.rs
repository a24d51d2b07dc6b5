use chrono::Timelike;

use crate::models::{MatchContext, MatchRecord, SeasonPhase};

/// Matches starting before this hour (UTC) count as day games
const DAY_MATCH_CUTOFF_HOUR: u32 = 16;

const PLAYOFF_MARKERS: [&str; 3] = ["Qualifier", "Eliminator", "Final"];

/// Day/night, playoff and season-phase signals for one match
pub fn match_context(record: &MatchRecord, matches: &[MatchRecord]) -> MatchContext {
    MatchContext {
        is_day_match: record.date.hour() < DAY_MATCH_CUTOFF_HOUR,
        is_playoff: is_playoff(&record.match_type),
        season_phase: season_phase(record, matches),
    }
}

/// Case-sensitive match on the playoff stage names
pub fn is_playoff(match_type: &str) -> bool {
    PLAYOFF_MARKERS
        .iter()
        .any(|marker| match_type.contains(marker))
}

/// Phase of the season the match falls in, by date rank among the season's matches
pub fn season_phase(record: &MatchRecord, matches: &[MatchRecord]) -> SeasonPhase {
    let (position, total) = matches
        .iter()
        .filter(|m| m.season == record.season)
        .fold((0, 0), |(position, total), m| {
            let position = if m.date <= record.date {
                position + 1
            } else {
                position
            };
            (position, total + 1)
        });

    SeasonPhase::from_position(position, total)
}
