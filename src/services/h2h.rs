//! Head-to-head records between pairs of teams.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{H2hRecord, H2hStats, MatchRecord};
use crate::utils::{percentage, win_rate};

/// Cell value for a team against itself
pub const DIAGONAL_CELL: &str = "-";

/// Meetings strictly before `date`, with team1's win rate (0.5 if they never met)
pub fn h2h_stats(
    matches: &[MatchRecord],
    team1: &str,
    team2: &str,
    date: DateTime<Utc>,
) -> H2hStats {
    let meetings: Vec<&MatchRecord> = matches
        .iter()
        .filter(|m| m.date < date && m.is_between(team1, team2))
        .collect();

    let team1_wins = meetings.iter().filter(|m| m.won_by(team1)).count();

    H2hStats {
        h2h_matches: meetings.len(),
        team1_h2h_win_rate: win_rate(team1_wins, meetings.len()),
    }
}

/// Full record over the whole table. `None` means the teams have never met,
/// which is distinct from meetings that were all no-results.
pub fn h2h_record<'a>(
    matches: &'a [MatchRecord],
    team1: &str,
    team2: &str,
) -> Option<H2hRecord<'a>> {
    let meetings: Vec<&MatchRecord> = matches
        .iter()
        .filter(|m| m.is_between(team1, team2))
        .collect();

    if meetings.is_empty() {
        tracing::debug!("No meetings between {} and {}", team1, team2);
        return None;
    }

    let team1_wins = meetings.iter().filter(|m| m.won_by(team1)).count();
    let team2_wins = meetings.iter().filter(|m| m.won_by(team2)).count();
    let no_result = meetings.iter().filter(|m| m.is_no_result()).count();
    let decided = team1_wins + team2_wins;

    Some(H2hRecord {
        team1: team1.to_string(),
        team2: team2.to_string(),
        total_matches: meetings.len(),
        team1_wins,
        team2_wins,
        no_result,
        team1_win_pct: percentage(team1_wins, decided),
        team2_win_pct: percentage(team2_wins, decided),
        matches: meetings,
    })
}

/// Square win-count table over every team in the match table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct H2hMatrix {
    /// Alphabetical; indexes both rows and columns
    pub teams: Vec<String>,
    pub cells: Vec<Vec<String>>,
}

impl H2hMatrix {
    pub fn cell(&self, row_team: &str, col_team: &str) -> Option<&str> {
        let row = self.index_of(row_team)?;
        let col = self.index_of(col_team)?;
        Some(self.cells[row][col].as_str())
    }

    pub fn row(&self, team: &str) -> Option<&[String]> {
        let row = self.index_of(team)?;
        Some(&self.cells[row])
    }

    fn index_of(&self, team: &str) -> Option<usize> {
        self.teams.binary_search_by(|t| t.as_str().cmp(team)).ok()
    }
}

/// Cell `(A, B)` reads `"A_wins-B_wins"`; unmet pairs read `"0-0"`.
pub fn h2h_matrix(matches: &[MatchRecord]) -> H2hMatrix {
    let teams: Vec<String> = matches
        .iter()
        .flat_map(|m| [m.team1.clone(), m.team2.clone()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // (winner, loser) -> wins
    let mut wins: HashMap<(&str, &str), usize> = HashMap::new();
    for m in matches {
        if let Some(winner) = m.winner.as_deref() {
            let loser = if winner == m.team1 { &m.team2 } else { &m.team1 };
            *wins.entry((winner, loser.as_str())).or_default() += 1;
        }
    }

    let cells = teams
        .iter()
        .map(|a| {
            teams
                .iter()
                .map(|b| {
                    if a == b {
                        DIAGONAL_CELL.to_string()
                    } else {
                        let a_wins = wins.get(&(a.as_str(), b.as_str())).copied().unwrap_or(0);
                        let b_wins = wins.get(&(b.as_str(), a.as_str())).copied().unwrap_or(0);
                        format!("{}-{}", a_wins, b_wins)
                    }
                })
                .collect::<Vec<String>>()
        })
        .collect();

    tracing::debug!("Built head-to-head matrix for {} teams", teams.len());
    H2hMatrix { teams, cells }
}
