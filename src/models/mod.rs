use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub type MatchId = u64;

/// How a decided match was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
    #[serde(rename = "runs")]
    Runs,
    #[serde(rename = "wickets")]
    Wickets,
    #[serde(rename = "tie")]
    Tie,
    #[serde(rename = "no result")]
    NoResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub date: DateTime<Utc>,
    pub season: String,
    pub team1: String,
    pub team2: String,
    pub winner: Option<String>,
    pub toss_winner: String,
    pub venue: String,
    pub match_type: String,
    pub result: Option<ResultKind>,
    pub result_margin: Option<f64>,
}

impl MatchRecord {
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// True when the two teams are `a` and `b` in either order
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }

    pub fn won_by(&self, team: &str) -> bool {
        self.winner.as_deref() == Some(team)
    }

    pub fn is_no_result(&self) -> bool {
        self.winner.is_none()
    }

    /// Winning margin expressed in runs; wicket margins are scaled by `wicket_factor`
    pub fn normalized_margin(&self, wicket_factor: f64) -> Option<f64> {
        let margin = self.result_margin?;
        match self.result {
            Some(ResultKind::Runs) => Some(margin),
            _ => Some(margin * wicket_factor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtrasType {
    Wides,
    Noballs,
    Byes,
    Legbyes,
    Penalty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub match_id: MatchId,
    pub inning: u8,
    pub over: u8,
    pub batsman: String,
    pub bowler: String,
    pub batsman_runs: u32,
    pub total_runs: u32,
    pub extra_runs: u32,
    pub extras_type: Option<ExtrasType>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_wicket: bool,
    pub player_dismissed: Option<String>,
}

impl Delivery {
    pub fn is_wide(&self) -> bool {
        self.extras_type == Some(ExtrasType::Wides)
    }

    pub fn is_no_ball(&self) -> bool {
        self.extras_type == Some(ExtrasType::Noballs)
    }
}

/// Accepts `true`/`false` as well as the `0`/`1` encoding used by ball-by-ball dumps
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u8),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "expected 0 or 1 for wicket flag, got {}",
            other
        ))),
    }
}

// Calculator outputs

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct H2hStats {
    pub h2h_matches: usize,
    pub team1_h2h_win_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct H2hRecord<'a> {
    pub team1: String,
    pub team2: String,
    pub total_matches: usize,
    pub team1_wins: usize,
    pub team2_wins: usize,
    pub no_result: usize,
    pub team1_win_pct: f64,
    pub team2_win_pct: f64,
    /// Every meeting, in table order, for drill-down
    pub matches: Vec<&'a MatchRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VenueStats {
    pub venue_matches: usize,
    pub venue_win_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub season_matches: usize,
    pub season_win_rate: f64,
    pub season_avg_win_margin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonPhase {
    Early,
    Mid,
    Late,
}

impl SeasonPhase {
    /// Classify a match by its ordinal position within the season
    pub fn from_position(position: usize, total: usize) -> Self {
        if total == 0 {
            return SeasonPhase::Mid;
        }

        let ratio = position as f64 / total as f64;
        if ratio <= 0.33 {
            SeasonPhase::Early
        } else if ratio <= 0.67 {
            SeasonPhase::Mid
        } else {
            SeasonPhase::Late
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonPhase::Early => "early",
            SeasonPhase::Mid => "mid",
            SeasonPhase::Late => "late",
        }
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchContext {
    pub is_day_match: bool,
    pub is_playoff: bool,
    pub season_phase: SeasonPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    Batsman,
    Bowler,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattingImpact {
    pub avg_runs: f64,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BowlingImpact {
    pub economy: f64,
    pub wickets_per_match: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerImpact {
    Batting(BattingImpact),
    Bowling(BowlingImpact),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InningsPhaseSummary {
    pub powerplay_runs: u32,
    pub powerplay_wickets: u32,
    pub middle_runs: u32,
    pub middle_wickets: u32,
    pub death_runs: u32,
    pub death_wickets: u32,
    pub total_extras: u32,
    pub total_runs: u32,
    pub total_wickets: u32,
}

/// One model-ready row of pre-match features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFeatures {
    pub match_id: MatchId,
    pub date: DateTime<Utc>,
    pub season: String,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub team1_form: f64,
    pub team2_form: f64,
    pub team1_toss_impact: f64,
    pub team2_toss_impact: f64,
    pub h2h_matches: usize,
    pub team1_h2h_win_rate: f64,
    pub team1_venue_matches: usize,
    pub team1_venue_win_rate: f64,
    pub team2_venue_matches: usize,
    pub team2_venue_win_rate: f64,
    pub team1_season_matches: usize,
    pub team1_season_win_rate: f64,
    pub team1_season_avg_win_margin: f64,
    pub team2_season_matches: usize,
    pub team2_season_win_rate: f64,
    pub team2_season_avg_win_margin: f64,
    pub is_day_match: bool,
    pub is_playoff: bool,
    pub season_phase: SeasonPhase,
    /// `None` for no-result matches
    pub team1_won: Option<bool>,
}
