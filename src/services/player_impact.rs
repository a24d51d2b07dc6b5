use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::config::StatsConfig;
use crate::models::{
    BattingImpact, BowlingImpact, Delivery, MatchId, MatchRecord, PlayerImpact, PlayerRole,
};
use crate::utils::tail;

/// Strike rate reported when a batsman has no legal balls in the window
pub const DEFAULT_STRIKE_RATE: f64 = 100.0;
/// Economy reported when a bowler has no legal balls in the window
pub const DEFAULT_ECONOMY: f64 = 8.0;

const BALLS_PER_OVER: f64 = 6.0;

/// Recent batting and bowling form from ball-by-ball data.
///
/// The window is the last `match_window` matches of the whole table before
/// the cutoff (not only matches the player appeared in), by row order.
pub struct PlayerImpactCalculator {
    match_window: usize,
}

impl PlayerImpactCalculator {
    pub fn new() -> Self {
        Self::from_config(&StatsConfig::default())
    }

    pub fn from_config(config: &StatsConfig) -> Self {
        Self {
            match_window: config.player_window,
        }
    }

    pub fn player_impact(
        &self,
        deliveries: &[Delivery],
        matches: &[MatchRecord],
        player: &str,
        date: DateTime<Utc>,
        role: PlayerRole,
    ) -> PlayerImpact {
        match role {
            PlayerRole::Batsman => {
                PlayerImpact::Batting(self.batting_impact(deliveries, matches, player, date))
            }
            PlayerRole::Bowler => {
                PlayerImpact::Bowling(self.bowling_impact(deliveries, matches, player, date))
            }
        }
    }

    pub fn batting_impact(
        &self,
        deliveries: &[Delivery],
        matches: &[MatchRecord],
        player: &str,
        date: DateTime<Utc>,
    ) -> BattingImpact {
        let window = self.recent_match_ids(matches, date);
        let faced: Vec<&Delivery> = deliveries
            .iter()
            .filter(|d| d.batsman == player && window.contains(&d.match_id))
            .collect();

        if faced.is_empty() {
            return BattingImpact {
                avg_runs: 0.0,
                strike_rate: DEFAULT_STRIKE_RATE,
            };
        }

        let runs: u32 = faced.iter().map(|d| d.batsman_runs).sum();
        let balls = faced.iter().filter(|d| !d.is_wide()).count();
        let innings = distinct_matches(&faced);

        let strike_rate = if balls > 0 {
            runs as f64 / balls as f64 * 100.0
        } else {
            DEFAULT_STRIKE_RATE
        };

        tracing::debug!(
            "Batting impact for {}: {} runs off {} balls in {} matches",
            player,
            runs,
            balls,
            innings
        );

        BattingImpact {
            avg_runs: runs as f64 / innings as f64,
            strike_rate,
        }
    }

    pub fn bowling_impact(
        &self,
        deliveries: &[Delivery],
        matches: &[MatchRecord],
        player: &str,
        date: DateTime<Utc>,
    ) -> BowlingImpact {
        let window = self.recent_match_ids(matches, date);
        let bowled: Vec<&Delivery> = deliveries
            .iter()
            .filter(|d| d.bowler == player && window.contains(&d.match_id))
            .collect();

        if bowled.is_empty() {
            return BowlingImpact {
                economy: DEFAULT_ECONOMY,
                wickets_per_match: 0.0,
            };
        }

        let conceded: u32 = bowled.iter().map(|d| d.total_runs).sum();
        let balls = bowled.iter().filter(|d| !d.is_no_ball()).count();
        // Any dismissal on the bowler's delivery, run-outs included
        let wickets = bowled
            .iter()
            .filter(|d| d.player_dismissed.is_some())
            .count();
        let appearances = distinct_matches(&bowled);

        let economy = if balls > 0 {
            conceded as f64 / (balls as f64 / BALLS_PER_OVER)
        } else {
            DEFAULT_ECONOMY
        };

        tracing::debug!(
            "Bowling impact for {}: {} runs off {} balls, {} wickets in {} matches",
            player,
            conceded,
            balls,
            wickets,
            appearances
        );

        BowlingImpact {
            economy,
            wickets_per_match: wickets as f64 / appearances as f64,
        }
    }

    fn recent_match_ids(&self, matches: &[MatchRecord], date: DateTime<Utc>) -> HashSet<MatchId> {
        let before: Vec<MatchId> = matches
            .iter()
            .filter(|m| m.date < date)
            .map(|m| m.id)
            .collect();

        tail(&before, self.match_window).iter().copied().collect()
    }
}

impl Default for PlayerImpactCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn distinct_matches(deliveries: &[&Delivery]) -> usize {
    deliveries
        .iter()
        .map(|d| d.match_id)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtrasType;
    use crate::test_support::{at, ball, fixture};

    fn matches() -> Vec<MatchRecord> {
        vec![
            fixture(1, "2024-04-01", "MI", "CSK", Some("MI")),
            fixture(2, "2024-04-05", "MI", "RCB", Some("RCB")),
            fixture(3, "2024-04-09", "MI", "KKR", Some("MI")),
        ]
    }

    fn delivery(match_id: u64, batsman: &str, bowler: &str, runs: u32) -> Delivery {
        let mut d = ball(match_id, 1, 1, runs);
        d.batsman = batsman.to_string();
        d.bowler = bowler.to_string();
        d
    }

    fn wide(match_id: u64, batsman: &str, bowler: &str) -> Delivery {
        let mut d = delivery(match_id, batsman, bowler, 0);
        d.extras_type = Some(ExtrasType::Wides);
        d.extra_runs = 1;
        d.total_runs = 1;
        d
    }

    fn no_ball(match_id: u64, batsman: &str, bowler: &str, runs: u32) -> Delivery {
        let mut d = delivery(match_id, batsman, bowler, runs);
        d.extras_type = Some(ExtrasType::Noballs);
        d.extra_runs = 1;
        d.total_runs = runs + 1;
        d
    }

    fn dismissal(match_id: u64, batsman: &str, bowler: &str) -> Delivery {
        let mut d = delivery(match_id, batsman, bowler, 0);
        d.is_wicket = true;
        d.player_dismissed = Some(batsman.to_string());
        d
    }

    #[test]
    fn test_batting_defaults_without_deliveries() {
        let calc = PlayerImpactCalculator::new();
        let impact = calc.batting_impact(&[], &matches(), "Rohit", at("2024-05-01"));
        assert_eq!(
            impact,
            BattingImpact {
                avg_runs: 0.0,
                strike_rate: 100.0,
            }
        );
    }

    #[test]
    fn test_batting_excludes_wides_from_balls_faced() {
        let calc = PlayerImpactCalculator::new();
        let deliveries = vec![
            delivery(1, "Rohit", "Chahar", 4),
            delivery(1, "Rohit", "Chahar", 6),
            wide(1, "Rohit", "Chahar"),
            delivery(2, "Rohit", "Siraj", 2),
            delivery(2, "Rohit", "Siraj", 0),
            delivery(2, "Kishan", "Siraj", 1),
        ];

        let impact = calc.batting_impact(&deliveries, &matches(), "Rohit", at("2024-05-01"));
        assert_eq!(impact.avg_runs, 6.0);
        assert_eq!(impact.strike_rate, 300.0);
    }

    #[test]
    fn test_batting_only_wides_uses_default_strike_rate() {
        let calc = PlayerImpactCalculator::new();
        let deliveries = vec![wide(1, "Rohit", "Chahar")];
        let impact = calc.batting_impact(&deliveries, &matches(), "Rohit", at("2024-05-01"));
        assert_eq!(impact.avg_runs, 0.0);
        assert_eq!(impact.strike_rate, 100.0);
    }

    #[test]
    fn test_batting_respects_match_window() {
        let config = StatsConfig {
            player_window: 1,
            ..StatsConfig::default()
        };
        let calc = PlayerImpactCalculator::from_config(&config);
        let deliveries = vec![
            delivery(1, "Rohit", "Chahar", 4),
            delivery(3, "Rohit", "Narine", 1),
        ];

        let impact = calc.batting_impact(&deliveries, &matches(), "Rohit", at("2024-05-01"));
        assert_eq!(impact.avg_runs, 1.0);

        // Before match 3 the single-match window is match 2, where Rohit did not bat.
        let earlier = calc.batting_impact(&deliveries, &matches(), "Rohit", at("2024-04-08"));
        assert_eq!(earlier.avg_runs, 0.0);
        assert_eq!(earlier.strike_rate, 100.0);
    }

    #[test]
    fn test_bowling_defaults_without_deliveries() {
        let calc = PlayerImpactCalculator::new();
        let impact = calc.bowling_impact(&[], &matches(), "Bumrah", at("2024-05-01"));
        assert_eq!(
            impact,
            BowlingImpact {
                economy: 8.0,
                wickets_per_match: 0.0,
            }
        );
    }

    #[test]
    fn test_bowling_economy_excludes_no_balls() {
        let calc = PlayerImpactCalculator::new();
        let mut deliveries: Vec<Delivery> = (0..6)
            .map(|_| delivery(1, "Gaikwad", "Bumrah", 1))
            .collect();
        deliveries.push(no_ball(1, "Gaikwad", "Bumrah", 4));
        deliveries.push(dismissal(1, "Gaikwad", "Bumrah"));
        deliveries.push(dismissal(2, "Kohli", "Bumrah"));
        deliveries.push(delivery(2, "Kohli", "Bumrah", 1));

        let impact = calc.bowling_impact(&deliveries, &matches(), "Bumrah", at("2024-05-01"));
        // 6 + 5 + 0 + 0 + 1 = 12 runs from 9 legal balls.
        assert!((impact.economy - 8.0).abs() < 1e-9);
        assert_eq!(impact.wickets_per_match, 1.0);
    }

    #[test]
    fn test_player_impact_dispatches_on_role() {
        let calc = PlayerImpactCalculator::new();
        let batting = calc.player_impact(&[], &[], "Rohit", at("2024-05-01"), PlayerRole::Batsman);
        let bowling = calc.player_impact(&[], &[], "Rohit", at("2024-05-01"), PlayerRole::Bowler);

        assert!(matches!(batting, PlayerImpact::Batting(_)));
        assert!(matches!(bowling, PlayerImpact::Bowling(_)));
    }
}
