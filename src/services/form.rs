use chrono::{DateTime, Utc};

use crate::config::StatsConfig;
use crate::models::{MatchRecord, SeasonStats};
use crate::utils::{mean_or_zero, results_to_form, tail, win_rate};

/// Recent-form, toss and season calculators.
///
/// Every window is taken by row position: `matches` must be in
/// chronological order.
pub struct FormCalculator {
    form_window: usize,
    toss_window: usize,
    wicket_margin_factor: f64,
}

impl FormCalculator {
    pub fn new() -> Self {
        Self::from_config(&StatsConfig::default())
    }

    pub fn from_config(config: &StatsConfig) -> Self {
        Self {
            form_window: config.form_window,
            toss_window: config.toss_window,
            wicket_margin_factor: config.wicket_margin_factor,
        }
    }

    /// Win rate over the team's last `form_window` matches before `date`
    pub fn team_form(&self, matches: &[MatchRecord], team: &str, date: DateTime<Utc>) -> f64 {
        let recent = recent_matches(matches, date, self.form_window, |m| m.involves(team));
        let wins = recent.iter().filter(|m| m.won_by(team)).count();

        tracing::debug!(
            "Form for {} before {}: {}/{} wins",
            team,
            date.format("%Y-%m-%d"),
            wins,
            recent.len()
        );

        win_rate(wins, recent.len())
    }

    /// Rate at which winning the toss converted into winning the match
    pub fn toss_impact(&self, matches: &[MatchRecord], team: &str, date: DateTime<Utc>) -> f64 {
        let recent = recent_matches(matches, date, self.toss_window, |m| m.toss_winner == team);
        let wins = recent.iter().filter(|m| m.won_by(team)).count();
        win_rate(wins, recent.len())
    }

    /// Season record for a team: every match of the season in `matches`.
    /// Pass a table prefix to stop at a given row.
    pub fn season_stats(&self, matches: &[MatchRecord], team: &str, season: &str) -> SeasonStats {
        let season_matches: Vec<&MatchRecord> = matches
            .iter()
            .filter(|m| m.season == season && m.involves(team))
            .collect();

        let wins: Vec<&MatchRecord> = season_matches
            .iter()
            .copied()
            .filter(|m| m.won_by(team))
            .collect();

        let margins: Vec<f64> = wins
            .iter()
            .filter_map(|m| m.normalized_margin(self.wicket_margin_factor))
            .collect();

        SeasonStats {
            season_matches: season_matches.len(),
            season_win_rate: win_rate(wins.len(), season_matches.len()),
            season_avg_win_margin: mean_or_zero(&margins),
        }
    }

    /// Results of the team-form window as `W`/`L`/`N`, most recent first
    pub fn form_string(&self, matches: &[MatchRecord], team: &str, date: DateTime<Utc>) -> String {
        let results: Vec<char> = recent_matches(matches, date, self.form_window, |m| m.involves(team))
            .iter()
            .map(|m| match m.winner.as_deref() {
                Some(winner) if winner == team => 'W',
                Some(_) => 'L',
                None => 'N',
            })
            .collect();

        results_to_form(&results)
    }
}

impl Default for FormCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Last `window` rows before `date` that satisfy `keep`, in table order
fn recent_matches<'a, F>(
    matches: &'a [MatchRecord],
    date: DateTime<Utc>,
    window: usize,
    keep: F,
) -> Vec<&'a MatchRecord>
where
    F: Fn(&MatchRecord) -> bool,
{
    let eligible: Vec<&MatchRecord> = matches
        .iter()
        .filter(|m| m.date < date && keep(*m))
        .collect();

    tail(&eligible, window).to_vec()
}
