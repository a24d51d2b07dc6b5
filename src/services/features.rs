use crate::config::StatsConfig;
use crate::models::{MatchFeatures, MatchRecord};
use crate::services::{h2h_stats, match_context, venue_stats, FormCalculator};

/// Builds one pre-match feature row per match from the calculators
pub struct FeatureBuilder {
    form: FormCalculator,
}

impl FeatureBuilder {
    pub fn new() -> Self {
        Self::from_config(&StatsConfig::default())
    }

    pub fn from_config(config: &StatsConfig) -> Self {
        Self {
            form: FormCalculator::from_config(config),
        }
    }

    /// Features for the match at `index`. History comes from rows dated
    /// strictly before it; season stats cover the table up to and including
    /// the row itself.
    pub fn build_for_row(&self, matches: &[MatchRecord], index: usize) -> Option<MatchFeatures> {
        let record = matches.get(index)?;
        let date = record.date;
        let season_prefix = &matches[..=index];

        let h2h = h2h_stats(matches, &record.team1, &record.team2, date);
        let team1_venue = venue_stats(matches, &record.team1, &record.venue, date);
        let team2_venue = venue_stats(matches, &record.team2, &record.venue, date);
        let team1_season = self
            .form
            .season_stats(season_prefix, &record.team1, &record.season);
        let team2_season = self
            .form
            .season_stats(season_prefix, &record.team2, &record.season);
        let context = match_context(record, matches);

        Some(MatchFeatures {
            match_id: record.id,
            date,
            season: record.season.clone(),
            team1: record.team1.clone(),
            team2: record.team2.clone(),
            venue: record.venue.clone(),
            team1_form: self.form.team_form(matches, &record.team1, date),
            team2_form: self.form.team_form(matches, &record.team2, date),
            team1_toss_impact: self.form.toss_impact(matches, &record.team1, date),
            team2_toss_impact: self.form.toss_impact(matches, &record.team2, date),
            h2h_matches: h2h.h2h_matches,
            team1_h2h_win_rate: h2h.team1_h2h_win_rate,
            team1_venue_matches: team1_venue.venue_matches,
            team1_venue_win_rate: team1_venue.venue_win_rate,
            team2_venue_matches: team2_venue.venue_matches,
            team2_venue_win_rate: team2_venue.venue_win_rate,
            team1_season_matches: team1_season.season_matches,
            team1_season_win_rate: team1_season.season_win_rate,
            team1_season_avg_win_margin: team1_season.season_avg_win_margin,
            team2_season_matches: team2_season.season_matches,
            team2_season_win_rate: team2_season.season_win_rate,
            team2_season_avg_win_margin: team2_season.season_avg_win_margin,
            is_day_match: context.is_day_match,
            is_playoff: context.is_playoff,
            season_phase: context.season_phase,
            team1_won: record.winner.as_ref().map(|w| *w == record.team1),
        })
    }

    /// One row per match, in table order
    pub fn build_all(&self, matches: &[MatchRecord]) -> Vec<MatchFeatures> {
        let rows: Vec<MatchFeatures> = (0..matches.len())
            .filter_map(|index| self.build_for_row(matches, index))
            .collect();

        tracing::info!("Built {} feature rows", rows.len());
        rows
    }
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeasonPhase;
    use crate::test_support::fixture;

    fn season() -> Vec<MatchRecord> {
        vec![
            fixture(1, "2024-04-01", "MI", "CSK", Some("MI")),
            fixture(2, "2024-04-02", "RCB", "KKR", Some("KKR")),
            fixture(3, "2024-04-03", "CSK", "MI", Some("CSK")),
            fixture(4, "2024-04-04", "MI", "KKR", None),
            fixture(5, "2024-04-05", "MI", "CSK", Some("MI")),
        ]
    }

    #[test]
    fn test_first_match_is_all_priors() {
        let builder = FeatureBuilder::new();
        let row = builder.build_for_row(&season(), 0).unwrap();

        assert_eq!(row.team1_form, 0.5);
        assert_eq!(row.team2_form, 0.5);
        assert_eq!(row.h2h_matches, 0);
        assert_eq!(row.team1_h2h_win_rate, 0.5);
        assert_eq!(row.team1_venue_win_rate, 0.5);
        // Season stats include the row itself.
        assert_eq!(row.team1_season_matches, 1);
        assert_eq!(row.team1_season_win_rate, 1.0);
        assert_eq!(row.season_phase, SeasonPhase::Early);
        assert_eq!(row.team1_won, Some(true));
    }

    #[test]
    fn test_later_row_uses_only_prior_history() {
        let builder = FeatureBuilder::new();
        let row = builder.build_for_row(&season(), 4).unwrap();

        // MI before match 5: W, L, N.
        assert!((row.team1_form - 1.0 / 3.0).abs() < 1e-9);
        // CSK before match 5: L, W.
        assert_eq!(row.team2_form, 0.5);
        assert_eq!(row.h2h_matches, 2);
        assert_eq!(row.team1_h2h_win_rate, 0.5);
        assert_eq!(row.team1_season_matches, 4);
        assert_eq!(row.team1_season_win_rate, 0.5);
        assert_eq!(row.season_phase, SeasonPhase::Late);
        assert!(!row.is_day_match);
    }

    #[test]
    fn test_no_result_has_no_label() {
        let builder = FeatureBuilder::new();
        let row = builder.build_for_row(&season(), 3).unwrap();
        assert_eq!(row.team1_won, None);
    }

    #[test]
    fn test_build_all() {
        let builder = FeatureBuilder::new();
        let rows = builder.build_all(&season());
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows.iter().map(|r| r.match_id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert!(builder.build_for_row(&season(), 5).is_none());
    }
}
