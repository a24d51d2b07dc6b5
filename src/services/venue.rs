use chrono::{DateTime, Utc};

use crate::models::{MatchRecord, VenueStats};
use crate::utils::win_rate;

/// Team record at a venue before `date`. Unknown venue = neutral 0.5.
pub fn venue_stats(
    matches: &[MatchRecord],
    team: &str,
    venue: &str,
    date: DateTime<Utc>,
) -> VenueStats {
    let (wins, games) = matches
        .iter()
        .filter(|m| m.date < date && m.venue == venue && m.involves(team))
        .fold((0, 0), |(wins, games), m| {
            (wins + usize::from(m.won_by(team)), games + 1)
        });

    VenueStats {
        venue_matches: games,
        venue_win_rate: win_rate(wins, games),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, fixture};

    fn at_venue(mut record: MatchRecord, venue: &str) -> MatchRecord {
        record.venue = venue.to_string();
        record
    }

    #[test]
    fn test_unknown_venue() {
        let stats = venue_stats(&[], "MI", "Eden Gardens", at("2024-01-01"));
        assert_eq!(stats.venue_matches, 0);
        assert_eq!(stats.venue_win_rate, 0.5);
    }

    #[test]
    fn test_venue_tracking() {
        let matches = vec![
            at_venue(fixture(1, "2023-04-01", "MI", "CSK", Some("MI")), "Wankhede"),
            at_venue(fixture(2, "2023-04-08", "KKR", "MI", Some("KKR")), "Wankhede"),
            at_venue(fixture(3, "2023-04-15", "MI", "RCB", Some("MI")), "Chinnaswamy"),
            at_venue(fixture(4, "2023-04-22", "MI", "GT", Some("MI")), "Wankhede"),
            at_venue(fixture(5, "2024-04-01", "MI", "GT", Some("GT")), "Wankhede"),
        ];

        let stats = venue_stats(&matches, "MI", "Wankhede", at("2024-01-01"));
        assert_eq!(stats.venue_matches, 3);
        assert!((stats.venue_win_rate - 2.0 / 3.0).abs() < 1e-9);

        let away = venue_stats(&matches, "KKR", "Wankhede", at("2024-01-01"));
        assert_eq!(away.venue_matches, 1);
        assert_eq!(away.venue_win_rate, 1.0);
    }

    #[test]
    fn test_venue_name_is_exact() {
        let matches = vec![at_venue(
            fixture(1, "2023-04-01", "MI", "CSK", Some("MI")),
            "Wankhede Stadium",
        )];
        let stats = venue_stats(&matches, "MI", "Wankhede", at("2024-01-01"));
        assert_eq!(stats.venue_matches, 0);
    }
}
