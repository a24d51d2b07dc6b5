//! Innings-phase summaries and scoring momentum over ball-by-ball data.

use crate::models::{Delivery, InningsPhaseSummary, MatchId};

/// Last over of the powerplay
pub const POWERPLAY_END: u8 = 6;
/// Last over of the middle phase; everything after is death overs
pub const MIDDLE_END: u8 = 15;
/// Overs per momentum window
pub const MOMENTUM_WINDOW: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsPhase {
    Powerplay,
    Middle,
    Death,
}

impl InningsPhase {
    pub fn of_over(over: u8) -> Self {
        if over <= POWERPLAY_END {
            InningsPhase::Powerplay
        } else if over <= MIDDLE_END {
            InningsPhase::Middle
        } else {
            InningsPhase::Death
        }
    }
}

/// Runs and wickets per phase for one innings.
/// `None` when the innings has no deliveries, so a missing innings is not
/// confused with a scoreless one.
pub fn aggregate_innings_phases(
    deliveries: &[Delivery],
    match_id: MatchId,
    inning: u8,
) -> Option<InningsPhaseSummary> {
    let mut summary = InningsPhaseSummary::default();
    let mut seen = false;

    for d in deliveries
        .iter()
        .filter(|d| d.match_id == match_id && d.inning == inning)
    {
        seen = true;
        let wicket = u32::from(d.is_wicket);
        let (runs, wickets) = match InningsPhase::of_over(d.over) {
            InningsPhase::Powerplay => (&mut summary.powerplay_runs, &mut summary.powerplay_wickets),
            InningsPhase::Middle => (&mut summary.middle_runs, &mut summary.middle_wickets),
            InningsPhase::Death => (&mut summary.death_runs, &mut summary.death_wickets),
        };
        *runs += d.total_runs;
        *wickets += wicket;

        summary.total_extras += d.extra_runs;
        summary.total_runs += d.total_runs;
        summary.total_wickets += wicket;
    }

    if !seen {
        tracing::debug!("No deliveries for match {} innings {}", match_id, inning);
        return None;
    }
    Some(summary)
}

/// Runs in the window ending at `over_number` minus runs in the window before it.
/// Counts every innings of the match; see [`momentum_in_innings`] for one innings.
pub fn momentum(deliveries: &[Delivery], match_id: MatchId, over_number: u8) -> f64 {
    windowed_momentum(
        deliveries.iter().filter(|d| d.match_id == match_id),
        over_number,
        MOMENTUM_WINDOW,
    )
}

pub fn momentum_in_innings(
    deliveries: &[Delivery],
    match_id: MatchId,
    inning: u8,
    over_number: u8,
) -> f64 {
    windowed_momentum(
        deliveries
            .iter()
            .filter(|d| d.match_id == match_id && d.inning == inning),
        over_number,
        MOMENTUM_WINDOW,
    )
}

/// Positive when scoring is accelerating. 0 when `over_number <= window` or either window is empty.
pub fn windowed_momentum<'a, I>(deliveries: I, over_number: u8, window: u8) -> f64
where
    I: IntoIterator<Item = &'a Delivery>,
{
    if window == 0 || over_number <= window {
        return 0.0;
    }

    let recent_start = over_number - window;
    let previous_start = recent_start.saturating_sub(window);

    let mut recent = (0u32, 0usize);
    let mut previous = (0u32, 0usize);
    for d in deliveries {
        if d.over > recent_start && d.over <= over_number {
            recent.0 += d.total_runs;
            recent.1 += 1;
        } else if d.over > previous_start && d.over <= recent_start {
            previous.0 += d.total_runs;
            previous.1 += 1;
        }
    }

    if recent.1 == 0 || previous.1 == 0 {
        return 0.0;
    }
    recent.0 as f64 - previous.0 as f64
}
