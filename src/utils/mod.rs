use statrs::statistics::Statistics;

/// Win-rate prior used whenever there is no qualifying history
pub const NEUTRAL_WIN_RATE: f64 = 0.5;

/// Wins over matches, or the neutral prior for an empty sample
pub fn win_rate(wins: usize, matches: usize) -> f64 {
    if matches == 0 {
        return NEUTRAL_WIN_RATE;
    }
    wins as f64 / matches as f64
}

/// Share of `part` in `whole` as a percentage, 0 for an empty whole
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Mean of the values, 0 for an empty slice
pub fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().mean()
}

/// Render results as a form string (e.g. "WLWNW"), most recent first.
/// Input is in chronological order.
pub fn results_to_form(results: &[char]) -> String {
    results.iter().rev().collect()
}

/// The last `n` items of a slice
pub fn tail<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate() {
        assert_eq!(win_rate(0, 0), 0.5);
        assert_eq!(win_rate(3, 4), 0.75);
        assert_eq!(win_rate(0, 2), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert!((percentage(2, 3) - 66.666_666).abs() < 0.001);
        assert_eq!(percentage(1, 0), 0.0);
    }

    #[test]
    fn test_mean_or_zero() {
        assert_eq!(mean_or_zero(&[]), 0.0);
        assert!((mean_or_zero(&[10.0, 20.0, 36.0]) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_results_to_form() {
        assert_eq!(results_to_form(&['W', 'L', 'N']), "NLW");
        assert_eq!(results_to_form(&[]), "");
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail(&[1, 2, 3, 4], 2), &[3, 4]);
        assert_eq!(tail(&[1, 2], 5), &[1, 2]);
    }
}
