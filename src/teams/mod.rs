//! Display colors and short names for franchise teams.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_COLOR: &str = "#808080";

struct TeamStyle {
    color: &'static str,
    abbreviation: Option<&'static str>,
}

const TEAM_STYLES: [(&str, &str, Option<&str>); 17] = [
    // Active
    ("Mumbai Indians", "#004BA0", Some("MI")),
    ("Chennai Super Kings", "#FFFF3C", Some("CSK")),
    ("Royal Challengers Bengaluru", "#EC1C24", Some("RCB")),
    ("Kolkata Knight Riders", "#3A225D", Some("KKR")),
    ("Delhi Capitals", "#282968", Some("DC")),
    ("Punjab Kings", "#ED1B24", Some("PBKS")),
    ("Rajasthan Royals", "#254AA5", Some("RR")),
    ("Sunrisers Hyderabad", "#FF822A", Some("SRH")),
    ("Gujarat Titans", "#1C2C3E", Some("GT")),
    ("Lucknow Super Giants", "#4ED973", Some("LSG")),
    // Defunct
    ("Deccan Chargers", "#0066B3", Some("DC")),
    ("Pune Warriors", "#2F9BE3", Some("PW")),
    ("Gujarat Lions", "#FF6600", Some("GL")),
    ("Kochi Tuskers Kerala", "#9354A5", Some("KTK")),
    ("Rising Pune Supergiants", "#D11D9B", Some("RPS")),
    // Placeholders in raw data
    ("Unknown", DEFAULT_COLOR, Some("UNK")),
    ("Not Awarded", DEFAULT_COLOR, None),
];

fn styles() -> &'static HashMap<&'static str, TeamStyle> {
    static STYLES: OnceLock<HashMap<&'static str, TeamStyle>> = OnceLock::new();
    STYLES.get_or_init(|| {
        TEAM_STYLES
            .iter()
            .map(|&(name, color, abbreviation)| (name, TeamStyle { color, abbreviation }))
            .collect()
    })
}

/// Hex color for a team, grey for unknown names
pub fn color_for(team: &str) -> &'static str {
    styles().get(team).map_or(DEFAULT_COLOR, |style| style.color)
}

/// Short name for a team; unknown names fall back to their first three characters, upper-cased
pub fn abbreviation_for(team: &str) -> String {
    match styles().get(team).and_then(|style| style.abbreviation) {
        Some(abbreviation) => abbreviation.to_string(),
        None => team.chars().take(3).collect::<String>().to_uppercase(),
    }
}
