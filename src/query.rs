//! Free-text query interpretation
//!
//! Turns a raw user question into a structured `(location, timeframe)` intent.
//! Extraction is an ordered rule list with early termination: the first
//! location pattern that matches anything wins outright, and timeframe
//! keywords are checked as a fixed decision list. Everything here is pure and
//! synchronous; malformed input degrades to `None`/defaults instead of erroring.

use std::sync::LazyLock;

use chrono::Weekday;
use regex::Regex;

use crate::models::{ParsedLocation, ParsedQuery, Timeframe};

/// What a matched location rule captures
enum RuleKind {
    /// Captures a city plus a trailing state-or-country token
    CityRegion,
    /// Captures a city only
    CityOnly,
}

struct LocationRule {
    pattern: Regex,
    kind: RuleKind,
}

const CAPITALIZED_PHRASE: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*";

// Order is load-bearing: "Portland, OR" must be claimed by the state rule
// before the looser country rule sees it, and both comma rules outrank the
// "in"/"at" keyword rules.
static LOCATION_RULES: LazyLock<Vec<LocationRule>> = LazyLock::new(|| {
    vec![
        LocationRule {
            pattern: Regex::new(&format!(r"\b({CAPITALIZED_PHRASE}),\s*([A-Z]{{2}})\b")).unwrap(),
            kind: RuleKind::CityRegion,
        },
        LocationRule {
            pattern: Regex::new(&format!(r"\b({CAPITALIZED_PHRASE}),\s*({CAPITALIZED_PHRASE})\b"))
                .unwrap(),
            kind: RuleKind::CityRegion,
        },
        // Keyword is case-insensitive, the phrase stays case-sensitive
        LocationRule {
            pattern: Regex::new(&format!(r"\b(?i:in)\s+({CAPITALIZED_PHRASE})\b")).unwrap(),
            kind: RuleKind::CityOnly,
        },
        LocationRule {
            pattern: Regex::new(&format!(r"\b(?i:at)\s+({CAPITALIZED_PHRASE})\b")).unwrap(),
            kind: RuleKind::CityOnly,
        },
    ]
});

static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());

const CURRENT_KEYWORDS: [&str; 5] = ["now", "current", "currently", "today", "right now"];
const TOMORROW_KEYWORDS: [&str; 2] = ["tomorrow", "tmrw"];
const THIS_WEEK_KEYWORDS: [&str; 3] = ["this week", "week", "weekly"];
const WEEKEND_KEYWORDS: [&str; 2] = ["weekend", "this weekend"];
const NEXT_WEEK_KEYWORDS: [&str; 1] = ["next week"];
const FORECAST_KEYWORDS: [&str; 3] = ["forecast", "will", "going to"];

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Extract a location from free text.
///
/// Tries the pattern rules in priority order, then falls back to joining the
/// standalone capitalized words of the input as a single city guess. Returns
/// `None` only when neither stage finds anything.
#[must_use]
pub fn parse_location(query: &str) -> Option<ParsedLocation> {
    let normalized = query.trim();

    for rule in LOCATION_RULES.iter() {
        if let Some(captures) = rule.pattern.captures(normalized) {
            return Some(match rule.kind {
                RuleKind::CityRegion => ParsedLocation::with_region(&captures[1], &captures[2]),
                RuleKind::CityOnly => ParsedLocation::city_only(&captures[1]),
            });
        }
    }

    let capitalized: Vec<&str> = normalized
        .split_whitespace()
        .filter(|word| CAPITALIZED_WORD.is_match(word))
        .collect();

    if capitalized.is_empty() {
        None
    } else {
        Some(ParsedLocation::city_only(&capitalized.join(" ")))
    }
}

/// Extract a timeframe intent from free text.
///
/// Keyword categories are evaluated in a fixed order and the first match
/// wins, so "current weather now" stays `current` even though "will" or
/// "forecast" elsewhere in a query would suggest a forecast.
#[must_use]
pub fn parse_timeframe(query: &str) -> Timeframe {
    let lower = query.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|keyword| lower.contains(keyword));

    if contains_any(&CURRENT_KEYWORDS) {
        return Timeframe::current();
    }

    if contains_any(&TOMORROW_KEYWORDS) {
        return Timeframe::Forecast {
            days: 1,
            description: "tomorrow's weather".to_string(),
        };
    }

    if contains_any(&THIS_WEEK_KEYWORDS) {
        return Timeframe::Forecast {
            days: 7,
            description: "this week's forecast".to_string(),
        };
    }

    // Unreachable in practice: "weekend" contains the bare "week" keyword
    // checked above. Kept to preserve the decision-list order.
    if contains_any(&WEEKEND_KEYWORDS) {
        return Timeframe::Forecast {
            days: 3,
            description: "weekend forecast".to_string(),
        };
    }

    // Unreachable in practice: the bare "week" keyword above already claims
    // every "next week" query. Kept to preserve the decision-list order.
    if contains_any(&NEXT_WEEK_KEYWORDS) {
        return Timeframe::Forecast {
            days: 7,
            description: "next week's forecast".to_string(),
        };
    }

    if let Some((name, weekday)) = WEEKDAYS.iter().find(|(name, _)| lower.contains(name)) {
        return Timeframe::Specific {
            days: 7,
            weekday: *weekday,
            description: format!("{name}'s weather"),
        };
    }

    if contains_any(&FORECAST_KEYWORDS) {
        return Timeframe::Forecast {
            days: 5,
            description: "weather forecast".to_string(),
        };
    }

    Timeframe::current()
}

/// Parse a full query into its structured intent. Pure and idempotent; never
/// fails, degrading to a null location and the `current` default instead.
#[must_use]
pub fn parse_query(query: &str) -> ParsedQuery {
    ParsedQuery {
        location: parse_location(query),
        timeframe: parse_timeframe(query),
        original_query: query.to_string(),
    }
}
