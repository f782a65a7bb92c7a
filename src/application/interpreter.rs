// Query interpreter - ordered bilingual topic rules over free text
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::projection::{Projection, ProjectionSpec};

/// One topic rule: case-insensitive substring needles (English and
/// Latvian, stems so inflected forms match) mapping to a projection.
struct TopicRule {
    projection: Projection,
    needles: &'static [&'static str],
}

/// Rule order is the composite order. It is the only tie-break, so it
/// must stay exactly as listed here.
const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        projection: Projection::Temperature,
        needles: &["temperature", "temp", "temperatūr", "temperatur"],
    },
    TopicRule {
        projection: Projection::Humidity,
        needles: &["humidity", "mitrum"],
    },
    TopicRule {
        projection: Projection::Wind,
        needles: &["wind", "vējš", "vejs", "vēja", "veja"],
    },
    TopicRule {
        projection: Projection::Precipitation,
        needles: &["rain", "precipitation", "lietus", "nokrišņ", "nokrisn"],
    },
    TopicRule {
        projection: Projection::CloudCover,
        needles: &["cloud", "mākoņ", "makon"],
    },
    TopicRule {
        projection: Projection::Pressure,
        needles: &["pressure", "spiediens"],
    },
    TopicRule {
        projection: Projection::Current,
        needles: &[
            "current", "now", "pašreiz", "pasreiz", "tagad", "šobrīd", "sobrid", "kāds",
            "kads", "kāda", "kada",
        ],
    },
];

static SLICE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"next (\d+) hours").unwrap(),
        Regex::new(r"nākamās? (\d+) stundas?|nakamas? (\d+) stundas?").unwrap(),
    ]
});

/// Map free text onto the canonical projections.
///
/// Every rule is tested and all matches are collected, so a query that
/// touches several topics yields a composite in rule-definition order.
/// A query that matches nothing falls back to the current conditions.
pub fn interpret(query: &str) -> ProjectionSpec {
    let normalized = query.to_lowercase();

    let mut matches: Vec<Projection> = TOPIC_RULES
        .iter()
        .filter(|rule| rule.needles.iter().any(|needle| normalized.contains(needle)))
        .map(|rule| rule.projection)
        .collect();
    if let Some(hours) = slice_hours(&normalized) {
        matches.push(Projection::Slice(hours));
    }

    match matches.as_slice() {
        [] => ProjectionSpec::Single(Projection::Current),
        [single] => ProjectionSpec::Single(*single),
        _ => ProjectionSpec::Composite(matches),
    }
}

/// Extract N from a "next N hours" phrase in either language.
fn slice_hours(normalized: &str) -> Option<usize> {
    SLICE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(normalized)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .and_then(|digits| digits.as_str().parse().ok())
    })
}
