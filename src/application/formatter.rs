// Response formatter - bilingual sentences for query results
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::forecast::TimeSeriesEntry;
use crate::domain::projection::{ProjectedPoint, ProjectionValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Lv,
}

/// Both language renderings; neither is ever omitted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanReadable {
    pub en: String,
    pub lv: String,
}

/// The sentence topic, chosen from the query text alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Temperature,
    Humidity,
    Wind,
    Rain,
    Cloud,
    Pressure,
    Current,
}

/// Priority list for the primary topic; first needle hit wins, no hit
/// falls back to current conditions. Mirrors the interpreter's topic
/// order but is evaluated independently of its match set.
const PRIMARY_TOPICS: &[(Topic, &[&str])] = &[
    (
        Topic::Temperature,
        &["temperature", "temp", "temperatūr", "temperatur"],
    ),
    (Topic::Humidity, &["humidity", "mitrum"]),
    (Topic::Wind, &["wind", "vējš", "vejs", "vēja", "veja"]),
    (
        Topic::Rain,
        &["rain", "precipitation", "lietus", "nokrišņ", "nokrisn"],
    ),
    (Topic::Cloud, &["cloud", "mākoņ", "makon"]),
    (Topic::Pressure, &["pressure", "spiediens"]),
];

/// Render the result of a query as one sentence per language.
///
/// Only the first row of the result feeds the sentence. Shapes that
/// carry no such row (composites, empty sequences) render the topic's
/// "data not available" phrase instead of failing.
pub fn describe(query: &str, result: &ProjectionValue) -> HumanReadable {
    let topic = primary_topic(query);
    HumanReadable {
        en: render(topic, result, Language::En),
        lv: render(topic, result, Language::Lv),
    }
}

fn primary_topic(query: &str) -> Topic {
    let normalized = query.to_lowercase();
    PRIMARY_TOPICS
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| normalized.contains(needle)))
        .map_or(Topic::Current, |(topic, _)| *topic)
}

fn render(topic: Topic, result: &ProjectionValue, language: Language) -> String {
    match topic {
        Topic::Temperature => match first_point(result) {
            Some(point) => {
                let temperature = point.temperature.unwrap_or(0.0);
                let time = clock(point.time);
                match language {
                    Language::En => {
                        format!("The temperature will be {temperature:.1}°C at {time}")
                    }
                    Language::Lv => format!("Temperatūra būs {temperature:.1}°C plkst. {time}"),
                }
            }
            None => match language {
                Language::En => "Temperature data not available".to_string(),
                Language::Lv => "Temperatūras dati nav pieejami".to_string(),
            },
        },
        Topic::Humidity => match first_point(result) {
            Some(point) => {
                let humidity = point.humidity.unwrap_or(0.0);
                let time = clock(point.time);
                match language {
                    Language::En => format!("The humidity will be {humidity}% at {time}"),
                    Language::Lv => format!("Mitrums būs {humidity}% plkst. {time}"),
                }
            }
            None => match language {
                Language::En => "Humidity data not available".to_string(),
                Language::Lv => "Mitruma dati nav pieejami".to_string(),
            },
        },
        Topic::Wind => match first_point(result) {
            Some(point) => {
                let speed = point.wind_speed.unwrap_or(0.0);
                let direction = point.wind_direction.unwrap_or(0.0);
                let time = clock(point.time);
                match language {
                    Language::En => {
                        format!("The wind speed will be {speed} m/s from {direction}° at {time}")
                    }
                    Language::Lv => format!(
                        "Vēja ātrums būs {speed} m/s no {direction}° virziena plkst. {time}"
                    ),
                }
            }
            None => match language {
                Language::En => "Wind data not available".to_string(),
                Language::Lv => "Vēja dati nav pieejami".to_string(),
            },
        },
        Topic::Rain => match first_point(result) {
            Some(point) => {
                let amount = point.precipitation.unwrap_or(0.0);
                let time = clock(point.time);
                if amount > 0.0 {
                    match language {
                        Language::En => {
                            format!("Rain is expected at {time} with {amount}mm of precipitation")
                        }
                        Language::Lv => {
                            format!("Lietus paredzams plkst. {time} ar {amount}mm nokrišņiem")
                        }
                    }
                } else {
                    match language {
                        Language::En => "No rain is expected in the next period".to_string(),
                        Language::Lv => "Nākamajā periodā lietus nav paredzams".to_string(),
                    }
                }
            }
            None => match language {
                Language::En => "Rain data not available".to_string(),
                Language::Lv => "Lietus dati nav pieejami".to_string(),
            },
        },
        Topic::Cloud => match first_point(result) {
            Some(point) => {
                let cover = point.cloud_cover.unwrap_or(0.0);
                let time = clock(point.time);
                match language {
                    Language::En => format!("The cloud cover will be {cover}% at {time}"),
                    Language::Lv => format!("Mākoņainība būs {cover}% plkst. {time}"),
                }
            }
            None => match language {
                Language::En => "Cloud data not available".to_string(),
                Language::Lv => "Mākoņu dati nav pieejami".to_string(),
            },
        },
        Topic::Pressure => match first_point(result) {
            Some(point) => {
                let pressure = point.pressure.unwrap_or(0.0);
                let time = clock(point.time);
                match language {
                    Language::En => format!("The pressure will be {pressure} hPa at {time}"),
                    Language::Lv => format!("Spiediens būs {pressure} hPa plkst. {time}"),
                }
            }
            None => match language {
                Language::En => "Pressure data not available".to_string(),
                Language::Lv => "Spiediena dati nav pieejami".to_string(),
            },
        },
        Topic::Current => match first_entry(result) {
            Some(entry) => {
                let details = &entry.data.instant.details;
                match language {
                    Language::En => format!(
                        "Current weather conditions: Temperature {:.1}°C, Humidity {}%, Wind {} m/s from {}°",
                        details.air_temperature,
                        details.relative_humidity,
                        details.wind_speed,
                        details.wind_from_direction,
                    ),
                    Language::Lv => format!(
                        "Pašreizējie laika apstākļi: Temperatūra {:.1}°C, Mitrums {}%, Vējš {} m/s no {}° virziena",
                        details.air_temperature,
                        details.relative_humidity,
                        details.wind_speed,
                        details.wind_from_direction,
                    ),
                }
            }
            None => match language {
                Language::En => "Current weather data not available".to_string(),
                Language::Lv => "Pašreizējie laika apstākļu dati nav pieejami".to_string(),
            },
        },
    }
}

fn first_point(result: &ProjectionValue) -> Option<&ProjectedPoint> {
    match result {
        ProjectionValue::Points(points) => points.first(),
        _ => None,
    }
}

fn first_entry(result: &ProjectionValue) -> Option<&TimeSeriesEntry> {
    match result {
        ProjectionValue::Entry(entry) => Some(entry),
        ProjectionValue::Entries(entries) => entries.first(),
        _ => None,
    }
}

fn clock(time: DateTime<Utc>) -> String {
    time.format("%H:%M").to_string()
}
