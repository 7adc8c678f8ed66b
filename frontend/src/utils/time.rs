use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "May 1, 2024"
pub fn format_long_date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

/// "2024-05-01"
pub fn format_short_date(value: DateTime<Utc>) -> String {
    format_iso_date(value.date_naive())
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp and keeps the calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {raw}")))
}

/// Value for an `<input type="time">`: `HH:MM`, or empty when unset.
pub fn time_input_value(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(raw) => raw.get(..5).unwrap_or(raw).to_string(),
        None => String::new(),
    }
}
