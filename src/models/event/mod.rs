// Event module
// Economic event records as served by the events API

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Market impact of an economic release.
///
/// The write path only ever produces one of these three values. On the read
/// path the raw server string is kept on [`EconomicEvent`] and mapped through
/// [`Impact::bucket_for`], so unexpected values still render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    /// Highest impact first, the order used by selectors
    pub const ALL: [Impact; 3] = [Impact::High, Impact::Medium, Impact::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Impact::Low => "Low",
            Impact::Medium => "Medium",
            Impact::High => "High",
        }
    }

    /// Number of stars shown next to the impact in selectors
    pub fn stars(&self) -> usize {
        match self {
            Impact::Low => 1,
            Impact::Medium => 2,
            Impact::High => 3,
        }
    }

    /// Strict parse: only the three lowercase wire values are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Impact::Low),
            "medium" => Some(Impact::Medium),
            "high" => Some(Impact::High),
            _ => None,
        }
    }

    /// Visual bucket for a raw impact string; anything unknown is `Low`.
    pub fn bucket_for(value: &str) -> Self {
        Self::parse(value).unwrap_or(Impact::Low)
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Impact must be low, medium or high, got '{}'", s))
    }
}

/// A scheduled economic release as returned by `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicEvent {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// `YYYY-MM-DD`, possibly followed by a time portion
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub event: String,
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub consensus: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub forecast: Option<String>,
    /// Raw impact string from the server
    #[serde(default)]
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl EconomicEvent {
    /// Calendar day this event belongs to, if `date` is well formed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// Impact bucket used for rendering
    pub fn impact_level(&self) -> Impact {
        Impact::bucket_for(&self.impact)
    }
}

/// Parse the calendar-date part of an event date.
///
/// Accepts a bare `YYYY-MM-DD` or one followed by `T`/space and a time. The
/// date is taken as written; no timezone conversion is applied.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10)?;
    if !is_iso_date_shape(head) {
        return None;
    }

    let rest = &raw[10..];
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Zero-padded `DDDD-DD-DD`
fn is_iso_date_shape(head: &str) -> bool {
    head.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Display value for an optional reading
pub fn reading_or_dash(reading: &Option<String>) -> &str {
    reading.as_deref().unwrap_or("-")
}

/// Readings arrive as strings, numbers or null. Empty strings mean "not yet available".
fn deserialize_reading<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Create payload for `POST /api/events`.
///
/// Mirrors [`EconomicEvent`] minus the server-assigned fields. Missing
/// readings are sent as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEconomicEvent {
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_clock_time")]
    pub time: NaiveTime,
    pub country: String,
    pub event: String,
    pub actual: String,
    pub previous: String,
    pub consensus: String,
    pub forecast: String,
    pub impact: Impact,
}

fn serialize_clock_time<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_server_record() {
        let json = r#"{
            "_id": "665f1c2a9b",
            "date": "2024-03-08",
            "time": "08:30",
            "country": "United States",
            "event": "Non-Farm Payrolls",
            "actual": "275K",
            "previous": 229,
            "consensus": "",
            "impact": "high",
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#;

        let event: EconomicEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "665f1c2a9b");
        assert_eq!(event.actual.as_deref(), Some("275K"));
        assert_eq!(event.previous.as_deref(), Some("229"));
        assert_eq!(event.consensus, None);
        assert_eq!(event.forecast, None);
        assert_eq!(event.impact_level(), Impact::High);
        assert_eq!(event.created_at.as_deref(), Some("2024-03-01T10:00:00.000Z"));
        assert_eq!(event.updated_at, None);
    }

    #[test]
    fn test_plain_id_alias() {
        let json = r#"{"id": "42", "date": "2024-03-08", "event": "CPI", "impact": "low"}"#;
        let event: EconomicEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "42");
        assert_eq!(event.time, "");
    }

    #[test]
    fn test_unknown_impact_falls_back_to_low() {
        let json = r#"{"_id": "1", "date": "2024-03-08", "event": "x", "impact": "severe"}"#;
        let event: EconomicEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.impact, "severe");
        assert_eq!(event.impact_level(), Impact::Low);
    }

    #[test]
    fn test_calendar_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 8);
        assert_eq!(parse_calendar_date("2024-03-08"), expected);
        assert_eq!(parse_calendar_date("2024-03-08T00:00:00.000Z"), expected);
        assert_eq!(parse_calendar_date("2024-03-08 23:15"), expected);
        assert_eq!(parse_calendar_date(" 2024-03-08 "), expected);
        assert_eq!(parse_calendar_date("2024-03-080"), None);
        assert_eq!(parse_calendar_date("2024-3-8"), None);
        assert_eq!(parse_calendar_date("2024-3-8T00:00:00Z"), None);
        assert_eq!(parse_calendar_date("2024-03-8 "), None);
        assert_eq!(parse_calendar_date("2024-02-30"), None);
        assert_eq!(parse_calendar_date("08/03/2024"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn test_impact_parse_is_strict() {
        assert_eq!(Impact::parse("medium"), Some(Impact::Medium));
        assert_eq!(Impact::parse("Medium"), None);
        assert!("extreme".parse::<Impact>().is_err());
        assert_eq!("high".parse::<Impact>(), Ok(Impact::High));
    }

    #[test]
    fn test_new_event_wire_format() {
        let payload = NewEconomicEvent {
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            time: NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
            country: "Japan".to_string(),
            event: "BoJ Rate Decision".to_string(),
            actual: String::new(),
            previous: "-0.1%".to_string(),
            consensus: String::new(),
            forecast: "0.0%".to_string(),
            impact: Impact::High,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "date": "2024-02-29",
                "time": "14:05",
                "country": "Japan",
                "event": "BoJ Rate Decision",
                "actual": "",
                "previous": "-0.1%",
                "consensus": "",
                "forecast": "0.0%",
                "impact": "high"
            })
        );
    }

    #[test]
    fn test_reading_or_dash() {
        assert_eq!(reading_or_dash(&None), "-");
        assert_eq!(reading_or_dash(&Some("1.2%".to_string())), "1.2%");
    }
}
