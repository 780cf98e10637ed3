// Event form module
// Raw field values of the "add event" page and their validation

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::country::{Country, CountryCatalog};
use crate::models::event::{Impact, NewEconomicEvent};

/// Which form field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Time,
    Country,
    Event,
    Impact,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Date => "Date",
            FormField::Time => "Time",
            FormField::Country => "Country",
            FormField::Event => "Event",
            FormField::Impact => "Impact",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(FormField),

    #[error("{field} is invalid: {reason}")]
    Invalid { field: FormField, reason: String },
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::Missing(field) => *field,
            FormError::Invalid { field, .. } => *field,
        }
    }
}

/// Everything the user has typed so far.
///
/// `country` only ever holds a name picked from the reference list; the
/// text being typed lives in [`CountryTypeAhead`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFormFields {
    pub date: String,
    pub time: String,
    pub country: String,
    pub event: String,
    pub actual: String,
    pub previous: String,
    pub consensus: String,
    pub forecast: String,
    pub impact: Option<Impact>,
}

impl EventFormFields {
    pub fn validate(&self, catalog: &CountryCatalog) -> Result<NewEconomicEvent, FormError> {
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;

        let country = self.country.trim();
        if country.is_empty() {
            return Err(FormError::Missing(FormField::Country));
        }
        if catalog.find_by_name(country).is_none() {
            return Err(FormError::Invalid {
                field: FormField::Country,
                reason: format!("'{}' is not in the country list", country),
            });
        }

        let event = self.event.trim();
        if event.is_empty() {
            return Err(FormError::Missing(FormField::Event));
        }

        let impact = self.impact.ok_or(FormError::Missing(FormField::Impact))?;

        Ok(NewEconomicEvent {
            date,
            time,
            country: country.to_string(),
            event: event.to_string(),
            actual: self.actual.trim().to_string(),
            previous: self.previous.trim().to_string(),
            consensus: self.consensus.trim().to_string(),
            forecast: self.forecast.trim().to_string(),
            impact,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Missing(FormField::Date));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FormError::Invalid {
        field: FormField::Date,
        reason: format!("expected YYYY-MM-DD, got '{}'", raw),
    })
}

fn parse_time(raw: &str) -> Result<NaiveTime, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Missing(FormField::Time));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| FormError::Invalid {
            field: FormField::Time,
            reason: format!("expected HH:MM, got '{}'", raw),
        })
}

/// Country type-ahead: free text plus a suggestion dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryTypeAhead {
    pub query: String,
    pub open: bool,
}

impl CountryTypeAhead {
    /// The user edited the text. Any previously chosen country is dropped.
    pub fn on_typed(&mut self, fields: &mut EventFormFields) {
        fields.country.clear();
        self.open = !self.query.trim().is_empty();
    }

    pub fn select(&mut self, country: &Country, fields: &mut EventFormFields) {
        fields.country = country.name.clone();
        self.query = country.name.clone();
        self.open = false;
    }

    pub fn suggestions<'a>(&self, catalog: &'a CountryCatalog) -> Vec<&'a Country> {
        if self.query.trim().is_empty() {
            return Vec::new();
        }
        catalog.search(&self.query)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> CountryCatalog {
        CountryCatalog::from_json(
            r#"[
                {"name": "United States", "code": "US", "region": "America", "major": true},
                {"name": "United Kingdom", "code": "GB", "region": "Europe", "major": true},
                {"name": "Japan", "code": "JP", "region": "Asia", "major": true}
            ]"#,
        )
        .unwrap()
    }

    fn filled() -> EventFormFields {
        EventFormFields {
            date: "2024-03-08".into(),
            time: "08:30".into(),
            country: "United States".into(),
            event: "Non-Farm Payrolls".into(),
            actual: String::new(),
            previous: "229K".into(),
            consensus: " 200K ".into(),
            forecast: String::new(),
            impact: Some(Impact::High),
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled().validate(&catalog()).unwrap();
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(payload.time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(payload.consensus, "200K");
        assert_eq!(payload.actual, "");
        assert_eq!(payload.impact, Impact::High);
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let catalog = catalog();
        let mut fields = filled();

        fields.impact = None;
        assert_eq!(fields.validate(&catalog), Err(FormError::Missing(FormField::Impact)));

        fields.event = "  ".into();
        assert_eq!(fields.validate(&catalog), Err(FormError::Missing(FormField::Event)));

        fields.country.clear();
        assert_eq!(fields.validate(&catalog), Err(FormError::Missing(FormField::Country)));

        fields.time.clear();
        assert_eq!(fields.validate(&catalog), Err(FormError::Missing(FormField::Time)));

        fields.date.clear();
        let err = fields.validate(&catalog).unwrap_err();
        assert_eq!(err.field(), FormField::Date);
        assert_eq!(err.to_string(), "Date is required");
    }

    #[test]
    fn test_invalid_values() {
        let catalog = catalog();

        let mut fields = filled();
        fields.date = "2023-02-29".into();
        assert_eq!(fields.validate(&catalog).unwrap_err().field(), FormField::Date);

        let mut fields = filled();
        fields.time = "25:00".into();
        assert_eq!(fields.validate(&catalog).unwrap_err().field(), FormField::Time);

        let mut fields = filled();
        fields.country = "Atlantis".into();
        assert!(matches!(
            fields.validate(&catalog),
            Err(FormError::Invalid { field: FormField::Country, .. })
        ));
    }

    #[test]
    fn test_typing_clears_chosen_country() {
        let catalog = catalog();
        let mut fields = filled();
        let mut ahead = CountryTypeAhead::default();

        ahead.query = "unit".into();
        ahead.on_typed(&mut fields);
        assert_eq!(fields.country, "");
        assert!(ahead.open);

        let names: Vec<&str> = ahead.suggestions(&catalog).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["United States", "United Kingdom"]);

        let uk = catalog.find_by_code("GB").unwrap();
        ahead.select(uk, &mut fields);
        assert_eq!(fields.country, "United Kingdom");
        assert_eq!(ahead.query, "United Kingdom");
        assert!(!ahead.open);
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        let ahead = CountryTypeAhead::default();
        assert!(ahead.suggestions(&catalog()).is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut fields = filled();
        fields.clear();
        assert!(fields.is_empty());
    }
}
