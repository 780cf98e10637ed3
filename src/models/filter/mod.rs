// Filter module
// The month / country / impact selection driving each events fetch

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::event::Impact;
use crate::utils::date::{days_in_month, month_name, shift_month, today};

/// A calendar month. Always a month chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        // Both ends of the month must be representable
        NaiveDate::from_ymd_opt(year, month, 1)?;
        NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
        Some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::from_date(today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated in YearMonth::new")
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days())
            .expect("validated in YearMonth::new")
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Previous month; stays put at the edge of the representable range.
    pub fn previous(&self) -> Self {
        self.shifted(-1)
    }

    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// Same year, different month
    pub fn with_month(&self, month: u32) -> Option<Self> {
        Self::new(self.year, month)
    }

    fn shifted(&self, delta: i32) -> Self {
        let (year, month) = shift_month(self.year, self.month, delta);
        Self::new(year, month).unwrap_or(*self)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_name(self.month), self.year)
    }
}

/// Impact selection: everything, or a single level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpactFilter {
    #[default]
    All,
    Only(Impact),
}

impl ImpactFilter {
    pub const OPTIONS: [ImpactFilter; 4] = [
        ImpactFilter::All,
        ImpactFilter::Only(Impact::High),
        ImpactFilter::Only(Impact::Medium),
        ImpactFilter::Only(Impact::Low),
    ];

    /// The single level asked for; `None` means the parameter is omitted.
    pub fn level(&self) -> Option<Impact> {
        match self {
            ImpactFilter::All => None,
            ImpactFilter::Only(impact) => Some(*impact),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactFilter::All => "All",
            ImpactFilter::Only(impact) => impact.label(),
        }
    }

    pub fn stars(&self) -> usize {
        match self {
            ImpactFilter::All => 0,
            ImpactFilter::Only(impact) => impact.stars(),
        }
    }
}

/// Current month plus country and impact selection.
///
/// Setters report whether anything changed; the session re-fetches only
/// on a real change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    month: YearMonth,
    selected_countries: Vec<String>,
    selected_impact: ImpactFilter,
}

impl FilterState {
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            selected_countries: Vec::new(),
            selected_impact: ImpactFilter::All,
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn selected_countries(&self) -> &[String] {
        &self.selected_countries
    }

    pub fn selected_impact(&self) -> ImpactFilter {
        self.selected_impact
    }

    pub fn set_month(&mut self, month: YearMonth) -> bool {
        if self.month == month {
            return false;
        }
        self.month = month;
        true
    }

    /// Replace the country selection. Blank and duplicate codes are dropped,
    /// first occurrence wins.
    pub fn set_countries(&mut self, countries: Vec<String>) -> bool {
        let mut cleaned: Vec<String> = Vec::with_capacity(countries.len());
        for code in countries {
            let code = code.trim().to_string();
            if !code.is_empty() && !cleaned.contains(&code) {
                cleaned.push(code);
            }
        }

        if self.selected_countries == cleaned {
            return false;
        }
        self.selected_countries = cleaned;
        true
    }

    pub fn set_impact(&mut self, impact: ImpactFilter) -> bool {
        if self.selected_impact == impact {
            return false;
        }
        self.selected_impact = impact;
        true
    }

    /// Label for the country filter button
    pub fn countries_label(&self) -> String {
        match self.selected_countries.as_slice() {
            [] => "Country".to_string(),
            [single] => single.clone(),
            many => format!("{} Countries", many.len()),
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(YearMonth::current())
    }
}
