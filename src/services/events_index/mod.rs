//! Bucketing of fetched events by day of the displayed month.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::event::EconomicEvent;
use crate::models::filter::YearMonth;

/// Events shown directly in a day cell before "+N more"
pub const MAX_VISIBLE_PER_CELL: usize = 2;

/// Events of one month keyed by day of month, fetch order kept within a day
#[derive(Debug, Clone, PartialEq)]
pub struct EventsByDay {
    month: YearMonth,
    days: BTreeMap<u32, Vec<EconomicEvent>>,
}

impl EventsByDay {
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            days: BTreeMap::new(),
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn events_on(&self, day: u32) -> &[EconomicEvent] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that have at least one event, ascending
    pub fn busy_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.keys().copied()
    }

    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Bucket `events` by calendar day within `month`.
///
/// An event lands on day `d` iff its date's calendar date is `(year, month, d)`.
/// Events with an unparseable date or a date in another month are left out.
pub fn index_by_day(events: &[EconomicEvent], month: YearMonth) -> EventsByDay {
    let mut index = EventsByDay::empty(month);
    let mut skipped = 0usize;

    for event in events {
        match event.calendar_date() {
            Some(date) if month.contains(date) => {
                index.days.entry(date.day()).or_default().push(event.clone());
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!(
            "Left {} event(s) out of the {} index (date outside month or malformed)",
            skipped,
            month
        );
    }

    index
}

/// The split of one day's events into what the cell shows and what sits
/// behind the "+N more" affordance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellEvents<'a> {
    pub shown: &'a [EconomicEvent],
    pub overflow: &'a [EconomicEvent],
}

impl<'a> CellEvents<'a> {
    pub fn split(events: &'a [EconomicEvent]) -> Self {
        let cut = events.len().min(MAX_VISIBLE_PER_CELL);
        let (shown, overflow) = events.split_at(cut);
        Self { shown, overflow }
    }

    pub fn has_more(&self) -> bool {
        !self.overflow.is_empty()
    }

    pub fn more_label(&self) -> Option<String> {
        self.has_more().then(|| format!("+{} more", self.overflow.len()))
    }
}
