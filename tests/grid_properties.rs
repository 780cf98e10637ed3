// Property-based tests for month grid construction and day indexing

use chrono::{Datelike, NaiveDate};
use econ_calendar::models::event::EconomicEvent;
use econ_calendar::models::filter::YearMonth;
use econ_calendar::services::calendar_grid::{build_grid, CellMonth, GRID_CELLS};
use econ_calendar::services::events_index::{index_by_day, CellEvents, MAX_VISIBLE_PER_CELL};
use econ_calendar::utils::date::days_in_month;
use proptest::prelude::*;

fn event_on(id: usize, date: NaiveDate) -> EconomicEvent {
    serde_json::from_value(serde_json::json!({
        "_id": id.to_string(),
        "date": date.format("%Y-%m-%d").to_string(),
        "event": format!("Release {}", id),
        "impact": "medium"
    }))
    .unwrap()
}

proptest! {
    /// Property: every month lays out as 42 cells with exactly its own days belonging
    #[test]
    fn prop_grid_has_42_cells_and_month_days(year in 1900..2200i32, month in 1..=12u32) {
        let ym = YearMonth::new(year, month).unwrap();
        let grid = build_grid(ym);

        prop_assert_eq!(grid.len(), GRID_CELLS);
        let belonging: Vec<u32> = grid
            .iter()
            .filter(|c| c.belongs_to_displayed_month())
            .map(|c| c.day_number)
            .collect();
        prop_assert_eq!(belonging.len() as u32, days_in_month(year, month));
        prop_assert_eq!(belonging, (1..=days_in_month(year, month)).collect::<Vec<_>>());

        let trailing = grid.iter().filter(|c| c.month == CellMonth::Next).count();
        prop_assert!(trailing >= 5);
    }

    /// Property: cells resolve to 42 consecutive dates starting on a Sunday
    #[test]
    fn prop_grid_dates_are_consecutive(year in 1900..2200i32, month in 1..=12u32) {
        let ym = YearMonth::new(year, month).unwrap();
        let grid = build_grid(ym);
        let first = grid[0].date(ym).unwrap();

        prop_assert_eq!(first.weekday().num_days_from_sunday(), 0);
        for (offset, cell) in grid.iter().enumerate() {
            prop_assert_eq!(cell.date(ym), Some(first + chrono::Duration::days(offset as i64)));
        }
    }

    /// Property: each in-month event lands in exactly one bucket, in input order
    #[test]
    fn prop_index_partitions_events(
        year in 2000..2100i32,
        month in 1..=12u32,
        days in prop::collection::vec(1..=31u32, 0..60),
    ) {
        let ym = YearMonth::new(year, month).unwrap();
        let events: Vec<EconomicEvent> = days
            .iter()
            .enumerate()
            .filter_map(|(i, d)| ym.day(*d).map(|date| event_on(i, date)))
            .collect();

        let index = index_by_day(&events, ym);
        prop_assert_eq!(index.total(), events.len());

        let mut seen: Vec<String> = index
            .busy_days()
            .flat_map(|d| index.events_on(d).iter().map(|e| e.id.clone()))
            .collect();
        seen.sort();
        let mut expected: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);

        for day in index.busy_days() {
            let bucket = index.events_on(day);
            let ids: Vec<usize> = bucket.iter().map(|e| e.id.parse().unwrap()).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));

            let cell = CellEvents::split(bucket);
            prop_assert_eq!(cell.shown.len(), bucket.len().min(MAX_VISIBLE_PER_CELL));
            prop_assert_eq!(cell.shown.len() + cell.overflow.len(), bucket.len());
        }
    }
}
