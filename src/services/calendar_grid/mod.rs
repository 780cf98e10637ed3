//! Month grid construction.
//!
//! A month is always laid out as six full Sunday-first weeks (42 cells),
//! padded with the tail of the previous month and the head of the next one.

use chrono::NaiveDate;

use crate::models::filter::YearMonth;
use crate::utils::date::first_weekday;

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Which month a grid cell's day number refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMonth {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub day_number: u32,
    pub month: CellMonth,
}

impl DayCell {
    pub fn belongs_to_displayed_month(&self) -> bool {
        self.month == CellMonth::Current
    }

    /// Absolute date of this cell when `displayed` is the month on screen
    pub fn date(&self, displayed: YearMonth) -> Option<NaiveDate> {
        let month = match self.month {
            CellMonth::Previous => displayed.previous(),
            CellMonth::Current => displayed,
            CellMonth::Next => displayed.next(),
        };
        month.day(self.day_number)
    }
}

/// Build the 42 cells for `month`.
pub fn build_grid(month: YearMonth) -> [DayCell; GRID_CELLS] {
    let leading = first_weekday(month.year(), month.month()).unwrap_or(0) as usize;
    let days = month.days() as usize;
    let previous_days = month.previous().days() as usize;

    let mut cells = [DayCell {
        day_number: 0,
        month: CellMonth::Current,
    }; GRID_CELLS];

    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = if i < leading {
            DayCell {
                day_number: (previous_days - leading + 1 + i) as u32,
                month: CellMonth::Previous,
            }
        } else if i < leading + days {
            DayCell {
                day_number: (i - leading + 1) as u32,
                month: CellMonth::Current,
            }
        } else {
            DayCell {
                day_number: (i - leading - days + 1) as u32,
                month: CellMonth::Next,
            }
        };
    }

    cells
}

/// Number of cells that belong to the displayed month
pub fn current_month_cell_count(cells: &[DayCell]) -> usize {
    cells.iter().filter(|c| c.belongs_to_displayed_month()).count()
}
