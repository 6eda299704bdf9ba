//! Monday-first calendar grid for a pay cycle.

use crate::cycle::{resolve_cycle, shift_month, PayCycle};
use crate::day_log::DayLog;
use crate::error::Result;
use crate::models::DayRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weekday column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["T2", "T3", "T4", "T5", "T6", "T7", "CN"];

/// The dates of one cycle laid out in seven columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub year: i32,
    pub month_index: i32,
    pub cycle: PayCycle,
    /// Column headers, Monday first.
    pub weekdays: Vec<String>,
    /// `None` cells pad the first row so the cycle's first date sits
    /// under its weekday.
    pub cells: Vec<Option<NaiveDate>>,
}

impl CalendarView {
    pub fn build(year: i32, month_index: i32) -> Result<Self> {
        let cycle = resolve_cycle(year, month_index)?;
        let padding = cycle.start.date().weekday().num_days_from_monday() as usize;
        let cells = std::iter::repeat(None)
            .take(padding)
            .chain(cycle.days().map(Some))
            .collect();
        Ok(Self {
            year,
            month_index,
            cycle,
            weekdays: WEEKDAY_LABELS.iter().map(|l| l.to_string()).collect(),
            cells,
        })
    }

    /// The view `offset` cycles away, as the previous/next buttons move.
    pub fn shifted(&self, offset: i32) -> Result<Self> {
        let (year, month_index) = shift_month(self.year, self.month_index, offset)?;
        Self::build(year, month_index)
    }

    /// Number of leading empty cells.
    pub fn padding(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_none()).count()
    }

    /// The cells grouped into weeks; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<NaiveDate>]> {
        self.cells.chunks(7)
    }

    /// Pairs every date of the cycle with its logged record, if any.
    pub fn with_records<'a>(
        &'a self,
        log: &'a DayLog,
    ) -> impl Iterator<Item = (NaiveDate, Option<&'a DayRecord>)> + 'a {
        self.cells.iter().flatten().map(move |d| (*d, log.get(*d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;

    #[test]
    fn test_padding_for_thursday_start() {
        // 2023-12-21 is a Thursday.
        let view = CalendarView::build(2024, 0).unwrap();
        assert_eq!(view.padding(), 3);
        assert_eq!(view.cells.len(), 3 + 11 + 27);
        assert_eq!(
            view.cells[3],
            Some(NaiveDate::from_ymd_opt(2023, 12, 21).unwrap())
        );
        assert_eq!(
            view.cells.last().copied().flatten(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 27).unwrap())
        );
        assert_eq!(view.weeks().next().unwrap().len(), view.weekdays.len());
        assert_eq!(view.weekdays.first().map(String::as_str), Some("T2"));
        assert_eq!(view.weekdays.last().map(String::as_str), Some("CN"));
    }

    #[test]
    fn test_sunday_start_pads_six_cells() {
        // 2024-04-21 is a Sunday.
        let view = CalendarView::build(2024, 4).unwrap();
        assert_eq!(view.padding(), 6);
    }

    #[test]
    fn test_monday_start_has_no_padding() {
        // 2024-10-21 is a Monday.
        let view = CalendarView::build(2024, 10).unwrap();
        assert_eq!(view.padding(), 0);
    }

    #[test]
    fn test_navigation_crosses_years() {
        let view = CalendarView::build(2024, 0).unwrap();
        let prev = view.shifted(-1).unwrap();
        assert_eq!((prev.year, prev.month_index), (2023, 11));
        assert_eq!(prev.cycle, resolve_cycle(2023, 11).unwrap());
        let next = prev.shifted(2).unwrap();
        assert_eq!((next.year, next.month_index), (2024, 1));
    }

    #[test]
    fn test_records_lookup() {
        let view = CalendarView::build(2024, 0).unwrap();
        let logged = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut log = DayLog::new();
        log.upsert(DayRecord::empty(logged).with_shift(ShiftType::Day));

        let found: Vec<NaiveDate> = view
            .with_records(&log)
            .filter_map(|(d, r)| r.map(|_| d))
            .collect();
        assert_eq!(found, vec![logged]);
        assert_eq!(view.with_records(&log).count(), 38);
    }
}
