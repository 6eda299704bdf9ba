//! Day log: the set of logged days and the edits applied to them.
//!
//! A [`DayLog`] holds at most one [`DayRecord`] per date.  Edits never
//! mutate a stored record; each helper on `DayRecord` returns a
//! replacement that is then upserted.

use crate::models::{DayRecord, LeaveType, ShiftType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

impl DayRecord {
    /// Selects a shift.  Clears any leave, as the day editor does.
    pub fn with_shift(&self, shift: ShiftType) -> Self {
        Self {
            shift,
            leave: LeaveType::None,
            ..self.clone()
        }
    }

    /// Toggles a leave type: selecting the active one clears it.  Always
    /// clears the shift.
    pub fn toggle_leave(&self, leave: LeaveType) -> Self {
        let leave = if self.leave == leave { LeaveType::None } else { leave };
        Self {
            shift: ShiftType::None,
            leave,
            ..self.clone()
        }
    }

    pub fn toggle_holiday(&self) -> Self {
        Self {
            is_holiday: !self.is_holiday,
            ..self.clone()
        }
    }

    /// Adds `delta` overtime hours, never going below zero.
    pub fn adjust_overtime(&self, delta: f64) -> Self {
        Self {
            overtime_hours: (self.overtime_hours + delta).max(0.0),
            ..self.clone()
        }
    }
}

/// Records keyed by date, iterated in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DayRecord>", into = "Vec<DayRecord>")]
pub struct DayLog {
    records: BTreeMap<NaiveDate, DayRecord>,
}

impl DayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record`, replacing any previous record for its date.
    /// Returns the replaced record.
    pub fn upsert(&mut self, record: DayRecord) -> Option<DayRecord> {
        self.records.insert(record.date, record)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.records.get(&date)
    }

    /// The stored record for `date`, or a blank one for editing.
    pub fn get_or_empty(&self, date: NaiveDate) -> DayRecord {
        self.get(date)
            .cloned()
            .unwrap_or_else(|| DayRecord::empty(date))
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<DayRecord> {
        self.records.remove(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<DayRecord>> for DayLog {
    /// Later records for the same date win.
    fn from(records: Vec<DayRecord>) -> Self {
        records.into_iter().collect()
    }
}

impl From<DayLog> for Vec<DayRecord> {
    fn from(log: DayLog) -> Self {
        log.records.into_values().collect()
    }
}

impl FromIterator<DayRecord> for DayLog {
    fn from_iter<T: IntoIterator<Item = DayRecord>>(iter: T) -> Self {
        let mut log = DayLog::new();
        for record in iter {
            log.upsert(record);
        }
        log
    }
}

impl<'a> IntoIterator for &'a DayLog {
    type Item = &'a DayRecord;
    type IntoIter = std::collections::btree_map::Values<'a, NaiveDate, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
