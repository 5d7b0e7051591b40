//! Month calendar with a daily reduction per day.
//!
//! The month's base is `character anchor + digit_sum(calendar year)`; each
//! day reduces `base + day`. Weeks start on Monday and the first day is
//! placed from its exact weekday, so only days of the month itself appear.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{days_in_month, first_of_month};
use crate::error::ArcanaResult;
use crate::profile::Profile;
use crate::reduce::{Reduction, digit_sum, reduce};

/// Column headers, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// The date.
    pub date: NaiveDate,
    /// Reduction of `month base + day`.
    pub reduction: Reduction,
}

impl DayCell {
    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// A week row; `None` marks days outside the month.
pub type Week = [Option<DayCell>; 7];

/// A calendar month laid out in Monday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// Calendar year.
    pub year: i32,
    /// Month, 1..=12.
    pub month: u32,
    /// Unreduced base: character anchor + digit sum of the year.
    pub base: i64,
    /// Week rows, four to six of them.
    pub weeks: Vec<Week>,
}

impl MonthCalendar {
    /// Lay out `month` of `year` for a profile.
    pub fn build(profile: &Profile, year: i32, month: u32) -> ArcanaResult<Self> {
        let first = first_of_month(year, month)?;
        let year_sum = digit_sum(u64::from(year.unsigned_abs())) as i64;
        let base = i64::from(profile.character_anchor()) + year_sum;

        let offset = first.weekday().num_days_from_monday() as usize;
        let length = days_in_month(first) as usize;
        let rows = (offset + length).div_ceil(7);

        let mut weeks: Vec<Week> = vec![[None; 7]; rows];
        for (index, date) in first.iter_days().take(length).enumerate() {
            let slot = offset + index;
            weeks[slot / 7][slot % 7] = Some(DayCell {
                date,
                reduction: reduce(base + i64::from(date.day())),
            });
        }

        tracing::debug!(year, month, base, rows, "built month calendar");
        Ok(Self {
            year,
            month,
            base,
            weeks,
        })
    }

    /// Reduction of the month base itself.
    pub fn base_reduction(&self) -> Reduction {
        reduce(self.base)
    }

    /// All days in order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }

    /// The cell for a day of the month.
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.day() == day)
    }
}
