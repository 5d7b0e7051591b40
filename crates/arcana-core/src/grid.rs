//! Yearly grid: one column per year of life, one row per card key.
//!
//! Each column reduces `character anchor + digit_sum(year)`. The anchor row
//! is marked [`Mark::Single`] and the overlay row, when there is one,
//! [`Mark::Bridge`].

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::date::MAX_YEAR;
use crate::error::{ArcanaResult, check_range};
use crate::lexicon::CARD_COUNT;
use crate::profile::Profile;
use crate::reduce::{Reduction, digit_sum, reduce};

/// Default number of years shown.
pub const DEFAULT_SPAN: u32 = 88;
/// Largest accepted span.
pub const MAX_SPAN: u32 = 150;

/// Configuration for [`YearGrid::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of years, starting with the birth year.
    pub span: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { span: DEFAULT_SPAN }
    }
}

impl GridConfig {
    /// Set the number of years.
    pub fn with_span(mut self, span: u32) -> Self {
        self.span = span;
        self
    }
}

/// Cell marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    /// The reduced anchor.
    Single,
    /// The overlay.
    Bridge,
}

impl Mark {
    /// One-letter cell text.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::Bridge => "B",
        }
    }
}

/// One year of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearColumn {
    /// Calendar year.
    pub year: i32,
    /// Reduction of `character anchor + digit_sum(year)`.
    pub reduction: Reduction,
}

impl YearColumn {
    /// Marker for a row, if any.
    pub fn mark(&self, row: u8) -> Option<Mark> {
        if row == self.reduction.anchor {
            Some(Mark::Single)
        } else if Some(row) == self.reduction.overlay {
            Some(Mark::Bridge)
        } else {
            None
        }
    }
}

/// The full grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGrid {
    /// Columns in year order.
    pub columns: Vec<YearColumn>,
}

impl YearGrid {
    /// Build the grid for a profile.
    pub fn build(profile: &Profile, config: &GridConfig) -> ArcanaResult<Self> {
        check_range("span", i64::from(config.span), 1, i64::from(MAX_SPAN))?;

        let first = i64::from(profile.birth.year());
        let last = first + i64::from(config.span) - 1;
        check_range("last grid year", last, first, i64::from(MAX_YEAR))?;

        let anchor = i64::from(profile.character_anchor());
        let columns = (first..=last)
            .map(|year| YearColumn {
                // bounded by MAX_YEAR above
                year: year as i32,
                reduction: reduce(anchor + digit_sum(year.unsigned_abs()) as i64),
            })
            .collect::<Vec<_>>();

        tracing::debug!(first, last, columns = columns.len(), "built year grid");
        Ok(Self { columns })
    }

    /// Row keys from top to bottom: 22 down to 0.
    pub fn rows() -> impl Iterator<Item = u8> {
        (0..CARD_COUNT as u8).rev()
    }

    /// Column for a given year.
    pub fn column(&self, year: i32) -> Option<&YearColumn> {
        self.columns.iter().find(|c| c.year == year)
    }

    /// Markers along one row, in column order.
    pub fn row_marks(&self, row: u8) -> Vec<Option<Mark>> {
        self.columns.iter().map(|c| c.mark(row)).collect()
    }
}
