//! Core numerology model for Arcana.
//!
//! Totals derived from a birth date (and optionally a name) are reduced to
//! a single-digit anchor with an optional 10-22 overlay, then looked up in a
//! tarot lexicon. Everything here is a pure function of its inputs; the
//! narrative and CLI crates only format what this crate computes.

/// Month calendar with daily reductions.
pub mod calendar;
/// Date parsing and the running-year rule.
pub mod date;
/// Error types used throughout the crate.
pub mod error;
/// Yearly Single/Bridge grid.
pub mod grid;
/// Card names and narrative phrases.
pub mod lexicon;
/// Pythagorean name values.
pub mod name;
/// Profile builder and summary panels.
pub mod profile;
/// Digit reduction.
pub mod reduce;

/// Re-export calendar types.
pub use calendar::{DayCell, MonthCalendar};
/// Re-export error types.
pub use error::{ArcanaError, ArcanaResult};
/// Re-export grid types.
pub use grid::{GridConfig, Mark, YearGrid};
/// Re-export lexicon types.
pub use lexicon::{AnchorTheme, Lexicon};
/// Re-export name types.
pub use name::NameValue;
/// Re-export profile types.
pub use profile::{Panel, PanelKind, Profile, ProfileBuilder, RunningYear};
/// Re-export reducer types.
pub use reduce::{OverlayMode, Reduction, reduce};
