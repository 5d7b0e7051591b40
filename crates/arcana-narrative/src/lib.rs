//! Narrative readings for Arcana profiles.
//!
//! Turns the reduced values of a [`arcana_core::Profile`] into titled
//! paragraphs (Character, Life Value, Potency, Running-Year Challenge and
//! optionally Current Cycle) followed by a disclaimer. Overlays are rendered
//! as phrases, never as bare numbers.

/// Narrator configuration and templates.
pub mod narrator;
/// Rendered reading types.
pub mod reading;

pub use narrator::{Narrator, NarratorConfig, Perspective, Verbosity};
pub use reading::{Paragraph, Reading};
