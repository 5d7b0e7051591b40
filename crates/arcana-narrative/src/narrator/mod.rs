//! Narrator system for generating readings.

mod config;
mod templates;

pub use config::{DEFAULT_DISCLAIMER, NarratorConfig, Perspective, Verbosity};
pub use templates::{
    CHARACTER, CURRENT_CYCLE, LIFE_VALUE, Narrator, POTENCY, RUNNING_YEAR, capitalize,
    join_natural, reduction_trail,
};
