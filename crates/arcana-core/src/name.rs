//! Pythagorean letter values for names.

use serde::{Deserialize, Serialize};

use crate::reduce::{Reduction, reduce};

/// Value of a single character: A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8.
/// Case-insensitive; anything that is not an ASCII letter counts 0.
pub fn letter_value(ch: char) -> u8 {
    if ch.is_ascii_alphabetic() {
        let offset = ch.to_ascii_uppercase() as u8 - b'A';
        offset % 9 + 1
    } else {
        0
    }
}

/// Sum of the letter values of `name`.
pub fn name_total(name: &str) -> i64 {
    name.chars().map(|c| i64::from(letter_value(c))).sum()
}

/// The reduced value of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    /// The name as given.
    pub name: String,
    /// Reduction of the letter total. A name without letters reduces to 0.
    pub reduction: Reduction,
}

impl NameValue {
    /// Compute the value of `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let reduction = reduce(name_total(&name));
        Self { name, reduction }
    }

    /// Whether the name contributed any letters.
    pub fn is_empty(&self) -> bool {
        self.reduction.total == 0
    }
}
