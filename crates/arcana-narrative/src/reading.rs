//! Rendered readings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One titled paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph heading.
    pub title: String,
    /// Paragraph text.
    pub body: String,
}

/// A complete narrative reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Name and birth date line.
    pub header: String,
    /// Paragraphs in reading order.
    pub paragraphs: Vec<Paragraph>,
    /// Closing disclaimer.
    pub disclaimer: String,
}

impl Reading {
    /// Find a paragraph by title.
    pub fn paragraph(&self, title: &str) -> Option<&Paragraph> {
        self.paragraphs.iter().find(|p| p.title == title)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for paragraph in &self.paragraphs {
            writeln!(f)?;
            writeln!(f, "{}", paragraph.title)?;
            writeln!(f, "{}", paragraph.body)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.disclaimer)
    }
}
