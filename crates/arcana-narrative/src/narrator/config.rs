//! Narrator configuration.

/// Closing line appended to every reading unless overridden.
pub const DEFAULT_DISCLAIMER: &str = "This reading is offered for reflection and entertainment. \
It is not a prediction and is no substitute for professional advice.";

/// Narrative perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Perspective {
    /// Second person ("Your character is ...").
    #[default]
    SecondPerson,
    /// Third person, using the person's name or "they".
    ThirdPerson,
}

/// Verbosity level for readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only the opening sentence of each paragraph.
    Terse,
    /// Full paragraphs.
    #[default]
    Normal,
    /// Full paragraphs followed by the reduction trail.
    Verbose,
}

/// Configuration for the narrator.
#[derive(Debug, Clone, Default)]
pub struct NarratorConfig {
    /// The narrative perspective.
    pub perspective: Perspective,
    /// The verbosity level.
    pub verbosity: Verbosity,
    /// Add a paragraph on the running month and day.
    pub include_cycles: bool,
    /// Replacement for [`DEFAULT_DISCLAIMER`].
    pub disclaimer: Option<String>,
}

impl NarratorConfig {
    /// Create a new narrator config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the perspective.
    pub fn with_perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }

    /// Set the verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Include the running month and day.
    pub fn with_cycles(mut self, include: bool) -> Self {
        self.include_cycles = include;
        self
    }

    /// Replace the closing disclaimer.
    pub fn with_disclaimer(mut self, text: impl Into<String>) -> Self {
        self.disclaimer = Some(text.into());
        self
    }

    /// The disclaimer in effect.
    pub fn disclaimer(&self) -> &str {
        self.disclaimer.as_deref().unwrap_or(DEFAULT_DISCLAIMER)
    }

    /// Possessive form for the subject of the reading.
    ///
    /// Third person uses the name when there is one.
    pub fn possessive(&self, name: Option<&str>) -> String {
        match (self.perspective, name) {
            (Perspective::SecondPerson, _) => "your".to_string(),
            (Perspective::ThirdPerson, Some(name)) => format!("{name}'s"),
            (Perspective::ThirdPerson, None) => "their".to_string(),
        }
    }
}
