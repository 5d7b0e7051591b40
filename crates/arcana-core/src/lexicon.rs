//! Card names and narrative phrases keyed by reduced values.
//!
//! The standard tables are compiled in and built once per process. A full
//! replacement can be loaded from JSON; it is validated before use so every
//! lookup stays total over the reducer's output range.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{ArcanaError, ArcanaResult};
use crate::reduce::{OVERLAY_MAX, OVERLAY_MIN, OverlayMode, Reduction};

/// Number of card entries (keys 0..=22).
pub const CARD_COUNT: usize = 23;
/// Number of anchor themes (anchors 1..=9).
pub const ANCHOR_COUNT: usize = 9;
/// Number of overlay phrases (keys 10..=22).
pub const OVERLAY_COUNT: usize = (OVERLAY_MAX - OVERLAY_MIN + 1) as usize;

/// Major arcana names by key.
pub const CARD_NAMES: [&str; CARD_COUNT] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
    "The Fool (Master Cycle)",
];

/// Core theme, strengths, and challenges for anchors 1..=9.
const ANCHOR_THEMES: [(&str, [&str; 3], [&str; 3]); ANCHOR_COUNT] = [
    (
        "initiative and the will to begin",
        ["self-direction", "resourcefulness", "decisive action"],
        ["impatience", "a tendency to go it alone", "scattered ambition"],
    ),
    (
        "intuition and quiet partnership",
        ["diplomacy", "perceptiveness", "patience"],
        ["indecision", "over-sensitivity", "holding back what is known"],
    ),
    (
        "creative expression and abundance",
        ["imagination", "warmth", "a gift for words"],
        ["scattered focus", "overindulgence", "avoiding difficult feelings"],
    ),
    (
        "structure and steady building",
        ["discipline", "reliability", "practical judgement"],
        ["rigidity", "stubbornness", "overwork"],
    ),
    (
        "learning through change and tradition",
        ["adaptability", "curiosity", "persuasiveness"],
        ["restlessness", "inconsistency", "resistance to commitment"],
    ),
    (
        "responsibility and devotion to others",
        ["compassion", "loyalty", "a sense of beauty"],
        ["self-sacrifice", "perfectionism", "meddling"],
    ),
    (
        "the inner search and hard-won mastery",
        ["analytical depth", "determination", "independence"],
        ["aloofness", "scepticism", "restless drive"],
    ),
    (
        "personal power and material mastery",
        ["courage", "authority", "endurance"],
        ["the urge to control", "materialism", "pride"],
    ),
    (
        "wisdom gathered in service of others",
        ["vision", "generosity", "tolerance"],
        ["detachment", "living in the past", "difficulty letting go"],
    ),
];

/// Phrases for overlay keys 10..=22.
const OVERLAY_PHRASES: [&str; OVERLAY_COUNT] = [
    "a turning wheel that rewards readiness",
    "a call for balance and fair judgement",
    "a pause that asks for a new perspective",
    "an ending that clears the ground for renewal",
    "a lesson in moderation and patient blending",
    "a test of attachment and self-restraint",
    "a sudden upheaval that breaks false structures",
    "a renewal of hope and quiet guidance",
    "a passage through uncertainty and dream",
    "a surge of vitality and open success",
    "an awakening to a larger calling",
    "a cycle reaching completion",
    "a master cycle of fresh beginnings taken on faith",
];

static STANDARD: LazyLock<Lexicon> = LazyLock::new(Lexicon::build_standard);

/// Narrative material for one anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorTheme {
    /// One phrase naming what the anchor is about.
    pub core_theme: String,
    /// Qualities the anchor brings.
    pub strengths: Vec<String>,
    /// Qualities the anchor has to work through.
    pub challenges: Vec<String>,
}

/// All lookup tables used for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Card names by key 0..=22.
    pub cards: Vec<String>,
    /// Themes by anchor, index 0 holding anchor 1.
    pub anchors: Vec<AnchorTheme>,
    /// Overlay phrases, index 0 holding key 10.
    pub overlays: Vec<String>,
}

impl Lexicon {
    /// The built-in tables, shared for the life of the process.
    pub fn standard() -> &'static Lexicon {
        &STANDARD
    }

    fn build_standard() -> Self {
        tracing::debug!("building standard lexicon");
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            cards: owned(&CARD_NAMES),
            anchors: ANCHOR_THEMES
                .iter()
                .map(|(core, strengths, challenges)| AnchorTheme {
                    core_theme: core.to_string(),
                    strengths: owned(strengths),
                    challenges: owned(challenges),
                })
                .collect(),
            overlays: owned(&OVERLAY_PHRASES),
        }
    }

    /// Decode and validate a lexicon from JSON.
    pub fn from_json(json: &str) -> ArcanaResult<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        tracing::debug!(cards = lexicon.cards.len(), "loaded custom lexicon");
        Ok(lexicon)
    }

    /// Encode as pretty-printed JSON, suitable for editing and reloading.
    pub fn to_json(&self) -> ArcanaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every table has the size the reducer relies on.
    pub fn validate(&self) -> ArcanaResult<()> {
        if self.cards.len() != CARD_COUNT {
            return Err(ArcanaError::InvalidLexicon(format!(
                "expected {CARD_COUNT} cards, found {}",
                self.cards.len()
            )));
        }
        if self.anchors.len() != ANCHOR_COUNT {
            return Err(ArcanaError::InvalidLexicon(format!(
                "expected {ANCHOR_COUNT} anchor themes, found {}",
                self.anchors.len()
            )));
        }
        if self.overlays.len() != OVERLAY_COUNT {
            return Err(ArcanaError::InvalidLexicon(format!(
                "expected {OVERLAY_COUNT} overlay phrases, found {}",
                self.overlays.len()
            )));
        }
        for (i, theme) in self.anchors.iter().enumerate() {
            if theme.strengths.is_empty() || theme.challenges.is_empty() {
                return Err(ArcanaError::InvalidLexicon(format!(
                    "anchor {} needs at least one strength and one challenge",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Card name for a key in 0..=22.
    pub fn card(&self, key: u8) -> &str {
        self.cards
            .get(usize::from(key))
            .map_or("N/A", String::as_str)
    }

    /// Theme for an anchor in 1..=9.
    pub fn theme(&self, anchor: u8) -> Option<&AnchorTheme> {
        usize::from(anchor)
            .checked_sub(1)
            .and_then(|i| self.anchors.get(i))
    }

    /// Short cell label such as `1 (The Magician) | B:19`.
    ///
    /// The bridge suffix only appears in [`OverlayMode::Bridge`].
    pub fn label(&self, r: &Reduction, mode: OverlayMode) -> String {
        let label = format!("{} ({})", r.anchor, self.card(r.anchor));
        match r.key(mode) {
            key if key == r.anchor => label,
            bridge => format!("{label} | B:{bridge}"),
        }
    }

    /// Phrase for an overlay key in 10..=22.
    pub fn overlay_phrase(&self, key: u8) -> Option<&str> {
        key.checked_sub(OVERLAY_MIN)
            .and_then(|i| self.overlays.get(usize::from(i)))
            .map(String::as_str)
    }
}
