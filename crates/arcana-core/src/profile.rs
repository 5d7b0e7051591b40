//! Profile builder: derives every total from a birth date and reduces it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{effective_running_year, parse_date, today};
use crate::error::ArcanaResult;
use crate::lexicon::Lexicon;
use crate::name::NameValue;
use crate::reduce::{Reduction, reduce};

/// Builder for a [`Profile`].
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    birth: NaiveDate,
    name: Option<String>,
    reference: Option<NaiveDate>,
}

impl ProfileBuilder {
    /// Start from a birth date.
    pub fn new(birth: NaiveDate) -> Self {
        Self {
            birth,
            name: None,
            reference: None,
        }
    }

    /// Start from birth-date text (`DD/MM/YYYY`).
    pub fn parse(birth: &str) -> ArcanaResult<Self> {
        parse_date(birth).map(Self::new)
    }

    /// Attach a name. Blank names are ignored.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            None
        } else {
            Some(name.trim().to_string())
        };
        self
    }

    /// Fix the reference date ("today"). Defaults to the local date.
    pub fn with_reference(mut self, reference: NaiveDate) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Compute the profile.
    pub fn build(self) -> Profile {
        let reference = self.reference.unwrap_or_else(today);
        let birth = self.birth;

        let character =
            reduce(i64::from(birth.day()) + i64::from(birth.month()) + i64::from(birth.year()));
        let anchor = i64::from(character.anchor);

        let life_value = reduce(i64::from(birth.year()) + anchor);

        let year = effective_running_year(birth, reference);
        let running_year = RunningYear {
            year,
            reduction: reduce(i64::from(year) + anchor),
        };

        let month_base = i64::from(reference.month()) + i64::from(reference.year()) + anchor;
        let running_month = reduce(month_base);
        let running_day = reduce(month_base + i64::from(reference.day()));

        let name = self.name.map(NameValue::new);

        tracing::debug!(
            %birth,
            %reference,
            character = character.anchor,
            life_value = life_value.anchor,
            running_year = running_year.reduction.anchor,
            "built profile"
        );

        Profile {
            birth,
            reference,
            name,
            character,
            life_value,
            running_year,
            running_month,
            running_day,
        }
    }
}

/// The running year and its reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningYear {
    /// Year of the most recent birthday.
    pub year: i32,
    /// Reduction of `year + character anchor`.
    pub reduction: Reduction,
}

/// Every reduced value derived from one birth date and reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Date of birth.
    pub birth: NaiveDate,
    /// The "today" the running values are computed for.
    pub reference: NaiveDate,
    /// Name value, when a name was given.
    pub name: Option<NameValue>,
    /// Day + month + year of birth.
    pub character: Reduction,
    /// Birth year + character anchor.
    pub life_value: Reduction,
    /// Running year + character anchor.
    pub running_year: RunningYear,
    /// Reference month + reference year + character anchor.
    pub running_month: Reduction,
    /// Reference day + month + year + character anchor.
    pub running_day: Reduction,
}

impl Profile {
    /// The character anchor every other total builds on.
    pub fn character_anchor(&self) -> u8 {
        self.character.anchor
    }

    /// One summary panel per reduced value, in display order.
    ///
    /// The name panel is always present; without a name it reports zeros.
    pub fn panels(&self, lexicon: &Lexicon) -> Vec<Panel> {
        let name = self
            .name
            .as_ref()
            .map_or_else(|| reduce(0), |n| n.reduction);

        [
            (PanelKind::Character, self.character),
            (PanelKind::LifeValue, self.life_value),
            (PanelKind::Name, name),
            (PanelKind::RunningYear, self.running_year.reduction),
            (PanelKind::RunningMonth, self.running_month),
            (PanelKind::RunningDay, self.running_day),
        ]
        .into_iter()
        .map(|(kind, r)| Panel::new(kind, r, lexicon))
        .collect()
    }
}

/// Which derived value a panel describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Character (date of birth).
    Character,
    /// Life value.
    LifeValue,
    /// Name value.
    Name,
    /// Running year.
    RunningYear,
    /// Running month.
    RunningMonth,
    /// Running day.
    RunningDay,
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "Character"),
            Self::LifeValue => write!(f, "Life Value"),
            Self::Name => write!(f, "Name"),
            Self::RunningYear => write!(f, "Running Year"),
            Self::RunningMonth => write!(f, "Running Month"),
            Self::RunningDay => write!(f, "Running Day"),
        }
    }
}

/// A reduction with its card names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// What this panel describes.
    pub kind: PanelKind,
    /// Unreduced total.
    pub total: i64,
    /// First digit sum.
    pub digit_sum: u64,
    /// Anchor ("single").
    pub single: u8,
    /// Overlay ("bridge").
    pub bridge: Option<u8>,
    /// Card for the anchor.
    pub tarot: String,
    /// Card for the overlay.
    pub bridge_tarot: Option<String>,
}

impl Panel {
    fn new(kind: PanelKind, r: Reduction, lexicon: &Lexicon) -> Self {
        Self {
            kind,
            total: r.total,
            digit_sum: r.digit_sum,
            single: r.anchor,
            bridge: r.overlay,
            tarot: lexicon.card(r.anchor).to_string(),
            bridge_tarot: r.overlay.map(|b| lexicon.card(b).to_string()),
        }
    }
}
