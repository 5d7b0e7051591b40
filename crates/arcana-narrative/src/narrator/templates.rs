//! Paragraph templates for readings.

use arcana_core::date::format_date;
use arcana_core::reduce::digit_sum;
use arcana_core::{AnchorTheme, Lexicon, Profile, Reduction};

use super::config::{NarratorConfig, Verbosity};
use crate::reading::{Paragraph, Reading};

/// Paragraph titles, in reading order.
pub const CHARACTER: &str = "Character";
/// Life value paragraph.
pub const LIFE_VALUE: &str = "Life Value";
/// Potency paragraph.
pub const POTENCY: &str = "Potency";
/// Running-year paragraph.
pub const RUNNING_YEAR: &str = "Running-Year Challenge";
/// Optional running month/day paragraph.
pub const CURRENT_CYCLE: &str = "Current Cycle";

/// Join items as natural language: "a", "a and b", "a, b, and c".
pub fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Upper-case the first letter.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The digit-sum steps from total to anchor, e.g. `1988 -> 26 -> 8`.
pub fn reduction_trail(r: &Reduction) -> String {
    let mut steps = vec![r.total.unsigned_abs(), r.digit_sum];
    let mut value = r.digit_sum;
    while value > 9 {
        value = digit_sum(value);
        steps.push(value);
    }
    steps.dedup();
    steps
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Renders a [`Profile`] as a [`Reading`].
#[derive(Debug, Clone)]
pub struct Narrator<'a> {
    config: NarratorConfig,
    lexicon: &'a Lexicon,
}

impl<'a> Narrator<'a> {
    /// Create a narrator over a lexicon.
    pub fn new(config: NarratorConfig, lexicon: &'a Lexicon) -> Self {
        Self { config, lexicon }
    }

    /// Render the full reading.
    pub fn narrate(&self, profile: &Profile) -> Reading {
        let name = profile.name.as_ref().map(|n| n.name.as_str());

        let mut paragraphs = vec![
            self.character(profile, name),
            self.life_value(profile, name),
            self.potency(profile, name),
            self.running_year(profile, name),
        ];
        if self.config.include_cycles {
            paragraphs.push(self.current_cycle(profile));
        }

        tracing::debug!(paragraphs = paragraphs.len(), "narrated profile");

        Reading {
            header: self.header(profile, name),
            paragraphs,
            disclaimer: self.config.disclaimer().to_string(),
        }
    }

    fn header(&self, profile: &Profile, name: Option<&str>) -> String {
        let born = format_date(profile.birth);
        match name {
            Some(name) => format!("Numerology reading for {name}, born {born}"),
            None => format!("Numerology reading for a birth date of {born}"),
        }
    }

    fn character(&self, profile: &Profile, name: Option<&str>) -> Paragraph {
        let r = &profile.character;
        let whose = capitalize(&self.config.possessive(name));
        let mut sentences = vec![format!(
            "{whose} character is {}, a number of {}.",
            self.card(r),
            self.theme_phrase(r)
        )];
        if let Some(theme) = self.theme(r) {
            sentences.push(format!("It shows in {}.", join_natural(&theme.strengths)));
        }
        if let Some(line) = self.overlay_line("The character total", r) {
            sentences.push(line);
        }
        self.paragraph(CHARACTER, sentences, &[r])
    }

    fn life_value(&self, profile: &Profile, name: Option<&str>) -> Paragraph {
        let r = &profile.life_value;
        let whose = capitalize(&self.config.possessive(name));
        let mut sentences = vec![format!(
            "{whose} life value is {}, a lifelong lesson in {}.",
            self.card(r),
            self.theme_phrase(r)
        )];
        if let Some(theme) = self.theme(r) {
            sentences.push(format!(
                "It matures through {}, and asks for patience with {}.",
                join_natural(&theme.strengths),
                join_natural(&theme.challenges)
            ));
        }
        if let Some(line) = self.overlay_line("The life-value total", r) {
            sentences.push(line);
        }
        self.paragraph(LIFE_VALUE, sentences, &[r])
    }

    fn potency(&self, profile: &Profile, name: Option<&str>) -> Paragraph {
        let character = &profile.character;
        let life = &profile.life_value;
        let whose = capitalize(&self.config.possessive(name));

        let mut sentences = vec![if character.anchor == life.anchor {
            format!(
                "{whose} potency is concentrated: character and life value both rest on {}.",
                self.card(character)
            )
        } else {
            format!(
                "{whose} potency comes from {} working through {}.",
                self.card(character),
                self.card(life)
            )
        }];

        let overlays: Vec<String> = [character, life]
            .iter()
            .filter_map(|r| {
                let key = r.overlay?;
                self.lexicon.overlay_phrase(key).map(str::to_string)
            })
            .collect();

        if let Some(named) = &profile.name {
            let n = &named.reduction;
            if !named.is_empty() {
                sentences.push(format!(
                    "The name carries {}, adding {}.",
                    self.card(n),
                    self.theme_phrase(n)
                ));
            }
        }

        if overlays.is_empty() {
            sentences.push(
                "No overlay colours these numbers, so their energy works directly.".to_string(),
            );
        } else {
            sentences.push(format!("Overlays bring {}.", join_natural(&overlays)));
        }
        self.paragraph(POTENCY, sentences, &[character, life])
    }

    fn running_year(&self, profile: &Profile, name: Option<&str>) -> Paragraph {
        let running = &profile.running_year;
        let r = &running.reduction;
        let whose = self.config.possessive(name);
        let mut sentences = vec![format!(
            "Since the birthday in {}, {whose} running year is {}, a year of {}.",
            running.year,
            self.card(r),
            self.theme_phrase(r)
        )];
        if let Some(theme) = self.theme(r) {
            sentences.push(format!(
                "The challenge of this year is to work through {}.",
                join_natural(&theme.challenges)
            ));
        }
        if let Some(line) = self.overlay_line("The running-year total", r) {
            sentences.push(line);
        }
        self.paragraph(RUNNING_YEAR, sentences, &[r])
    }

    fn current_cycle(&self, profile: &Profile) -> Paragraph {
        let month = &profile.running_month;
        let day = &profile.running_day;
        let sentences = vec![
            format!(
                "On {} the month carries {} and the day carries {}.",
                format_date(profile.reference),
                self.card(month),
                self.card(day)
            ),
            format!(
                "Let {} set the tone and {} guide the hours.",
                self.theme_phrase(month),
                self.theme_phrase(day)
            ),
        ];
        self.paragraph(CURRENT_CYCLE, sentences, &[month, day])
    }

    fn paragraph(
        &self,
        title: &'static str,
        sentences: Vec<String>,
        trail: &[&Reduction],
    ) -> Paragraph {
        let body = match self.config.verbosity {
            Verbosity::Terse => sentences.into_iter().next().unwrap_or_default(),
            Verbosity::Normal => sentences.join(" "),
            Verbosity::Verbose => {
                let steps = trail
                    .iter()
                    .map(|r| reduction_trail(r))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("{} ({steps})", sentences.join(" "))
            }
        };
        Paragraph {
            title: title.to_string(),
            body,
        }
    }

    fn overlay_line(&self, label: &str, r: &Reduction) -> Option<String> {
        let key = r.overlay?;
        let phrase = self.lexicon.overlay_phrase(key)?;
        Some(format!(
            "{label} passes through {}, which brings {phrase}.",
            self.lexicon.card(key)
        ))
    }

    fn card(&self, r: &Reduction) -> String {
        format!("{} ({})", self.lexicon.card(r.anchor), r.anchor)
    }

    fn theme(&self, r: &Reduction) -> Option<&'a AnchorTheme> {
        self.lexicon.theme(r.anchor)
    }

    fn theme_phrase(&self, r: &Reduction) -> &'a str {
        self.theme(r).map_or("open beginnings", |t| t.core_theme.as_str())
    }
}

impl Default for Narrator<'static> {
    fn default() -> Self {
        Self::new(NarratorConfig::default(), Lexicon::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::Perspective;
    use arcana_core::{ProfileBuilder, reduce};
    use chrono::NaiveDate;

    fn profile(birth: &str, name: Option<&str>) -> Profile {
        let mut builder = ProfileBuilder::parse(birth)
            .unwrap()
            .with_reference(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        if let Some(name) = name {
            builder = builder.with_name(name);
        }
        builder.build()
    }

    fn narrator(config: NarratorConfig) -> Narrator<'static> {
        Narrator::new(config, Lexicon::standard())
    }

    #[test]
    fn natural_lists() {
        fn items(xs: &[&str]) -> Vec<String> {
            xs.iter().map(|s| s.to_string()).collect()
        }
        assert_eq!(join_natural(&[]), "");
        assert_eq!(join_natural(&items(&["a"])), "a");
        assert_eq!(join_natural(&items(&["a", "b"])), "a and b");
        assert_eq!(join_natural(&items(&["a", "b", "c"])), "a, b, and c");
        assert_eq!(join_natural(&items(&["a", "b", "c", "d"])), "a, b, c, and d");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("your"), "Your");
        assert_eq!(capitalize("Sari's"), "Sari's");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn trails() {
        assert_eq!(reduction_trail(&reduce(1988)), "1988 -> 26 -> 8");
        assert_eq!(reduction_trail(&reduce(1966)), "1966 -> 22 -> 4");
        assert_eq!(reduction_trail(&reduce(6)), "6");
        assert_eq!(reduction_trail(&reduce(-19)), "19 -> 10 -> 1");
    }

    #[test]
    fn four_paragraphs_in_order() {
        let reading = Narrator::default().narrate(&profile("21/06/1961", Some("Sari")));
        assert_eq!(reading.header, "Numerology reading for Sari, born 21/06/1961");
        let titles: Vec<&str> = reading.paragraphs.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec![CHARACTER, LIFE_VALUE, POTENCY, RUNNING_YEAR]);
        assert_eq!(reading.disclaimer, crate::narrator::DEFAULT_DISCLAIMER);
    }

    #[test]
    fn character_paragraph() {
        let reading = Narrator::default().narrate(&profile("21/06/1961", None));
        assert_eq!(reading.header, "Numerology reading for a birth date of 21/06/1961");
        let body = &reading.paragraph(CHARACTER).unwrap().body;
        assert!(body.starts_with(
            "Your character is Strength (8), a number of personal power and material mastery."
        ));
        assert!(body.contains("It shows in courage, authority, and endurance."));
        assert!(!body.contains("passes through"));
    }

    #[test]
    fn potency_without_overlays() {
        let reading = Narrator::default().narrate(&profile("21/06/1961", Some("Sari")));
        let body = &reading.paragraph(POTENCY).unwrap().body;
        assert!(body.contains("Strength (8) working through The Chariot (7)"));
        assert!(body.contains("The name carries The High Priestess (2)"));
        assert!(body.contains("No overlay colours these numbers"));
    }

    #[test]
    fn running_year_challenge() {
        let reading = Narrator::default().narrate(&profile("21/06/1961", None));
        let body = &reading.paragraph(RUNNING_YEAR).unwrap().body;
        assert!(body.starts_with("Since the birthday in 2023, your running year is The Lovers (6)"));
        assert!(body.contains("work through self-sacrifice, perfectionism, and meddling."));
    }

    #[test]
    fn overlays_render_as_phrases() {
        let reading = Narrator::default().narrate(&profile("19/07/1977", None));
        let life = &reading.paragraph(LIFE_VALUE).unwrap().body;
        assert!(life.starts_with("Your life value is The High Priestess (2)"));
        assert!(life.contains(
            "The life-value total passes through Judgement, which brings an awakening to a larger calling."
        ));
        assert!(!life.contains("20"));

        let potency = &reading.paragraph(POTENCY).unwrap().body;
        assert!(potency.contains("Overlays bring an awakening to a larger calling."));
    }

    #[test]
    fn third_person_uses_name_or_they() {
        let config = NarratorConfig::new().with_perspective(Perspective::ThirdPerson);

        let reading = narrator(config.clone()).narrate(&profile("21/06/1961", Some("Sari")));
        assert!(reading.paragraph(CHARACTER).unwrap().body.starts_with("Sari's character"));
        assert!(
            reading
                .paragraph(RUNNING_YEAR)
                .unwrap()
                .body
                .contains("2023, Sari's running year")
        );

        let reading = narrator(config).narrate(&profile("21/06/1961", None));
        assert!(reading.paragraph(CHARACTER).unwrap().body.starts_with("Their character"));
        assert!(reading.paragraph(RUNNING_YEAR).unwrap().body.contains("their running year"));
    }

    #[test]
    fn terse_keeps_first_sentence() {
        let reading = narrator(NarratorConfig::new().with_verbosity(Verbosity::Terse))
            .narrate(&profile("21/06/1961", None));
        assert_eq!(
            reading.paragraph(CHARACTER).unwrap().body,
            "Your character is Strength (8), a number of personal power and material mastery."
        );
    }

    #[test]
    fn verbose_appends_trail() {
        let reading = narrator(NarratorConfig::new().with_verbosity(Verbosity::Verbose))
            .narrate(&profile("21/06/1961", None));
        let body = &reading.paragraph(CHARACTER).unwrap().body;
        assert!(body.ends_with("(1988 -> 26 -> 8)"));
        let potency = &reading.paragraph(POTENCY).unwrap().body;
        assert!(potency.ends_with("(1988 -> 26 -> 8; 1969 -> 25 -> 7)"));
    }

    #[test]
    fn current_cycle_paragraph() {
        let reading = narrator(NarratorConfig::new().with_cycles(true))
            .narrate(&profile("21/06/1961", None));
        assert_eq!(reading.paragraphs.len(), 5);
        let cycle = reading.paragraphs.last().unwrap();
        assert_eq!(cycle.title, CURRENT_CYCLE);
        assert!(cycle.body.starts_with(
            "On 20/06/2024 the month carries The Emperor (4) and the day carries The Lovers (6)."
        ));
    }

    #[test]
    fn custom_disclaimer() {
        let reading = narrator(NarratorConfig::new().with_disclaimer("For fun only."))
            .narrate(&profile("21/06/1961", None));
        assert_eq!(reading.disclaimer, "For fun only.");
        assert!(reading.to_string().ends_with("For fun only."));
    }

    #[test]
    fn narration_is_repeatable() {
        let p = profile("19/07/1977", Some("Christopher"));
        let a = Narrator::default().narrate(&p).to_string();
        let b = Narrator::default().narrate(&p).to_string();
        assert_eq!(a, b);
    }
}
