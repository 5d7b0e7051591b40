/// Alias for `Result<T, ArcanaError>`.
pub type ArcanaResult<T> = Result<T, ArcanaError>;

/// Errors that can occur while building a numerology profile.
#[derive(Debug, thiserror::Error)]
pub enum ArcanaError {
    /// The date text could not be parsed, or names a day that does not exist.
    #[error("invalid date \"{input}\": {reason}")]
    InvalidDate {
        /// The text as supplied by the caller.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A numeric input lies outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A lexicon file is malformed or incomplete.
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    /// A lexicon file could not be decoded.
    #[error("lexicon JSON error: {0}")]
    LexiconJson(#[from] serde_json::Error),
}

impl ArcanaError {
    /// Whether this error is a rejected user input, as opposed to bad
    /// configuration data.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::OutOfRange { .. })
    }

    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Check that `value` lies in `min..=max`.
pub(crate) fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> ArcanaResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ArcanaError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_kinds() {
        assert!(ArcanaError::invalid_date("x", "bad").is_validation());
        assert!(check_range("month", 13, 1, 12).unwrap_err().is_validation());
        assert!(!ArcanaError::InvalidLexicon("short".into()).is_validation());
    }

    #[test]
    fn messages_are_readable() {
        let err = ArcanaError::invalid_date("31/02/2000", "no such day");
        assert_eq!(err.to_string(), "invalid date \"31/02/2000\": no such day");

        let err = check_range("month", 0, 1, 12).unwrap_err();
        assert_eq!(err.to_string(), "month must be between 1 and 12, got 0");
    }

    #[test]
    fn range_bounds_inclusive() {
        assert!(check_range("day", 1, 1, 31).is_ok());
        assert!(check_range("day", 31, 1, 31).is_ok());
    }
}
