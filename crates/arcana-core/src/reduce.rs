//! Digit reduction with the 10-22 overlay band.
//!
//! A total is reduced by summing its decimal digits. The first sum decides
//! whether an overlay is present (10..=22); the anchor is the first sum
//! reduced further until a single digit remains. Only the first pass is
//! inspected for overlays: a total whose first sum is 26 passes through 8
//! without ever reporting an overlay.

use serde::{Deserialize, Serialize};

/// Smallest first digit sum that carries an overlay.
pub const OVERLAY_MIN: u8 = 10;
/// Largest first digit sum that carries an overlay.
pub const OVERLAY_MAX: u8 = 22;
/// The master key. Its anchor is fixed at 4 and it keeps its own card.
pub const MASTER_KEY: u8 = 22;
/// Anchor assigned to the master key.
pub const MASTER_ANCHOR: u8 = 4;

/// How an overlay is shown next to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayMode {
    /// Always display the 1-9 anchor; the overlay becomes a phrase.
    #[default]
    Collapse,
    /// Display the overlay number itself as a card key in 10..=22.
    Bridge,
}

/// The outcome of reducing one total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    /// The total as supplied.
    pub total: i64,
    /// Digit sum of `|total|` after one pass.
    pub digit_sum: u64,
    /// Fully reduced value, 1..=9 (0 only for a zero total).
    pub anchor: u8,
    /// The first digit sum, when it falls in 10..=22.
    pub overlay: Option<u8>,
}

impl Reduction {
    /// Whether the first pass landed in the overlay band.
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// The card key to display for this reduction.
    ///
    /// In [`OverlayMode::Collapse`] this is always the anchor. In
    /// [`OverlayMode::Bridge`] the overlay number wins when present.
    pub fn key(&self, mode: OverlayMode) -> u8 {
        match (mode, self.overlay) {
            (OverlayMode::Bridge, Some(overlay)) => overlay,
            _ => self.anchor,
        }
    }
}

/// Sum the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce a total to its anchor and optional overlay.
///
/// Accepts any integer; negative totals reduce like their absolute value.
pub fn reduce(total: i64) -> Reduction {
    let first = digit_sum(total.unsigned_abs());

    let overlay = u8::try_from(first)
        .ok()
        .filter(|s| (OVERLAY_MIN..=OVERLAY_MAX).contains(s));

    let anchor = if first == u64::from(MASTER_KEY) {
        MASTER_ANCHOR
    } else {
        let mut value = first;
        while value > 9 {
            value = digit_sum(value);
        }
        // value <= 9 here
        value as u8
    };

    tracing::trace!(total, first, anchor, ?overlay, "reduced total");

    Reduction {
        total,
        digit_sum: first,
        anchor,
        overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digit_sum_basics() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1988), 26);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    #[test]
    fn character_total_without_overlay() {
        // 21/06/1961
        let r = reduce(21 + 6 + 1961);
        assert_eq!(r.total, 1988);
        assert_eq!(r.digit_sum, 26);
        assert_eq!(r.anchor, 8);
        assert_eq!(r.overlay, None);
    }

    #[test]
    fn overlay_band_edges() {
        assert_eq!(reduce(9).overlay, None);
        assert_eq!(reduce(19).overlay, Some(10));
        assert_eq!(reduce(1966).overlay, Some(22));
        assert_eq!(reduce(1994).overlay, None); // 23
    }

    #[test]
    fn master_key_anchors_at_four() {
        let r = reduce(1966);
        assert_eq!(r.digit_sum, 22);
        assert_eq!(r.anchor, 4);
        assert_eq!(r.overlay, Some(22));
    }

    #[test]
    fn small_totals() {
        let r = reduce(6);
        assert_eq!(r.anchor, 6);
        assert!(!r.has_overlay());

        let r = reduce(0);
        assert_eq!(r.anchor, 0);
        assert_eq!(r.overlay, None);
    }

    #[test]
    fn multi_pass_reduction() {
        // 99_999_999_999 -> 99 -> 18 -> 9
        let r = reduce(99_999_999_999);
        assert_eq!(r.digit_sum, 99);
        assert_eq!(r.anchor, 9);
        assert_eq!(r.overlay, None);
    }

    #[test]
    fn extreme_totals() {
        assert!((1..=9).contains(&reduce(i64::MIN).anchor));
        assert!((1..=9).contains(&reduce(i64::MAX).anchor));
    }

    #[test]
    fn display_key_by_mode() {
        let r = reduce(1977 + 7 + 19); // 2003 -> 5
        assert_eq!(r.key(OverlayMode::Bridge), 5);

        let r = reduce(1999); // 28 -> 10 -> 1
        assert_eq!(r.overlay, None);

        let r = reduce(1981); // 19 -> 10 -> 1
        assert_eq!(r.key(OverlayMode::Collapse), 1);
        assert_eq!(r.key(OverlayMode::Bridge), 19);
    }

    proptest! {
        #[test]
        fn anchor_is_single_digit(n in any::<i64>().prop_filter("non-zero", |n| *n != 0)) {
            let r = reduce(n);
            prop_assert!((1..=9).contains(&r.anchor));
        }

        #[test]
        fn sign_does_not_matter(n in (i64::MIN + 1)..=i64::MAX) {
            let a = reduce(n);
            let b = reduce(-n);
            prop_assert_eq!((a.digit_sum, a.anchor, a.overlay), (b.digit_sum, b.anchor, b.overlay));
        }

        #[test]
        fn overlay_iff_first_sum_in_band(n in any::<i64>()) {
            let r = reduce(n);
            let first = digit_sum(n.unsigned_abs());
            prop_assert_eq!(r.has_overlay(), (10..=22).contains(&first));
            if let Some(overlay) = r.overlay {
                prop_assert_eq!(u64::from(overlay), first);
            }
        }

        #[test]
        fn anchor_matches_digital_root(n in 1i64..=i64::MAX) {
            let r = reduce(n);
            let root = 1 + (n - 1) % 9;
            prop_assert_eq!(i64::from(r.anchor), root);
        }
    }
}
