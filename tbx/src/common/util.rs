//! # Miscellaneous Helpers (`common::util`)
//!
//! File: tbx/src/common/util.rs
//!
//! Small helpers that do not belong anywhere else: numeric-string checks,
//! bounded random numbers, reverse enumeration and the toolbox version.
//!
use rand::Rng;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Window used by [`randomize`] when `window` is 0.
pub const DEFAULT_WINDOW: u32 = 100;

/// True if `input` is digits with optional surrounding whitespace.
pub fn isnum_str(input: &str) -> bool {
    static NUMERIC: OnceLock<Option<Regex>> = OnceLock::new();
    NUMERIC
        .get_or_init(|| Regex::new(r"^\s*\d+\s*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(input))
}

/// Where [`randomize`] places its range relative to the reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `[reference, reference + window]`
    Above,
    /// `[reference - window, reference]`
    Below,
    /// `[reference - window/2, reference + window/2]`
    #[default]
    Centered,
}

impl Direction {
    /// Positive → `Above`, negative → `Below`, zero → `Centered`.
    pub fn from_sign(sign: i64) -> Self {
        match sign.signum() {
            1 => Direction::Above,
            -1 => Direction::Below,
            _ => Direction::Centered,
        }
    }
}

/// A random integer near `reference`.
///
/// `reference` is rounded to the nearest integer. The range is inclusive at
/// both ends; a `window` of 0 means [`DEFAULT_WINDOW`]. References beyond the
/// `i64` range (or infinite) are clamped to it, and NaN counts as 0.
pub fn randomize(reference: f64, direction: Direction, window: u32) -> i64 {
    let base = reference.round() as i64;
    let window = i64::from(if window == 0 { DEFAULT_WINDOW } else { window });
    let (low, high) = match direction {
        Direction::Above => (base, base.saturating_add(window)),
        Direction::Below => (base.saturating_sub(window), base),
        Direction::Centered => (
            base.saturating_sub(window / 2),
            base.saturating_add(window / 2),
        ),
    };
    rand::thread_rng().gen_range(low..=high)
}

/// `(index, item)` pairs from the last item to the first.
pub fn revnumerate<T>(items: &[T]) -> impl Iterator<Item = (usize, &T)> {
    items.iter().enumerate().rev()
}

/// The toolbox version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isnum_str() {
        for yes in ["0", "17", "  42", "7  ", "\t123\n"] {
            assert!(isnum_str(yes), "{:?}", yes);
        }
        for no in ["", "   ", "4 2", "-1", "1.5", "abc", "12a"] {
            assert!(!isnum_str(no), "{:?}", no);
        }
    }

    #[test]
    fn test_randomize_ranges() {
        for _ in 0..200 {
            let above = randomize(50.0, Direction::Above, 10);
            assert!((50..=60).contains(&above));

            let below = randomize(50.0, Direction::Below, 10);
            assert!((40..=50).contains(&below));

            let centered = randomize(50.0, Direction::Centered, 10);
            assert!((45..=55).contains(&centered));

            let default = randomize(49.6, Direction::Above, 0);
            assert!((50..=150).contains(&default));
        }
    }

    #[test]
    fn test_randomize_extreme_references() {
        assert_eq!(randomize(1e19, Direction::Above, 10), i64::MAX);
        assert_eq!(randomize(-1e19, Direction::Below, 10), i64::MIN);
        assert_eq!(randomize(f64::INFINITY, Direction::Above, 10), i64::MAX);
        assert_eq!(randomize(f64::NEG_INFINITY, Direction::Below, 0), i64::MIN);

        let high = randomize(1e19, Direction::Centered, 10);
        assert!(high >= i64::MAX - 5);
        let low = randomize(-1e19, Direction::Centered, 10);
        assert!(low <= i64::MIN + 5);
        assert!((0..=10).contains(&randomize(f64::NAN, Direction::Above, 10)));
    }

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::from_sign(5), Direction::Above);
        assert_eq!(Direction::from_sign(-2), Direction::Below);
        assert_eq!(Direction::from_sign(0), Direction::Centered);
    }

    #[test]
    fn test_revnumerate() {
        let items = ["a", "b", "c"];
        let pairs: Vec<(usize, &&str)> = revnumerate(&items).collect();
        assert_eq!(pairs, [(2, &"c"), (1, &"b"), (0, &"a")]);
        assert_eq!(revnumerate::<u8>(&[]).count(), 0);
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(!version().is_empty());
    }
}
