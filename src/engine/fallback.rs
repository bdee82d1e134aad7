//! Lenient salvage scan.
//!
//! Invoked only when the structured walk attributes zero total distance. It
//! scans the *original* input (before normalization and block expansion)
//! with a forgiving pattern: a bare 2–4 digit number, optionally followed by
//! a zone code. Matches go to their zone (A1 when absent) and to the Swim
//! drill; this path never produces gear attributions. It exists purely so
//! loosely formatted input still yields a non-zero best-effort total.

use crate::{Drill, Stats, Zone};

/// Best-effort scan of raw `text`. Returns all-zero [`Stats`] when nothing
/// salvageable is found either.
pub(crate) fn salvage(text: &str) -> Stats {
    let mut stats = Stats::default();

    for caps in regex!(r"(?i)\b(\d{2,4})\b\s*(A1|A2|B1|B2|C1|C2|C3|D|FH2O)?").captures_iter(text) {
        let Ok(meters) = caps[1].parse::<f64>() else { continue };
        let zone = caps.get(2).and_then(|m| Zone::from_code(m.as_str())).unwrap_or(Zone::A1);
        stats.record(meters, zone, Drill::Swim);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers_go_to_a1_swim() {
        let s = salvage("circa 800 in souplesse");
        assert_eq!(s.meters(), 800.0);
        assert_eq!(s.zone(Zone::A1), 800.0);
        assert_eq!(s.drill(Drill::Swim), 800.0);
    }

    #[test]
    fn trailing_zone_codes_are_honored_case_insensitively() {
        let s = salvage("600 b2 poi 400 FH2O");
        assert_eq!(s.meters(), 1000.0);
        assert_eq!(s.zone(Zone::B2), 600.0);
        assert_eq!(s.zone(Zone::Fh2o), 400.0);
    }

    #[test]
    fn only_two_to_four_digit_numbers_count() {
        assert_eq!(salvage("5 e 12345").meters(), 0.0);
        assert_eq!(salvage("numeri 10 100 1000").meters(), 1110.0);
    }

    #[test]
    fn numbers_glued_to_words_are_ignored() {
        // no word boundary inside `4x50`, so neither side matches
        assert_eq!(salvage("4x50").meters(), 0.0);
    }

    #[test]
    fn nothing_salvageable_yields_all_zero() {
        assert_eq!(salvage(""), Stats::default());
        assert_eq!(salvage("tutto sciolto"), Stats::default());
    }
}
