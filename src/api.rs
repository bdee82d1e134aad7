use std::time::{Duration, Instant};

use crate::engine;

/// Training-intensity zones. `D` doubles as the race-pace zone: any
/// race-pace marker on a line forces its quantities into `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    C3,
    D,
    Fh2o,
}

impl Zone {
    pub const ALL: [Zone; 9] =
        [Zone::A1, Zone::A2, Zone::B1, Zone::B2, Zone::C1, Zone::C2, Zone::C3, Zone::D, Zone::Fh2o];

    /// The notation code for this zone.
    pub fn code(self) -> &'static str {
        match self {
            Zone::A1 => "A1",
            Zone::A2 => "A2",
            Zone::B1 => "B1",
            Zone::B2 => "B2",
            Zone::C1 => "C1",
            Zone::C2 => "C2",
            Zone::C3 => "C3",
            Zone::D => "D",
            Zone::Fh2o => "FH2O",
        }
    }

    /// Case-insensitive exact lookup of a notation code.
    pub fn from_code(code: &str) -> Option<Zone> {
        Zone::ALL.into_iter().find(|z| z.code().eq_ignore_ascii_case(code))
    }
}

/// Stroke/technique categories. `Swim` (full stroke) is the default when no
/// drill keyword is found near a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drill {
    Kick,
    Pull,
    Uw,
    Scull,
    Drill,
    Swim,
}

impl Drill {
    pub const ALL: [Drill; 6] = [Drill::Kick, Drill::Pull, Drill::Uw, Drill::Scull, Drill::Drill, Drill::Swim];

    pub fn code(self) -> &'static str {
        match self {
            Drill::Kick => "Kick",
            Drill::Pull => "Pull",
            Drill::Uw => "UW",
            Drill::Scull => "Scull",
            Drill::Drill => "Drill",
            Drill::Swim => "Swim",
        }
    }

    /// Italian display label, as printed on session sheets.
    pub fn label(self) -> &'static str {
        match self {
            Drill::Kick => "Gambe",
            Drill::Pull => "Braccia",
            Drill::Uw => "Sub",
            Drill::Scull => "Remate",
            Drill::Drill => "Tecnica",
            Drill::Swim => "Completo",
        }
    }
}

/// Training equipment. A single quantity may carry several gear tags at
/// once, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gear {
    Board,
    Fins,
    Paddles,
    Snorkel,
    Band,
}

impl Gear {
    pub const ALL: [Gear; 5] = [Gear::Board, Gear::Fins, Gear::Paddles, Gear::Snorkel, Gear::Band];

    pub fn code(self) -> &'static str {
        match self {
            Gear::Board => "Board",
            Gear::Fins => "Fins",
            Gear::Paddles => "Paddles",
            Gear::Snorkel => "Snorkel",
            Gear::Band => "Band",
        }
    }
}

/// Distance totals for one parsed notation body.
///
/// Every zone, drill, and gear key is always present (default 0). Each
/// distance quantity contributes to exactly one zone and exactly one drill,
/// so the per-zone and per-drill sums both equal [`Stats::meters`]. Gear is
/// non-exclusive: its sum may exceed the total (multi-tagged quantities) or
/// fall short of it (untagged ones).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats {
    meters: f64,
    per_zone: [f64; Zone::ALL.len()],
    per_drill: [f64; Drill::ALL.len()],
    per_gear: [f64; Gear::ALL.len()],
}

impl Stats {
    /// Total meters.
    pub fn meters(&self) -> f64 {
        self.meters
    }

    /// Meters attributed to `zone`.
    pub fn zone(&self, zone: Zone) -> f64 {
        self.per_zone[zone as usize]
    }

    /// Meters attributed to `drill`.
    pub fn drill(&self, drill: Drill) -> f64 {
        self.per_drill[drill as usize]
    }

    /// Meters attributed to `gear`.
    pub fn gear(&self, gear: Gear) -> f64 {
        self.per_gear[gear as usize]
    }

    /// All zone buckets, in declaration order.
    pub fn zones(&self) -> impl Iterator<Item = (Zone, f64)> + '_ {
        Zone::ALL.into_iter().map(|z| (z, self.zone(z)))
    }

    /// All drill buckets, in declaration order.
    pub fn drills(&self) -> impl Iterator<Item = (Drill, f64)> + '_ {
        Drill::ALL.into_iter().map(|d| (d, self.drill(d)))
    }

    /// All gear buckets, in declaration order.
    pub fn gears(&self) -> impl Iterator<Item = (Gear, f64)> + '_ {
        Gear::ALL.into_iter().map(|g| (g, self.gear(g)))
    }

    /// Record one quantity into its zone and drill buckets. Going through
    /// this single entry point is what keeps the zone/drill sums equal to
    /// the total.
    pub(crate) fn record(&mut self, meters: f64, zone: Zone, drill: Drill) {
        self.meters += meters;
        self.per_zone[zone as usize] += meters;
        self.per_drill[drill as usize] += meters;
    }

    /// Tag `meters` with `gear`, on top of its zone/drill attribution.
    pub(crate) fn add_gear(&mut self, gear: Gear, meters: f64) {
        self.per_gear[gear as usize] += meters;
    }
}

/// Parse one notation body into distance statistics.
///
/// Pure and failure-free: any input, including the empty string or
/// unrecognizable prose, yields a valid (possibly all-zero) [`Stats`]. When
/// the structured walk attributes no distance at all, a lenient fallback
/// scan over the raw input salvages a best-effort total.
///
/// # Example
/// ```
/// use vasca::{Drill, parse};
///
/// let stats = parse("8x50 gambe @1:00");
/// assert_eq!(stats.meters(), 400.0);
/// assert_eq!(stats.drill(Drill::Kick), 400.0);
/// ```
pub fn parse(text: &str) -> Stats {
    let tokens = engine::tokenize(&engine::expand_blocks(&engine::normalize(text)));
    let stats = engine::aggregate(&tokens);
    if stats.meters() == 0.0 { engine::salvage(text) } else { stats }
}

/// Extra diagnostics returned by [`parse_verbose`].
///
/// Intentionally compact: enough for the CLI report and for inspecting why
/// an input parsed the way it did, without exposing internal state.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// The statistics, identical to what [`parse`] returns.
    pub stats: Stats,
    /// The notation after normalization and block expansion.
    pub expanded: String,
    /// Number of tokens produced by the lexer.
    pub tokens: usize,
    /// Whether the lenient fallback scan produced the result.
    pub fallback: bool,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Parse `text` and return the statistics together with compact diagnostics.
///
/// The plain [`parse`] path does not allocate or measure any of this.
pub fn parse_verbose(text: &str) -> ParseReport {
    let started = Instant::now();

    let expanded = engine::expand_blocks(&engine::normalize(text));
    let tokens = engine::tokenize(&expanded);
    let mut stats = engine::aggregate(&tokens);

    let mut fallback = false;
    if stats.meters() == 0.0 {
        stats = engine::salvage(text);
        fallback = true;
    }

    ParseReport { stats, expanded, tokens: tokens.len(), fallback, elapsed: started.elapsed() }
}

/// The literal marker splitting a session document into sections.
pub const MAIN_MARKER: &str = "[MAIN]";

/// A session document split around [`MAIN_MARKER`].
///
/// The text before the marker is the warm-up ("pre") section and the text
/// after it the wind-down ("post") section; the central work body is
/// supplied separately by the caller. The parser itself has no awareness of
/// sectioning: each body is parsed independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    pub pre: String,
    pub post: String,
    /// False when the document contains no marker; `pre` then holds the
    /// whole document.
    pub has_marker: bool,
}

/// Split a session document on [`MAIN_MARKER`].
pub fn split_sections(text: &str) -> Sections {
    match text.split_once(MAIN_MARKER) {
        Some((pre, post)) => {
            Sections { pre: pre.trim().to_string(), post: post.trim().to_string(), has_marker: true }
        }
        None => Sections { pre: text.trim().to_string(), post: String::new(), has_marker: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_for_representative_notations() {
        // (expected_total_meters, input)
        let cases: Vec<(f64, &str)> = vec![
            (0.0, ""),
            (400.0, "8x50 Kick @1:00"),
            (400.0, "4x100 Pull A2"),
            (800.0, "2x BEGIN\n200 pull @3:00\n4x50 kick @1:00\nEND"),
            (300.0, "300 passo gara"),
            (200.0, "4x50 Fins Kick"),
            (400.0, "4\u{00D7}100 braccia"),
            (1000.0, "2x\n200 gambe\n300 braccia"),
            (700.0, "2x( 100 )\n500"),
            (600.0, "400 A1\r\n200 B2"),
            (150.0, "150"),
        ];

        for (expected, input) in cases {
            let stats = parse(input);
            assert_eq!(stats.meters(), expected, "parse({input:?})");
        }
    }

    #[test]
    fn scenario_kick_set_without_zone() {
        let s = parse("8x50 Kick @1:00");
        assert_eq!(s.meters(), 400.0);
        assert_eq!(s.drill(Drill::Kick), 400.0);
        assert_eq!(s.zone(Zone::A1), 400.0);
    }

    #[test]
    fn scenario_pull_set_with_zone() {
        let s = parse("4x100 Pull A2");
        assert_eq!(s.meters(), 400.0);
        assert_eq!(s.zone(Zone::A2), 400.0);
        assert_eq!(s.drill(Drill::Pull), 400.0);
    }

    #[test]
    fn scenario_repeated_block() {
        let s = parse("2x BEGIN\n200 pull @3:00\n4x50 kick @1:00\nEND");
        assert_eq!(s.meters(), 800.0);
        assert_eq!(s.drill(Drill::Pull), 400.0);
        assert_eq!(s.drill(Drill::Kick), 400.0);
    }

    #[test]
    fn scenario_race_pace() {
        let s = parse("300 passo gara");
        assert_eq!(s.meters(), 300.0);
        assert_eq!(s.zone(Zone::D), 300.0);
    }

    #[test]
    fn scenario_fins_kick() {
        let s = parse("4x50 Fins Kick");
        assert_eq!(s.meters(), 200.0);
        assert_eq!(s.drill(Drill::Kick), 200.0);
        assert_eq!(s.gear(Gear::Fins), 200.0);
    }

    #[test]
    fn scenario_fallback_salvage() {
        // every structured number is glued to a colon, so the walk yields
        // zero; the bare 800 is salvaged by the lenient scan
        let s = parse("warmup 3:00\nmain 800: progressivo\ncool 2:00");
        assert_eq!(s.meters(), 800.0);
        assert_eq!(s.zone(Zone::A1), 800.0);
        assert_eq!(s.drill(Drill::Swim), 800.0);
    }

    #[test]
    fn deterministic() {
        let input = "2x BEGIN\n200 pull fins\n4x50 gambe tavola\nEND\n300 pg";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn conservation_and_non_negativity() {
        let inputs = [
            "",
            "8x50 Kick @1:00",
            "2x BEGIN\n200 pull\n4x50 kick\nEND",
            "300 passo gara A2",
            "garbage ### 42:10 text",
            "main 800: progressivo",
        ];

        for input in inputs {
            let s = parse(input);
            let zones: f64 = s.zones().map(|(_, m)| m).sum();
            let drills: f64 = s.drills().map(|(_, m)| m).sum();
            assert!((zones - s.meters()).abs() < 1e-9, "zone sum for {input:?}");
            assert!((drills - s.meters()).abs() < 1e-9, "drill sum for {input:?}");

            assert!(s.meters() >= 0.0);
            assert!(s.zones().all(|(_, m)| m >= 0.0), "{input:?}");
            assert!(s.drills().all(|(_, m)| m >= 0.0), "{input:?}");
            assert!(s.gears().all(|(_, m)| m >= 0.0), "{input:?}");

            // gear is non-exclusive, but no single bucket can exceed the total
            assert!(s.gears().all(|(_, m)| m <= s.meters() + 1e-9), "{input:?}");
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(parse(""), Stats::default());
    }

    #[test]
    fn verbose_report_matches_parse() {
        let input = "2x\n200 pull\n\n4x50 kick";
        let report = parse_verbose(input);
        assert_eq!(report.stats, parse(input));
        assert!(!report.fallback);
        assert!(report.tokens > 0);
        assert!(report.expanded.contains("2x("));
    }

    #[test]
    fn verbose_report_flags_the_fallback() {
        let report = parse_verbose("main 800: progressivo");
        assert!(report.fallback);
        assert_eq!(report.stats.meters(), 800.0);
    }

    #[test]
    fn sections_split_on_the_marker() {
        let parts = split_sections("400 sciolto\n[MAIN]\n8x100 A2");
        assert!(parts.has_marker);
        assert_eq!(parts.pre, "400 sciolto");
        assert_eq!(parts.post, "8x100 A2");

        let whole = split_sections("400 sciolto");
        assert!(!whole.has_marker);
        assert_eq!(whole.pre, "400 sciolto");
        assert_eq!(whole.post, "");
    }

    #[test]
    fn zone_codes_round_trip() {
        for zone in Zone::ALL {
            assert_eq!(Zone::from_code(zone.code()), Some(zone));
            assert_eq!(Zone::from_code(&zone.code().to_lowercase()), Some(zone));
        }
        assert_eq!(Zone::from_code("A3"), None);
    }
}
