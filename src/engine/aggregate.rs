//! The aggregation walk: the interpreter behind [`crate::parse`].
//!
//! Scans the token sequence left to right, maintaining a stack of scoped
//! multipliers (pushed on `Nx(`, popped on `)`) and one "hanging" scalar (a
//! bare `N x` at end of line, applying to following lines until a blank
//! line). Every number that is not repeat syntax and not a time component is
//! a distance quantity; its effective meters are attributed to exactly one
//! zone, exactly one drill, and zero or more gear buckets.
//!
//! Attribution is proximity-based and bounded:
//!
//! - zone: immediate neighbor first, then the nearest code on the same line;
//! - race pace (`passo`, `pg`, or a glued `p`): anywhere on the same line,
//!   forward first, and it beats any explicit zone code;
//! - drill: up to [`NEIGHBOR_WINDOW`] tokens backward, then forward, first
//!   alias hit wins, default Swim;
//! - gear: up to [`NEIGHBOR_WINDOW`] tokens in each direction, collecting
//!   every alias hit into a set.
//!
//! The walk never fails; unrecognizable input simply contributes nothing.

use bitflags::bitflags;

use crate::tables::{resolve_drill, resolve_gear};
use crate::{Drill, Gear, Stats, Token, Zone};

/// How far the drill and gear scans look on each side of a quantity. The
/// race-pace scan is deliberately not capped; it stops only at the line
/// boundary.
const NEIGHBOR_WINDOW: usize = 6;

bitflags! {
    /// Gear tags collected around one distance quantity. Non-exclusive: a
    /// single quantity may carry several at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct GearSet: u8 {
        const BOARD = 1 << 0;
        const FINS = 1 << 1;
        const PADDLES = 1 << 2;
        const SNORKEL = 1 << 3;
        const BAND = 1 << 4;
    }
}

impl From<Gear> for GearSet {
    fn from(gear: Gear) -> Self {
        match gear {
            Gear::Board => GearSet::BOARD,
            Gear::Fins => GearSet::FINS,
            Gear::Paddles => GearSet::PADDLES,
            Gear::Snorkel => GearSet::SNORKEL,
            Gear::Band => GearSet::BAND,
        }
    }
}

/// Transient interpreter state, scoped to one walk.
struct ParseState {
    /// Scoped multipliers, one per open `Nx(` group.
    multipliers: Vec<f64>,
    /// Repeat factor from a trailing `N x` line; reset to 1 by a blank line.
    hanging: f64,
}

impl ParseState {
    fn new() -> Self {
        ParseState { multipliers: Vec::new(), hanging: 1.0 }
    }

    /// Product of all open scopes. Empty stack is 1; a zero product is
    /// coerced to 1 so a `0x(` group cannot silently erase its body.
    fn scope_product(&self) -> f64 {
        let product: f64 = self.multipliers.iter().product();
        if product == 0.0 { 1.0 } else { product }
    }
}

/// Walk `tokens` and accumulate distance statistics. Never fails; any input
/// yields a valid (possibly all-zero) [`Stats`].
pub(crate) fn aggregate(tokens: &[Token]) -> Stats {
    let mut stats = Stats::default();
    let mut state = ParseState::new();
    let mut i = 0;

    while i < tokens.len() {
        // A blank line ends the reach of a hanging `N x`.
        if tokens[i].is_newline() && tokens.get(i + 1).is_some_and(Token::is_newline) {
            state.hanging = 1.0;
            i += 1;
            continue;
        }

        if let Token::Number(n) = tokens[i] {
            let next_is_op = matches!(tokens.get(i + 1), Some(Token::Op));

            // `N x` at end of line: hanging repeat declarator, not a distance.
            if next_is_op && tokens.get(i + 2).is_some_and(Token::is_newline) {
                state.hanging = if n == 0.0 { 1.0 } else { n };
                i += 2;
                continue;
            }

            // `N x (`: open a multiplier scope, not a distance.
            if next_is_op && matches!(tokens.get(i + 2), Some(Token::Punct('('))) {
                state.multipliers.push(n);
                i += 2;
                continue;
            }

            // `N :` is a time component (pace/interval), never a distance.
            if matches!(tokens.get(i + 1), Some(Token::Punct(':'))) {
                i += 1;
                continue;
            }

            // The `N` of a local `NxM`; the M carries the distance.
            if next_is_op && matches!(tokens.get(i + 2), Some(Token::Number(_))) {
                i += 1;
                continue;
            }

            // A distance quantity.
            let local = local_multiplier(tokens, i);
            let meters = n * state.scope_product() * local * state.hanging;

            let zone = attribute_zone(tokens, i);
            let drill = attribute_drill(tokens, i);
            stats.record(meters, zone, drill);

            let gear_set = attribute_gear(tokens, i);
            for gear in Gear::ALL {
                if gear_set.contains(gear.into()) {
                    stats.add_gear(gear, meters);
                }
            }
        } else if matches!(tokens[i], Token::Punct(')')) {
            state.multipliers.pop();
        }

        i += 1;
    }

    stats
}

/// The `N` of an `NxM` pattern when the quantity at `i` is the `M`.
fn local_multiplier(tokens: &[Token], i: usize) -> f64 {
    if i < 2 {
        return 1.0;
    }
    match (&tokens[i - 1], &tokens[i - 2]) {
        (Token::Op, Token::Number(n)) => *n,
        _ => 1.0,
    }
}

/// Tokens within the attribution window on one side of `i`, stopping at the
/// line boundary.
fn window(tokens: &[Token], i: usize, dir: isize, cap: Option<usize>) -> impl Iterator<Item = &Token> {
    let cap = cap.unwrap_or(usize::MAX);
    (1..).take(cap).map_while(move |step| {
        let idx = i as isize + dir * step as isize;
        if idx < 0 {
            return None;
        }
        let token = tokens.get(idx as usize)?;
        if token.is_newline() { None } else { Some(token) }
    })
}

fn is_race_marker(token: &Token) -> bool {
    matches!(token, Token::Word(w) if w.eq_ignore_ascii_case("passo") || w.eq_ignore_ascii_case("pg"))
}

/// Race-pace detection for the quantity at `i`: a glued `p` right after it,
/// or `passo` / `pg` anywhere on the same line ("passo gara" is covered by
/// its leading word). Forward is checked before backward.
fn race_pace(tokens: &[Token], i: usize) -> bool {
    if let Some(Token::Word(w)) = tokens.get(i + 1) {
        if w.eq_ignore_ascii_case("p") {
            return true;
        }
    }
    window(tokens, i, 1, None).any(is_race_marker) || window(tokens, i, -1, None).any(is_race_marker)
}

/// Zone for the quantity at `i`: the immediately following code, else the
/// immediately preceding one, else the nearest code on the same line
/// (forward first), else A1. A race-pace marker forces zone D over all of
/// those.
fn attribute_zone(tokens: &[Token], i: usize) -> Zone {
    if race_pace(tokens, i) {
        return Zone::D;
    }

    let zone_of = |token: &Token| match token {
        Token::Zone(z) => Some(*z),
        _ => None,
    };

    tokens
        .get(i + 1)
        .and_then(zone_of)
        .or_else(|| i.checked_sub(1).and_then(|j| tokens.get(j)).and_then(zone_of))
        .or_else(|| window(tokens, i, 1, None).find_map(zone_of))
        .or_else(|| window(tokens, i, -1, None).find_map(zone_of))
        .unwrap_or(Zone::A1)
}

/// Drill for the quantity at `i`: first alias hit within the window,
/// backward before forward, default Swim.
fn attribute_drill(tokens: &[Token], i: usize) -> Drill {
    let hit = |dir: isize| {
        window(tokens, i, dir, Some(NEIGHBOR_WINDOW)).find_map(|token| match token {
            Token::Word(w) => resolve_drill(w),
            _ => None,
        })
    };
    hit(-1).or_else(|| hit(1)).unwrap_or(Drill::Swim)
}

/// Gear tags for the quantity at `i`: every alias hit within the window on
/// either side, as a set.
fn attribute_gear(tokens: &[Token], i: usize) -> GearSet {
    let mut set = GearSet::empty();
    for dir in [-1, 1] {
        for token in window(tokens, i, dir, Some(NEIGHBOR_WINDOW)) {
            if let Token::Word(w) = token {
                if let Some(gear) = resolve_gear(w) {
                    set |= gear.into();
                }
            }
        }
    }
    set
}
