#[macro_use]
mod macros;
mod api;
mod engine;
mod tables;

pub use api::{
    Drill, Gear, MAIN_MARKER, ParseReport, Sections, Stats, Zone, parse, parse_verbose, split_sections,
};

// --- Internal types ---------------------------------------------------------

/// A lexed unit of session notation.
///
/// The lexer produces a flat ordered sequence of these; adjacency in that
/// sequence drives every attribution heuristic in the aggregation walk, so
/// ordering is significant and tokens are never reordered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// A decimal literal (`50`, `1.5`).
    Number(f64),
    /// The multiplication operator, the literal `x`.
    Op,
    /// Structural punctuation: one of `( ) / : @ , ; [ ] - + * %`.
    Punct(char),
    Newline,
    /// One of the nine training-zone codes.
    Zone(Zone),
    /// A maximal run of letters (ASCII or extended Latin) not recognized as
    /// anything above. Words are inert until an alias table or the race-pace
    /// scan gives them meaning.
    Word(String),
}

impl Token {
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }
}
