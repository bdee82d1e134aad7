//! Alias tables mapping free-text words to canonical drill and gear codes.
//!
//! Lookups are case-insensitive exact matches against fixed Italian/English
//! synonym tables. There is no fuzzy or partial matching: a miss means the
//! word is not applicable, never an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{Drill, Gear};

/// Map of drill-style synonyms (Italian and English) to canonical codes.
static DRILL_ALIASES: Lazy<HashMap<&'static str, Drill>> = Lazy::new(|| {
    HashMap::from([
        ("uw", Drill::Uw),
        ("underwater", Drill::Uw),
        ("sub", Drill::Uw),
        ("ow", Drill::Uw),
        ("kick", Drill::Kick),
        ("gambe", Drill::Kick),
        ("kickboard", Drill::Kick),
        ("pull", Drill::Pull),
        ("braccia", Drill::Pull),
        ("pullbuoy", Drill::Pull),
        ("scull", Drill::Scull),
        ("sculling", Drill::Scull),
        ("remata", Drill::Scull),
        ("remate", Drill::Scull),
        ("drill", Drill::Drill),
        ("tecnica", Drill::Drill),
        ("tech", Drill::Drill),
        ("technique", Drill::Drill),
    ])
});

/// Map of equipment synonyms (Italian and English) to canonical codes.
///
/// "snorker" is a common misspelling seen in real session sheets.
static GEAR_ALIASES: Lazy<HashMap<&'static str, Gear>> = Lazy::new(|| {
    HashMap::from([
        ("board", Gear::Board),
        ("tavola", Gear::Board),
        ("fins", Gear::Fins),
        ("pinne", Gear::Fins),
        ("paddles", Gear::Paddles),
        ("palette", Gear::Paddles),
        ("snorkel", Gear::Snorkel),
        ("boccaglio", Gear::Snorkel),
        ("snorker", Gear::Snorkel),
        ("band", Gear::Band),
        ("elastico", Gear::Band),
    ])
});

pub(crate) fn resolve_drill(word: &str) -> Option<Drill> {
    DRILL_ALIASES.get(word.to_lowercase().as_str()).copied()
}

pub(crate) fn resolve_gear(word: &str) -> Option<Gear> {
    GEAR_ALIASES.get(word.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drill_aliases_resolve_both_languages() {
        let cases: Vec<(Option<Drill>, &str)> = vec![
            (Some(Drill::Kick), "kick"),
            (Some(Drill::Kick), "Gambe"),
            (Some(Drill::Kick), "KICKBOARD"),
            (Some(Drill::Pull), "pull"),
            (Some(Drill::Pull), "braccia"),
            (Some(Drill::Uw), "sub"),
            (Some(Drill::Uw), "underwater"),
            (Some(Drill::Scull), "remate"),
            (Some(Drill::Scull), "sculling"),
            (Some(Drill::Drill), "tecnica"),
            (Some(Drill::Drill), "Technique"),
            (None, "stile"),
            (None, "kicks"),
            (None, ""),
        ];

        for (expected, input) in cases {
            assert_eq!(resolve_drill(input), expected, "resolve_drill({input:?})");
        }
    }

    #[test]
    fn gear_aliases_resolve_both_languages() {
        let cases: Vec<(Option<Gear>, &str)> = vec![
            (Some(Gear::Board), "tavola"),
            (Some(Gear::Board), "Board"),
            (Some(Gear::Fins), "pinne"),
            (Some(Gear::Fins), "FINS"),
            (Some(Gear::Paddles), "palette"),
            (Some(Gear::Snorkel), "boccaglio"),
            (Some(Gear::Snorkel), "snorker"),
            (Some(Gear::Band), "elastico"),
            (None, "pinna"),
            (None, "paddle"),
        ];

        for (expected, input) in cases {
            assert_eq!(resolve_gear(input), expected, "resolve_gear({input:?})");
        }
    }
}
