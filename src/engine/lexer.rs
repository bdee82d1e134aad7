//! Tokenizer for normalized, block-expanded notation.
//!
//! A single left-to-right scan with a fixed priority order at every
//! position:
//!
//! 1. decimal numbers (`50`, `1.5`, and degenerate forms like `00`)
//! 2. the literal multiplication operator `x`
//! 3. structural punctuation `( ) / : @ , ; [ ] - + * %`
//! 4. newline
//! 5. one of the nine zone codes
//! 6. a maximal run of letters (ASCII or extended Latin) as a generic word
//!
//! Zone codes are recognized case-insensitively, but only at a word
//! boundary: a code glued to further letters or digits is prose (`Drill` is
//! a word, never zone `D` plus `rill`). The scan never fails; characters
//! that match nothing are skipped without producing a token.

use crate::{Token, Zone};

const PUNCT: [char; 13] = ['(', ')', '/', ':', '@', ',', ';', '[', ']', '-', '+', '*', '%'];

const ZONE_CODES: [(&str, Zone); 9] = [
    ("A1", Zone::A1),
    ("A2", Zone::A2),
    ("B1", Zone::B1),
    ("B2", Zone::B2),
    ("C1", Zone::C1),
    ("C2", Zone::C2),
    ("C3", Zone::C3),
    ("D", Zone::D),
    ("FH2O", Zone::Fh2o),
];

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (!c.is_ascii() && c.is_alphabetic())
}

/// Try to read a zone code at the start of `rem`, returning the code and its
/// byte length. A candidate followed by another letter or digit is rejected.
fn match_zone(rem: &str) -> Option<(Zone, usize)> {
    for (code, zone) in ZONE_CODES {
        let Some(head) = rem.get(..code.len()) else { continue };
        if !head.eq_ignore_ascii_case(code) {
            continue;
        }
        match rem[code.len()..].chars().next() {
            Some(c) if c.is_ascii_alphanumeric() || is_letter(c) => continue,
            _ => return Some((zone, code.len())),
        }
    }
    None
}

/// Convert expanded notation into a flat token sequence. Never fails.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let len = text.len();
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < len {
        let rem = &text[pos..];
        let c = match rem.chars().next() {
            Some(c) => c,
            None => break,
        };

        if c.is_ascii_digit() {
            let start = pos;
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos < len && bytes[pos] == b'.' {
                pos += 1;
                while pos < len && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
            }
            if let Ok(n) = text[start..pos].parse::<f64>() {
                out.push(Token::Number(n));
            }
            continue;
        }

        if c == 'x' {
            out.push(Token::Op);
            pos += 1;
            continue;
        }

        if PUNCT.contains(&c) {
            out.push(Token::Punct(c));
            pos += 1;
            continue;
        }

        if c == '\n' {
            out.push(Token::Newline);
            pos += 1;
            continue;
        }

        if let Some((zone, code_len)) = match_zone(rem) {
            out.push(Token::Zone(zone));
            pos += code_len;
            continue;
        }

        if is_letter(c) {
            let start = pos;
            for ch in rem.chars() {
                if !is_letter(ch) {
                    break;
                }
                pos += ch.len_utf8();
            }
            out.push(Token::Word(text[start..pos].to_string()));
            continue;
        }

        // Anything else (quotes, emoji, stray symbols) produces no token.
        pos += c.len_utf8();
    }

    out
}
