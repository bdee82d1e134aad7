//! Input canonicalization.
//!
//! Coaches paste notation from phones, spreadsheets, and chat apps, so the
//! raw text arrives with mixed line endings, typographic dashes, and the
//! Unicode multiplication sign. Everything downstream assumes the canonical
//! forms produced here.

/// Canonicalize `text`: CRLF/CR become `\n`, `×` becomes `x`, en/em dashes
/// become `-`, runs of spaces/tabs collapse to one space, and outer
/// whitespace is trimmed.
///
/// Pure and total; `normalize(normalize(t)) == normalize(t)`.
pub(crate) fn normalize(text: &str) -> String {
    let s = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{00D7}', "x")
        .replace(['\u{2013}', '\u{2014}'], "-");
    regex!(r"[\t ]+").replace_all(&s, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_line_endings_and_glyphs() {
        let cases: Vec<(&str, &str)> = vec![
            ("a\nb\nc", "a\r\nb\rc"),
            ("4x50", "4\u{00D7}50"),
            ("a1 - b1 - c1", "a1 \u{2013} b1 \u{2014} c1"),
            ("8 x 50", "8 \t x\t\t50"),
            ("200 pull", "  200  pull  "),
            ("", ""),
            ("", " \t "),
        ];

        for (expected, input) in cases {
            assert_eq!(normalize(input), expected, "normalize({input:?})");
        }
    }

    #[test]
    fn newlines_inside_the_body_survive() {
        assert_eq!(normalize("200\n\n100"), "200\n\n100");
    }

    #[test]
    fn idempotent() {
        let inputs = ["4\u{00D7}50 \r\n gambe", "a \u{2013} b", "", "plain text"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {input:?}");
        }
    }
}
