//! Line-based repeat-block expansion.
//!
//! Two block notations are rewritten into the inline `Nx( .. )` form the
//! lexer and aggregator understand:
//!
//! - `N x BEGIN` (or `N x {`) up to a matching `END` (or `}`) line. A
//!   missing terminator extends the block to end of input; the terminator
//!   line itself is consumed.
//! - A line that is exactly `N x` followed by a group of non-blank lines.
//!   The terminating blank line, if present, is preserved after the group so
//!   that the hanging-scalar reset still sees it.
//!
//! The pass handles exactly one explicit nesting level. An inner `BEGIN`
//! line is carried through as body text, so the first `END` closes the outer
//! block; deeper repetition is expressed with inline `Nx( .. )` groups,
//! which the aggregator's multiplier stack handles on its own.

/// Rewrite repeat blocks in (normalized) `text` into inline groups.
pub(crate) fn expand_blocks(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(caps) = regex!(r"(?i)^\s*(\d+)\s*x\s*(BEGIN|\{)\s*$").captures(line) {
            let n = &caps[1];
            let mut j = i + 1;
            let mut body: Vec<&str> = Vec::new();
            while j < lines.len() && !regex!(r"(?i)^\s*(END|\})\s*$").is_match(lines[j]) {
                body.push(lines[j]);
                j += 1;
            }
            if j < lines.len() {
                j += 1; // consume the terminator line
            }
            out.push(format!("{n}x( {} )", body.join("\n")));
            i = j;
            continue;
        }

        if let Some(caps) = regex!(r"(?i)^\s*(\d+)\s*x\s*$").captures(line) {
            let n = &caps[1];
            let mut j = i + 1;
            let mut body: Vec<&str> = Vec::new();
            while j < lines.len() && !lines[j].trim().is_empty() {
                body.push(lines[j]);
                j += 1;
            }
            out.push(format!("{n}x( {} )", body.join("\n")));
            if j < lines.len() && lines[j].trim().is_empty() {
                out.push(String::new());
            }
            i = j + 1;
            continue;
        }

        out.push(line.to_string());
        i += 1;
    }

    out.join("\n")
}
