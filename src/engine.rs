//! Notation parsing and statistics-aggregation engine.
//!
//! This module is the internal entry point for the pipeline behind
//! [`crate::parse`]. Each stage is a pure function; no state survives across
//! invocations and no stage can fail.
//!
//! ## How the parts work together
//!
//! ```text
//! input ── normalize ──── canonical newlines/glyphs/whitespace (normalize.rs)
//!              │
//!              v
//!          expand_blocks ─ N x BEGIN..END and bare `N x` line groups
//!              │           rewritten to inline `Nx( .. )`      (expand.rs)
//!              v
//!          tokenize ────── flat typed token sequence            (lexer.rs)
//!              │
//!              v
//!          aggregate ───── multiplier stack + hanging scalar,
//!              │           zone/drill/gear attribution       (aggregate.rs)
//!              v
//!            Stats ──── if total is exactly zero:
//!                       salvage(raw input)                   (fallback.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: line endings, multiplication-sign and dash glyphs,
//!   whitespace collapsing.
//! - `expand.rs`: line-based repeat blocks, rewritten into the inline
//!   parenthesized form the aggregator's multiplier stack understands.
//! - `lexer.rs`: explicit priority-ordered scan producing `Token`s.
//! - `aggregate.rs`: the interpreter proper; walks the token sequence and
//!   attributes every distance quantity to exactly one zone, exactly one
//!   drill, and zero or more gear buckets.
//! - `fallback.rs`: lenient salvage scan over the raw input, used only when
//!   the structured walk attributes no distance at all.
//!
//! The two repeat mechanisms (line-based block expansion and the token-based
//! multiplier stack) are deliberately separate passes: the expander handles
//! exactly one explicit nesting level, and anything deeper is picked up by
//! the stack when an expanded group itself contains repeat syntax.

#[path = "engine/aggregate.rs"]
mod aggregate;
#[path = "engine/expand.rs"]
mod expand;
#[path = "engine/fallback.rs"]
mod fallback;
#[path = "engine/lexer.rs"]
mod lexer;
#[path = "engine/normalize.rs"]
mod normalize;

pub(crate) use aggregate::aggregate;
pub(crate) use expand::expand_blocks;
pub(crate) use fallback::salvage;
pub(crate) use lexer::tokenize;
pub(crate) use normalize::normalize;
