//! Alda Formatter
//!
//! Renders a parsed Alda score tree back into canonical source text.
//!
//! # Architecture
//!
//! Formatting is a single top-down pass. Every node kind has one rule that
//! produces indivisible tokens; a line buffer joins the tokens with single
//! spaces and breaks lines *between* tokens once the soft-wrap width would be
//! exceeded. Indentation and the wrap-pause flag live in the same buffer, so
//! nested constructs (chords of tied notes, crams inside voices, bracketed
//! variable values) compose without knowing about each other.
//!
//! # Modules
//!
//! - [`context`]: Line buffer, wrap engine and configuration
//! - [`duration`]: Duration tokens (ties, dots, barline splits)
//! - [`lisp`]: Embedded S-expression rendering
//! - [`formatter`]: Node dispatcher
//! - [`score`]: Part walker and public entry points
//!
//! # Example
//!
//! ```
//! use alda_fmt::{format_to_string, FormatConfig};
//! use alda_ir::build::{duration, implicit_part, note, note_length, note_with, pitch, root};
//!
//! let score = root(vec![implicit_part(vec![
//!     note_with(pitch('c', &[]), Some(duration(vec![note_length(4.0, 0)])), false),
//!     note('d'),
//! ])]);
//! let formatted = format_to_string(&score, &FormatConfig::default()).unwrap();
//! assert_eq!(formatted, "c4 d\n");
//! ```

pub mod context;
pub mod duration;
mod error;
pub mod formatter;
pub mod lisp;
pub mod score;

pub use context::{FormatConfig, FormatContext, DEFAULT_INDENT, DEFAULT_SOFT_WRAP};
pub use error::{FormatError, Result};
pub use formatter::Formatter;
pub use score::{format_score, format_score_with_config, format_to_string};
