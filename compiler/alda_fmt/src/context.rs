//! Formatting Context (Line Buffer & Wrap Engine)
//!
//! Tracks state during formatting: pending tokens of the current line,
//! indentation depth, and the wrap-pause flag. Every token the formatter
//! produces goes through [`FormatContext::write`], which decides where lines
//! break.
//!
//! # Wrapping
//!
//! Tokens are indivisible. A line only ever breaks *before* a token that would
//! push the rendered line past the soft-wrap width; a token that is wider than
//! the whole line on its own is still emitted. While wrapping is paused no
//! breaks are inserted at all.

/// Default column at which lines soft-wrap.
pub const DEFAULT_SOFT_WRAP: usize = 80;

/// Default text repeated once per indentation level.
pub const DEFAULT_INDENT: &str = "    ";

/// Configuration for the formatter.
///
/// Fixed for the duration of a format run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Maximum rendered line width before wrapping, in bytes.
    /// Defaults to 80.
    pub soft_wrap: usize,

    /// Text emitted once per indentation level (spaces, tabs, anything).
    /// Defaults to four spaces.
    pub indent_text: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            soft_wrap: DEFAULT_SOFT_WRAP,
            indent_text: DEFAULT_INDENT.to_owned(),
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified soft-wrap width.
    pub fn with_soft_wrap(soft_wrap: usize) -> Self {
        Self {
            soft_wrap,
            ..Default::default()
        }
    }

    /// Create a new config with the specified indent text.
    pub fn with_indent_text(indent_text: impl Into<String>) -> Self {
        Self {
            indent_text: indent_text.into(),
            ..Default::default()
        }
    }
}

/// Formatting context that buffers the current line.
///
/// Holds:
/// - the tokens pending for the current line
/// - the current indentation level
/// - whether wrapping is paused
/// - the completed output lines
pub struct FormatContext {
    output: String,
    config: FormatConfig,
    indent_level: usize,
    pause_wrap: bool,
    tokens: Vec<String>,
}

impl FormatContext {
    /// Create a new format context with default config.
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Create a new format context with custom config.
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            config,
            indent_level: 0,
            pause_wrap: false,
            tokens: Vec::new(),
        }
    }

    /// Get the current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Whether wrapping is currently paused.
    pub fn is_wrap_paused(&self) -> bool {
        self.pause_wrap
    }

    /// Render the pending line: indentation followed by the tokens joined by
    /// single spaces, with surrounding whitespace of the content trimmed.
    fn line(&self) -> String {
        let indent = self.config.indent_text.repeat(self.indent_level);
        let text = self.tokens.join(" ");
        let mut line = indent + text.trim();
        line.truncate(line.trim_end().len());
        line
    }

    /// Append an indivisible token to the current line.
    ///
    /// If the line would overflow the soft-wrap width with this token, the
    /// line so far is flushed and the token starts the next one.
    pub fn write(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
        if self.pause_wrap || self.tokens.len() < 2 {
            return;
        }
        if self.line().len() <= self.config.soft_wrap {
            return;
        }
        if let Some(token) = self.tokens.pop() {
            tracing::trace!(token = %token, width = self.config.soft_wrap, "wrapping line");
            self.flush();
            self.tokens.push(token);
        }
    }

    /// Write the pending line, if any, followed by a newline.
    pub fn flush(&mut self) {
        if self.tokens.is_empty() {
            return;
        }
        let line = self.line();
        self.output.push_str(&line);
        self.output.push('\n');
        self.tokens.clear();
    }

    /// Flush, then write an empty line.
    pub fn blank_line(&mut self) {
        self.flush();
        self.output.push('\n');
    }

    /// Flush, then increment indentation level.
    pub fn indent(&mut self) {
        self.flush();
        self.indent_level += 1;
    }

    /// Flush, then decrement indentation level.
    pub fn dedent(&mut self) {
        self.flush();
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Dedent until the indentation level is at most `level`.
    pub fn dedent_to(&mut self, level: usize) {
        while self.indent_level > level {
            self.dedent();
        }
    }

    /// Stop inserting line breaks until [`resume_wrap`](Self::resume_wrap).
    pub fn pause_wrap(&mut self) {
        self.pause_wrap = true;
    }

    /// Allow line breaks again.
    pub fn resume_wrap(&mut self) {
        self.pause_wrap = false;
    }

    /// Flush the pending line and return the formatted output.
    pub fn finalize(mut self) -> String {
        self.flush();
        self.output
    }
}

impl Default for FormatContext {
    fn default() -> Self {
        Self::new()
    }
}
