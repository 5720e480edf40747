//! Append-only terminal screen.

/// Presentation hint for an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Plain,
    /// Echo of a submitted command (`$ ...`).
    Command,
    Error,
    /// Tab-completion candidates.
    Suggestion,
    Banner,
}

impl LineStyle {
    /// CSS class a page host puts on the line element.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Command => Some("command"),
            Self::Error => Some("error"),
            Self::Suggestion => Some("suggestion"),
            Self::Banner => Some("banner"),
        }
    }
}

/// One rendered text block. May span several lines (`\n`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Plain)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Error)
    }
}

/// Ordered output lines. Lines are only ever appended or wiped all at once.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    lines: Vec<OutputLine>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines appended after the first `from`.
    pub fn since(&self, from: usize) -> &[OutputLine] {
        &self.lines[from.min(self.lines.len())..]
    }

    /// Whole screen as text, one block per line.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
