//! Submitted-line history with a saturating recall cursor.
//!
//! The cursor lives in `[0, len]`; `len` means "not recalling". Recall never
//! fails: moving past either end just stops there (or, going down, clears
//! the input).

/// Ordered history of submitted lines.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
    /// Maximum retained entries; 0 keeps everything.
    limit: usize,
}

impl History {
    /// History that keeps at most `limit` entries (0 = unbounded).
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            limit,
        }
    }

    /// Append a line and stop recalling.
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
        if self.limit > 0 && self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len();
    }

    /// Step back one entry. At the oldest entry (or with no history),
    /// returns `current` unchanged.
    pub fn recall_previous(&mut self, current: &str) -> String {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.entries[self.cursor].clone()
        } else {
            current.to_string()
        }
    }

    /// Step forward one entry. Past the newest entry the cursor parks at
    /// "not recalling" and the returned line is empty.
    pub fn recall_next(&mut self) -> String {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries[self.cursor].clone()
        } else {
            self.cursor = self.entries.len();
            String::new()
        }
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_recalling(&self) -> bool {
        self.cursor < self.entries.len()
    }
}
