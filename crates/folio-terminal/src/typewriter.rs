//! Header typing effect as an owned, cancellable task.
//!
//! The session holds at most one task. Dropping it cancels it: nothing else
//! keeps a handle that could write stale characters later.

use std::time::Duration;

use folio_platform::PageService;
use folio_types::error::Result;

/// Progressive reveal of `text` into every target element.
#[derive(Debug, Clone)]
pub struct TypewriterTask {
    id: u64,
    targets: Vec<String>,
    chars: Vec<char>,
    revealed: usize,
    interval: Duration,
    elapsed: Duration,
}

impl TypewriterTask {
    pub fn new(id: u64, targets: Vec<String>, text: &str, interval: Duration) -> Self {
        Self {
            id,
            targets,
            chars: text.chars().collect(),
            revealed: 0,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Characters written so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Empty every target. With a zero interval the whole text is written
    /// immediately.
    pub fn start(&mut self, page: &mut dyn PageService) -> Result<()> {
        for id in &self.targets {
            page.set_text(id, "")?;
        }
        if self.interval.is_zero() {
            self.finish(page)?;
        }
        Ok(())
    }

    /// Advance by `elapsed`, revealing one character per whole interval.
    /// Returns `true` once the text is complete.
    pub fn tick(&mut self, elapsed: Duration, page: &mut dyn PageService) -> Result<bool> {
        if self.is_finished() {
            return Ok(true);
        }
        if self.interval.is_zero() {
            self.finish(page)?;
            return Ok(true);
        }
        self.elapsed += elapsed;
        let mut next = self.revealed;
        while self.elapsed >= self.interval && next < self.chars.len() {
            self.elapsed -= self.interval;
            next += 1;
        }
        if next > self.revealed {
            let chunk: String = self.chars[self.revealed..next].iter().collect();
            self.write(&chunk, page)?;
        }
        Ok(self.is_finished())
    }

    /// Write whatever is left in one step.
    pub fn finish(&mut self, page: &mut dyn PageService) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        let rest: String = self.chars[self.revealed..].iter().collect();
        self.write(&rest, page)
    }

    fn write(&mut self, chunk: &str, page: &mut dyn PageService) -> Result<()> {
        for id in &self.targets {
            page.append_text(id, chunk)?;
        }
        self.revealed += chunk.chars().count();
        Ok(())
    }
}
