//! Line-oriented console front end.
//!
//! Each stdin line becomes a key sequence: its characters followed by Enter,
//! or by Tab when the line ends with a tab character. Output lines are
//! written as they appear in the session buffer.

use std::io::{self, Write};

use folio_terminal::{LineStyle, OutputBuffer};
use folio_types::input::Key;

/// Keys produced by one console line.
pub fn keys_for(line: &str) -> Vec<Key> {
    let (text, last) = match line.strip_suffix('\t') {
        Some(partial) => (partial, Key::Tab),
        None => (line, Key::Enter),
    };
    text.chars().map(Key::Char).chain([last]).collect()
}

/// Tracks how much of the output buffer has been written.
#[derive(Debug, Default)]
pub struct Console {
    shown: usize,
}

impl Console {
    /// Write lines appended since the last flush. A shrunken buffer means
    /// the screen was cleared.
    pub fn flush(&mut self, output: &OutputBuffer, w: &mut impl Write) -> io::Result<()> {
        if output.len() < self.shown {
            writeln!(w, "--")?;
            self.shown = 0;
        }
        for line in output.since(self.shown) {
            match line.style {
                LineStyle::Suggestion => writeln!(w, "  {}", line.text)?,
                _ => writeln!(w, "{}", line.text)?,
            }
        }
        self.shown = output.len();
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_terminal::OutputLine;

    #[test]
    fn enter_line() {
        assert_eq!(
            keys_for("ls"),
            vec![Key::Char('l'), Key::Char('s'), Key::Enter]
        );
    }

    #[test]
    fn tab_line() {
        assert_eq!(keys_for("na\t"), vec![Key::Char('n'), Key::Char('a'), Key::Tab]);
        assert_eq!(keys_for(""), vec![Key::Enter]);
    }

    #[test]
    fn flush_writes_only_new_lines() {
        let mut out = OutputBuffer::new();
        let mut console = Console::default();
        let mut sink = Vec::new();

        out.push(OutputLine::plain("one"));
        console.flush(&out, &mut sink).unwrap();
        out.push(OutputLine::new("help, history", LineStyle::Suggestion));
        console.flush(&out, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "one\n  help, history\n");
    }

    #[test]
    fn flush_after_clear() {
        let mut out = OutputBuffer::new();
        let mut console = Console::default();
        let mut sink = Vec::new();

        out.push(OutputLine::plain("a"));
        out.push(OutputLine::plain("b"));
        console.flush(&out, &mut sink).unwrap();
        out.clear();
        out.push(OutputLine::plain("c"));
        console.flush(&out, &mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "a\nb\n--\nc\n");
    }
}
