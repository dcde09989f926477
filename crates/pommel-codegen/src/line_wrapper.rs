//! Column-limited output with deferred wrapping.
//!
//! Text after a wrapping space is held back until it is known whether it fits
//! on the current line. If it does, the space is written; if it does not, the
//! held text moves to a continuation line instead.

/// Column at which generated lines wrap
pub const COLUMN_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flush {
    /// Start a continuation line
    Wrap,
    /// Keep going on the same line
    Space,
}

#[derive(Debug)]
pub(crate) struct LineWrapper {
    out: String,
    indent: String,
    column_limit: usize,
    column: usize,
    buffer: String,
    next_flush: Option<Flush>,
    indent_level: usize,
}

impl LineWrapper {
    pub(crate) fn new(indent: impl Into<String>, column_limit: usize) -> Self {
        Self {
            out: String::new(),
            indent: indent.into(),
            column_limit,
            column: 0,
            buffer: String::new(),
            next_flush: None,
            indent_level: 0,
        }
    }

    /// Emit `text`, which may contain newlines
    pub(crate) fn append(&mut self, text: &str) {
        if let Some(pending) = self.next_flush {
            let next_newline = text.find('\n').map(|i| text[..i].chars().count());

            if next_newline.is_none() && self.column + text.chars().count() <= self.column_limit {
                self.buffer.push_str(text);
                self.column += text.chars().count();
                return;
            }

            let wrap = match next_newline {
                None => true,
                Some(offset) => self.column + offset > self.column_limit,
            };
            self.flush(if wrap { Flush::Wrap } else { pending });
        }

        self.out.push_str(text);
        self.column = match text.rfind('\n') {
            Some(i) => text[i + 1..].chars().count(),
            None => self.column + text.chars().count(),
        };
    }

    /// A space that becomes a newline plus `indent_level` indents if the
    /// following text does not fit
    pub(crate) fn wrapping_space(&mut self, indent_level: usize) {
        if let Some(pending) = self.next_flush {
            self.flush(pending);
        }
        self.column += 1;
        self.next_flush = Some(Flush::Space);
        self.indent_level = indent_level;
    }

    pub(crate) fn finish(mut self) -> String {
        if let Some(pending) = self.next_flush {
            self.flush(pending);
        }
        self.out
    }

    fn flush(&mut self, flush: Flush) {
        match flush {
            Flush::Wrap => {
                self.out.push('\n');
                for _ in 0..self.indent_level {
                    self.out.push_str(&self.indent);
                }
                self.column =
                    self.indent_level * self.indent.chars().count() + self.buffer.chars().count();
            }
            Flush::Space => self.out.push(' '),
        }
        self.out.push_str(&self.buffer);
        self.buffer.clear();
        self.next_flush = None;
    }
}
