/// Forward-only cursor over report lines with single-step rewind.
///
/// Lines handed back with [`push_back`](Self::push_back) are returned by the
/// next `peek`/`advance` before the cursor moves on, so the block reader can
/// return an over-read header to the segmenter.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    pushed: Vec<&'a str>,
}

impl<'a> LineCursor<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            pushed: Vec::new(),
        }
    }

    /// Look at the next line without consuming it
    pub fn peek(&mut self) -> Option<&'a str> {
        if let Some(&line) = self.pushed.last() {
            return Some(line);
        }
        let line = self.lines.next()?;
        self.pushed.push(line);
        Some(line)
    }

    /// Consume and return the next line
    pub fn advance(&mut self) -> Option<&'a str> {
        self.pushed.pop().or_else(|| self.lines.next())
    }

    /// Return a consumed line to the front of the cursor
    pub fn push_back(&mut self, line: &'a str) {
        self.pushed.push(line);
    }

    /// Consume the next line only if `accept` holds for it
    pub fn advance_if(&mut self, accept: impl FnOnce(&str) -> bool) -> Option<&'a str> {
        let line = self.peek()?;
        if accept(line) {
            self.advance()
        } else {
            None
        }
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
