use crate::class::{literal_text, CharClass, ClassRegistry, Matcher};
use crate::config::CursorConfig;
use crate::predicate::Predicate;
use common_framework::BoundedStack;
use std::sync::Arc;

/// A scanning cursor over a borrowed source string.
///
/// The cursor rests on the last character it consumed and starts at `-1`,
/// before the first character. Consuming operations (`is`, `read`,
/// `read_while`, `read_until`) inspect the characters after it, beginning with
/// [`peak`](Cursor::peak), and record the position they started from so that
/// [`undo`](Cursor::undo) can step back.
///
/// Indices count characters, not bytes.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    /// Byte offset of every character, plus `source.len()` at the end.
    offsets: Vec<usize>,
    position: isize,
    history: BoundedStack<isize>,
    registry: Arc<ClassRegistry>,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor using the standard classes and default history size.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, CursorConfig::default())
    }

    pub fn with_config(source: &'src str, config: CursorConfig) -> Self {
        let offsets = source
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(source.len()))
            .collect();
        Self {
            source,
            offsets,
            position: -1,
            history: BoundedStack::new(config.history_capacity),
            registry: config.registry,
        }
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the number of characters in the source.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registry used for class lookups.
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Returns the current position.
    pub fn index(&self) -> isize {
        self.position
    }

    /// Returns the character at the current position.
    pub fn value(&self) -> Option<char> {
        self.char_at(self.position)
    }

    /// Moves forward one character and returns it.
    pub fn next(&mut self) -> Option<char> {
        self.skip();
        self.value()
    }

    /// Moves forward one character without reading it and returns the new
    /// position. An exhausted cursor stays where it is.
    pub fn skip(&mut self) -> isize {
        if self.position < self.len() as isize {
            self.position += 1;
        }
        self.position
    }

    /// Returns the next character without moving.
    pub fn peak(&self) -> Option<char> {
        self.char_at(self.position.saturating_add(1))
    }

    /// Jumps to `new_index`, recording the old position for [`undo`](Cursor::undo).
    pub fn goto(&mut self, new_index: isize) -> isize {
        tracing::trace!(from = self.position, to = new_index, "cursor goto");
        self.record();
        self.position = new_index;
        self.position
    }

    /// Returns `true` when no characters are left to consume.
    pub fn is_eof(&self) -> bool {
        self.remaining_len() == 0
    }

    /// Returns the text that has not been consumed yet.
    pub fn remaining(&self) -> &'src str {
        match self.head() {
            Some(head) => self.slice(head, self.len()),
            None => "",
        }
    }

    /// Moves back before the first character and forgets all undo points.
    pub fn reset(&mut self) {
        self.position = -1;
        self.history.clear();
    }

    /// Returns the number of undo points currently remembered.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Tries each candidate in order and consumes the first one that matches.
    ///
    /// A candidate is a class name (`"digit"`, `"left_round_bracket"`) or,
    /// when no such class exists, literal text where `_` stands for a space
    /// (`"let_"` matches `"let "`). A pattern class consumes one character; a
    /// literal class or literal text consumes its whole length. Returns
    /// `false` without moving when no candidate matches.
    pub fn is(&mut self, candidates: &[&str]) -> bool {
        for candidate in candidates {
            if let Some(len) = self.probe(candidate) {
                self.consume(len);
                return true;
            }
        }
        false
    }

    /// Consumes one character of `class` if the next character belongs to it.
    pub fn is_class(&mut self, class: CharClass) -> bool {
        self.is(&[class.name()])
    }

    /// Like [`is`](Cursor::is) with a single candidate, but never moves.
    pub fn check(&self, candidate: &str) -> bool {
        self.probe(candidate).is_some()
    }

    /// Consumes up to `n` characters and returns them.
    ///
    /// Fewer are returned when the source runs out. An undo point is recorded
    /// even if nothing was left to read.
    pub fn read(&mut self, n: usize) -> &'src str {
        let count = n.min(self.remaining_len());
        let text = match self.head() {
            Some(head) => self.slice(head, head + count),
            None => "",
        };
        self.consume(count);
        text
    }

    /// Consumes characters for as long as `predicate` holds.
    pub fn read_while<'p>(&mut self, predicate: impl Into<Predicate<'p>>) -> &'src str {
        self.scan(predicate.into(), true)
    }

    /// Consumes characters up to, but not including, the first one for which
    /// `predicate` holds. Stops at the end of the source.
    pub fn read_until<'p>(&mut self, predicate: impl Into<Predicate<'p>>) -> &'src str {
        self.scan(predicate.into(), false)
    }

    /// Restores the position recorded by the most recent consuming operation.
    pub fn undo(&mut self) {
        if let Some(previous) = self.history.pop() {
            tracing::trace!(from = self.position, to = previous, "cursor undo");
            self.position = previous;
        }
    }

    fn scan(&mut self, mut predicate: Predicate<'_>, accept: bool) -> &'src str {
        let Some(start) = self.head() else {
            return "";
        };
        let mut end = start;
        while end < self.len() && self.test(&mut predicate, end, end - start) == accept {
            end += 1;
        }
        if end > start {
            self.consume(end - start);
        }
        self.slice(start, end)
    }

    fn test(&self, predicate: &mut Predicate<'_>, index: usize, run: usize) -> bool {
        let Some(ch) = self.char_at(index as isize) else {
            return false;
        };
        match predicate {
            Predicate::Callback(f) => f(ch, run),
            Predicate::Pattern(regex) => {
                let mut buf = [0; 4];
                regex.is_match(ch.encode_utf8(&mut buf))
            }
            Predicate::Name(name) => self.probe_at(index, *name).is_some(),
        }
    }

    fn probe(&self, name: &str) -> Option<usize> {
        self.probe_at(self.head()?, name)
    }

    /// Returns how many characters starting at `index` match `name`.
    fn probe_at(&self, index: usize, name: &str) -> Option<usize> {
        match self.registry.classify(name) {
            Some(Matcher::Pattern(regex)) => {
                let ch = self.char_at(index as isize)?;
                let mut buf = [0; 4];
                regex.is_match(ch.encode_utf8(&mut buf)).then_some(1)
            }
            Some(Matcher::Literal(text)) => self.probe_literal(index, text),
            None => self.probe_literal(index, &literal_text(name)),
        }
    }

    /// Returns the length of `literal` if the source spells it at `index`.
    fn probe_literal(&self, index: usize, literal: &str) -> Option<usize> {
        let len = literal.chars().count();
        if len == 0 || index + len > self.len() {
            return None;
        }
        (self.slice(index, index + len) == literal).then_some(len)
    }

    /// Records an undo point and moves forward `count` characters.
    fn consume(&mut self, count: usize) {
        self.record();
        self.position += count as isize;
    }

    fn record(&mut self) {
        self.history.push(self.position);
    }

    /// Index of the next character to consume, if the cursor is inside
    /// `[-1, len]`.
    fn head(&self) -> Option<usize> {
        let head = usize::try_from(self.position.checked_add(1)?).ok()?;
        (head <= self.len()).then_some(head)
    }

    fn remaining_len(&self) -> usize {
        self.head().map_or(0, |head| self.len() - head)
    }

    fn char_at(&self, index: isize) -> Option<char> {
        let index = usize::try_from(index).ok()?;
        if index >= self.len() {
            return None;
        }
        self.source[self.offsets[index]..].chars().next()
    }

    fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[self.offsets[start]..self.offsets[end]]
    }
}
