use crate::class::CharClass;
use regex::Regex;
use std::fmt;

/// A test applied character by character by [`Cursor::read_while`] and
/// [`Cursor::read_until`].
///
/// [`Cursor::read_while`]: crate::Cursor::read_while
/// [`Cursor::read_until`]: crate::Cursor::read_until
pub enum Predicate<'p> {
    /// Called with the character under test and the number of characters
    /// already accepted in this run.
    Callback(Box<dyn FnMut(char, usize) -> bool + 'p>),
    /// Matched against the character under test.
    Pattern(&'p Regex),
    /// A registered class name, or literal text when the name is unknown.
    Name(&'p str),
}

impl<'p> Predicate<'p> {
    /// Wraps a closure as a [`Predicate::Callback`].
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(char, usize) -> bool + 'p,
    {
        Predicate::Callback(Box::new(f))
    }
}

impl fmt::Debug for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Callback(_) => f.write_str("Callback(..)"),
            Predicate::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Predicate::Name(name) => f.debug_tuple("Name").field(name).finish(),
        }
    }
}

impl<'p> From<&'p str> for Predicate<'p> {
    fn from(name: &'p str) -> Self {
        Predicate::Name(name)
    }
}

impl<'p> From<&'p String> for Predicate<'p> {
    fn from(name: &'p String) -> Self {
        Predicate::Name(name.as_str())
    }
}

impl<'p> From<&'p Regex> for Predicate<'p> {
    fn from(regex: &'p Regex) -> Self {
        Predicate::Pattern(regex)
    }
}

impl From<CharClass> for Predicate<'static> {
    fn from(class: CharClass) -> Self {
        Predicate::Name(class.name())
    }
}
