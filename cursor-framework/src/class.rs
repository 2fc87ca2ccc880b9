use crate::error::RegistryError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// How a character class decides whether some text belongs to it.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// The text must be exactly this string.
    Literal(Cow<'static, str>),
    /// The pattern must match somewhere in the text.
    Pattern(Regex),
}

impl Matcher {
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Matcher::Literal(text.into())
    }

    /// Compiles `pattern` into a matcher.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Matcher::Pattern)
    }

    /// Tests `candidate` against this matcher.
    pub fn is_match(&self, candidate: &str) -> bool {
        match self {
            Matcher::Literal(literal) => literal == candidate,
            Matcher::Pattern(regex) => regex.is_match(candidate),
        }
    }

    /// Tests a single character against this matcher.
    pub fn is_match_char(&self, ch: char) -> bool {
        let mut buf = [0; 4];
        self.is_match(ch.encode_utf8(&mut buf))
    }
}

/// The built-in character classes.
///
/// Every variant is registered in [`ClassRegistry::standard`] under the name
/// returned by [`CharClass::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Alphabet,
    Whitespace,
    Newline,
    AtSign,
    Quote,
    Dot,
    Semicolon,
    Hashtag,
    DollarSign,
    Astrix,
    ExclamationSign,
    Slash,
    Equal,
    Colon,
    LeftAngleBracket,
    RightAngleBracket,
    AngleBracket,
    LeftSquareBracket,
    RightSquareBracket,
    SquareBracket,
    LeftRoundBracket,
    RightRoundBracket,
    RoundBracket,
    LeftCurlyBracket,
    RightCurlyBracket,
    CurlyBracket,
}

enum Definition {
    Literal(&'static str),
    Pattern(&'static str),
}

impl CharClass {
    pub const ALL: [CharClass; 27] = [
        CharClass::Digit,
        CharClass::Alphabet,
        CharClass::Whitespace,
        CharClass::Newline,
        CharClass::AtSign,
        CharClass::Quote,
        CharClass::Dot,
        CharClass::Semicolon,
        CharClass::Hashtag,
        CharClass::DollarSign,
        CharClass::Astrix,
        CharClass::ExclamationSign,
        CharClass::Slash,
        CharClass::Equal,
        CharClass::Colon,
        CharClass::LeftAngleBracket,
        CharClass::RightAngleBracket,
        CharClass::AngleBracket,
        CharClass::LeftSquareBracket,
        CharClass::RightSquareBracket,
        CharClass::SquareBracket,
        CharClass::LeftRoundBracket,
        CharClass::RightRoundBracket,
        CharClass::RoundBracket,
        CharClass::LeftCurlyBracket,
        CharClass::RightCurlyBracket,
        CharClass::CurlyBracket,
    ];

    /// Returns the registry name of this class, e.g. `"left_curly_bracket"`.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Digit => "digit",
            CharClass::Alphabet => "alphabet",
            CharClass::Whitespace => "whitespace",
            CharClass::Newline => "newline",
            CharClass::AtSign => "at_sign",
            CharClass::Quote => "quote",
            CharClass::Dot => "dot",
            CharClass::Semicolon => "semicolon",
            CharClass::Hashtag => "hashtag",
            CharClass::DollarSign => "dollar_sign",
            CharClass::Astrix => "astrix",
            CharClass::ExclamationSign => "exclamation_sign",
            CharClass::Slash => "slash",
            CharClass::Equal => "equal",
            CharClass::Colon => "colon",
            CharClass::LeftAngleBracket => "left_angle_bracket",
            CharClass::RightAngleBracket => "right_angle_bracket",
            CharClass::AngleBracket => "angle_bracket",
            CharClass::LeftSquareBracket => "left_square_bracket",
            CharClass::RightSquareBracket => "right_square_bracket",
            CharClass::SquareBracket => "square_bracket",
            CharClass::LeftRoundBracket => "left_round_bracket",
            CharClass::RightRoundBracket => "right_round_bracket",
            CharClass::RoundBracket => "round_bracket",
            CharClass::LeftCurlyBracket => "left_curly_bracket",
            CharClass::RightCurlyBracket => "right_curly_bracket",
            CharClass::CurlyBracket => "curly_bracket",
        }
    }

    /// Looks up a class by its registry name. Spaces are accepted in place of
    /// underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        CharClass::ALL
            .into_iter()
            .find(|class| names_equal(class.name(), name))
    }

    fn definition(self) -> Definition {
        use Definition::{Literal, Pattern};
        match self {
            CharClass::Digit => Pattern(r"[0-9]"),
            CharClass::Alphabet => Pattern(r"[A-Za-z0-9_]"),
            CharClass::Whitespace => Literal(" "),
            CharClass::Newline => Pattern(r"\r\n?|\n|\u{2028}|\u{2029}"),
            CharClass::AtSign => Literal("@"),
            CharClass::Quote => Pattern(r#"['"`]"#),
            CharClass::Dot => Literal("."),
            CharClass::Semicolon => Literal(";"),
            CharClass::Hashtag => Literal("#"),
            CharClass::DollarSign => Literal("$"),
            CharClass::Astrix => Literal("*"),
            CharClass::ExclamationSign => Literal("!"),
            CharClass::Slash => Literal("/"),
            CharClass::Equal => Literal("="),
            CharClass::Colon => Literal(":"),
            CharClass::LeftAngleBracket => Literal("<"),
            CharClass::RightAngleBracket => Literal(">"),
            CharClass::AngleBracket => Pattern(r"[<>]"),
            CharClass::LeftSquareBracket => Literal("["),
            CharClass::RightSquareBracket => Literal("]"),
            CharClass::SquareBracket => Pattern(r"[\[\]]"),
            CharClass::LeftRoundBracket => Literal("("),
            CharClass::RightRoundBracket => Literal(")"),
            CharClass::RoundBracket => Pattern(r"[()]"),
            CharClass::LeftCurlyBracket => Literal("{"),
            CharClass::RightCurlyBracket => Literal("}"),
            CharClass::CurlyBracket => Pattern(r"[{}]"),
        }
    }

    fn matcher(self) -> Matcher {
        match self.definition() {
            Definition::Literal(text) => Matcher::literal(text),
            // Fixed strings; `tests::test_builtin_patterns_compile` builds every one.
            Definition::Pattern(pattern) => Matcher::Pattern(
                Regex::new(pattern).expect("built-in character class pattern is valid"),
            ),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClass(pub String);

impl fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown character class `{}`", self.0)
    }
}

impl std::error::Error for UnknownClass {}

impl FromStr for CharClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharClass::from_name(s).ok_or_else(|| UnknownClass(s.to_string()))
    }
}

/// Compares two class names, treating `_` and ` ` as the same separator.
fn names_equal(registered: &str, name: &str) -> bool {
    registered.len() == name.len()
        && registered
            .bytes()
            .zip(name.bytes())
            .all(|(a, b)| a == b || (a == b'_' && b == b' '))
}

/// Rewrites an unregistered name into the literal text it stands for.
///
/// Underscores separate words, so `"let_"` is the text `"let "`.
pub fn literal_text(name: &str) -> Cow<'_, str> {
    if name.contains('_') {
        Cow::Owned(name.replace('_', " "))
    } else {
        Cow::Borrowed(name)
    }
}

static STANDARD: Lazy<Arc<ClassRegistry>> =
    Lazy::new(|| Arc::new(ClassRegistry::builder().standard_classes().build()));

/// A table of named character classes.
///
/// Registries are immutable once built and are shared between cursors
/// through an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, Matcher>,
}

impl ClassRegistry {
    /// Returns the shared registry holding every [`CharClass`].
    pub fn standard() -> Arc<ClassRegistry> {
        Arc::clone(&STANDARD)
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns `true` if `name` refers to a registered class.
    pub fn contains(&self, name: &str) -> bool {
        self.classify(name).is_some()
    }

    /// Looks up the matcher registered under `name`.
    ///
    /// A name written with spaces finds a class registered with underscores,
    /// so `"left angle bracket"` and `"left_angle_bracket"` are equivalent.
    pub fn classify(&self, name: &str) -> Option<&Matcher> {
        if let Some(matcher) = self.classes.get(name) {
            return Some(matcher);
        }
        if name.contains(' ') {
            return self.classes.get(&name.replace(' ', "_"));
        }
        None
    }

    /// Tests `candidate` against the class called `name`.
    ///
    /// When `name` is not registered it is taken as literal text (see
    /// [`literal_text`]) and compared for equality.
    pub fn matches(&self, name: &str, candidate: &str) -> bool {
        match self.classify(name) {
            Some(matcher) => matcher.is_match(candidate),
            None => literal_text(name) == candidate,
        }
    }
}

/// Builds a custom [`ClassRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    classes: HashMap<String, Matcher>,
}

impl RegistryBuilder {
    /// Registers every [`CharClass`].
    pub fn standard_classes(mut self) -> Self {
        for class in CharClass::ALL {
            self.classes.insert(class.name().to_string(), class.matcher());
        }
        tracing::debug!(count = CharClass::ALL.len(), "registered standard character classes");
        self
    }

    /// Registers `name` as an exact literal, replacing any previous class.
    pub fn literal(
        mut self,
        name: impl Into<String>,
        text: impl Into<Cow<'static, str>>,
    ) -> Result<Self, RegistryError> {
        let name = validate_name(name.into())?;
        tracing::debug!(%name, "registered literal character class");
        self.classes.insert(name, Matcher::literal(text));
        Ok(self)
    }

    /// Registers `name` as a pattern, replacing any previous class.
    pub fn pattern(mut self, name: impl Into<String>, pattern: &str) -> Result<Self, RegistryError> {
        let name = validate_name(name.into())?;
        let matcher = match Matcher::pattern(pattern) {
            Ok(matcher) => matcher,
            Err(source) => return Err(RegistryError::InvalidPattern { name, source }),
        };
        tracing::debug!(%name, pattern, "registered pattern character class");
        self.classes.insert(name, matcher);
        Ok(self)
    }

    pub fn build(self) -> ClassRegistry {
        ClassRegistry {
            classes: self.classes,
        }
    }
}

fn validate_name(name: String) -> Result<String, RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    // Lookups normalize spaces to underscores, so store the underscore form.
    Ok(name.replace(' ', "_"))
}
