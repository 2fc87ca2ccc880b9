//! Cursor Framework
//!
//! A scanning cursor for hand-written lexers: position tracking, character
//! classification against named classes, bulk reads and single-step undo.

pub mod class;
pub mod config;
pub mod cursor;
pub mod error;
pub mod predicate;

pub use class::{CharClass, ClassRegistry, Matcher, RegistryBuilder, UnknownClass};
pub use common_framework::{BoundedStack, StackEnd};
pub use config::CursorConfig;
pub use cursor::Cursor;
pub use error::RegistryError;
pub use predicate::Predicate;
