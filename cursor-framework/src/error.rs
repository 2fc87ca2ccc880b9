use thiserror::Error;

/// Errors raised while building a [`ClassRegistry`](crate::ClassRegistry).
///
/// Scanning itself never fails; these only surface when a custom class is
/// registered.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("character class name must not be empty")]
    EmptyName,

    #[error("invalid pattern for character class `{name}`")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}
