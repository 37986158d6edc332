//! Theme identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a built-in theme.
///
/// The set is closed: every variant has a palette in the
/// [`ThemeRegistry`](super::ThemeRegistry), and the mapping is exhaustive.
/// Serialises as the lowercase identifier (`"classic"`, `"midnight"`, `"roka"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Red on warm white. The fallback for unknown identifiers.
    #[default]
    Classic,
    /// Indigo on slate.
    Midnight,
    /// Gold on off-white and dark brown.
    Roka,
}

impl ThemeName {
    /// All identifiers in declaration order.
    pub const ALL: [ThemeName; 3] = [ThemeName::Classic, ThemeName::Midnight, ThemeName::Roka];

    /// Returns the identifier as used in storage and in the DOM contract.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Classic => "classic",
            ThemeName::Midnight => "midnight",
            ThemeName::Roka => "roka",
        }
    }

    /// Parses an identifier, returning `None` for anything outside the set.
    ///
    /// Matching is exact: `"Midnight"` and `" roka"` are not identifiers.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when strictly parsing an identifier that names no theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{name}' (available: {})", ThemeName::ALL.map(ThemeName::as_str).join(", "))]
pub struct UnknownTheme {
    /// The identifier that was requested.
    pub name: String,
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownTheme {
            name: s.to_string(),
        })
    }
}
