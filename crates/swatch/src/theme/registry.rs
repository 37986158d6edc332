//! Built-in theme registry.

use super::name::ThemeName;
use super::theme::Theme;

static CLASSIC: Theme = Theme::new(
    ThemeName::Classic,
    ["#ec131e", "#fdedee", "#b00e16", "#ffebec", "#fff0f3", "#221011"],
);

static MIDNIGHT: Theme = Theme::new(
    ThemeName::Midnight,
    ["#6366f1", "#e0e7ff", "#4338ca", "#c7d2fe", "#f8fafc", "#0f172a"],
);

static ROKA: Theme = Theme::new(
    ThemeName::Roka,
    ["#d4af37", "#fffbf0", "#996515", "#f9f1d0", "#faf9f6", "#2a1a0f"],
);

/// Lookup of built-in palettes by identifier.
///
/// The registry is process-wide constant data; all methods are associated
/// functions.
///
/// # Example
///
/// ```rust
/// use swatch::{ThemeName, ThemeRegistry};
///
/// assert!(ThemeRegistry::lookup("midnight").is_some());
/// assert!(ThemeRegistry::lookup("sepia").is_none());
///
/// // Unknown identifiers resolve to the requested default
/// let theme = ThemeRegistry::resolve("sepia", ThemeName::Classic);
/// assert_eq!(theme.name(), ThemeName::Classic);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeRegistry;

impl ThemeRegistry {
    /// Returns the palette for a known identifier.
    pub fn get(name: ThemeName) -> &'static Theme {
        match name {
            ThemeName::Classic => &CLASSIC,
            ThemeName::Midnight => &MIDNIGHT,
            ThemeName::Roka => &ROKA,
        }
    }

    /// Looks up an identifier string. Absence is an ordinary outcome.
    pub fn lookup(name: &str) -> Option<&'static Theme> {
        ThemeName::parse(name).map(Self::get)
    }

    /// Looks up an identifier string, substituting `default` when it is unknown.
    pub fn resolve(name: &str, default: ThemeName) -> &'static Theme {
        Self::lookup(name).unwrap_or_else(|| Self::get(default))
    }

    /// Iterates every built-in theme in declaration order.
    pub fn iter() -> impl Iterator<Item = &'static Theme> {
        ThemeName::ALL.into_iter().map(Self::get)
    }
}
