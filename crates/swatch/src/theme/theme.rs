//! Theme palettes.

use std::fmt::Write;

use super::name::ThemeName;

/// Custom properties every theme assigns, in application order.
pub const PROPERTIES: [&str; 6] = [
    "--color-primary",
    "--color-primary-soft",
    "--color-primary-dark",
    "--color-primary-light",
    "--color-bg-light",
    "--color-bg-dark",
];

/// A named palette assigning one colour literal to each of [`PROPERTIES`].
///
/// Themes are immutable static data; obtain them from the
/// [`ThemeRegistry`](super::ThemeRegistry).
///
/// # Example
///
/// ```rust
/// use swatch::{ThemeName, ThemeRegistry};
///
/// let roka = ThemeRegistry::get(ThemeName::Roka);
/// assert_eq!(roka.value("--color-primary"), Some("#d4af37"));
///
/// for (property, value) in roka.properties() {
///     println!("{property}: {value}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    name: ThemeName,
    values: [&'static str; PROPERTIES.len()],
}

impl Theme {
    pub(crate) const fn new(name: ThemeName, values: [&'static str; PROPERTIES.len()]) -> Self {
        Self { name, values }
    }

    /// Returns the identifier of this theme.
    pub fn name(&self) -> ThemeName {
        self.name
    }

    /// Iterates `(property, value)` pairs in [`PROPERTIES`] order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        PROPERTIES.iter().copied().zip(self.values.iter().copied())
    }

    /// Returns the value assigned to `property`, if it belongs to the schema.
    pub fn value(&self, property: &str) -> Option<&'static str> {
        PROPERTIES
            .iter()
            .position(|p| *p == property)
            .map(|i| self.values[i])
    }

    /// Renders the palette as a `:root` rule.
    ///
    /// ```rust
    /// use swatch::{ThemeName, ThemeRegistry};
    ///
    /// let css = ThemeRegistry::get(ThemeName::Classic).to_css();
    /// assert!(css.starts_with(":root {\n"));
    /// assert!(css.contains("  --color-primary: #ec131e;\n"));
    /// ```
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (property, value) in self.properties() {
            // Writing to a String cannot fail.
            let _ = writeln!(css, "  {property}: {value};");
        }
        css.push_str("}\n");
        css
    }

    /// Renders the palette as the body of a `style` attribute.
    ///
    /// Suitable for `<html style="...">` so the page is themed before scripts run.
    pub fn inline_style(&self) -> String {
        self.properties()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
