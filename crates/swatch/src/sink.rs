//! Style targets that receive custom-property writes.

use crate::error::Error;

/// A target for CSS custom-property writes, such as a document root's inline style.
///
/// Writing a property overwrites any previous value for the same name and
/// leaves other properties untouched.
pub trait StyleSink {
    /// Sets `name` to `value`.
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), Error>;
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), Error> {
        (**self).set_property(name, value)
    }
}

/// An in-memory inline style declaration.
///
/// Keeps properties in first-write order, like a CSSOM declaration block.
///
/// # Example
///
/// ```rust
/// use swatch::{InlineStyle, StyleSink};
///
/// let mut style = InlineStyle::new();
/// style.set_property("--color-primary", "#ec131e").unwrap();
/// style.set_property("--color-primary", "#6366f1").unwrap();
///
/// assert_eq!(style.get("--color-primary"), Some("#6366f1"));
/// assert_eq!(style.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    /// Creates an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a property, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates `(name, value)` pairs in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if no properties are declared.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialises the block as a `style` attribute body.
    pub fn css_text(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl StyleSink for InlineStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), Error> {
        match self.declarations.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            }
            None => self.declarations.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }
}
