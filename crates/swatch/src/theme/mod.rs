//! Theme registry for the built-in colour palettes.
//!
//! This module provides:
//!
//! - [`ThemeName`]: The closed set of theme identifiers
//! - [`Theme`]: A palette assigning a colour to every entry of [`PROPERTIES`]
//! - [`ThemeRegistry`]: Lookup from identifier strings to palettes
//!
//! Every theme supplies a value for the same property schema. The palette is
//! stored as a fixed-size array aligned with [`PROPERTIES`], so a theme that
//! forgets a property does not compile.

mod name;
mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use name::{ThemeName, UnknownTheme};
pub use registry::ThemeRegistry;
pub use theme::{Theme, PROPERTIES};
