//! # Swatch - CSS custom-property themes
//!
//! Swatch maps a theme identifier to a fixed palette of `--color-*` custom
//! properties, writes that palette onto a style target, and remembers the
//! chosen identifier in a persistent key-value store.
//!
//! The browser is not assumed. Both side effects go through small traits:
//!
//! - [`StyleSink`]: anything that accepts custom-property writes
//!   (the document root in a browser, [`InlineStyle`] in tests)
//! - [`ThemeStore`]: anything that persists a string under a key
//!   (`localStorage` in a browser, [`MemoryStore`] or [`FileStore`] elsewhere)
//!
//! ## Quick Start
//!
//! ```rust
//! use swatch::{apply_theme, init_theme, InlineStyle, MemoryStore, ThemeName};
//!
//! let mut style = InlineStyle::new();
//! let mut store = MemoryStore::new();
//!
//! // First visit: nothing stored, no server preference
//! let applied = init_theme(&mut style, &mut store, None).unwrap();
//! assert_eq!(applied, ThemeName::Classic);
//!
//! // User picks a theme
//! apply_theme(&mut style, &mut store, "midnight").unwrap();
//! assert_eq!(style.get("--color-primary"), Some("#6366f1"));
//! assert_eq!(store.get("theme"), Some("midnight"));
//! ```
//!
//! ## Unknown identifiers
//!
//! Applying an identifier outside the registry is not an error: the default
//! theme's palette is written instead, and the *requested* identifier is still
//! persisted. Use [`ThemeName::from_str`](std::str::FromStr) when strict
//! parsing is wanted.
//!
//! ## Server-side rendering
//!
//! [`Theme::to_css`] and [`Theme::inline_style`] render a theme as CSS so a
//! server can inline it into the page before any script runs.

mod color;
mod config;
mod error;
mod sink;
mod store;
mod switcher;
pub mod theme;

pub use color::{ColorError, Rgb};
pub use config::{SwitcherConfig, DEFAULT_STORAGE_KEY};
pub use error::Error;
pub use sink::{InlineStyle, StyleSink};
pub use store::{DeferredStore, FileStore, MemoryStore, ThemeStore};
pub use switcher::{apply_theme, init_theme, select_theme, Selection, ThemeSwitcher};
pub use theme::{Theme, ThemeName, ThemeRegistry, UnknownTheme, PROPERTIES};
