//! Browser bindings for swatch.
//!
//! On `wasm32` this crate provides:
//!
//! - [`DocumentRoot`]: a [`StyleSink`](swatch::StyleSink) writing to
//!   `document.documentElement.style`
//! - [`LocalStorage`]: a [`ThemeStore`](swatch::ThemeStore) over
//!   `window.localStorage`
//! - JavaScript exports `applyTheme`, `initTheme`, `themeNames` and `themeCss`
//!
//! ```js
//! import init, { initTheme, applyTheme } from "./swatch_web.js";
//!
//! await init();
//! initTheme(document.body.dataset.theme);   // server value, may be undefined
//! button.onclick = () => applyTheme("midnight");
//! ```
//!
//! Errors from the document or storage surface as thrown JavaScript `Error`s.
//! On other targets only the re-exported core API is available.

#![forbid(unsafe_code)]

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod exports;

#[cfg(target_arch = "wasm32")]
pub use dom::{DocumentRoot, LocalStorage};
#[cfg(target_arch = "wasm32")]
pub use exports::{apply_theme, init_theme, theme_css, theme_names};

pub use swatch::{ThemeName, ThemeRegistry};

/// Resolves `name` to the CSS rule that would be applied for it.
///
/// Shared by the `themeCss` export and usable natively for pre-rendering.
pub fn resolved_css(name: &str) -> String {
    ThemeRegistry::resolve(name, ThemeName::default()).to_css()
}
