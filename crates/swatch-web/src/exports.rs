//! JavaScript entry points.

use js_sys::Array;
use swatch::{DeferredStore, Error, ThemeName, ThemeSwitcher};
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::dom::{DocumentRoot, LocalStorage};

fn to_js(err: Error) -> JsValue {
    warn!(error = %err, "theme switch failed");
    js_sys::Error::new(&err.to_string()).into()
}

type LazyStorage = DeferredStore<fn() -> Result<LocalStorage, Error>>;

// Storage is opened at load/save time, so a disabled `localStorage` fails
// `applyTheme` only after the palette is on the document root.
fn switcher() -> Result<ThemeSwitcher<DocumentRoot, LazyStorage>, JsValue> {
    let root = DocumentRoot::from_window().map_err(to_js)?;
    let storage: LazyStorage = DeferredStore::new(LocalStorage::from_window as fn() -> _);
    Ok(ThemeSwitcher::new(root, storage))
}

/// Applies a theme to the document root and remembers it in `localStorage`.
///
/// Unknown names apply the classic palette; the given name is still stored.
/// If storage is unavailable the palette is still applied before the error
/// is thrown.
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(name: &str) -> Result<(), JsValue> {
    switcher()?.apply(name).map_err(to_js)?;
    Ok(())
}

/// Applies the server-provided theme, else the stored one, else classic.
///
/// `undefined`, `null` and `""` all count as "no server theme".
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme(server: Option<String>) -> Result<(), JsValue> {
    switcher()?.init(server.as_deref()).map_err(to_js)?;
    Ok(())
}

/// Names of the built-in themes.
#[wasm_bindgen(js_name = themeNames)]
pub fn theme_names() -> Array {
    ThemeName::ALL
        .iter()
        .map(|name| JsValue::from_str(name.as_str()))
        .collect()
}

/// The `:root` CSS rule for a theme, falling back to classic.
#[wasm_bindgen(js_name = themeCss)]
pub fn theme_css(name: &str) -> String {
    crate::resolved_css(name)
}
