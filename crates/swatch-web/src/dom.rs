//! Document and storage adapters.

use swatch::{Error, StyleSink, ThemeStore};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, HtmlElement, Storage};

/// Extracts a readable message from a thrown JavaScript value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Inline style of the document's root element (`<html>`).
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    style: CssStyleDeclaration,
}

impl DocumentRoot {
    /// Binds to the current window's document root.
    pub fn from_window() -> Result<Self, Error> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(Error::Unavailable("document"))?;
        let root = document
            .document_element()
            .ok_or(Error::Unavailable("document root element"))?;
        let root: HtmlElement = root
            .dyn_into()
            .map_err(|_| Error::Unavailable("HTML document root"))?;
        Ok(Self::new(root.style()))
    }

    /// Wraps an existing declaration block.
    pub fn new(style: CssStyleDeclaration) -> Self {
        Self { style }
    }

    /// Reads back a property; `None` when unset.
    pub fn property(&self, name: &str) -> Option<String> {
        self.style
            .get_property_value(name)
            .ok()
            .filter(|value| !value.is_empty())
    }
}

impl StyleSink for DocumentRoot {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.style
            .set_property(name, value)
            .map_err(|e| Error::Style {
                property: name.to_string(),
                message: js_message(&e),
            })
    }
}

/// The window's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Binds to the current window's `localStorage`.
    ///
    /// Fails when storage is disabled (e.g. by privacy settings), which
    /// browsers signal either by throwing or by returning `null`.
    pub fn from_window() -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::Unavailable("window"))?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(Error::Unavailable("localStorage"))?;
        Ok(Self { storage })
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        self.storage.get_item(key).map_err(|e| Error::Storage {
            key: key.to_string(),
            message: js_message(&e),
        })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.storage.set_item(key, value).map_err(|e| Error::Storage {
            key: key.to_string(),
            message: js_message(&e),
        })
    }
}
