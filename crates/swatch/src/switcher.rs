//! Applying and initialising themes.
//!
//! [`ThemeSwitcher`] ties the registry to a [`StyleSink`] and a
//! [`ThemeStore`]. The free functions [`apply_theme`] and [`init_theme`]
//! run a one-off switch with the default [`SwitcherConfig`].
//!
//! # Selection at initialisation
//!
//! | Priority | Source | Notes |
//! |----------|--------|-------|
//! | 1 | server-provided identifier | empty string counts as absent |
//! | 2 | persisted identifier | empty string counts as absent |
//! | 3 | configured default | `classic` unless configured |
//!
//! The selected identifier is applied as-is, so an unknown server or
//! persisted value still falls back to the default palette when applied.

use tracing::{debug, trace};

use crate::config::SwitcherConfig;
use crate::error::Error;
use crate::sink::StyleSink;
use crate::store::ThemeStore;
use crate::theme::{ThemeName, ThemeRegistry};

/// Where the identifier chosen at initialisation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Supplied by the hosting page or server.
    Server,
    /// Read back from the store.
    Persisted,
    /// Neither was present; the configured default was used.
    Default,
}

/// Picks the identifier to apply at initialisation.
///
/// ```rust
/// use swatch::{select_theme, Selection, ThemeName};
///
/// assert_eq!(
///     select_theme(Some("midnight"), Some("roka"), ThemeName::Classic),
///     ("midnight", Selection::Server)
/// );
/// assert_eq!(
///     select_theme(None, Some("roka"), ThemeName::Classic),
///     ("roka", Selection::Persisted)
/// );
/// assert_eq!(
///     select_theme(Some(""), None, ThemeName::Classic),
///     ("classic", Selection::Default)
/// );
/// ```
pub fn select_theme<'a>(
    server: Option<&'a str>,
    persisted: Option<&'a str>,
    default: ThemeName,
) -> (&'a str, Selection) {
    let present = |value: Option<&'a str>| value.filter(|v| !v.is_empty());

    if let Some(name) = present(server) {
        (name, Selection::Server)
    } else if let Some(name) = present(persisted) {
        (name, Selection::Persisted)
    } else {
        (default.as_str(), Selection::Default)
    }
}

/// Applies themes to a style sink and persists the selection.
///
/// Both collaborators are owned; pass `&mut` references to keep using them
/// afterwards.
///
/// # Example
///
/// ```rust
/// use swatch::{InlineStyle, MemoryStore, ThemeName, ThemeSwitcher};
///
/// let mut style = InlineStyle::new();
/// let mut store = MemoryStore::with_entry("theme", "roka");
///
/// let mut switcher = ThemeSwitcher::new(&mut style, &mut store);
/// assert_eq!(switcher.init(None).unwrap(), ThemeName::Roka);
/// assert_eq!(switcher.apply("midnight").unwrap(), ThemeName::Midnight);
///
/// assert_eq!(style.get("--color-bg-dark"), Some("#0f172a"));
/// assert_eq!(store.get("theme"), Some("midnight"));
/// ```
#[derive(Debug)]
pub struct ThemeSwitcher<S, K> {
    sink: S,
    store: K,
    config: SwitcherConfig,
}

impl<S: StyleSink, K: ThemeStore> ThemeSwitcher<S, K> {
    /// Creates a switcher with the default configuration.
    pub fn new(sink: S, store: K) -> Self {
        Self::with_config(sink, store, SwitcherConfig::default())
    }

    /// Creates a switcher with an explicit configuration.
    pub fn with_config(sink: S, store: K, config: SwitcherConfig) -> Self {
        Self {
            sink,
            store,
            config,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    /// Returns the style sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the store.
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Consumes the switcher, returning its sink and store.
    pub fn into_parts(self) -> (S, K) {
        (self.sink, self.store)
    }

    /// Applies the theme named `requested` and persists `requested`.
    ///
    /// Any string is accepted. An unknown identifier applies the configured
    /// default palette, but the requested string is what gets persisted.
    /// Only the theme's own properties are written; other properties on the
    /// sink are left as they were.
    ///
    /// Returns the theme whose palette was written.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a property write fails (the remaining
    /// properties and the save are skipped), or the store's error if
    /// persisting fails (the palette has already been written).
    pub fn apply(&mut self, requested: &str) -> Result<ThemeName, Error> {
        let theme = ThemeRegistry::resolve(requested, self.config.default_theme);
        if theme.name().as_str() != requested {
            debug!(
                requested,
                fallback = %theme.name(),
                "unknown theme, applying default palette"
            );
        }

        for (property, value) in theme.properties() {
            trace!(property, value, "setting style property");
            self.sink.set_property(property, value)?;
        }

        self.store.save(&self.config.storage_key, requested)?;
        debug!(theme = %theme.name(), key = %self.config.storage_key, "theme applied");
        Ok(theme.name())
    }

    /// Chooses a theme at page load and applies it.
    ///
    /// The persisted identifier is read first, then the selection rules of
    /// [`select_theme`] pick between `server`, the persisted value, and the
    /// configured default. Exactly one [`apply`](Self::apply) follows.
    ///
    /// # Errors
    ///
    /// Propagates a failed store read, then any error from `apply`.
    pub fn init(&mut self, server: Option<&str>) -> Result<ThemeName, Error> {
        let persisted = self.store.load(&self.config.storage_key)?;
        let (selected, source) =
            select_theme(server, persisted.as_deref(), self.config.default_theme);
        debug!(selected, source = ?source, "initialising theme");
        self.apply(selected)
    }
}

/// Applies `requested` to `sink` and persists it in `store` under the default key.
///
/// See [`ThemeSwitcher::apply`].
pub fn apply_theme<S, K>(sink: &mut S, store: &mut K, requested: &str) -> Result<ThemeName, Error>
where
    S: StyleSink + ?Sized,
    K: ThemeStore + ?Sized,
{
    ThemeSwitcher::new(sink, store).apply(requested)
}

/// Selects and applies the initial theme with the default configuration.
///
/// See [`ThemeSwitcher::init`].
pub fn init_theme<S, K>(sink: &mut S, store: &mut K, server: Option<&str>) -> Result<ThemeName, Error>
where
    S: StyleSink + ?Sized,
    K: ThemeStore + ?Sized,
{
    ThemeSwitcher::new(sink, store).init(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use crate::sink::InlineStyle;
    use crate::store::{DeferredStore, MemoryStore};
    use crate::theme::PROPERTIES;

    /// Store recording every call it receives.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        loads: Cell<usize>,
        saves: RefCell<Vec<(String, String)>>,
    }

    impl ThemeStore for CountingStore {
        fn load(&self, key: &str) -> Result<Option<String>, Error> {
            self.loads.set(self.loads.get() + 1);
            self.inner.load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), Error> {
            self.saves
                .borrow_mut()
                .push((key.to_string(), value.to_string()));
            self.inner.save(key, value)
        }
    }

    /// Sink counting property writes.
    #[derive(Default)]
    struct CountingSink {
        writes: usize,
    }

    impl StyleSink for CountingSink {
        fn set_property(&mut self, _name: &str, _value: &str) -> Result<(), Error> {
            self.writes += 1;
            Ok(())
        }
    }

    fn unavailable_storage() -> Result<MemoryStore, Error> {
        Err(Error::Unavailable("localStorage"))
    }

    /// Store whose writes always fail, like a full or disabled `localStorage`.
    #[derive(Default)]
    struct FullStore;

    impl ThemeStore for FullStore {
        fn load(&self, _key: &str) -> Result<Option<String>, Error> {
            Ok(None)
        }

        fn save(&mut self, key: &str, _value: &str) -> Result<(), Error> {
            Err(Error::Storage {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            })
        }
    }

    /// Store whose reads fail.
    struct UnreadableStore;

    impl ThemeStore for UnreadableStore {
        fn load(&self, _key: &str) -> Result<Option<String>, Error> {
            Err(Error::Unavailable("localStorage"))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), Error> {
            Ok(())
        }
    }

    /// Sink rejecting one property.
    struct RejectingSink {
        rejected: &'static str,
        written: Vec<String>,
    }

    impl StyleSink for RejectingSink {
        fn set_property(&mut self, name: &str, _value: &str) -> Result<(), Error> {
            if name == self.rejected {
                return Err(Error::Style {
                    property: name.to_string(),
                    message: "rejected".to_string(),
                });
            }
            self.written.push(name.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_select_prefers_server() {
        assert_eq!(
            select_theme(Some("roka"), Some("midnight"), ThemeName::Classic),
            ("roka", Selection::Server)
        );
    }

    #[test]
    fn test_select_keeps_unknown_server_value() {
        assert_eq!(
            select_theme(Some("sepia"), Some("roka"), ThemeName::Classic),
            ("sepia", Selection::Server)
        );
    }

    #[test]
    fn test_select_empty_persisted_falls_to_default() {
        assert_eq!(
            select_theme(None, Some(""), ThemeName::Midnight),
            ("midnight", Selection::Default)
        );
    }

    #[test]
    fn test_apply_returns_resolved_name() {
        let mut style = InlineStyle::new();
        let mut store = MemoryStore::new();

        assert_eq!(
            apply_theme(&mut style, &mut store, "roka").unwrap(),
            ThemeName::Roka
        );
        assert_eq!(
            apply_theme(&mut style, &mut store, "sepia").unwrap(),
            ThemeName::Classic
        );
    }

    #[test]
    fn test_apply_uses_configured_default_and_key() {
        let config = SwitcherConfig {
            storage_key: "app-theme".to_string(),
            default_theme: ThemeName::Midnight,
        };
        let mut switcher = ThemeSwitcher::with_config(InlineStyle::new(), MemoryStore::new(), config);

        assert_eq!(switcher.apply("sepia").unwrap(), ThemeName::Midnight);

        let (style, store) = switcher.into_parts();
        assert_eq!(style.get("--color-primary"), Some("#6366f1"));
        assert_eq!(store.get("app-theme"), Some("sepia"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_storage_failure_after_styles_written() {
        let mut style = InlineStyle::new();
        let mut store = FullStore;

        let err = apply_theme(&mut style, &mut store, "midnight").unwrap_err();

        assert!(matches!(err, Error::Storage { ref key, .. } if key == "theme"));
        assert_eq!(style.len(), PROPERTIES.len());
        assert_eq!(style.get("--color-primary"), Some("#6366f1"));
    }

    #[test]
    fn test_sink_failure_stops_before_save() {
        let mut sink = RejectingSink {
            rejected: "--color-primary-dark",
            written: Vec::new(),
        };
        let mut store = MemoryStore::new();

        let err = apply_theme(&mut sink, &mut store, "roka").unwrap_err();

        assert!(matches!(err, Error::Style { .. }));
        assert_eq!(sink.written, vec!["--color-primary", "--color-primary-soft"]);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_init_propagates_read_failure() {
        let mut style = InlineStyle::new();
        let mut store = UnreadableStore;

        let err = init_theme(&mut style, &mut store, Some("roka")).unwrap_err();
        assert!(matches!(err, Error::Unavailable("localStorage")));
        assert!(style.is_empty());
    }

    #[test]
    fn test_init_persists_selection() {
        let mut style = InlineStyle::new();
        let mut store = MemoryStore::new();

        init_theme(&mut style, &mut store, None).unwrap();
        assert_eq!(store.get("theme"), Some("classic"));
    }

    #[test]
    fn test_accessors() {
        let switcher = ThemeSwitcher::new(InlineStyle::new(), MemoryStore::new());
        assert_eq!(switcher.config(), &SwitcherConfig::default());
        assert!(switcher.sink().is_empty());
        assert_eq!(switcher.store().get("theme"), None);
    }

    #[test]
    fn test_init_reads_once_and_applies_once() {
        for (server, stored, expected) in [
            (Some("midnight"), Some("roka"), "midnight"),
            (None, Some("roka"), "roka"),
            (None, None, "classic"),
        ] {
            let mut sink = CountingSink::default();
            let mut store = CountingStore {
                inner: stored
                    .map(|value| MemoryStore::with_entry("theme", value))
                    .unwrap_or_default(),
                ..CountingStore::default()
            };

            init_theme(&mut sink, &mut store, server).unwrap();

            assert_eq!(store.loads.get(), 1);
            assert_eq!(
                *store.saves.borrow(),
                vec![("theme".to_string(), expected.to_string())]
            );
            assert_eq!(sink.writes, PROPERTIES.len());
        }
    }

    #[test]
    fn test_apply_does_not_read_store() {
        let mut sink = CountingSink::default();
        let mut store = CountingStore::default();

        apply_theme(&mut sink, &mut store, "roka").unwrap();

        assert_eq!(store.loads.get(), 0);
        assert_eq!(store.saves.borrow().len(), 1);
        assert_eq!(sink.writes, PROPERTIES.len());
    }

    #[test]
    fn test_apply_with_unopenable_store_writes_palette_first() {
        let mut style = InlineStyle::new();
        let mut store = DeferredStore::new(unavailable_storage);

        let err = apply_theme(&mut style, &mut store, "midnight").unwrap_err();

        assert!(matches!(err, Error::Unavailable("localStorage")));
        assert_eq!(style.len(), PROPERTIES.len());
        assert_eq!(style.get("--color-primary"), Some("#6366f1"));
    }

    #[test]
    fn test_init_with_unopenable_store_fails_before_styling() {
        let mut style = InlineStyle::new();
        let mut store = DeferredStore::new(unavailable_storage);

        let err = init_theme(&mut style, &mut store, Some("midnight")).unwrap_err();

        assert!(matches!(err, Error::Unavailable("localStorage")));
        assert!(style.is_empty());
    }
}
