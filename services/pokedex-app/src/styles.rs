//! Scoped stylesheet class names
//!
//! Components refer to classes by symbolic name; a [`StyleModule`] resolves
//! them to the identifiers declared in `style/general.css`.

/// Mapping from symbolic class names to resolved class identifiers
#[derive(Debug, Clone, Copy)]
pub struct StyleModule {
    classes: &'static [(&'static str, &'static str)],
}

impl StyleModule {
    pub const fn new(classes: &'static [(&'static str, &'static str)]) -> Self {
        Self { classes }
    }

    /// Resolve `symbol`, falling back to the symbol itself when the module
    /// does not declare it.
    pub fn class<'a>(&self, symbol: &'a str) -> &'a str {
        self.classes
            .iter()
            .find(|(name, _)| *name == symbol)
            .map(|(_, resolved)| *resolved)
            .unwrap_or(symbol)
    }
}

/// Classes used by the application layout
pub const APP_STYLES: StyleModule = StyleModule::new(&[
    ("Container", "app_Container"),
    ("Logo", "app_Logo"),
    ("Nav", "app_Nav"),
    ("Page", "app_Page"),
]);
