//! Visual theme for the dashboard shell.
//!
//! The choice lives in `localStorage` and is reflected as a `.dark` class
//! on the document root. Reading and styling require a browser; outside
//! one, everything is light and writes are no-ops.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "picboard_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme, for toggle buttons.
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Name used both as the stored value and in toggle labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The visitor's stored choice, the system color scheme when nothing
    /// valid is stored, or `Light` outside a browser.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Self::Light;
            };
            let stored = window
                .local_storage()
                .ok()
                .flatten()
                .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
                .and_then(|v| Self::from_name(&v));
            if let Some(theme) = stored {
                return theme;
            }
            let prefers_dark = window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|mq| mq.matches());
            if prefers_dark { Self::Dark } else { Self::Light }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Light
        }
    }

    /// Persist this choice for future visits.
    pub fn store(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, self.name());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }

    /// Restyle the document root to match this theme.
    pub fn apply(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let class_list = el.class_list();
                let _ = match self {
                    Self::Dark => class_list.add_1("dark"),
                    Self::Light => class_list.remove_1("dark"),
                };
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }
}
