use serde::Serialize;

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
}

/// One catalog entry.
///
/// Every field is a compile-time literal: the catalog is fixed at build time
/// and never mutated. `price` keeps the storefront's decimal-comma formatting
/// ("129,90"); `code` is the human-readable SKU quoted in order requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub code: &'static str,
    pub image: &'static str,
}

/// Product grouping shown as one tab each on the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Casamentos,
    Aniversarios,
    Infantis,
}

impl Category {
    /// Tab order on the catalog page.
    pub const ALL: [Self; 3] = [Self::Casamentos, Self::Aniversarios, Self::Infantis];

    /// Stable key used for element ids, anchors, and sitemap entries.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Casamentos => "casamentos",
            Self::Aniversarios => "aniversarios",
            Self::Infantis => "infantis",
        }
    }

    /// Accented label shown on the tab trigger.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Casamentos => "Casamentos",
            Self::Aniversarios => "Aniversários",
            Self::Infantis => "Infantis",
        }
    }
}
