//! This module defines the `error_template` component, the page shown when
//! the router cannot resolve a path.
//!
//! It includes an `AppError` enum for application-level errors and a
//! component that renders a friendly error page, setting the matching HTTP
//! status code on the server.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Página não encontrada")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders a generic error page based on the provided errors.
///
/// Designed for Leptos error boundaries: it extracts `AppError` instances
/// from the `Errors` context and displays them. On the server side it also
/// sets the HTTP response status based on the first encountered error.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    // Prioritize `outside_errors` for SSR, otherwise the client-side signal.
    let errors = outside_errors.map_or_else(
        || errors.unwrap_or_else(|| panic!("No Errors found and we expected errors!")),
        |e| RwSignal::new(e),
    );
    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    // On the server, set the HTTP response status code based on the first error.
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        let response = use_context::<ResponseOptions>();
        if let Some(response) = response {
            response.set_status(errors[0].status_code());
        }
    }

    div()
        .class("grid place-content-center px-4 py-24 antialiased")
        .child(For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|error| {
                    let error_string = error.1.to_string();
                    let error_code = error.1.status_code();

                    div()
                        .class("flex flex-col gap-1 justify-center items-center")
                        .child((
                            h1().class("text-xl tracking-widest text-gray-400 uppercase")
                                .child(format!("{error_code} | {error_string}")),
                            div()
                                .class("mt-6 text-center duration-200 hover:text-pink-600")
                                .child(A(AProps::builder()
                                    .href("/")
                                    .children(ToChildren::to_children(|| "Voltar ao catálogo"))
                                    .build())),
                        ))
                })
                .build(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_message_is_localized() {
        assert_eq!(AppError::NotFound.to_string(), "Página não encontrada");
    }
}
