// Core application modules and components
use crate::components::{error_template, footer, header};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod catalog;
mod components;
mod home;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("pt-BR").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            meta()
                .name("description")
                .content("Topos de bolo personalizados para casamentos, aniversários e festas infantis"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/catalog.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Catálogo de Topos de Bolo")
                    .build(),
            ),
        )),
        body().class("bg-gray-50").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen text-gray-900 bg-gray-50">
                {header::component}
                <main class="py-8 px-4 mx-auto max-w-7xl">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=home::component ssr=SsrMode::InOrder/>
                    </FlatRoutes>
                </main>
                {footer::component}
            </div>
        </Router>
    }
}
