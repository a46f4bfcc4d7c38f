//! This module defines the `product_image` component, which wraps a product
//! photo with a loading overlay.
//!
//! The overlay is driven by a single local boolean: it starts visible and is
//! cleared by the image element's `load` event. Each image instance owns its
//! own flag, so photos load and settle independently.

use leptos::{
    ev,
    html::{div, img},
    prelude::*,
};

use crate::components::loader;

/// Renders a square product photo with a spinner shown until it loads.
///
/// A photo that never finishes loading keeps the spinner on screen; there is
/// no error state, retry, or timeout.
pub fn component(src: &'static str, alt: &'static str) -> impl IntoView {
    let loading = RwSignal::new(true);

    div()
        .class("overflow-hidden relative w-full bg-gray-100 rounded-lg aspect-square")
        .child((
            Show(
                ShowProps::builder()
                    .when(move || loading.get())
                    .fallback(|| ())
                    .children(ToChildren::to_children(|| loader::component()))
                    .build(),
            ),
            img()
                .src(src)
                .alt(alt)
                .class("object-cover w-full h-full")
                .on(ev::load, move |_| loading.set(false)),
        ))
}
