//! This module defines the `loader` component, the spinner overlay shown
//! while a product photo is still being fetched by the browser.

use leptos::{html::div, prelude::*};

/// Renders a centered loading spinner.
pub fn component() -> impl IntoView {
    div()
        .class("flex absolute inset-0 justify-center items-center")
        .child(div().class("w-6 h-6 rounded-full border-2 border-gray-300 animate-spin border-t-pink-500"))
}
