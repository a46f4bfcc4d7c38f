//! This module defines the `home` component, the catalog page itself.
//!
//! It renders one tab per product category and, for the selected tab, a
//! responsive grid of product cards. The catalog is a compile-time literal,
//! so there is no fetching, suspense, or pagination — the only reactive
//! state is the selected tab.

use leptos::{
    ev,
    html::{button, div, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::components::product_card;
use crate::types::Category;

/// Renders the tabbed catalog page.
///
/// The selected category lives in a local `RwSignal<Category>`, defaulting
/// to the first tab. Tab triggers render in `Category::ALL` order; the panel
/// below shows only the selected category's products.
pub fn component() -> impl IntoView {
    let selected = RwSignal::new(Category::ALL[0]);

    div().child((
        Title(
            TitleProps::builder()
                .text("Catálogo de Topos de Bolo")
                .build(),
        ),
        div()
            .class("flex flex-row gap-1 justify-start mb-8 w-full")
            .child(For(ForProps::builder()
                .each(|| Category::ALL)
                .key(|category| category.key())
                .children(move |category| {
                    button()
                        .on(ev::click, move |_| selected.set(category))
                        .id(category.key())
                        .class("py-2 px-4 font-medium text-gray-600 rounded-lg transition-all duration-500 cursor-pointer hover:text-pink-600")
                        .class(("bg-white", move || selected.get() == category))
                        .class(("shadow-sm", move || selected.get() == category))
                        .class(("text-pink-600", move || selected.get() == category))
                        .child(category.label())
                })
                .build())),
        section()
            .class("grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3")
            .child(For(ForProps::builder()
                .each(move || selected.get().products().iter())
                .key(|product| product.code)
                .children(|product| product_card::component(product))
                .build())),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_signature() {
        // Rendering requires a full Leptos context; verify the callable shape.
        let _component_fn: fn() -> _ = component;
    }

    #[test]
    fn test_initial_tab_is_the_wedding_category() {
        assert_eq!(Category::ALL[0], Category::Casamentos);
    }

    #[test]
    fn test_selected_tab_shows_only_its_products() {
        // The panel renders exactly `selected.products()`, so the data-level
        // check covers the grid contents for each tab.
        let birthdays = Category::Aniversarios.products();
        assert_eq!(birthdays.len(), 2);
        assert!(birthdays.iter().all(|p| p.code.starts_with("ANI")));
    }
}
