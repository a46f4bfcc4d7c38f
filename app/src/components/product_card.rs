//! This module defines the `product_card` component, which renders one
//! catalog entry: photo, title, description, price, SKU, and the request
//! action.

use icondata::{BsHeart, BsWhatsapp};
use leptos::{
    ev,
    html::{button, div, h3, p, span},
    prelude::*,
    svg::svg,
};

use crate::components::product_image;
use crate::types::Product;

/// Renders a single product card.
///
/// The "Solicitar" button opens the product's pre-filled chat link in a new
/// browsing context. The heart button is decorative only and has no click
/// handler.
pub fn component(product: &'static Product) -> impl IntoView {
    div()
        .class("p-4 mx-auto w-full max-w-sm bg-white rounded-lg shadow transition-shadow duration-300 hover:shadow-lg")
        .child((
            product_image::component(product.image, product.title),
            h3().class("mt-4 mb-2 text-lg font-semibold").child(product.title),
            p().class("mb-2 text-gray-600").child(product.description),
            div().class("flex justify-between items-center mb-2").child((
                span().class("text-lg font-bold text-gray-900").child(product.price_display()),
                span().class("text-sm text-gray-500").child(product.code_display()),
            )),
            div().class("flex gap-2").child((
                button()
                    .on(ev::click, move |_| {
                        let _ = window().open_with_url_and_target(&product.request_url(), "_blank");
                    })
                    .class("flex flex-1 gap-2 justify-center items-center py-2 px-4 font-semibold text-white bg-pink-600 rounded-lg transition-colors duration-300 cursor-pointer hover:bg-pink-500")
                    .child((
                        svg()
                            .attr("viewBox", BsWhatsapp.view_box)
                            .attr("innerHTML", BsWhatsapp.data)
                            .class("size-4"),
                        "Solicitar",
                    )),
                button()
                    .aria_label("Favoritar")
                    .class("flex justify-center items-center py-2 px-3 rounded-lg border border-gray-200 transition-colors duration-300 hover:bg-pink-100")
                    .child(
                        svg()
                            .attr("viewBox", BsHeart.view_box)
                            .attr("innerHTML", BsHeart.data)
                            .class("size-4"),
                    ),
            )),
        ))
}

#[cfg(test)]
mod tests {
    use crate::types::Category;

    #[test]
    fn test_card_text_fields_are_verbatim() {
        // The card renders these strings without further transformation,
        // so checking the accessors covers the displayed text.
        for category in Category::ALL {
            for product in category.products() {
                assert_eq!(product.price_display(), format!("R$ {}", product.price));
                assert_eq!(product.code_display(), format!("Código: {}", product.code));
                assert!(!product.title.is_empty());
                assert!(!product.description.is_empty());
            }
        }
    }

    #[test]
    fn test_request_link_targets_the_chat_service() {
        for category in Category::ALL {
            for product in category.products() {
                let url = product.request_url();
                assert!(url.starts_with("https://wa.me/"));
                assert!(url.contains(product.code));
                assert!(url.contains(product.title));
            }
        }
    }
}
