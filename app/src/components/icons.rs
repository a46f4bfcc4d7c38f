use icondata::{BsFacebook, BsInstagram, BsWhatsapp};
use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::catalog::{FACEBOOK_URL, INSTAGRAM_URL, WHATSAPP_URL};

pub fn component() -> impl IntoView {
    div().class("flex flex-row gap-4 items-center h-10").child((
        a().href(INSTAGRAM_URL)
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("Instagram")
            .class("text-gray-500 transition-all duration-500 size-6 hover:text-pink-600")
            .child(
                svg()
                    .attr("viewBox", BsInstagram.view_box)
                    .attr("innerHTML", BsInstagram.data)
                    .class("size-6"),
            ),
        a().href(FACEBOOK_URL)
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("Facebook")
            .class("text-gray-500 transition-all duration-500 size-6 hover:text-pink-600")
            .child(
                svg()
                    .attr("viewBox", BsFacebook.view_box)
                    .attr("innerHTML", BsFacebook.data)
                    .class("size-6"),
            ),
        a().href(WHATSAPP_URL)
            .rel("noopener noreferrer")
            .target("_blank")
            .aria_label("WhatsApp")
            .class("text-gray-500 transition-all duration-500 size-6 hover:text-pink-600")
            .child(
                svg()
                    .attr("viewBox", BsWhatsapp.view_box)
                    .attr("innerHTML", BsWhatsapp.data)
                    .class("size-6"),
            ),
    ))
}
