//! This module defines the `footer` component: ordering instructions, the
//! business contact channels, and the social links.

use chrono::{Datelike as _, Utc};
use icondata::BsWhatsapp;
use leptos::{prelude::*, svg::svg};

use crate::catalog::{CONTACT_EMAIL, WHATSAPP_DISPLAY, WHATSAPP_URL};
use crate::components::icons;

pub fn component() -> impl IntoView {
    view! {
        <footer class="mt-12 bg-white border-t">
            <div class="py-8 px-4 mx-auto max-w-7xl">
                <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                    <div>
                        <h3 class="mb-4 font-semibold">"Como Fazer Pedidos"</h3>
                        <p class="text-gray-600">
                            "Clique no botão \"Solicitar\" do produto desejado ou entre em contato diretamente pelos nossos canais."
                        </p>
                    </div>
                    <div>
                        <h3 class="mb-4 font-semibold">"Contato"</h3>
                        <button
                            class="flex gap-2 items-center py-2 px-4 mb-2 rounded-lg border border-gray-200 transition-colors duration-300 cursor-pointer hover:bg-pink-100"
                            on:click=move |_| {
                                let _ = window().open_with_url_and_target(WHATSAPP_URL, "_blank");
                            }
                        >
                            {svg()
                                .attr("viewBox", BsWhatsapp.view_box)
                                .attr("innerHTML", BsWhatsapp.data)
                                .class("size-4")}
                            {WHATSAPP_DISPLAY}
                        </button>
                        <p class="text-gray-600">"Email: " {CONTACT_EMAIL}</p>
                    </div>
                    <div>
                        <h3 class="mb-4 font-semibold">"Redes Sociais"</h3>
                        {icons::component()}
                    </div>
                </div>
                <p class="mt-8 text-sm text-center text-gray-400">
                    {format!("© {} Topos de Bolo", Utc::now().year())}
                </p>
            </div>
        </footer>
    }
}
