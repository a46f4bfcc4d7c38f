use leptos::prelude::*;

pub fn component() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-10 bg-white shadow-sm">
            <div class="py-6 px-4 mx-auto max-w-7xl">
                <h1 class="text-3xl font-bold text-center">"Catálogo de Topos de Bolo"</h1>
                <p class="mt-2 text-center text-gray-600">
                    "Encontre o topo perfeito para sua celebração"
                </p>
            </div>
        </header>
    }
}
