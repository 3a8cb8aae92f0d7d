use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::SiteIdentity;

pub fn component() -> impl IntoView {
    let identity = use_context::<SiteIdentity>().unwrap_or_default();

    view! {
        <nav class="sticky top-0 z-50 bg-black border-b border-gray-800">
            <div class="flex justify-between items-center py-4 px-6 mx-auto max-w-7xl">
                <div class="text-xl font-bold tracking-tight transition hover:opacity-80">
                    <A href="/">{identity.owner}</A>
                </div>
                <div class="flex gap-8 text-gray-400">
                    <span class="transition duration-300 hover:text-white"><A href="/">"Home"</A></span>
                    <span class="transition duration-300 hover:text-white"><A href="/projects">"Projects"</A></span>
                    <span class="transition duration-300 hover:text-white"><A href="/blog">"Blog"</A></span>
                    <span class="transition duration-300 hover:text-white"><A href="/contact">"Contact"</A></span>
                </div>
            </div>
        </nav>
    }
}
