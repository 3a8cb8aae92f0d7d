use chrono::{Datelike as _, Utc};
use leptos::{
    html::{div, footer, h3, li, p, ul},
    prelude::*,
};
use leptos_router::components::{A, AProps};

use crate::components::icons;
use crate::config::SiteIdentity;

fn quick_link(href: &'static str, label: &'static str) -> impl IntoView {
    li().class("text-gray-400 transition hover:text-white").child(
        A(AProps::builder()
            .href(href)
            .children(ToChildren::to_children(move || label))
            .build()),
    )
}

pub fn component() -> impl IntoView {
    let identity = use_context::<SiteIdentity>().unwrap_or_default();

    footer().class("mt-20 bg-black border-t border-gray-800").child(
        div().class("py-12 px-6 mx-auto max-w-7xl").child((
            div().class("grid grid-cols-1 gap-12 mb-8 md:grid-cols-3").child((
                div().child((
                    h3().class("mb-4 text-lg font-bold text-white").child(identity.owner),
                    p().class("text-sm text-gray-400").child(identity.summary),
                )),
                div().child((
                    h3().class("mb-4 text-lg font-bold text-white").child("Quick Links"),
                    ul().class("space-y-2").child((
                        quick_link("/", "Home"),
                        quick_link("/projects", "Projects"),
                        quick_link("/blog", "Blog"),
                        quick_link("/contact", "Contact"),
                    )),
                )),
                div().child((
                    h3().class("mb-4 text-lg font-bold text-white").child("Connect"),
                    icons::component(),
                )),
            )),
            div().class("pt-8 text-center border-t border-gray-800").child(
                p().class("text-sm text-gray-500").child(format!(
                    "\u{a9} {} {}. All rights reserved.",
                    Utc::now().year(),
                    identity.owner
                )),
            ),
        )),
    )
}
