use icondata::{FiGithub, FiInstagram, FiLinkedin, FiMail, Icon};
use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::config::SiteIdentity;

/// Renders an `icondata` icon as inline SVG.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill)
        .attr("stroke", icon.stroke)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("innerHTML", icon.data)
        .attr("aria-hidden", "true")
        .class(class)
}

fn social_link(href: String, label: &'static str, glyph: Icon, external: bool) -> impl IntoView {
    a().href(href)
        .rel(external.then_some("noopener noreferrer"))
        .target(external.then_some("_blank"))
        .aria_label(label)
        .title(label)
        .class("text-gray-400 transition duration-300 hover:text-white")
        .child(icon(glyph, "size-6"))
}

/// Social links for the footer: GitHub, LinkedIn, Instagram and e-mail.
pub fn component() -> impl IntoView {
    let identity = use_context::<SiteIdentity>().unwrap_or_default();
    div().class("flex flex-row gap-4 items-center").child((
        social_link(identity.github.to_owned(), "GitHub", FiGithub, true),
        social_link(identity.linkedin.to_owned(), "LinkedIn", FiLinkedin, true),
        social_link(identity.instagram.to_owned(), "Instagram", FiInstagram, true),
        social_link(identity.mailto_link(), "Email", FiMail, false),
    ))
}
