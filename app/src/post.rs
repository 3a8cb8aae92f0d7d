//! This module defines the `post` component, which renders a single article.
//!
//! The post is looked up by the `slug` route parameter. The content API decides
//! what is visible: when it answers 404 or `null` for a slug, as it does for
//! drafts, the page renders the not-found message instead of an error. Posts
//! it does return are shown as they are.

use icondata::{FiCalendar, FiClock};
use leptos::html::{article, div, h1, h3, img, p, section, span};
use leptos::prelude::*;
use leptos_meta::{Title, TitleProps};
use leptos_router::{
    components::{A, AProps},
    hooks::use_params_map,
};

use crate::{
    api::select_post,
    components::{icons::icon, status},
    config::SiteIdentity,
    hooks::use_loadable,
    loadable::{Loadable, Phase},
    types::BlogPost,
};

fn body(post: BlogPost, owner: &'static str) -> impl IntoView {
    let tags = (!post.tags.is_empty()).then(|| {
        div().class("flex flex-wrap gap-2 mb-12").child(
            post.tags
                .iter()
                .map(|tag| {
                    span()
                        .class("py-2 px-4 text-sm text-blue-300 rounded-full border border-blue-800 bg-blue-900/30")
                        .child(tag.clone())
                })
                .collect_view(),
        )
    });
    let author = post.author_or(owner).to_owned();

    article().child((
        Title(TitleProps::builder().text(format!("{} | Blog", post.title)).build()),
        post.featured_image().map(|src| {
            img()
                .src(src.to_owned())
                .alt(post.title.clone())
                .class("object-cover mb-12 w-full h-96 rounded-lg border border-gray-800")
        }),
        h1().class("mb-6 text-4xl font-bold leading-tight text-white md:text-5xl").child(post.title.clone()),
        div().class("flex flex-wrap gap-4 items-center pb-8 mb-8 text-gray-400 border-b border-gray-800").child((
            div().class("flex gap-2 items-center").child((icon(FiCalendar, "size-4"), span().child(post.published_on()))),
            span().child("\u{2022}"),
            div().class("flex gap-2 items-center").child((
                icon(FiClock, "size-4"),
                span().child(format!("{} min read", post.reading_minutes())),
            )),
        )),
        tags,
        div().class("mb-12 text-lg leading-relaxed text-gray-300 whitespace-pre-wrap").child(post.content),
        div().class("p-6 mb-12 bg-gray-900 rounded-lg border border-gray-800").child((
            h3().class("mb-2 font-semibold text-white").child("About the Author"),
            p().class("text-gray-400").child((
                "Written by ",
                span().class("font-semibold text-white").child(author),
            )),
        )),
    ))
}

/// Renders an individual blog post page.
pub fn component() -> impl IntoView {
    let identity = use_context::<SiteIdentity>().unwrap_or_default();
    let params = use_params_map();
    let slug = move || params.with(|params| params.get("slug").unwrap_or_default());

    let post = use_loadable(slug, select_post, "Failed to load article");
    let missing = move || post.with(|state| state.phase() == Phase::Empty);

    section().class("py-20 px-6 pt-32 bg-black").child(
        div().class("mx-auto max-w-3xl").child((
            move || {
                if missing() {
                    div()
                        .class("py-20 text-center")
                        .child((
                            p().class("text-lg text-gray-400").child("Article not found"),
                            p().class("mt-2 text-sm text-gray-500")
                                .child("Make sure the post exists and is published"),
                        ))
                        .into_any()
                } else {
                    status::component(post.into(), "", move |post: Option<BlogPost>| {
                        post.map(|post| body(post, identity.owner))
                    })
                    .into_any()
                }
            },
            span().class("font-semibold text-blue-400 hover:text-blue-300").child(A(AProps::builder()
                .href("/blog")
                .children(ToChildren::to_children(|| "\u{2190} Back to Blog"))
                .build())),
        )),
    )
}
