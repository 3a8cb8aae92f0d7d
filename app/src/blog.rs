//! The article index with a search box.

use icondata::{FiArrowRight, FiCalendar, FiSearch};
use leptos::{
    ev,
    html::{div, h1, h3, img, input, p, section, span},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::components::{A, AProps};

use crate::{
    api::select_posts,
    components::{icons::icon, status},
    filter::search,
    hooks::use_loadable,
    types::BlogPost,
};

/// Tags shown on a card.
const CARD_TAGS: usize = 2;

fn card(post: BlogPost) -> impl IntoView {
    let picture = match post.featured_image() {
        Some(src) => img()
            .src(src.to_owned())
            .alt(post.title.clone())
            .class("object-cover w-full h-full")
            .into_any(),
        None => div()
            .class("text-center text-gray-600")
            .child((
                p().class("text-sm").child("Featured Image"),
                p().class("text-xs text-gray-700").child("Coming soon"),
            ))
            .into_any(),
    };
    let tags = if post.tags.is_empty() {
        span().class("text-xs text-gray-600").child("No tags").into_any()
    } else {
        post.tags
            .iter()
            .take(CARD_TAGS)
            .map(|tag| {
                span()
                    .class("py-1 px-2 text-xs text-blue-300 rounded border border-blue-800 bg-blue-900/30")
                    .child(tag.clone())
            })
            .collect_view()
            .into_any()
    };
    let href = format!("/blog/{}", post.slug);

    div()
        .class("flex overflow-hidden flex-col h-full bg-black rounded-lg border border-gray-800 transition hover:border-blue-500")
        .child((
            div()
                .class("flex overflow-hidden justify-center items-center w-full h-72 bg-gradient-to-br from-gray-800 to-gray-900")
                .child(picture),
            div().class("flex flex-col flex-grow p-6").child((
                div().class("flex flex-wrap gap-2 mb-3").child(tags),
                h3().class("mb-3 text-xl font-bold text-white line-clamp-2").child(post.title.clone()),
                div().class("flex gap-4 items-center mb-4 text-sm text-gray-400").child((
                    div().class("flex gap-1 items-center").child((
                        icon(FiCalendar, "size-3.5"),
                        span().child(post.published_on()),
                    )),
                    span().child("\u{2022}"),
                    span().child(format!("{} min read", post.reading_minutes())),
                )),
                p().class("flex-grow mb-8 text-sm text-gray-400 line-clamp-4").child(post.summary()),
                span()
                    .class("inline-flex gap-2 items-center py-3 px-6 mt-auto text-sm font-semibold text-blue-400 rounded-lg border border-blue-800 transition w-fit bg-blue-500/20 hover:bg-blue-500/30")
                    .child(A(AProps::builder()
                        .href(href)
                        .children(ToChildren::to_children(|| ("Read Article ", icon(FiArrowRight, "inline size-4"))))
                        .build())),
            )),
        ))
}

pub fn component() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let posts = use_loadable(
        || (),
        |()| select_posts(),
        "Failed to load blog posts. Make sure backend is running.",
    );
    let visible = Memo::new(move |_| {
        query.with(|query| posts.with(|state| state.clone().map(|all| search(&all, query))))
    });

    div().child((
        Title(TitleProps::builder().text("Blog | Portfolio").build()),
        section().class("py-20 px-6 pt-40 bg-black").child(
            div().class("mx-auto max-w-6xl text-center").child((
                h1().class("mb-6 text-5xl font-bold text-white md:text-6xl").child("Blog & Articles"),
                p().class("mx-auto max-w-2xl text-lg text-gray-400").child(
                    "Thoughts, stories, and ideas about web development, design, and technology.",
                ),
            )),
        ),
        section().class("py-16 px-6 bg-gray-900 border-b border-gray-800").child(
            div().class("relative mx-auto max-w-2xl").child((
                span().class("absolute top-4 left-4 text-gray-500").child(icon(FiSearch, "size-5")),
                input()
                    .r#type("text")
                    .placeholder("Search articles by title, topic, or tag...")
                    .value(move || query.get())
                    .on(ev::input, move |ev| query.set(event_target_value(&ev)))
                    .class("py-3 pr-4 pl-12 w-full placeholder-gray-500 text-white bg-black rounded-lg border border-gray-800 transition focus:border-blue-500 focus:outline-none"),
            )),
        ),
        section().class("py-20 px-6 bg-gray-900").child(
            div().class("mx-auto max-w-6xl").child(status::component(
                visible.into(),
                "No articles found",
                |posts| {
                    div()
                        .class("grid grid-cols-1 gap-8 md:grid-cols-2")
                        .child(posts.into_iter().map(card).collect_view())
                },
            )),
        ),
    ))
}
