//! A single project with its image gallery.
//!
//! The gallery is the thumbnail followed by the project's extra images. The
//! slideshow position lives in a `Carousel` that is reset whenever a new
//! gallery arrives, and arrow keys move it while the page is mounted.

use icondata::{FiChevronLeft, FiChevronRight, FiExternalLink, FiGithub, FiX};
use leptos::{
    ev,
    html::{a, button, div, h1, h2, h3, img, p, section, span},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::{
    components::{A, AProps},
    hooks::use_params_map,
};

use crate::{
    api::select_project,
    carousel::Carousel,
    components::{icons::icon, status},
    hooks::use_loadable,
    types::Project,
};

fn arrow(side: &'static str, title: &'static str, glyph: icondata::Icon, step: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    button()
        .on(ev::click, move |e| {
            e.stop_propagation();
            step();
        })
        .title(title)
        .class(format!(
            "absolute {side} top-1/2 p-2 text-white rounded-full transition -translate-y-1/2 bg-black/50 hover:bg-black/70"
        ))
        .child(icon(glyph, "size-8"))
}

fn slideshow(title: String, gallery: Memo<Vec<String>>, carousel: RwSignal<Carousel>) -> impl IntoView {
    let current = move || {
        let index = carousel.with(Carousel::current)?;
        gallery.with(|images| images.get(index).cloned())
    };
    let many = move || gallery.with(Vec::len) > 1;

    move || match current() {
        None => div()
            .class("flex justify-center items-center mb-12 w-full h-96 bg-gradient-to-br from-gray-800 to-gray-900 rounded-lg border border-gray-800 md:h-[500px]")
            .child(p().class("text-gray-500").child("No image available"))
            .into_any(),
        Some(src) => div()
            .class("relative mb-12 group")
            .child((
                img()
                    .src(src)
                    .alt(format!("{title} - {}", carousel.with(Carousel::position_label)))
                    .on(ev::click, move |_| carousel.update(Carousel::open))
                    .class("object-cover w-full h-96 rounded-lg border border-gray-800 cursor-zoom-in md:h-[500px]"),
                many().then(|| {
                    (
                        arrow("left-4", "Previous (Arrow Left)", FiChevronLeft, move || carousel.update(Carousel::previous)),
                        arrow("right-4", "Next (Arrow Right)", FiChevronRight, move || carousel.update(Carousel::next)),
                        div()
                            .class("absolute right-4 bottom-4 py-2 px-4 text-sm font-semibold text-white rounded-full bg-black/70")
                            .child(move || carousel.with(Carousel::position_label)),
                        div()
                            .class("absolute top-4 left-4 py-1 px-3 text-xs text-blue-300 rounded-full border border-blue-800 bg-blue-500/20")
                            .child("Use \u{2190} \u{2192} keys or click arrows to navigate"),
                    )
                }),
            ))
            .into_any(),
    }
}

fn thumbnails(gallery: Memo<Vec<String>>, carousel: RwSignal<Carousel>, has_thumbnail: bool) -> impl IntoView {
    move || {
        let images = gallery.get();
        (images.len() > 1).then(|| {
            div().class("mb-12").child((
                h3().class("mb-4 font-semibold text-white").child(format!("Gallery ({} images)", images.len())),
                div().class("flex overflow-x-auto gap-3 pb-2").child(
                    images
                        .into_iter()
                        .enumerate()
                        .map(|(index, src)| {
                            let is_current = move || carousel.with(|c| c.current() == Some(index));
                            let is_cover = index == 0 && has_thumbnail;
                            button()
                                .on(ev::click, move |_| carousel.update(|c| c.select(index)))
                                .title(format!("Image {}{}", index + 1, if is_cover { " (Thumbnail)" } else { "" }))
                                .class("overflow-hidden relative flex-shrink-0 w-32 h-24 rounded-lg border-2 transition")
                                .class(("border-blue-500", is_current))
                                .class(("ring-2", is_current))
                                .class(("ring-blue-400", is_current))
                                .class(("border-gray-800", move || !is_current()))
                                .child((
                                    img().src(src).alt(format!("Gallery {}", index + 1)).class("object-cover w-full h-full"),
                                    is_cover.then(|| {
                                        span()
                                            .class("absolute top-0 left-0 py-1 px-2 text-xs text-white bg-blue-500")
                                            .child("Thumbnail")
                                    }),
                                ))
                        })
                        .collect_view(),
                ),
            ))
        })
    }
}

fn overlay(gallery: Memo<Vec<String>>, carousel: RwSignal<Carousel>) -> impl IntoView {
    move || {
        let open = carousel.with(Carousel::is_expanded);
        let src = carousel
            .with(Carousel::current)
            .and_then(|index| gallery.with(|images| images.get(index).cloned()));
        src.filter(|_| open).map(|src| {
            div()
                .on(ev::click, move |_| carousel.update(Carousel::close))
                .class("flex fixed inset-0 z-50 justify-center items-center p-6 bg-black/90")
                .child((
                    button()
                        .on(ev::click, move |_| carousel.update(Carousel::close))
                        .title("Close (Escape)")
                        .class("absolute top-6 right-6 text-white transition hover:text-gray-300")
                        .child(icon(FiX, "size-8")),
                    img()
                        .src(src)
                        .alt("")
                        .on(ev::click, |e| e.stop_propagation())
                        .class("object-contain max-w-full max-h-full rounded-lg"),
                    p()
                        .class("absolute bottom-6 text-sm font-semibold text-white")
                        .child(move || carousel.with(Carousel::position_label)),
                ))
        })
    }
}

fn detail(project: Project, gallery: Memo<Vec<String>>, carousel: RwSignal<Carousel>) -> impl IntoView {
    let technologies = (!project.technologies.is_empty()).then(|| {
        div().class("mb-12").child((
            h2().class("mb-4 text-2xl font-bold text-white").child("Technologies Used"),
            div().class("flex flex-wrap gap-3").child(
                project
                    .technologies
                    .iter()
                    .map(|tech| {
                        span()
                            .class("py-2 px-4 text-blue-300 rounded-full border border-blue-800 bg-blue-500/20")
                            .child(tech.clone())
                    })
                    .collect_view(),
            ),
        ))
    });
    let live = project.live_link().map(|href| {
        a().href(href.to_owned())
            .target("_blank")
            .rel("noopener noreferrer")
            .class("flex gap-3 items-center py-3 px-6 font-semibold text-white bg-blue-500 rounded-lg transition hover:bg-blue-600")
            .child((icon(FiExternalLink, "size-5"), "View Live Demo"))
    });
    let code = project.github_link().map(|href| {
        a().href(href.to_owned())
            .target("_blank")
            .rel("noopener noreferrer")
            .class("flex gap-3 items-center py-3 px-6 font-semibold text-white bg-gray-800 rounded-lg transition hover:bg-gray-700")
            .child((icon(FiGithub, "size-5"), "View Code"))
    });

    div().child((
        Title(TitleProps::builder().text(format!("{} | Projects", project.title)).build()),
        slideshow(project.title.clone(), gallery, carousel),
        thumbnails(gallery, carousel, project.has_thumbnail()),
        h1().class("mb-6 text-5xl font-bold text-white md:text-6xl").child(project.title.clone()),
        div().class("flex gap-3 mb-8").child((
            span()
                .class("py-2 px-4 text-sm text-blue-300 rounded-full border border-blue-800 bg-blue-900/30")
                .child(project.category().to_owned()),
            project.featured.then(|| {
                span()
                    .class("py-2 px-4 text-sm font-semibold text-yellow-300 rounded-full border border-yellow-800 bg-yellow-900/30")
                    .child("\u{2b50} Featured")
            }),
        )),
        div().class("mb-12").child((
            h2().class("mb-4 text-2xl font-bold text-white").child("About This Project"),
            p().class("text-lg leading-relaxed text-gray-300 whitespace-pre-wrap").child(project.description),
        )),
        technologies,
        div().class("flex flex-wrap gap-6 mb-12").child((live, code)),
        overlay(gallery, carousel),
    ))
}

pub fn component() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|params| params.get("id").unwrap_or_default());

    let project = use_loadable(id, select_project, "Failed to load project");
    let gallery = Memo::new(move |_| {
        project.with(|state| {
            state
                .ready()
                .and_then(Option::as_ref)
                .map(Project::gallery)
                .unwrap_or_default()
        })
    });
    let carousel = RwSignal::new(Carousel::default());

    Effect::new(move |_| {
        let len = gallery.with(Vec::len);
        carousel.update(|c| c.reset(len));
    });

    Effect::new(move |_| {
        let keys = window_event_listener(ev::keydown, move |event| {
            let handled = carousel
                .try_update(|c| c.handle_key(&event.key()))
                .unwrap_or_default();
            if handled {
                event.prevent_default();
            }
        });
        on_cleanup(move || keys.remove());
    });

    section().class("py-20 px-6 pt-32 bg-black").child(
        div().class("mx-auto max-w-5xl").child((
            status::component(project.into(), "Project not found", move |project| {
                project.map(|project| detail(project, gallery, carousel))
            }),
            span().class("font-semibold text-blue-400 hover:text-blue-300").child(A(AProps::builder()
                .href("/projects")
                .children(ToChildren::to_children(|| "\u{2190} Back to Projects"))
                .build())),
        )),
    )
}
