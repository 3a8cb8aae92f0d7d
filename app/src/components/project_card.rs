use leptos::{
    html::{div, h3, img, p, span},
    prelude::*,
};
use leptos_router::components::{A, AProps};

use crate::types::Project;

/// Technologies listed on a card before the rest collapse into `+N`.
const VISIBLE_TECHNOLOGIES: usize = 2;

/// Splits technologies into the ones shown on a card and the hidden count.
pub fn technology_preview(technologies: &[String]) -> (&[String], usize) {
    let shown = technologies.len().min(VISIBLE_TECHNOLOGIES);
    (&technologies[..shown], technologies.len() - shown)
}

/// Card linking to a project's detail page.
pub fn component(project: Project) -> impl IntoView {
    let (shown, hidden) = technology_preview(&project.technologies);
    let badges = shown
        .iter()
        .map(|tech| {
            span()
                .class("py-1 px-2 text-xs text-blue-300 rounded border border-blue-800 bg-blue-900/30")
                .child(tech.clone())
        })
        .collect_view();
    let more = (hidden > 0).then(|| span().class("text-xs text-gray-400").child(format!("+{hidden}")));

    let picture = match project.gallery().into_iter().next() {
        Some(src) => img()
            .src(src)
            .alt(project.title.clone())
            .class("object-cover w-full h-full")
            .into_any(),
        None => p().class("text-gray-600").child("No image").into_any(),
    };
    let href = format!("/projects/{}", project.id);

    div()
        .class("overflow-hidden bg-black rounded-lg border border-gray-800 transition hover:border-blue-500 hover:-translate-y-2")
        .child(
            A(AProps::builder()
                .href(href)
                .children(ToChildren::to_children(move || {
                    (
                        div()
                            .class("flex overflow-hidden justify-center items-center w-full h-48 bg-gradient-to-br from-gray-800 to-gray-900")
                            .child(picture),
                        div().class("p-6").child((
                            span().class("text-xs tracking-wider text-blue-400 uppercase").child(project.category().to_owned()),
                            h3().class("mt-1 mb-2 text-xl font-bold text-white").child(project.title),
                            p().class("mb-4 text-sm text-gray-400 line-clamp-2").child(project.description),
                            div().class("flex flex-wrap gap-2 items-center").child((badges, more)),
                        )),
                    )
                }))
                .build()),
        )
}
