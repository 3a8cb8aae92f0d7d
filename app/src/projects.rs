//! The project portfolio with category buttons.

use leptos::{
    ev,
    html::{button, div, h1, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{
    api::select_projects,
    components::{project_card, status},
    filter::{CategoryFilter, PROJECT_CATEGORIES, by_category},
    hooks::use_loadable,
};

pub fn component() -> impl IntoView {
    let selected = RwSignal::new(CategoryFilter::All);
    let projects = use_loadable(
        || (),
        |()| select_projects(),
        "Failed to load projects. Make sure backend is running.",
    );
    let visible = Memo::new(move |_| {
        let filter = selected.get();
        projects.with(|state| state.clone().map(|all| by_category(&all, &filter)))
    });

    let category_buttons = PROJECT_CATEGORIES
        .into_iter()
        .map(|label| {
            let is_selected = move || selected.with(|filter| filter.label() == label);
            button()
                .on(ev::click, move |_| selected.set(CategoryFilter::from_label(label)))
                .class("py-2 px-6 font-semibold rounded-full border transition")
                .class(("bg-blue-500", is_selected))
                .class(("border-blue-500", is_selected))
                .class(("text-white", is_selected))
                .class(("border-gray-700", move || !is_selected()))
                .class(("text-gray-400", move || !is_selected()))
                .child(label)
        })
        .collect_view();

    div().child((
        Title(TitleProps::builder().text("Projects | Portfolio").build()),
        section().class("py-20 px-6 pt-40 bg-black").child(
            div().class("mx-auto max-w-6xl text-center").child((
                h1().class("mb-6 text-5xl font-bold text-white md:text-6xl").child("My Projects"),
                p().class("mx-auto max-w-2xl text-lg text-gray-400").child(
                    "A collection of my work across web development, mobile apps, and design.",
                ),
            )),
        ),
        section()
            .class("py-8 px-6 bg-gray-900 border-b border-gray-800")
            .child(div().class("flex flex-wrap gap-4 justify-center mx-auto max-w-6xl").child(category_buttons)),
        section().class("py-20 px-6 bg-gray-900").child(
            div().class("mx-auto max-w-6xl").child(status::component(
                visible.into(),
                "No projects found",
                |projects| {
                    div()
                        .class("grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-3")
                        .child(projects.into_iter().map(project_card::component).collect_view())
                },
            )),
        ),
    ))
}
