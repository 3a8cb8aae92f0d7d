//! The landing page.
//!
//! The profile is polled so edits made in the admin dashboard show up without
//! a reload. Everything derived from it goes through a `Memo`, so a refresh
//! that returns the same data does not restart counters or refill skill bars.

use icondata::{FiCode, FiFeather, FiLayout, FiPenTool, FiTrendingUp, FiZap, Icon};
use leptos::{
    html::{div, h1, h2, h3, img, p, section, span},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::components::{A, AProps};

use crate::{
    api::{select_featured_projects, select_profile},
    components::{counter, icons::icon, project_card, skill_bar, status},
    config::{SiteIdentity, UiConfig},
    hooks::{use_loadable, use_polled_loadable},
    loadable::Loadable,
    types::{Achievements, Profile},
};

const SERVICES: [(Icon, &str, &str); 3] = [
    (
        FiLayout,
        "UI/UX Design",
        "Creating beautiful and intuitive user interfaces with Figma and modern design tools",
    ),
    (
        FiPenTool,
        "Graphic Design",
        "Designing logos, branding, and visual assets that stand out",
    ),
    (
        FiCode,
        "Full Stack Developments",
        "End-to-end solutions from frontend to backend and database design",
    ),
];

const STRENGTHS: [(Icon, &str, &str); 3] = [
    (FiZap, "Fast Delivery", "Quick Turnaround"),
    (FiFeather, "Creative Solutions", "Custom Design"),
    (FiTrendingUp, "Performance", "Optimized Speed"),
];

/// Picks a profile field, or `fallback` while the profile is missing or the
/// field is blank.
fn profile_text(state: &Loadable<Profile>, pick: impl Fn(&Profile) -> String, fallback: &str) -> String {
    state
        .ready()
        .map(pick)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

fn link_button(href: &'static str, label: &'static str, class: &'static str) -> impl IntoView {
    span().class(class).child(A(AProps::builder()
        .href(href)
        .children(ToChildren::to_children(move || label))
        .build()))
}

fn section_heading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    div().class("mb-12 text-center").child((
        h2().class("mb-4 text-4xl font-bold text-white md:text-5xl").child(title),
        p().class("mx-auto max-w-2xl text-lg text-gray-400").child(subtitle),
    ))
}

fn feature_card((glyph, title, text): (Icon, &'static str, &'static str)) -> impl IntoView {
    div()
        .class("p-8 text-center bg-black rounded-lg border border-gray-800 transition hover:border-blue-500")
        .child((
            div().class("flex justify-center mb-4 text-blue-400").child(icon(glyph, "size-10")),
            h3().class("mb-2 text-xl font-bold text-white").child(title),
            p().class("text-gray-400").child(text),
        ))
}

#[expect(clippy::too_many_lines)] // Builder chains for each section of the page.
pub fn component() -> impl IntoView {
    let identity = use_context::<SiteIdentity>().unwrap_or_default();
    let ui = use_context::<UiConfig>().unwrap_or_default();

    let profile = use_polled_loadable(ui.profile_refresh, select_profile, "Failed to load profile");
    let featured = use_loadable(
        || (),
        |()| select_featured_projects(),
        "Failed to load featured projects",
    );

    let name = move || profile.with(|s| profile_text(s, |p| p.name.clone(), identity.owner));
    let title = move || profile.with(|s| profile_text(s, |p| p.title.clone(), identity.role));
    let description =
        move || profile.with(|s| profile_text(s, |p| p.description.clone(), identity.intro));
    let hero_image = Memo::new(move |_| {
        profile.with(|s| s.ready().and_then(Profile::hero_image).map(str::to_owned))
    });

    let achievement = move |pick: fn(&Achievements) -> u32| -> Signal<u32> {
        Memo::new(move |_| profile.with(|s| s.ready().map_or(0, |p| pick(&p.achievements)))).into()
    };
    let tech_stack = Memo::new(move |_| profile.with(|s| s.clone().map(|p| p.tech_stack)));

    div().child((
        Title(TitleProps::builder().text(format!("{} | Portfolio", identity.owner)).build()),
        // Hero
        section()
            .class("flex items-center py-20 px-6 min-h-screen bg-black")
            .child(div().class("grid grid-cols-1 gap-12 items-center mx-auto max-w-6xl md:grid-cols-2").child((
                div().child((
                    p().class("mb-4 text-sm font-semibold tracking-widest text-blue-400").child("WELCOME TO MY PORTFOLIO"),
                    h1().class("mb-6 text-5xl font-bold leading-tight text-white md:text-6xl")
                        .child(("Hi, I'm ", span().class("text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-500").child(name))),
                    h2().class("mb-6 text-2xl text-gray-300").child(title),
                    p().class("mb-8 text-lg leading-relaxed text-gray-400").child(description),
                    div().class("flex flex-wrap gap-4").child((
                        link_button("/projects", "View My Work", "py-3 px-8 font-semibold text-white bg-blue-500 rounded-lg transition hover:bg-blue-600"),
                        link_button("/contact", "Get In Touch", "py-3 px-8 font-semibold text-white rounded-lg border border-gray-700 transition hover:border-blue-500"),
                    )),
                )),
                div().class("flex flex-col gap-6 items-center").child((
                    move || match hero_image.get() {
                        Some(src) => img()
                            .src(src)
                            .alt(identity.owner)
                            .class("object-cover w-80 h-80 rounded-full border-4 border-blue-500/40")
                            .into_any(),
                        None => div()
                            .class("flex justify-center items-center w-80 h-80 rounded-full bg-gradient-to-br from-gray-800 to-gray-900")
                            .child(p().class("text-gray-500").child("Loading image..."))
                            .into_any(),
                    },
                    p().class("text-sm text-gray-500 animate-bounce").child("Scroll to explore"),
                )),
            ))),
        // What I do
        section().class("py-20 px-6 bg-gray-900").child(div().class("mx-auto max-w-6xl").child((
            section_heading("What I Do", "Services I offer to bring your ideas to life"),
            div().class("grid grid-cols-1 gap-8 md:grid-cols-3").child(SERVICES.into_iter().map(feature_card).collect_view()),
        ))),
        // Featured projects
        section().class("py-20 px-6 bg-black").child(div().class("mx-auto max-w-6xl").child((
            section_heading(
                "Featured Projects",
                "Here are some of my recent projects. Check out my full portfolio to see more.",
            ),
            status::component(
                featured.into(),
                "No featured projects yet. Mark some projects as featured in the admin dashboard!",
                |projects| {
                    div()
                        .class("grid grid-cols-1 gap-8 md:grid-cols-3")
                        .child(projects.into_iter().map(project_card::component).collect_view())
                },
            ),
            div().class("mt-12 text-center").child(link_button(
                "/projects",
                "View All Projects",
                "inline-block py-3 px-8 font-semibold text-white bg-blue-500 rounded-lg transition hover:bg-blue-600",
            )),
        ))),
        // Achievements
        section().class("py-20 px-6 bg-gray-900").child(div().class("mx-auto max-w-6xl").child((
            section_heading("My Achievements", "Some numbers that speak for themselves"),
            div().class("grid grid-cols-1 gap-12 md:grid-cols-3").child((
                counter::component(achievement(|a| a.projects_completed), ui.counter_duration, "Projects Completed"),
                counter::component(achievement(|a| a.happy_clients), ui.counter_duration, "Happy Clients"),
                counter::component(achievement(|a| a.years_experience), ui.counter_duration, "Years Experience"),
            )),
        ))),
        // Tech stack
        section().class("py-20 px-6 bg-black").child(div().class("mx-auto max-w-4xl").child((
            section_heading(
                "Tech Stack",
                "Technologies I work with and my rough proficiency level in each",
            ),
            status::component(
                tech_stack.into(),
                "No skills added yet. Add them in Admin \u{2192} Profile & Tech Stack.",
                |skills| skills.into_iter().map(skill_bar::component).collect_view(),
            ),
        ))),
        // Why work with me
        section().class("py-20 px-6 bg-gray-900").child(div().class("mx-auto max-w-6xl").child((
            section_heading("Why Work With Me", "What you can expect when we build something together"),
            div().class("grid grid-cols-1 gap-8 md:grid-cols-3").child(STRENGTHS.into_iter().map(feature_card).collect_view()),
        ))),
        // Call to action
        section().class("py-20 px-6 bg-gradient-to-r from-blue-900/40 to-purple-900/40").child(
            div().class("mx-auto max-w-4xl text-center").child((
                h2().class("mb-6 text-4xl font-bold text-white").child("Let's Work Together"),
                p().class("mb-8 text-lg text-gray-300").child(
                    "Have a project in mind? Let's discuss how I can help bring your ideas to life.",
                ),
                link_button(
                    "/contact",
                    "Start a Conversation",
                    "inline-block py-4 px-10 text-lg font-semibold text-white bg-blue-500 rounded-lg transition hover:bg-blue-600",
                ),
            )),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(name: &str) -> Loadable<Profile> {
        Loadable::Ready(Profile {
            name: name.to_owned(),
            ..Default::default()
        })
    }

    #[test]
    fn test_profile_text_prefers_profile() {
        assert_eq!(profile_text(&loaded("Ada"), |p| p.name.clone(), "Fallback"), "Ada");
    }

    #[test]
    fn test_profile_text_falls_back() {
        assert_eq!(profile_text(&loaded("   "), |p| p.name.clone(), "Fallback"), "Fallback");
        assert_eq!(profile_text(&Loadable::Loading, |p| p.name.clone(), "Fallback"), "Fallback");
        assert_eq!(
            profile_text(&Loadable::Failed("down".to_owned()), |p| p.title.clone(), "Role"),
            "Role"
        );
    }

    #[test]
    fn test_section_content() {
        assert_eq!(SERVICES.map(|(_, title, _)| title), ["UI/UX Design", "Graphic Design", "Full Stack Developments"]);
        assert_eq!(STRENGTHS.len(), 3);
    }
}
