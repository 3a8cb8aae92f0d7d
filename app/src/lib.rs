// Pages, shared components and the content API plumbing behind them.
use crate::components::{error_template, footer, header};
use crate::config::{SiteIdentity, UiConfig};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod animation;
pub mod api;
mod blog;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod client;
mod components;
pub mod config;
mod contact;
pub mod filter;
mod home;
pub mod hooks;
pub mod loadable;
mod post;
mod project;
mod projects;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Yasith Yuran \u{2013} Full Stack Developer & Designer")
                    .build(),
            ),
        )),
        body().class("bg-black").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    provide_context(UiConfig::default());
    provide_context(SiteIdentity::default());

    view! {
        <Router>
            <div class="flex flex-col min-h-screen text-white bg-black font-poppins">
                {header::component}
                <main class="flex-grow">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=home::component/>
                        <Route path=StaticSegment("projects") view=projects::component/>
                        <Route path=(StaticSegment("projects"), ParamSegment("id")) view=project::component/>
                        <Route path=StaticSegment("blog") view=blog::component/>
                        <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=post::component/>
                        <Route path=StaticSegment("contact") view=contact::component/>
                    </FlatRoutes>
                </main>
                {footer::component}
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("portfolio").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_function_signatures() {
        use crate::api::*;

        let _: fn() -> _ = select_profile;
        let _: fn() -> _ = select_projects;
        let _: fn() -> _ = select_featured_projects;
        let _: fn(String) -> _ = select_project;
        let _: fn() -> _ = select_posts;
        let _: fn(String) -> _ = select_post;
        let _: fn(ContactRequest) -> _ = contact;

        let request = ContactRequest::default();
        assert_eq!(request.name, "");
        assert_eq!(request.website, None);
    }
}
