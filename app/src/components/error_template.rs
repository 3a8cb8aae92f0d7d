//! This module defines the `error_template` component, the page shown for
//! routes that do not exist.
//!
//! It sets the HTTP status code of the server response to match the error.

use http::status::StatusCode;
use icondata::FiArrowLeft;
use leptos::{
    html::{div, h1, span},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

use crate::components::icons::icon;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the error page for `outside_errors` (server render) or the
/// reactive `errors` signal (client).
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors
        .map(RwSignal::new)
        .or(errors)
        .unwrap_or_else(|| RwSignal::new(Errors::default()));
    let mut errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();
    if errors.is_empty() {
        errors.push(AppError::NotFound);
    }

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(errors[0].status_code());
        }
    }

    div().class("grid place-content-center py-32 px-4 antialiased").child((
        h1().class("mb-6 text-4xl font-bold text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_, error)| {
                    let error_code = error.status_code();

                    div().class("flex flex-col gap-1 justify-center items-center").child((
                        h1().class("text-xl tracking-widest text-gray-400 uppercase").child(
                            format!("{error_code} | {error}")
                        ),
                        div().class("flex gap-2 justify-center items-center mt-6 text-center text-gray-400 duration-200 hover:text-white").child(
                            A(AProps::builder()
                                .href("/")
                                .children(ToChildren::to_children(move || {
                                    span().class("inline-flex gap-2 items-center").child((
                                        icon(FiArrowLeft, "size-4"),
                                        "Go back home",
                                    ))
                                }))
                                .build()
                            )
                        )
                    ))
                }).build(),
        ),
    ))
}
