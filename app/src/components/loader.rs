//! This module defines the `loader` component, which displays a loading spinner
//! with an accompanying text message.
//!
//! It is the `Loading` rendering of every page that fetches remote content.

use leptos::{
    html::{div, p},
    prelude::*,
};

/// Renders a loading spinner with a "Loading..." caption.
pub fn component() -> impl IntoView {
    labelled("Loading...")
}

/// Renders the spinner with a custom caption.
pub fn labelled(caption: &'static str) -> impl IntoView {
    div()
        .class("flex flex-col gap-3 justify-center items-center py-20")
        .child((
            div().class("w-10 h-10 rounded-full border-4 border-gray-700 animate-spin border-t-white"),
            p().class("text-sm italic text-gray-400").child(caption),
        ))
}
