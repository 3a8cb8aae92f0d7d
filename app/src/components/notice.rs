use leptos::{
    html::{div, p},
    prelude::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Nothing to show, not a problem.
    Muted,
    Error,
}

/// A centred one-line message used for empty lists, missing items and failures.
pub fn component(message: impl Into<String>, tone: Tone) -> impl IntoView {
    let class = match tone {
        Tone::Muted => "text-lg text-gray-400",
        Tone::Error => "text-lg text-red-400",
    };
    div()
        .class("py-20 text-center")
        .child(p().class(class).child(message.into()))
}
