use core::time::Duration;

use leptos::{
    html::{div, h3, p},
    prelude::*,
};

use crate::animation::TriggerMode;
use crate::hooks::{use_count_up, use_in_view};

/// A number that counts up from zero each time it scrolls into view.
pub fn component(target: Signal<u32>, duration: Duration, label: &'static str) -> impl IntoView {
    let node = NodeRef::new();
    let starts = use_in_view(node, 0.5, TriggerMode::Every);
    let value = use_count_up(target, duration, starts);

    div()
        .node_ref(node)
        .class("text-center transition duration-700")
        .class(("opacity-0", move || starts.get() == 0))
        .child((
            h3().class("mb-2 text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-500")
                .child(move || value.get()),
            p().class("text-lg text-gray-400").child(label),
        ))
}
