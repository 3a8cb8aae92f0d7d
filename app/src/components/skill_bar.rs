use leptos::{
    html::{div, span},
    prelude::*,
};

use crate::animation::TriggerMode;
use crate::hooks::use_in_view;
use crate::types::TechSkill;

/// A labelled proficiency bar that fills the first time it scrolls into view.
pub fn component(skill: TechSkill) -> impl IntoView {
    let node = NodeRef::new();
    let starts = use_in_view(node, 0.5, TriggerMode::Once);
    let shown = move || starts.get() > 0;
    let width = skill.width_percent();

    div().node_ref(node).class("mb-8").child((
        div().class("flex justify-between items-center mb-3").child((
            span().class("font-semibold text-gray-300").child(skill.skill),
            span()
                .class("font-bold text-blue-400")
                .child(move || format!("{}%", if shown() { skill.percentage } else { 0 })),
        )),
        div().class("overflow-hidden w-full h-3 bg-gray-800 rounded-full").child(
            div()
                .class("h-full bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 rounded-full transition-all ease-out duration-[1500ms]")
                .style(move || format!("width: {}%", if shown() { width } else { 0 })),
        ),
    ))
}
