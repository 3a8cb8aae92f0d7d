//! The shared renderer for `Loadable` state.

use leptos::prelude::*;

use crate::components::{loader, notice};
use crate::loadable::{Loadable, Phase, Presence};

/// Renders `state` as a spinner, an error message, `empty_message`, or the
/// output of `content`, depending on its phase.
pub fn component<T, V>(
    state: Signal<Loadable<T>>,
    empty_message: &'static str,
    content: impl Fn(T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Presence + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let current = state.get();
        match (current.phase(), current) {
            (Phase::Loading, _) => loader::component().into_any(),
            (Phase::Failed, current) => {
                notice::component(current.error().unwrap_or_default(), notice::Tone::Error)
                    .into_any()
            }
            (Phase::Empty, _) => notice::component(empty_message, notice::Tone::Muted).into_any(),
            (Phase::Content, Loadable::Ready(value)) => content(value).into_any(),
            (Phase::Content, _) => ().into_any(),
        }
    }
}
