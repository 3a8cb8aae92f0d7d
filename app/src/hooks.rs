//! Reactive glue between pages and the browser.
//!
//! Everything that touches timers, animation frames or window listeners runs
//! inside an `Effect`, so it only happens after hydration and never during the
//! server render. Every handle acquired here is released in `on_cleanup`, and
//! releasing is guarded so it happens once.

use core::future::Future;
use core::time::Duration;

use leptos::{ev, html::Div, logging, prelude::*, task::spawn_local};

use crate::animation::{CounterAnimation, Trigger, TriggerMode, visible_fraction};
use crate::loadable::{FetchKind, Loadable, RequestScope};

/// Loads data for a page and keeps it in a `Loadable`.
///
/// The fetch runs once when the page mounts and again whenever `key`
/// changes. Each of those activations resets the state to `Loading`.
/// Responses for an outdated key or for an unmounted page are dropped.
pub fn use_loadable<K, T, Fut>(
    key: impl Fn() -> K + 'static,
    fetch: impl Fn(K) -> Fut + 'static,
    failure_message: &'static str,
) -> ReadSignal<Loadable<T>>
where
    K: Clone + PartialEq + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    drive(key, fetch, failure_message, None)
}

/// Like `use_loadable`, and also refetches every `period`.
///
/// A failed refresh leaves the data already on screen untouched. A tick that
/// arrives while the previous request is still out is skipped.
pub fn use_polled_loadable<T, Fut>(
    period: Option<Duration>,
    fetch: impl Fn() -> Fut + 'static,
    failure_message: &'static str,
) -> ReadSignal<Loadable<T>>
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let tick = use_interval_tick(period);
    drive(|| (), move |()| fetch(), failure_message, Some(tick))
}

fn drive<K, T, Fut>(
    key: impl Fn() -> K + 'static,
    fetch: impl Fn(K) -> Fut + 'static,
    failure_message: &'static str,
    refresh: Option<ReadSignal<u64>>,
) -> ReadSignal<Loadable<T>>
where
    K: Clone + PartialEq + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let state = RwSignal::new(Loadable::Loading);
    let scope = RequestScope::new();

    Effect::new({
        let scope = scope.clone();
        move |previous: Option<K>| {
            let key = key();
            if let Some(refresh) = refresh {
                refresh.track();
            }
            let kind = if previous.as_ref() == Some(&key) {
                FetchKind::Refresh
            } else {
                FetchKind::Activation
            };
            let ticket = match kind {
                FetchKind::Activation => {
                    state.set(Loadable::Loading);
                    scope.begin()
                }
                FetchKind::Refresh => match scope.refresh() {
                    Some(ticket) => ticket,
                    None => return key,
                },
            };

            let scope = scope.clone();
            let request = fetch(key.clone());
            spawn_local(async move {
                let outcome = request.await;
                if !scope.finish(ticket) {
                    return;
                }
                if let Err(err) = &outcome {
                    logging::error!("{failure_message} ({err})");
                }
                state.try_update(|current| current.settle(outcome, failure_message, kind));
            });
            key
        }
    });

    on_cleanup(move || {
        scope.cancel();
    });

    state.read_only()
}

/// A counter that increases every `period` while the calling component is
/// mounted. `None` never ticks.
pub fn use_interval_tick(period: Option<Duration>) -> ReadSignal<u64> {
    let tick = RwSignal::new(0_u64);
    let handle = StoredValue::new(None::<IntervalHandle>);

    if let Some(period) = period {
        Effect::new(move |_| {
            match set_interval_with_handle(move || tick.update(|n| *n += 1), period) {
                Ok(interval) => {
                    handle.try_set_value(Some(interval));
                }
                Err(err) => logging::warn!("Could not start refresh timer: {err:?}"),
            }
        });
    }

    on_cleanup(move || {
        release(handle, |interval| interval.clear());
    });

    tick.read_only()
}

/// Counts how often the element behind `node` came into view.
///
/// An element counts as in view when at least `threshold` of its height is
/// inside the viewport. With `TriggerMode::Once` the count never exceeds one.
pub fn use_in_view(node: NodeRef<Div>, threshold: f64, mode: TriggerMode) -> ReadSignal<u32> {
    let entries = RwSignal::new(0_u32);
    let trigger = StoredValue::new(Trigger::new(mode));

    let check = move || {
        let Some(element) = node.get_untracked() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default();
        let visible = visible_fraction(rect.top(), rect.height(), viewport) >= threshold;
        let fired = trigger
            .try_update_value(|trigger| trigger.observe(visible))
            .unwrap_or_default();
        if fired {
            entries.update(|n| *n += 1);
        }
    };

    Effect::new(move |_| {
        check();
        let scroll = window_event_listener(ev::scroll, move |_| check());
        let resize = window_event_listener(ev::resize, move |_| check());
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    });

    entries.read_only()
}

/// Animates from zero to `target` each time `starts` increases.
///
/// The animation follows the browser's monotonic clock. Without one it jumps
/// straight to the target. A pending frame is cancelled when the animation
/// restarts and when the component unmounts.
pub fn use_count_up(target: Signal<u32>, duration: Duration, starts: ReadSignal<u32>) -> ReadSignal<u32> {
    let value = RwSignal::new(0_u32);
    let frame = StoredValue::new(None::<AnimationFrameRequestHandle>);

    Effect::new(move |_| {
        let started = starts.get();
        let target = target.get();
        cancel_frame(frame);
        if started == 0 {
            return;
        }
        let animation = CounterAnimation::new(target, duration);
        match window().performance() {
            Some(clock) => {
                value.set(0);
                schedule_frame(animation, clock.now(), value, frame);
            }
            None => value.set(target),
        }
    });

    on_cleanup(move || cancel_frame(frame));

    value.read_only()
}

fn cancel_frame(frame: StoredValue<Option<AnimationFrameRequestHandle>>) {
    release(frame, |pending| pending.cancel());
}

/// Takes the handle out of `slot` and frees it. Returns `false` when the slot
/// was already empty or disposed, so every handle is freed at most once.
pub fn release<H>(slot: StoredValue<Option<H>>, free: impl FnOnce(H)) -> bool
where
    H: Send + Sync + 'static,
{
    match slot.try_update_value(Option::take).flatten() {
        Some(handle) => {
            free(handle);
            true
        }
        None => false,
    }
}

fn schedule_frame(
    animation: CounterAnimation,
    origin: f64,
    value: RwSignal<u32>,
    frame: StoredValue<Option<AnimationFrameRequestHandle>>,
) {
    let request = request_animation_frame_with_handle(move || {
        let now = window().performance().map_or(origin, |clock| clock.now());
        let elapsed = Duration::from_secs_f64((now - origin).max(0.0) / 1000.0);
        value.try_set(animation.value_at(elapsed));
        if animation.is_complete(elapsed) {
            frame.try_set_value(None);
        } else {
            schedule_frame(animation, origin, value, frame);
        }
    });
    match request {
        Ok(handle) => {
            frame.try_set_value(Some(handle));
        }
        Err(err) => {
            logging::warn!("Animation frame unavailable: {err:?}");
            value.try_set(animation.target());
        }
    }
}
