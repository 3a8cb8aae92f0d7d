//! View model shared by every page that loads remote data.
//!
//! A page holds a `Loadable<T>`: loading, loaded or failed. What the page
//! renders is decided by `Loadable::phase`, so rendering stays a pure function
//! of state. `RequestScope` tracks which response is still wanted: a response
//! that arrives after the page went away, or after a newer request started,
//! is dropped.

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// What a page should show for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Failed,
    Empty,
    Content,
}

/// Why a fetch was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// The page was mounted or its route parameter changed.
    Activation,
    /// A periodic refresh of data that may already be on screen.
    Refresh,
}

/// Whether a loaded value has anything to show.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl Presence for crate::types::Profile {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> Loadable<T> {
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Ready(value) => Loadable::Ready(f(value)),
            Self::Failed(message) => Loadable::Failed(message),
        }
    }

    /// Applies the outcome of a fetch.
    ///
    /// A failure replaces the state with `message`, except on a refresh while
    /// data is already shown: the stale data stays on screen.
    pub fn settle<E>(&mut self, outcome: Result<T, E>, message: &str, kind: FetchKind) {
        match outcome {
            Ok(value) => *self = Self::Ready(value),
            Err(_) if kind == FetchKind::Refresh && self.ready().is_some() => {}
            Err(_) => *self = Self::Failed(message.to_owned()),
        }
    }
}

impl<T: Presence> Loadable<T> {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Loading => Phase::Loading,
            Self::Failed(_) => Phase::Failed,
            Self::Ready(value) if value.is_present() => Phase::Content,
            Self::Ready(_) => Phase::Empty,
        }
    }
}

/// Identifies one request issued through a `RequestScope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Cancellable scope for the requests of one mounted page.
///
/// Only an activation supersedes earlier requests. A refresh is skipped while
/// any request is still pending, so a backend slower than the refresh period
/// still gets its answers applied and requests never pile up.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    generation: Arc<AtomicU64>,
    // Generation of the request still awaiting its response, 0 when idle.
    pending: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an activation request. Earlier tickets stop being current.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.pending.store(generation, Ordering::SeqCst);
        RequestTicket(generation)
    }

    /// Starts a refresh of the current generation, or `None` while a request
    /// is still pending.
    pub fn refresh(&self) -> Option<RequestTicket> {
        if self.is_cancelled() {
            return None;
        }
        let generation = self.generation.load(Ordering::SeqCst);
        self.pending
            .compare_exchange(0, generation, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| RequestTicket(generation))
    }

    /// Records the response for `ticket` and says whether it should be
    /// applied.
    pub fn finish(&self, ticket: RequestTicket) -> bool {
        _ = self
            .pending
            .compare_exchange(ticket.0, 0, Ordering::SeqCst, Ordering::SeqCst);
        self.is_current(ticket)
    }

    /// Whether a response for `ticket` should still be applied.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.is_cancelled() && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) != 0
    }

    /// Cancels the scope. Returns `true` only for the call that cancelled it,
    /// so releasing twice is harmless.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
