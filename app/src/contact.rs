//! This module defines the `contact` component, which renders the contact page
//! of the application.
//!
//! It offers direct channels (WhatsApp, e-mail, phone) and a form. The form is
//! checked in the browser before anything is sent; a submission that passes
//! goes through the `contact` server function. A success notice clears itself
//! after `UiConfig::success_notice`.

use core::fmt::Display;

use icondata::{FiMail, FiMessageCircle, FiPhone, FiSend};
use leptos::prelude::*;

use crate::api::{ContactRequest, contact};
use crate::components::icons::icon;
use crate::config::{SiteIdentity, UiConfig};
use crate::hooks::release;

pub const SEND_FAILED: &str = "Failed to send message. Please try again.";

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    /// Status right after the user presses submit. An incomplete form fails
    /// here and is never sent.
    pub fn on_submit(request: &ContactRequest) -> Self {
        match request.validate() {
            Ok(_) => Self::Sending,
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn on_response<E: Display>(outcome: &Result<(), E>) -> Self {
        match outcome {
            Ok(()) => Self::Sent,
            Err(_) => Self::Failed(SEND_FAILED.to_owned()),
        }
    }

    pub const fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Renders the contact page: channel cards followed by the message form.
#[expect(clippy::too_many_lines)] // This function is necessarily large due to Leptos view! macro expansion.
pub fn component() -> impl IntoView {
    let identity = use_context::<SiteIdentity>().unwrap_or_default();
    let ui = use_context::<UiConfig>().unwrap_or_default();

    let state = RwSignal::new(ContactRequest::default());
    let status = RwSignal::new(FormStatus::Idle);
    let notice_timer = StoredValue::new(None::<TimeoutHandle>);

    let clear_timer = move || {
        release(notice_timer, |timer| timer.clear());
    };

    let submit = Action::new(move |data: &ContactRequest| {
        let data = data.clone();
        async move {
            let outcome = contact(data).await;
            if let Err(err) = &outcome {
                leptos::logging::error!("Contact submission failed: {err}");
            }
            let next = FormStatus::on_response(&outcome);
            if next == FormStatus::Sent {
                state.try_set(ContactRequest::default());
                let timer = set_timeout_with_handle(
                    move || {
                        status.try_set(FormStatus::Idle);
                    },
                    ui.success_notice,
                )
                .ok();
                notice_timer.try_set_value(timer);
            }
            status.try_set(next);
        }
    });

    on_cleanup(clear_timer);

    let field_class = "py-3 px-4 w-full placeholder-gray-500 text-white bg-gray-900 rounded-lg border border-gray-800 transition focus:border-blue-500 focus:outline-none";

    view! {
        <div class="min-h-screen text-white bg-black">
            <section class="py-20 px-6 pt-40 bg-black">
                <div class="mx-auto max-w-6xl text-center">
                    <h1 class="mb-6 text-5xl font-bold text-white md:text-6xl">"Let's Connect"</h1>
                    <p class="mx-auto max-w-2xl text-lg text-gray-400">
                        "Have a project in mind or just want to say hi? Feel free to reach out!"
                    </p>
                </div>
            </section>

            <section class="py-16 px-6 bg-gray-900 border-b border-gray-800">
                <div class="grid grid-cols-1 gap-8 mx-auto max-w-6xl md:grid-cols-3">
                    <a
                        href=identity.whatsapp_link()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-8 text-center bg-black rounded-lg border border-gray-800 transition hover:border-green-500"
                    >
                        <div class="flex justify-center mb-4 text-green-400">{icon(FiMessageCircle, "size-10")}</div>
                        <h3 class="mb-2 text-xl font-bold text-white">"WhatsApp"</h3>
                        <p class="text-sm text-gray-400">"Quick chat on WhatsApp"</p>
                        <p class="mt-3 font-semibold text-green-400">"Message Me"</p>
                    </a>
                    <div class="p-8 text-center bg-black rounded-lg border border-gray-800 transition hover:border-blue-500">
                        <div class="flex justify-center mb-4 text-blue-400">{icon(FiMail, "size-10")}</div>
                        <h3 class="mb-2 text-xl font-bold text-white">"Email"</h3>
                        <p class="text-sm text-gray-400">"Send me an email"</p>
                        <a href=identity.mailto_link() class="inline-block mt-3 font-semibold text-blue-400">
                            {identity.email}
                        </a>
                    </div>
                    <div class="p-8 text-center bg-black rounded-lg border border-gray-800 transition hover:border-purple-500">
                        <div class="flex justify-center mb-4 text-purple-400">{icon(FiPhone, "size-10")}</div>
                        <h3 class="mb-2 text-xl font-bold text-white">"Phone"</h3>
                        <p class="text-sm text-gray-400">"Call me anytime"</p>
                        <a href=identity.tel_link() class="inline-block mt-3 font-semibold text-purple-400">
                            {identity.phone}
                        </a>
                    </div>
                </div>
            </section>

            <section class="py-20 px-6 bg-black">
                <div class="mx-auto max-w-2xl">
                    <h2 class="mb-12 text-3xl font-bold text-center text-white">"Send Me a Message"</h2>
                    <form class="space-y-6" on:submit=move |ev| {
                        ev.prevent_default();
                        if status.get_untracked().is_sending() {
                            return;
                        }
                        let request = state.get_untracked();
                        let next = FormStatus::on_submit(&request);
                        let send = next.is_sending();
                        clear_timer();
                        status.set(next);
                        if send {
                            submit.dispatch(request);
                        }
                    }>
                        <div>
                            <label for="name" class="block mb-2 font-semibold text-white">"Your Name"</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                placeholder="John Doe"
                                autocomplete="name"
                                prop:value=move || state.get().name
                                on:input=move |ev| {
                                    let name = event_target_value(&ev);
                                    state.update(|prev| prev.name = name);
                                }
                                class=field_class
                            />
                        </div>
                        <div>
                            <label for="email" class="block mb-2 font-semibold text-white">"Your Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                placeholder="your.email@example.com"
                                autocomplete="email"
                                prop:value=move || state.get().email
                                on:input=move |ev| {
                                    let email = event_target_value(&ev);
                                    state.update(|prev| prev.email = email);
                                }
                                class=field_class
                            />
                        </div>
                        <div>
                            <label for="message" class="block mb-2 font-semibold text-white">"Message"</label>
                            <textarea
                                id="message"
                                name="message"
                                placeholder="Tell me about your project or just say hi..."
                                autocomplete="off"
                                rows="6"
                                prop:value=move || state.get().message
                                on:input=move |ev| {
                                    let message = event_target_value(&ev);
                                    state.update(|prev| prev.message = message);
                                }
                                class=field_class
                            />
                        </div>
                        // Left empty by people, filled in by form bots.
                        <input
                            name="website"
                            type="text"
                            tabindex="-1"
                            autocomplete="off"
                            aria-hidden="true"
                            class="hidden"
                            prop:value=move || state.get().website.unwrap_or_default()
                            on:input=move |ev| {
                                let website = event_target_value(&ev);
                                state.update(|prev| prev.website = Some(website));
                            }
                        />
                        <Show when=move || status.with(|s| s.error().is_some()) fallback=|| ()>
                            <p class="py-3 px-4 text-red-400 rounded-lg border border-red-800 bg-red-900/30">
                                {move || status.with(|s| s.error().unwrap_or_default().to_owned())}
                            </p>
                        </Show>
                        <Show when=move || status.get() == FormStatus::Sent fallback=|| ()>
                            <p class="py-3 px-4 text-green-400 rounded-lg border border-green-800 bg-green-900/30">
                                "\u{2713} Message sent successfully! I'll get back to you soon."
                            </p>
                        </Show>
                        <button
                            type="submit"
                            disabled=move || status.get().is_sending()
                            class="flex gap-2 justify-center items-center py-3 px-6 w-full text-lg font-semibold text-white bg-blue-500 rounded-lg transition disabled:opacity-50 hover:bg-blue-600"
                        >
                            <Show
                                when=move || status.get().is_sending()
                                fallback=|| view! { {icon(FiSend, "size-5")} "Send Message" }
                            >
                                <span class="w-5 h-5 rounded-full border-2 animate-spin border-white/40 border-t-white"></span>
                                "Sending..."
                            </Show>
                        </button>
                    </form>
                </div>
            </section>
        </div>
    }
}
