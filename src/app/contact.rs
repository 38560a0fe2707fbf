use std::rc::Rc;

use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    ContactController, EmailJsRelay, Field, FormHandle, FormState, RelayConfig, SubmissionStatus,
    SuccessTicket, SuccessTimer, TimeoutTimer, SUCCESS_BANNER_DURATION,
};

impl FormHandle for RwSignal<FormState> {
    fn with_form<T>(&self, f: impl FnOnce(&mut FormState) -> T) -> Option<T> {
        // None once the owning component has been disposed
        self.try_update(f)
    }
}

/// Success banner timeout, also cleared by the reactive owner on unmount.
fn use_banner_timer(form: RwSignal<FormState>) -> impl SuccessTimer {
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: SuccessTicket| {
            form.try_update(|f| f.expire_success(ticket));
        },
        SUCCESS_BANNER_DURATION.as_millis() as f64,
    );
    TimeoutTimer::new(start, stop)
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-2.5 bg-white/5 border border-red-500/50 rounded-lg focus:ring-2 focus:ring-purple-500/50 outline-none transition-colors"
    } else {
        "w-full px-4 py-2.5 bg-white/5 border border-gray-700 rounded-lg focus:ring-2 focus:ring-purple-500/50 outline-none transition-colors"
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let timer = use_banner_timer(form);
    let controller = StoredValue::new_local(Rc::new(ContactController::new(
        form,
        EmailJsRelay::default(),
        RelayConfig::from_build_env(),
        timer,
    )));

    let is_submitting = move || form.with(FormState::is_submitting);
    let has_error = move |field: Field| form.with(|f| f.error_for(field).is_some());
    let set_field = move |field: Field, ev: Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.update_field(field, value));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = if let Some(c) = controller.try_get_value() {
            c
        } else {
            return;
        };
        spawn_local(async move {
            let outcome = controller.submit().await;
            log::debug!("contact submission finished: {:?}", outcome);
        });
    };

    let banner = move || match form.with(FormState::status) {
        SubmissionStatus::Success => Some((
            "mb-6 p-4 bg-green-500/10 border border-green-500/20 rounded-lg text-green-400 text-sm",
            "Thank you for your message! I'll get back to you soon.",
        )),
        SubmissionStatus::Error => Some((
            "mb-6 p-4 bg-red-500/10 border border-red-500/20 rounded-lg text-red-400 text-sm",
            "Something went wrong. Please try again later.",
        )),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    };

    view! {
        <div class="w-full max-w-2xl mx-auto">
            {move || {
                banner()
                    .map(|(class, text)| {
                        view! {
                            <div class=class role="status">
                                {text}
                            </div>
                        }
                    })
            }}
            <form class="space-y-6" novalidate=true on:submit=on_submit>
                <div>
                    <label for="name" class="block text-sm font-medium text-gray-400 mb-2">
                        "Name"
                    </label>
                    <input
                        type="text"
                        id=Field::Name.as_str()
                        name=Field::Name.as_str()
                        placeholder="Your name"
                        class=move || input_class(has_error(Field::Name))
                        prop:value=move || form.with(|f| f.fields().name.clone())
                        on:input=move |ev| set_field(Field::Name, ev)
                    />
                    <ErrorText form field=Field::Name />
                </div>
                <div>
                    <label for="email" class="block text-sm font-medium text-gray-400 mb-2">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id=Field::Email.as_str()
                        name=Field::Email.as_str()
                        placeholder="your.email@example.com"
                        class=move || input_class(has_error(Field::Email))
                        prop:value=move || form.with(|f| f.fields().email.clone())
                        on:input=move |ev| set_field(Field::Email, ev)
                    />
                    <ErrorText form field=Field::Email />
                </div>
                <div>
                    <label for="message" class="block text-sm font-medium text-gray-400 mb-2">
                        "Message"
                    </label>
                    <textarea
                        id=Field::Message.as_str()
                        name=Field::Message.as_str()
                        rows=5
                        placeholder="Your message..."
                        class=move || format!("{} resize-none", input_class(has_error(Field::Message)))
                        prop:value=move || form.with(|f| f.fields().message.clone())
                        on:input=move |ev| set_field(Field::Message, ev)
                    ></textarea>
                    <ErrorText form field=Field::Message />
                </div>
                <div class="pt-2">
                    <button
                        type="submit"
                        disabled=is_submitting
                        class=move || {
                            if is_submitting() {
                                "w-full px-6 py-3.5 bg-gradient-to-r from-purple-500 to-blue-500 font-medium rounded-lg opacity-70 cursor-not-allowed"
                            } else {
                                "w-full px-6 py-3.5 bg-gradient-to-r from-purple-500 to-blue-500 font-medium rounded-lg hover:opacity-90 transition-all"
                            }
                        }
                    >
                        {move || {
                            if is_submitting() {
                                Either::Left(
                                    view! {
                                        <span class="flex items-center justify-center">
                                            <svg
                                                class="animate-spin -ml-1 mr-2 h-4 w-4 text-current"
                                                xmlns="http://www.w3.org/2000/svg"
                                                fill="none"
                                                viewBox="0 0 24 24"
                                            >
                                                <circle
                                                    class="opacity-25"
                                                    cx="12"
                                                    cy="12"
                                                    r="10"
                                                    stroke="currentColor"
                                                    stroke-width="4"
                                                ></circle>
                                                <path
                                                    class="opacity-75"
                                                    fill="currentColor"
                                                    d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
                                                ></path>
                                            </svg>
                                            "Sending..."
                                        </span>
                                    },
                                )
                            } else {
                                Either::Right("Send Message")
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn ErrorText(form: RwSignal<FormState>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error_for(field))
            .map(|e| view! { <p class="mt-1 text-sm text-red-400">{e.to_string()}</p> })
    }
}
