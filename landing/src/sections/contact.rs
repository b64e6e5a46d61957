use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use portfolio::content::CONTACT_BLURB;
use portfolio::{ContactForm, Field, MailDispatcher, Section, StatusKind, Theme};

use crate::dom::LocationMailer;

const INPUT_CLASSES: &str = "px-4 py-3 rounded focus:outline-none focus:ring-2 focus:ring-purple-500";

#[component]
pub fn Contact(theme: RwSignal<Theme>, form: RwSignal<ContactForm>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(ContactForm::is_submitting) {
            return;
        }

        // validation failures already set the banner
        let Some(Ok(link)) = form.try_update(ContactForm::begin) else {
            return;
        };
        let outcome = LocationMailer.open(&link.to_uri());
        // `complete` logs the dispatch error and sets the banner
        form.update(|f| {
            f.complete(outcome).ok();
        });
    };

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <section class="py-20 px-6" id=Section::Contact.anchor()>
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold mb-6">"Contact Me"</h2>
                <p class="text-gray-400 mb-8">{CONTACT_BLURB}</p>

                <form on:submit=on_submit novalidate>
                    <div class="grid md:grid-cols-2 gap-4 mb-4">
                        <FieldInput field=Field::Name theme=theme form=form />
                        <FieldInput field=Field::Contact theme=theme form=form />
                    </div>
                    <FieldInput field=Field::Message theme=theme form=form />

                    <StatusBanner form=form />

                    <div class="flex justify-end">
                        <button
                            type="submit"
                            disabled=submitting
                            class=move || {
                                if submitting() {
                                    "px-8 py-3 bg-white text-gray-900 rounded font-semibold transition-colors opacity-50 cursor-not-allowed"
                                } else {
                                    "px-8 py-3 bg-white text-gray-900 rounded font-semibold transition-colors hover:bg-gray-200"
                                }
                            }
                        >
                            {move || if submitting() { "SENDING..." } else { "SEND ➤" }}
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}

/// One bound input; the message field renders as a textarea.
#[component]
fn FieldInput(field: Field, theme: RwSignal<Theme>, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.data().get(field).to_string());
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set_field(field, text));
    };

    if field == Field::Message {
        view! {
            <textarea
                name=field.input_name()
                placeholder=field.placeholder()
                rows="6"
                required
                class=move || format!("w-full mb-4 {} {}", INPUT_CLASSES, theme.get().surface_classes())
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                name=field.input_name()
                placeholder=field.placeholder()
                required
                class=move || format!("{} {}", INPUT_CLASSES, theme.get().surface_classes())
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    }
}

#[component]
fn StatusBanner(form: RwSignal<ContactForm>) -> impl IntoView {
    move || {
        form.with(|f| {
            let status = f.status();
            status.is_visible().then(|| {
                let tone = match status.kind {
                    StatusKind::Success => {
                        "bg-green-500 bg-opacity-20 text-green-400 border border-green-500"
                    }
                    StatusKind::Error | StatusKind::None => {
                        "bg-red-500 bg-opacity-20 text-red-400 border border-red-500"
                    }
                };
                let message = status.message.clone();
                view! { <div class=format!("mb-4 p-4 rounded {}", tone)>{message}</div> }
            })
        })
    }
}
