use std::time::Duration;

use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::{
    contact::{ContactForm, Field, SubmitPhase, SUBMIT_DELAY, SUCCESS_DISPLAY},
    content::Site,
};

use super::{reveal::Reveal, SocialLink};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-space-dark border border-space-light rounded-lg focus:outline-none focus:ring-2 focus:ring-space-highlight focus:border-transparent transition-all";

#[component]
fn InfoRow(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-4">
            <div class="w-12 h-12 bg-space-light rounded-lg flex items-center justify-center text-space-highlight text-xl">
                {icon}
            </div>
            <div>
                <h4 class="text-lg font-medium mb-1">{title}</h4>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn GetInTouch(site: &'static Site) -> impl IntoView {
    let info = &site.contact;
    view! {
        <div class="bg-space-medium/50 p-8 rounded-xl border border-space-light h-full">
            <h3 class="text-2xl font-heading font-bold mb-6 text-space-highlight">"Get In Touch"</h3>
            <div class="space-y-6">
                <InfoRow icon="📍" title="Location">
                    <p class="text-gray-300">{info.location.clone()}</p>
                </InfoRow>
                <InfoRow icon="✉" title="Email">
                    <a
                        href=format!("mailto:{}", info.email)
                        class="text-gray-300 hover:text-space-highlight transition-colors"
                    >
                        {info.email.clone()}
                    </a>
                </InfoRow>
                <InfoRow icon="☎" title="Phone">
                    <a
                        href=info.phone_href.clone()
                        class="text-gray-300 hover:text-space-highlight transition-colors"
                    >
                        {info.phone.clone()}
                    </a>
                </InfoRow>
            </div>
            <div class="mt-10">
                <h4 class="text-lg font-medium mb-4">"Follow Me"</h4>
                <div class="flex space-x-4">
                    {site
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <SocialLink
                                    social
                                    class="w-10 h-10 rounded-full border border-gray-600 flex items-center justify-center text-gray-300 hover:text-space-highlight hover:border-space-highlight transition-colors"
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Contact(site: &'static Site) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let phase = RwSignal::new(SubmitPhase::default());
    let error = RwSignal::new(None::<String>);
    let timers = StoredValue::new(Vec::<TimeoutHandle>::new());

    on_cleanup(move || {
        timers.try_update_value(|pending| pending.drain(..).for_each(|h| h.clear()));
    });

    let after = move |delay: Duration, f: Box<dyn FnOnce()>| {
        match set_timeout_with_handle(f, delay) {
            Ok(handle) => timers.update_value(|pending| pending.push(handle)),
            Err(e) => log::error!("couldn't schedule contact form timer: {e:?}"),
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut next = phase.get_untracked();
        if let Err(e) = form.with_untracked(|f| next.begin(f)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        phase.set(next);
        log::info!("contact form submitted");

        // there is no backend; pretend the message took a moment to send
        after(
            SUBMIT_DELAY,
            Box::new(move || {
                phase.update(|p| {
                    p.finish();
                });
                form.set(ContactForm::default());
                after(
                    SUCCESS_DISPLAY,
                    Box::new(move || {
                        phase.update(|p| {
                            p.reset();
                        });
                    }),
                );
            }),
        );
    };

    let field_input = move |field: Field| {
        let value = move || form.with(|f| f.get(field).to_string());
        let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));
        view! {
            <label for=field.id() class="block text-sm font-medium text-gray-300 mb-2">
                {field.label()}
            </label>
            {if field == Field::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=field.id()
                            name=field.id()
                            required=true
                            rows="5"
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=if field == Field::Email { "email" } else { "text" }
                            id=field.id()
                            name=field.id()
                            required=true
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
        }
    };

    let message_form = move || {
        view! {
            <form on:submit=on_submit novalidate=true>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-6">
                    <div>{field_input(Field::Name)}</div>
                    <div>{field_input(Field::Email)}</div>
                </div>
                <div class="mb-6">{field_input(Field::Subject)}</div>
                <div class="mb-6">{field_input(Field::Message)}</div>
                {move || {
                    error
                        .get()
                        .map(|e| view! { <p class="mb-4 text-sm text-red-400" role="alert">{e}</p> })
                }}
                <button
                    type="submit"
                    disabled=move || phase.get().is_submitting()
                    class=move || {
                        if phase.get().is_submitting() {
                            "w-full flex items-center justify-center space-x-2 px-6 py-3 rounded-lg transition-all duration-300 bg-gray-600 cursor-not-allowed"
                        } else {
                            "w-full flex items-center justify-center space-x-2 px-6 py-3 rounded-lg transition-all duration-300 bg-space-accent text-white hover:bg-space-highlight hover:shadow-cosmic"
                        }
                    }
                >
                    {move || {
                        if phase.get().is_submitting() {
                            Either::Left(
                                view! {
                                    <span class="inline-block h-5 w-5 mr-3 rounded-full border-2 border-white border-t-transparent animate-spin"></span>
                                    <span>"Sending..."</span>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <span>"➤"</span>
                                    <span>"Send Message"</span>
                                },
                            )
                        }
                    }}
                </button>
            </form>
        }
    };

    view! {
        <section id="contact" class="py-20 relative">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto">
                    <Reveal class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-heading font-bold mb-6">
                            "Contact " <span class="text-space-highlight">"Me"</span>
                        </h2>
                        <div class="h-1 w-24 bg-space-highlight mx-auto mb-8 rounded-full"></div>
                        <p class="text-gray-300 max-w-3xl mx-auto text-lg">
                            "Have a project in mind or just want to say hello? I'd love to hear from you. Feel free to reach out using the form below or through my contact information."
                        </p>
                    </Reveal>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                        <Reveal>
                            <GetInTouch site />
                        </Reveal>
                        <Reveal>
                            <div class="bg-space-medium/50 p-8 rounded-xl border border-space-light">
                                <h3 class="text-2xl font-heading font-bold mb-6 text-space-highlight">
                                    "Send Message"
                                </h3>
                                {move || {
                                    if phase.get() == SubmitPhase::Sent {
                                        Either::Left(
                                            view! {
                                                <div class="bg-space-light/50 p-6 rounded-lg border border-space-highlight text-center">
                                                    <div class="text-5xl text-space-highlight mb-4">"✓"</div>
                                                    <h4 class="text-xl font-bold mb-2">"Message Sent!"</h4>
                                                    <p class="text-gray-300">
                                                        "Thank you for reaching out. I'll get back to you shortly."
                                                    </p>
                                                </div>
                                            },
                                        )
                                    } else {
                                        Either::Right(message_form())
                                    }
                                }}
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 w-full h-48 bg-gradient-to-t from-space-dark to-transparent pointer-events-none"></div>
            <div class="absolute top-1/4 left-10 w-40 h-40 bg-space-cosmic rounded-full blur-3xl opacity-10 animate-pulse-slow"></div>
            <div class="absolute bottom-1/4 right-10 w-32 h-32 bg-space-accent rounded-full blur-3xl opacity-20 animate-pulse-slow"></div>
        </section>
    }
}
