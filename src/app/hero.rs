use std::time::Duration;

use leptos::prelude::*;

use crate::{
    config::CyclerTiming,
    content::Site,
    cycler::{
        driver::{CyclerDriver, Timer, TimerError},
        Frame, WordCycler,
    },
};

/// `setTimeout` on the browser's window.
struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<TimeoutHandle, TimerError> {
        set_timeout_with_handle(callback, delay)
            .map_err(|e| TimerError::Schedule(format!("{e:?}")))
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[component]
fn Typewriter(words: &'static [String], timing: CyclerTiming) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let driver = StoredValue::new_local(None::<CyclerDriver<BrowserTimer>>);

    // effects only run in the browser, so the server renders an empty line
    Effect::new(move |_| {
        match WordCycler::with_random_speed(words.iter().cloned(), timing.clone()) {
            Ok(cycler) => {
                let started = CyclerDriver::start(BrowserTimer, cycler, move |frame: Frame<'_>| {
                    set_text.set(frame.text.to_string());
                });
                driver.set_value(Some(started));
            }
            Err(e) => log::error!("typewriter disabled: {e}"),
        }
    });

    on_cleanup(move || {
        driver.try_update_value(|d| {
            if let Some(d) = d.take() {
                d.dispose();
            }
        });
    });

    view! {
        <span class="text-space-highlight inline-block min-w-48">
            {text}
            <span class="animate-pulse">"|"</span>
        </span>
    }
}

#[component]
pub fn Hero(site: &'static Site) -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex flex-col justify-center items-center relative pt-16"
        >
            <div class="container mx-auto px-4 text-center z-10 animate-fade-up">
                <div class="mb-6">
                    <div class="inline-block relative">
                        <div class="absolute -inset-1 bg-gradient-to-r from-space-nebula to-space-accent rounded-lg blur opacity-50"></div>
                        <span class="relative bg-space-medium px-4 py-2 rounded-lg text-sm font-medium uppercase tracking-wider">
                            {site.badge.clone()}
                        </span>
                    </div>
                </div>

                <h1 class="text-4xl md:text-6xl lg:text-7xl font-heading font-bold mb-6 text-white">
                    "Hey, I'm " <span class="text-space-highlight">{site.owner.clone()}</span>
                </h1>

                <div class="h-12 mb-8">
                    <h2 class="text-2xl md:text-3xl font-heading">
                        "I'm a " <Typewriter words=site.hero_words.as_slice() timing=site.typing.clone() />
                    </h2>
                </div>

                <p class="text-gray-300 max-w-2xl mx-auto mb-10 text-lg">{site.tagline.clone()}</p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-space-accent text-white font-medium rounded-lg transition-all hover:bg-space-highlight hover:shadow-cosmic"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 bg-transparent border border-space-highlight text-space-highlight font-medium rounded-lg transition-all hover:bg-space-highlight/10"
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>

            <a
                href="#about"
                aria-label="Scroll to about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-3xl text-space-highlight animate-bounce"
            >
                "⌄"
            </a>

            <div class="absolute top-1/4 right-10 w-32 h-32 bg-space-nebula rounded-full blur-3xl opacity-20 animate-pulse-slow"></div>
            <div class="absolute bottom-1/4 left-10 w-40 h-40 bg-space-accent rounded-full blur-3xl opacity-10 animate-pulse-slow"></div>
        </section>
    }
}
