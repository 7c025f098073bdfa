use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{
    content::Site,
    nav::{is_scrolled, nav_class, NAV_ITEMS},
};

use super::{BrandMark, SocialLink};

const LINK_CLASS: &str = "text-gray-300 hover:text-space-highlight transition-colors duration-300";

#[component]
fn NavSocials(site: &'static Site) -> impl IntoView {
    view! {
        {site
            .socials
            .iter()
            .take(2)
            .map(|social| view! { <SocialLink social class=LINK_CLASS /> })
            .collect_view()}
        <a
            href=format!("mailto:{}", site.contact.email)
            class=LINK_CLASS
            aria-label="Email"
        >
            "✉"
        </a>
    }
}

#[component]
pub fn Navigation(site: &'static Site) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <a href="#home" class="text-2xl font-heading font-bold text-space-highlight">
                        <BrandMark brand=&site.brand />
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        <ul class="flex space-x-8">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a href=item.href class=LINK_CLASS>
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="flex space-x-4">
                            <NavSocials site />
                        </div>
                    </div>

                    <div class="md:hidden">
                        <button
                            class="text-gray-300 hover:text-white focus:outline-none text-2xl"
                            aria-label="Toggle menu"
                            on:click=move |_| set_is_open.update(|open| *open = !*open)
                        >
                            {move || if is_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || is_open.get()>
                <div class="md:hidden bg-space-medium/95 backdrop-blur-md">
                    <div class="px-4 py-4">
                        <ul class="space-y-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a
                                                href=item.href
                                                class=format!("block {LINK_CLASS}")
                                                on:click=move |_| set_is_open.set(false)
                                            >
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="flex space-x-6 mt-6">
                            <NavSocials site />
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
