use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::{content::Site, nav::NAV_ITEMS};

use super::{BrandMark, SocialLink};

const LINK_CLASS: &str = "text-gray-400 hover:text-space-highlight transition-colors";

// the year the site was built; identical on the server and in the browser
fn copyright_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer(site: &'static Site) -> impl IntoView {
    let year = copyright_year().map(|y| format!("{y} ")).unwrap_or_default();
    view! {
        <footer class="py-10 relative z-10">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto text-center">
                    <a
                        href="#home"
                        class="inline-block text-2xl font-heading font-bold text-space-highlight mb-6"
                    >
                        <BrandMark brand=&site.brand />
                    </a>

                    <div class="flex justify-center space-x-6 mb-8 text-2xl">
                        {site
                            .socials
                            .iter()
                            .take(3)
                            .map(|social| view! { <SocialLink social class=LINK_CLASS /> })
                            .collect_view()}
                        <a
                            href=format!("mailto:{}", site.contact.email)
                            class=LINK_CLASS
                            aria-label="Email"
                        >
                            "✉"
                        </a>
                    </div>

                    <div class="flex flex-wrap justify-center space-x-4 mb-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a href=item.href class=LINK_CLASS>
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="h-px w-full max-w-md mx-auto bg-gray-700 mb-8"></div>

                    <p class="text-gray-400">
                        "© " {year} {site.brand.lead.clone()} {site.brand.trail.clone()}
                        ". All rights reserved."
                    </p>
                    <p class="text-gray-500 text-sm mt-2">"Designed and built with ❤️ and Leptos"</p>
                </div>
            </div>
        </footer>
    }
}
