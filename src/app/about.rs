use leptos::prelude::*;

use crate::content::Site;

use super::reveal::Reveal;

#[component]
fn StoryCard(title: &'static str, paragraphs: &'static [String]) -> impl IntoView {
    view! {
        <div class="bg-space-medium/50 p-8 rounded-xl border border-space-light">
            <h3 class="text-2xl font-heading font-bold mb-4 text-space-highlight">{title}</h3>
            {paragraphs
                .iter()
                .map(|p| view! { <p class="text-gray-300 mb-4 last:mb-0">{p.clone()}</p> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn About(site: &'static Site) -> impl IntoView {
    let about = &site.about;
    view! {
        <section id="about" class="py-20 relative">
            <div class="container mx-auto px-4">
                <div class="max-w-5xl mx-auto">
                    <Reveal class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-heading font-bold mb-6">
                            "About " <span class="text-space-highlight">"Me"</span>
                        </h2>
                        <div class="h-1 w-24 bg-space-highlight mx-auto mb-8 rounded-full"></div>
                        <p class="text-gray-300 max-w-3xl mx-auto text-lg">{about.intro.clone()}</p>
                    </Reveal>

                    <Reveal class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-16">
                        <StoryCard title="My Journey" paragraphs=about.journey.as_slice() />
                        <StoryCard title="My Approach" paragraphs=about.approach.as_slice() />
                    </Reveal>

                    <Reveal class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        {about
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="bg-space-medium/30 p-6 rounded-xl border border-space-light hover:border-space-highlight transition-all duration-300 hover:shadow-cosmic">
                                        <div class="w-12 h-12 bg-space-light rounded-lg flex items-center justify-center mb-4 text-2xl">
                                            {feature.icon.clone()}
                                        </div>
                                        <h3 class="text-xl font-heading font-bold mb-2">
                                            {feature.title.clone()}
                                        </h3>
                                        <p class="text-gray-300">{feature.description.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>
            </div>

            <div class="absolute top-1/3 left-10 w-40 h-40 bg-space-cosmic rounded-full blur-3xl opacity-10 animate-pulse-slow"></div>
            <div class="absolute bottom-1/3 right-10 w-32 h-32 bg-space-nebula rounded-full blur-3xl opacity-20 animate-pulse-slow"></div>
        </section>
    }
}
