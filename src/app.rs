mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod reveal;
mod showcase;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{content, Brand, Social};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::Navigation;
use showcase::PortfolioShowcase;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Space+Grotesk:wght@500;700&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/cosmic-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("CosmicDev - {title}") />
        <Router>
            <div class="min-h-screen bg-gradient-to-b from-space-dark to-space-medium text-white overflow-hidden relative">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let content = match content() {
        Ok(c) => c,
        Err(e) => {
            log::error!("couldn't load page content: {e}");
            return Either::Right(view! { <ContentUnavailable message=e.to_string() /> });
        }
    };
    let site = &content.site;

    Either::Left(view! {
        <Title text="Portfolio" />
        <Navigation site />
        <main>
            <Hero site />
            <About site />
            <PortfolioShowcase content />
            <Contact site />
        </main>
        <Footer site />
    })
}

#[component]
fn ContentUnavailable(message: String) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="flex flex-col items-center justify-center min-h-screen gap-4 px-4 text-center">
            <h1 class="text-3xl font-heading font-bold text-space-highlight">
                "Lost in space"
            </h1>
            <p class="text-gray-300">"This page couldn't be assembled."</p>
            <pre class="whitespace-pre-wrap text-sm text-gray-500">{message}</pre>
        </div>
    }
}

#[component]
fn BrandMark(brand: &'static Brand) -> impl IntoView {
    view! {
        {brand.lead.clone()}
        <span class="text-white">{brand.trail.clone()}</span>
    }
}

#[component]
fn SocialLink(social: &'static Social, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <a
            href=social.url.clone()
            target="_blank"
            rel="noopener noreferrer"
            class=class
            aria-label=social.label.clone()
        >
            {match &social.icon {
                Some(icon) => Either::Left(view! { <i class=icon.clone()></i> }),
                None => Either::Right(social.label.chars().take(1).collect::<String>()),
            }}
        </a>
    }
}
