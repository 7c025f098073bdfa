use leptos::{either::EitherOf3, prelude::*};

use crate::{
    content::{Certificate, Content, Project, TechCategory},
    showcase::{tech_gradient, Tab},
};

use super::reveal::Reveal;

#[component]
fn SectionHeading(
    lead: &'static str,
    highlight: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-heading font-bold mb-6">
                {lead} " " <span class="text-space-highlight">{highlight}</span>
            </h2>
            <div class="h-1 w-24 bg-space-highlight mx-auto mb-8 rounded-full"></div>
            <p class="text-gray-300 max-w-3xl mx-auto text-lg">{blurb}</p>
        </Reveal>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "flex items-center space-x-2 px-6 py-3 rounded-lg transition-all duration-300 bg-space-highlight text-space-dark"
    } else {
        "flex items-center space-x-2 px-6 py-3 rounded-lg transition-all duration-300 bg-space-medium text-gray-300 hover:bg-space-light"
    }
}

#[component]
pub fn PortfolioShowcase(content: &'static Content) -> impl IntoView {
    let (active, set_active) = signal(Tab::default());

    view! {
        <section id="portfolio" class="py-20 relative">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto">
                    <SectionHeading
                        lead="Portfolio"
                        highlight="Showcase"
                        blurb="Explore my journey through projects, certifications, and technical expertise. Each section represents a milestone in my continuous learning path."
                    />

                    <div class="flex justify-center space-x-4 mb-12" role="tablist">
                        {Tab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        role="tab"
                                        id=format!("tab-{tab}")
                                        aria-selected=move || (active.get() == tab).to_string()
                                        class=move || tab_class(active.get() == tab)
                                        on:click=move |_| set_active.set(tab)
                                    >
                                        <span aria-hidden="true">{tab.icon()}</span>
                                        <span>{tab.label()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="min-h-[600px]" role="tabpanel">
                        {move || match active.get() {
                            Tab::Projects => {
                                EitherOf3::A(
                                    view! {
                                        <Projects
                                            projects=content.projects.as_slice()
                                            github=content.site.github_profile.clone()
                                        />
                                    },
                                )
                            }
                            Tab::Certificates => {
                                EitherOf3::B(
                                    view! {
                                        <Certificates certificates=content.certificates.as_slice() />
                                    },
                                )
                            }
                            Tab::TechStack => {
                                EitherOf3::C(
                                    view! {
                                        <TechStack
                                            categories=content.tech_stack.as_slice()
                                            always_learning=content.site.always_learning.clone()
                                        />
                                    },
                                )
                            }
                        }}
                    </div>
                </div>
            </div>

            <div class="absolute top-1/3 right-10 w-40 h-40 bg-space-nebula rounded-full blur-3xl opacity-10 animate-pulse-slow"></div>
            <div class="absolute bottom-1/3 left-10 w-32 h-32 bg-space-cosmic rounded-full blur-3xl opacity-20 animate-pulse-slow"></div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let card_class = if project.featured {
        "group bg-space-medium/50 rounded-xl overflow-hidden border border-space-light hover:border-space-highlight transition-all duration-500 shadow-cosmic hover:shadow-nebula"
    } else {
        "group bg-space-medium/50 rounded-xl overflow-hidden border border-space-light hover:border-space-highlight transition-all duration-500"
    };
    view! {
        <div class=card_class>
            <div class="relative overflow-hidden h-64">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-space-dark to-transparent"></div>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <div class="absolute top-4 right-4 bg-space-cosmic px-3 py-1 rounded-full flex items-center space-x-1">
                                <span>"★"</span>
                                <span class="text-xs font-medium">"Featured"</span>
                            </div>
                        }
                    })}
                <div class="absolute bottom-4 left-4 flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="bg-space-dark/80 px-3 py-1 rounded-full text-xs font-medium text-space-highlight">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-2xl font-heading font-bold mb-3 text-space-highlight">
                    {project.title.clone()}
                </h3>
                <p class="text-gray-300 mb-6">{project.description.clone()}</p>
                <div class="flex space-x-4">
                    <a
                        href=project.github_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center space-x-2 text-gray-300 hover:text-space-highlight transition-colors duration-300"
                    >
                        <i class="devicon-github-original"></i>
                        <span>"Code"</span>
                    </a>
                    <a
                        href=project.demo_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center space-x-2 text-gray-300 hover:text-space-highlight transition-colors duration-300"
                    >
                        <span>"↗"</span>
                        <span>"Live Demo"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Projects(projects: &'static [Project], github: String) -> impl IntoView {
    view! {
        <section id="projects" class="py-20 relative">
            <SectionHeading
                lead="My"
                highlight="Projects"
                blurb="Explore my digital creations. Each project represents a unique challenge and solution, showcasing different aspects of my skills and creativity."
            />
            <Reveal class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </Reveal>
            <div class="text-center mt-12">
                <a
                    href=github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center space-x-2 px-6 py-3 border border-space-highlight text-space-highlight rounded-lg hover:bg-space-highlight hover:text-space-dark transition-all duration-300"
                >
                    <i class="devicon-github-original"></i>
                    <span>"View More Projects on GitHub"</span>
                </a>
            </div>
        </section>
    }
}

#[component]
fn Certificates(certificates: &'static [Certificate]) -> impl IntoView {
    view! {
        <section id="certificates" class="py-20 relative">
            <SectionHeading
                lead="My"
                highlight="Certificates"
                blurb="Professional certifications and achievements that validate my expertise and commitment to continuous learning."
            />
            <Reveal class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {certificates
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="group bg-space-medium/50 rounded-xl overflow-hidden border border-space-light hover:border-space-highlight transition-all duration-500">
                                <div class="relative h-48 overflow-hidden">
                                    <img
                                        src=cert.image.clone()
                                        alt=cert.title.clone()
                                        class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                                    />
                                    <div class="absolute inset-0 bg-gradient-to-t from-space-dark to-transparent"></div>
                                </div>
                                <div class="p-6">
                                    <div class="flex items-start justify-between mb-4">
                                        <span class="text-space-highlight text-2xl">"🏅"</span>
                                        <span class="text-sm text-gray-400">{cert.date.clone()}</span>
                                    </div>
                                    <h3 class="text-xl font-heading font-bold mb-2 text-space-highlight">
                                        {cert.title.clone()}
                                    </h3>
                                    <p class="text-gray-300 mb-4">"Issued by " {cert.issuer.clone()}</p>
                                    <a
                                        href=cert.link.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center space-x-2 text-space-highlight hover:text-space-accent transition-colors"
                                    >
                                        <span>"View Certificate"</span>
                                        <span>"↗"</span>
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Reveal>
        </section>
    }
}

#[component]
fn TechStack(categories: &'static [TechCategory], always_learning: String) -> impl IntoView {
    view! {
        <section id="skills" class="py-20 relative">
            <SectionHeading
                lead="Technical"
                highlight="Skills"
                blurb="My toolkit for navigating the digital universe. These are the technologies I use to build robust, efficient, and beautiful applications."
            />
            <div class="space-y-10">
                {categories
                    .iter()
                    .map(|category| {
                        view! {
                            <Reveal class="mb-12">
                                <h3 class="text-2xl font-heading font-bold mb-6 pl-4 border-l-4 border-space-highlight">
                                    {category.name.clone()}
                                </h3>
                                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4">
                                    {category
                                        .techs
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <div class=format!(
                                                    "bg-gradient-to-r {} p-1 rounded-lg group",
                                                    tech_gradient(&tech.name),
                                                )>
                                                    <div class="bg-space-medium h-full w-full rounded-md p-6 transition-transform group-hover:scale-[0.98]">
                                                        <div class="flex flex-col items-center justify-center">
                                                            <div class="w-16 h-16 mb-4 flex items-center justify-center text-4xl text-space-highlight">
                                                                <i class=tech.icon.clone()></i>
                                                            </div>
                                                            <h4 class="text-lg font-medium text-center">
                                                                {tech.name.clone()}
                                                            </h4>
                                                        </div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <Reveal class="bg-space-medium/50 p-8 rounded-xl border border-space-light mt-16">
                <h3 class="text-2xl font-heading font-bold mb-4 text-space-highlight">
                    "Always Learning"
                </h3>
                <p class="text-gray-300">{always_learning}</p>
            </Reveal>
        </section>
    }
}
