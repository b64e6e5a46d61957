use leptos::prelude::*;
use portfolio::content::{PROJECTS, PROJECTS_HEADING, Project};
use portfolio::{Section, Theme};

#[component]
pub fn Projects(theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <section class="py-20 px-6" id=Section::Projects.anchor()>
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl font-bold mb-16 text-center">{PROJECTS_HEADING}</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project theme=theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, theme: RwSignal<Theme>) -> impl IntoView {
    let class = move || {
        format!(
            "block rounded-lg overflow-hidden {} hover:transform hover:scale-105 transition-all duration-300 cursor-pointer",
            theme.get().surface_classes(),
        )
    };
    let body = view! {
        <div class="h-64 flex items-center justify-center text-8xl bg-gradient-to-br from-purple-500 to-pink-500">
            {project.icon}
        </div>
        <div class="p-6">
            <h3 class="text-2xl font-bold mb-3">{project.title}</h3>
            <p class="text-gray-400">{project.description}</p>
        </div>
    };

    // unpublished projects stay plain cards
    match project.destination() {
        Some(href) => view! { <a href=href class=class>{body}</a> }.into_any(),
        None => view! { <div class=class>{body}</div> }.into_any(),
    }
}
