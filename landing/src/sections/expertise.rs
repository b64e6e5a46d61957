use leptos::prelude::*;
use portfolio::content::{EXPERTISE, ExpertiseArea};
use portfolio::{Section, Theme};

#[component]
pub fn Expertise(theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <section class="py-20 px-6" id=Section::Expertise.anchor()>
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl font-bold mb-16 text-center">{Section::Expertise.label()}</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {EXPERTISE
                        .iter()
                        .map(|area| view! { <ExpertiseCard area=*area theme=theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExpertiseCard(area: ExpertiseArea, theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "p-8 rounded-lg {} hover:transform hover:scale-105 transition-all duration-300",
                theme.get().surface_classes(),
            )
        }>
            <div class="text-5xl mb-4">{area.icon}</div>
            <h3 class="text-2xl font-bold mb-4">{area.title}</h3>
            <p class="mb-6 text-gray-400">{area.description}</p>
            <div class="flex flex-wrap gap-2">
                {area
                    .tech_stack
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class=move || {
                                format!("px-3 py-1 rounded-full text-sm {}", theme.get().chip_classes())
                            }>{*tech}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
