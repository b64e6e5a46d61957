use leptos::prelude::*;
use portfolio::content::{CAREER_HISTORY, CareerEntry, HISTORY_HEADING};
use portfolio::{Section, Theme};

#[component]
pub fn History(theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <section class="py-20 px-6" id=Section::History.anchor()>
            <div class="max-w-5xl mx-auto">
                <h2 class="text-4xl font-bold mb-16">{HISTORY_HEADING}</h2>
                <div class="relative">
                    // timeline rail
                    <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-purple-500"></div>
                    {CAREER_HISTORY
                        .iter()
                        .map(|entry| view! { <TimelineEntry entry=*entry theme=theme /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: CareerEntry, theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <div class="relative mb-12 ml-20">
            <div class=move || format!("p-6 rounded-lg {}", theme.get().surface_classes())>
                <div class="flex justify-between items-start mb-2">
                    <div>
                        <h3 class="text-xl font-bold">{entry.title}</h3>
                        <p class="text-gray-400">{entry.location}</p>
                    </div>
                    <span class="text-sm text-purple-400">{entry.period}</span>
                </div>
                <p class="text-gray-400 mt-3">{entry.description}</p>
            </div>
        </div>
    }
}
