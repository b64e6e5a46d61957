use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio::theme::ToggleIcon;
use portfolio::{NAV_ITEMS, Section, Theme, navigate};

use crate::dom::DocumentScroller;
use crate::icons::{ICON_MOON, ICON_SUN, Icon};

#[component]
pub fn Nav(theme: RwSignal<Theme>, active: RwSignal<Section>) -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full z-50 backdrop-blur-md bg-opacity-80 border-b border-gray-700">
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <button
                    class="p-2 rounded-full hover:bg-gray-700 transition-colors"
                    title=move || theme.get().toggle_label()
                    on:click=move |_| theme.update(Theme::toggle)
                >
                    {move || match theme.get().toggle_icon() {
                        ToggleIcon::Sun => view! { <Icon path=ICON_SUN /> }.into_any(),
                        ToggleIcon::Moon => view! { <Icon path=ICON_MOON /> }.into_any(),
                    }}
                </button>
                <div class="flex gap-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|section| view! { <NavLink section=section active=active /> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(section: Section, active: RwSignal<Section>) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        let outcome = navigate(&DocumentScroller, section);
        // recorded even when nothing scrolled
        active.set(outcome.active);
    };

    view! {
        <a
            href=section.href()
            class=move || {
                if active.get() == section {
                    "text-purple-400 transition-colors cursor-pointer"
                } else {
                    "hover:text-purple-400 transition-colors cursor-pointer"
                }
            }
            on:click=on_click
        >
            {section.label()}
        </a>
    }
}
