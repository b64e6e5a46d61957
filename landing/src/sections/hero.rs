use leptos::prelude::*;
use portfolio::Section;
use portfolio::config::{OwnerConfig, SocialConfig};

use crate::icons::SocialLinks;

/// Two gradient waves drifting in opposite directions behind the hero.
const WAVES_SVG: &str = r##"<svg class="absolute w-full h-full" viewBox="0 0 1440 800" preserveAspectRatio="none">
  <path d="M0,400 Q360,200 720,400 T1440,400 L1440,800 L0,800 Z" fill="url(#gradient1)" opacity="0.3">
    <animateTransform attributeName="transform" type="translate" values="0,0; 50,0; 0,0" dur="10s" repeatCount="indefinite"/>
  </path>
  <path d="M0,500 Q360,300 720,500 T1440,500 L1440,800 L0,800 Z" fill="url(#gradient2)" opacity="0.3">
    <animateTransform attributeName="transform" type="translate" values="0,0; -50,0; 0,0" dur="15s" repeatCount="indefinite"/>
  </path>
  <defs>
    <linearGradient id="gradient1" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#a855f7"/>
      <stop offset="100%" stop-color="#ec4899"/>
    </linearGradient>
    <linearGradient id="gradient2" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="#ec4899"/>
      <stop offset="100%" stop-color="#8b5cf6"/>
    </linearGradient>
  </defs>
</svg>"##;

#[component]
pub fn Hero(owner: OwnerConfig, social: SocialConfig) -> impl IntoView {
    view! {
        <section
            id=Section::Home.anchor()
            class="min-h-screen flex items-center justify-center relative overflow-hidden px-6"
        >
            <div class="absolute inset-0 overflow-hidden" inner_html=WAVES_SVG></div>

            <div class="relative z-10 text-center max-w-4xl">
                <div class="mb-6">
                    <SocialLinks
                        github=social.github_url().map(String::from)
                        linkedin=social.linkedin_url().map(String::from)
                        size="28"
                    />
                </div>
                <div class="w-32 h-32 rounded-full bg-gray-700 mx-auto mb-6 overflow-hidden">
                    <div class="w-full h-full flex items-center justify-center text-6xl">
                        {owner.avatar}
                    </div>
                </div>
                <h1 class="text-6xl md:text-7xl font-bold mb-4">{owner.name}</h1>
                <p class="text-xl text-purple-400 mb-8">{owner.role}</p>
            </div>
        </section>
    }
}
