use leptos::prelude::*;
use portfolio::config::SocialConfig;

use crate::icons::SocialLinks;

#[component]
pub fn Footer(owner_name: String, year: u16, social: SocialConfig) -> impl IntoView {
    view! {
        <footer class="py-12 text-center border-t border-gray-700">
            <div class="mb-4">
                <SocialLinks
                    github=social.github_url().map(String::from)
                    linkedin=social.linkedin_url().map(String::from)
                    gap="gap-6"
                />
            </div>
            <p class="text-gray-400">
                {format!("© {} All rights reserved to {}", year, owner_name)}
            </p>
        </footer>
    }
}
