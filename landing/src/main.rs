// Portfolio landing page, Leptos 0.8 CSR
// Build with `trunk serve` from this directory.

mod dom;
mod icons;
mod logging;
mod sections;

use leptos::prelude::*;
use portfolio::{ContactForm, Section, SiteConfig, Theme};
use sections::*;

/// Baked in at build time; visitors never load a config file.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = SiteConfig::load_embedded(SITE_TOML);
    tracing::info!("mounting portfolio of {}", config.owner.name);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let active = RwSignal::new(Section::default());
    let form = RwSignal::new(ContactForm::new(config.recipient()));

    let SiteConfig {
        owner,
        social,
        footer,
        ..
    } = config;
    let owner_name = owner.name.clone();

    view! {
        <div class=move || {
            format!("min-h-screen transition-colors duration-300 {}", theme.get().page_classes())
        }>
            <Nav theme=theme active=active />
            <main>
                <Hero owner=owner social=social.clone() />
                <Expertise theme=theme />
                <History theme=theme />
                <Projects theme=theme />
                <Contact theme=theme form=form />
            </main>
            <Footer owner_name=owner_name year=footer.year social=social />
        </div>
    }
}
