mod browser;
mod header;
mod hero;
mod profile;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::InteractionConfig;
use header::SiteHeader;
use hero::Hero;
use profile::ProfileTabs;
use sections::{About, Contact, Footer, ProjectList, TechStack, TileGrid};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(InteractionConfig::default());

    view! {
        <Title text="Damian Acri" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Interaction settings from context, or the defaults when rendered outside [`App`].
fn interaction_config() -> InteractionConfig {
    use_context::<InteractionConfig>().unwrap_or_default()
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main class="frame">
            <SiteHeader />
            <Hero />
            <About />
            <TileGrid />
            <ProjectList />
            <TechStack />
            <ProfileTabs />
            <Contact />
            <Footer />
        </main>
    }
}
