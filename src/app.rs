mod booking;
mod contact;
mod experience;
mod homepage;
mod icons;
mod modal;
mod navigation;
mod projects;
mod resume;
mod skills;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, ContentError, SiteContent};

use contact::ContactPage;
use experience::ExperiencePage;
use homepage::HomePage;
use navigation::Navigation;
use projects::ProjectsPage;
use skills::SkillsPage;
use ui::{Section, SectionTitle};

/// Shared read-only content for every page.
pub(crate) fn use_content() -> &'static SiteContent {
    expect_context::<&'static SiteContent>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    match site_content() {
        Ok(content) => {
            provide_context(content);
            let name = content.profile.name.as_str();
            view! {
                <Title formatter=move |title| format!("{title} | {name}") />
                <Router>
                    <div class="min-h-screen bg-onyx-pure">
                        <Navigation />
                        <main class="pt-16">
                            <Routes fallback=|| view! { <NotFound /> }>
                                <Route path=path!("/") view=HomePage />
                                <Route path=path!("/experience") view=ExperiencePage />
                                <Route path=path!("/projects") view=ProjectsPage />
                                <Route path=path!("/skills") view=SkillsPage />
                                <Route path=path!("/contact") view=ContactPage />
                            </Routes>
                        </main>
                    </div>
                </Router>
            }
            .into_any()
        }
        Err(err) => view! { <ContentUnavailable err=err.clone() /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <Section class="pt-24 pb-16 text-center">
            <SectionTitle>"Page not found"</SectionTitle>
            <p class="text-metallic-silver/80 mb-8">
                "There is nothing at this address."
            </p>
            <A
                href="/"
                attr:class="text-platinum hover:text-champagne underline-offset-4 hover:underline"
            >
                "Back to home"
            </A>
        </Section>
    }
}

#[component]
fn ContentUnavailable(err: ContentError) -> impl IntoView {
    log::error!("site content failed to load: {err}");
    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-lg text-center">
                <h1 class="text-2xl font-bold text-champagne mb-4">"Content unavailable"</h1>
                <p class="text-metallic-silver/80">{err.to_string()}</p>
            </div>
        </div>
    }
}
