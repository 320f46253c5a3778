use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::use_interval_fn;

use crate::{
    config::TYPE_SPEED_MS,
    content::{portfolio, ContentError, Portfolio, Profile},
    typewriter::Typewriter,
};

use super::{
    avatar::Avatar,
    contact::Contact,
    footer::{Footer, GoToTop},
    header::Navbar,
    projects::Projects,
    skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            Either::Right(view! { <ContentErrorBanner error=e /> })
        }
    }
}

#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    view! {
        <Title text=profile.name.clone() />
        <Navbar brand=profile.name.as_str() />
        <main class="pt-16">
            <Hero profile />
            <About profile />
            <Skills skills=portfolio.skills.as_slice() />
            <Projects portfolio />
            <Contact />
        </main>
        <GoToTop />
        <Footer profile />
    }
}

#[component]
fn ContentErrorBanner(error: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="max-w-2xl mx-auto mt-24 p-6 rounded-lg border border-red-500/40 bg-red-500/10">
            <h1 class="text-xl font-bold text-red-500 mb-2">"Site content failed to load"</h1>
            <pre class="whitespace-pre-wrap text-sm">{error.to_string()}</pre>
        </div>
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex flex-col-reverse lg:flex-row items-center justify-center gap-12 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8"
        >
            <div class="flex-1 space-y-6 text-center lg:text-left">
                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight">
                    {profile.greeting.as_str()}
                    <br />
                    <span class="bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent">
                        {profile.name.as_str()}
                    </span>
                </h1>
                <div class="text-2xl sm:text-3xl font-semibold text-blue-500 dark:text-blue-400 h-10">
                    <RoleTicker words=profile.roles.clone() />
                </div>
                <div class="text-lg text-gray-600 dark:text-gray-400">
                    <span>{profile.location.as_str()}</span>
                </div>
                <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                    <a
                        href="#contact"
                        class="inline-flex items-center justify-center gap-2 px-8 py-3 rounded-xl bg-gradient-to-r from-purple-600 to-pink-600 text-white font-medium shadow-lg hover:shadow-purple-500/40 transition-all"
                    >
                        "Get in Touch"
                        <span aria-hidden="true">"→"</span>
                    </a>
                    <a
                        href=profile.resume_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center justify-center gap-2 px-8 py-3 rounded-xl border border-purple-500 text-purple-600 dark:text-purple-400 font-medium hover:bg-purple-50 dark:hover:bg-purple-900/20 transition-all"
                    >
                        "View Resume"
                        <span aria-hidden="true">"›"</span>
                    </a>
                </div>
            </div>
            <div class="flex-1 flex justify-center">
                <Avatar src=profile.avatar.as_str() alt="Profile Image" ring=true />
            </div>
        </section>
    }
}

/// Rotating role titles under the name, driven by [`Typewriter`].
#[component]
fn RoleTicker(words: Vec<String>) -> impl IntoView {
    let state = StoredValue::new(Typewriter::new(words));
    let (text, set_text) = signal(String::new());
    let (delay, set_delay) = signal(TYPE_SPEED_MS);

    // the interval restarts whenever `delay` changes
    use_interval_fn(
        move || {
            state.update_value(|tw| {
                let next = tw.tick();
                set_text(tw.text());
                set_delay(next.as_millis() as u64);
            });
        },
        delay,
    );

    view! {
        <span>{text}</span>
        <span class="animate-pulse text-blue-500 dark:text-blue-400">"|"</span>
    }
}

#[component]
fn About(profile: &'static Profile) -> impl IntoView {
    let about = &profile.about;
    view! {
        <section id="about" class="py-20 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="flex justify-center">
                    <Avatar src=profile.avatar.as_str() alt="About Me" />
                </div>
                <div class="space-y-6">
                    <div>
                        <h2 class="text-4xl font-bold mb-2">"About Me"</h2>
                        <div class="h-1 w-20 bg-purple-600 rounded-full" />
                    </div>
                    <h3 class="text-2xl font-semibold text-purple-600 dark:text-purple-400">
                        {about.headline.as_str()}
                    </h3>
                    {about
                        .paragraphs
                        .iter()
                        .map(|p| {
                            view! {
                                <p class="text-lg text-gray-600 dark:text-gray-300 leading-relaxed">
                                    {p.as_str()}
                                </p>
                            }
                        })
                        .collect_view()}
                    <div class="space-y-3">
                        {about
                            .highlights
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="flex items-center gap-3">
                                        <span class="text-green-500">"✓"</span>
                                        <span>{h.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-4 pt-4">
                        <a
                            href=profile.resume_url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-6 py-3 rounded-xl bg-purple-600 hover:bg-purple-700 text-white font-medium transition-colors"
                        >
                            "Download CV"
                        </a>
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-xl border border-gray-300 dark:border-gray-600 font-medium hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
