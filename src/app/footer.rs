use leptos::{ev, prelude::*};

use crate::{
    config::{copyright_year, GO_TO_TOP_THRESHOLD},
    content::Profile,
};

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-gray-200 dark:border-gray-800">
            <div class="max-w-7xl mx-auto px-4 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {format!("© {} {}. All rights reserved.", copyright_year(), profile.name)}
                </p>
                <div class="flex gap-4">
                    {profile
                        .socials
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-600 dark:text-gray-400 hover:text-purple-600 dark:hover:text-purple-400 transition-colors"
                                >
                                    {link.label.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn GoToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_visible(window().scroll_y().unwrap_or_default() > GO_TO_TOP_THRESHOLD);
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible()>
            <button
                class="fixed bottom-8 right-8 z-40 p-3 rounded-full bg-purple-600 hover:bg-purple-700 text-white shadow-lg transition-colors"
                aria-label="Back to top"
                on:click=|_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                "↑"
            </button>
        </Show>
    }
}
