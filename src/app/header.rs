use leptos::{ev, prelude::*};
use serde::{Deserialize, Serialize};

use crate::config::{NAV_SCROLL_THRESHOLD, SECTIONS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class for the root wrapper; Tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

#[component]
pub fn Navbar(brand: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (is_scrolled, set_is_scrolled) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        set_is_scrolled(y > NAV_SCROLL_THRESHOLD);
    });
    on_cleanup(move || handle.remove());

    let links = move |class: &'static str| {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                view! {
                    <a href=format!("#{id}") class=class on:click=move |_| set_is_open(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed w-full top-0 z-40 transition-all duration-300 {}",
                if is_scrolled() {
                    "bg-white/80 dark:bg-gray-900/80 backdrop-blur-lg shadow-lg"
                } else {
                    "bg-white dark:bg-gray-900"
                },
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="#home"
                        class="text-2xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent"
                    >
                        {brand}
                    </a>
                    <div class="hidden md:flex items-center gap-8">
                        {links("text-gray-700 dark:text-gray-300 hover:text-purple-600 dark:hover:text-purple-400 transition-colors")}
                        <ThemeToggle />
                    </div>
                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="p-2 rounded-md hover:bg-gray-100 dark:hover:bg-gray-800"
                            aria-label="Toggle menu"
                            on:click=move |_| set_is_open.update(|open| *open = !*open)
                        >
                            {move || if is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || is_open()>
                <div class="md:hidden flex flex-col gap-2 px-4 pb-4 bg-white dark:bg-gray-900 shadow-lg">
                    {links("block px-3 py-2 rounded-md hover:bg-gray-100 dark:hover:bg-gray-800")}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();
    let set_theme = expect_context::<WriteSignal<Theme>>();
    view! {
        <button
            class="p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            aria-label="Toggle theme"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().icon()}
        </button>
    }
}
