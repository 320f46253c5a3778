use leptos::{ev, prelude::*};
use leptos_use::use_interval_fn;

use crate::{
    config::ROTATION_INTERVAL_MS,
    content::{Portfolio, Project},
    gallery::{Direction, Gallery},
};

#[component]
pub fn Projects(portfolio: &'static Portfolio) -> impl IntoView {
    let gallery = RwSignal::new(portfolio.gallery());
    provide_context(gallery);

    // the lightbox owns the keyboard while it is open
    let handle = window_event_listener(ev::keydown, move |ev| {
        if !gallery.with_untracked(Gallery::is_modal_open) {
            return;
        }
        let key = ev.key();
        if gallery.try_update(|g| g.handle_key(&key)).unwrap_or(false) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <section id="projects" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl sm:text-5xl font-bold mb-4">"Projects"</h2>
                    <div class="h-1 w-20 mx-auto bg-purple-600 rounded-full mb-4" />
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Explore my latest works and creative solutions"
                    </p>
                </div>
                <div class="space-y-12 sm:space-y-24">
                    {portfolio
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
            <Lightbox />
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let gallery = expect_context::<RwSignal<Gallery>>();
    let id = project.id.as_str();
    let current = Memo::new(move |_| gallery.with(|g| g.current_index(id)));

    let (hovered, set_hovered) = signal(false);

    // dropped with the card, which stops the timer
    use_interval_fn(
        move || {
            let paused = hovered.get_untracked();
            gallery.maybe_update(|g| g.rotate(id, paused).is_some());
        },
        ROTATION_INTERVAL_MS,
    );

    let step = move |direction: Direction| {
        gallery.update(|g| {
            g.advance(id, direction);
        })
    };

    let thumbnails = move || {
        let selected = current.get();
        gallery
            .with(|g| g.thumbnail_window(id))
            .map(|i| {
                let class = if i == selected {
                    "relative w-12 h-12 sm:w-16 sm:h-16 flex-shrink-0 rounded-md sm:rounded-lg overflow-hidden border-2 border-purple-500 scale-110 transition-all"
                } else {
                    "relative w-12 h-12 sm:w-16 sm:h-16 flex-shrink-0 rounded-md sm:rounded-lg overflow-hidden border-2 border-transparent hover:border-purple-300 transition-all"
                };
                view! {
                    <button
                        class=class
                        on:click=move |_| {
                            gallery.update(|g| {
                                g.select(id, i);
                            })
                        }
                    >
                        <img
                            src=project.images[i].as_str()
                            alt=format!("{} thumbnail {}", project.title, i + 1)
                            loading="lazy"
                            class="w-full h-full object-cover"
                        />
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
        >
            <div class="absolute inset-0 bg-gradient-to-r from-purple-400/10 to-pink-400/10 rounded-xl sm:rounded-3xl blur-3xl -rotate-3" />
            <div class="relative bg-white/80 dark:bg-gray-800/80 backdrop-blur-xl rounded-xl sm:rounded-3xl shadow-2xl overflow-hidden border border-gray-200 dark:border-gray-700">
                <div class="grid grid-cols-1 lg:grid-cols-5 gap-6 sm:gap-12 p-4 sm:p-8">
                    <div class="space-y-4 lg:col-span-3">
                        <div class="relative aspect-video rounded-lg sm:rounded-2xl overflow-hidden">
                            <button
                                class="relative w-full h-full cursor-pointer hover:scale-105 transition-transform duration-300"
                                aria-label=format!("Open {} gallery", project.title)
                                on:click=move |_| {
                                    gallery.update(|g| {
                                        g.open_modal(id);
                                    })
                                }
                            >
                                <img
                                    src=move || {
                                        gallery.with(|g| g.current_image(id).map(str::to_string))
                                    }
                                    alt=project.title.as_str()
                                    class="w-full h-full object-contain"
                                />
                            </button>
                        </div>
                        <div class="relative flex items-center justify-center w-full">
                            <button
                                class="absolute left-1 sm:left-2 z-10 p-1 sm:p-2 rounded-full bg-black/60 text-white hover:bg-black/80 transition-colors"
                                aria-label="Previous image"
                                on:click=move |_| step(Direction::Previous)
                            >
                                "‹"
                            </button>
                            <div class="flex gap-2 sm:gap-3 justify-center items-center px-8 sm:px-12 overflow-hidden">
                                {thumbnails}
                            </div>
                            <button
                                class="absolute right-1 sm:right-2 z-10 p-1 sm:p-2 rounded-full bg-black/60 text-white hover:bg-black/80 transition-colors"
                                aria-label="Next image"
                                on:click=move |_| step(Direction::Next)
                            >
                                "›"
                            </button>
                        </div>
                    </div>
                    <ProjectDetails project />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetails(project: &'static Project) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center space-y-4 sm:space-y-8 lg:col-span-2">
            <h3 class="text-2xl sm:text-4xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent">
                {project.title.as_str()}
            </h3>
            <p class="text-base sm:text-lg text-gray-600 dark:text-gray-300 leading-relaxed">
                {project.description.as_str()}
            </p>
            <div class="flex flex-wrap gap-2 sm:gap-3">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 sm:px-4 py-1 sm:py-2 text-xs sm:text-sm bg-gradient-to-r from-purple-100 to-pink-100 dark:from-purple-900/30 dark:to-pink-900/30 rounded-full border border-purple-200 dark:border-purple-800">
                                {tech.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-col sm:flex-row flex-wrap gap-3 sm:gap-4 pt-4 sm:pt-6">
                <ProjectLink href=project.live_url.as_str() primary=true>
                    "↗ Live Demo"
                </ProjectLink>
                <div class="flex gap-2 sm:gap-3">
                    <ProjectLink href=project.source.frontend.as_str()>"Frontend"</ProjectLink>
                    {project
                        .source
                        .backend
                        .as_deref()
                        .map(|href| view! { <ProjectLink href>"Backend"</ProjectLink> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectLink(href: &'static str, #[prop(optional)] primary: bool, children: Children) -> impl IntoView {
    let class = if primary {
        "inline-flex items-center justify-center gap-2 px-6 sm:px-8 py-3 sm:py-4 bg-gradient-to-r from-purple-600 to-pink-600 text-white rounded-lg sm:rounded-xl font-medium shadow-lg shadow-purple-500/25 hover:shadow-purple-500/40 transition-all duration-300 text-sm sm:text-base"
    } else {
        "flex-1 sm:flex-none inline-flex items-center justify-center gap-2 px-4 sm:px-6 py-3 sm:py-4 bg-gray-100 dark:bg-gray-700/50 rounded-lg sm:rounded-xl font-medium hover:bg-gray-200 dark:hover:bg-gray-600/50 transition-all duration-300 text-sm sm:text-base"
    };
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class=class>
            {children()}
        </a>
    }
}

/// Full-screen view of the gallery's modal state. Clicking the backdrop closes it.
#[component]
fn Lightbox() -> impl IntoView {
    let gallery = expect_context::<RwSignal<Gallery>>();
    let close = move || gallery.update(Gallery::close_modal);
    let step = move |direction: Direction| {
        gallery.update(|g| {
            g.advance_modal(direction);
        })
    };

    move || {
        gallery.with(|g| g.modal().cloned()).map(|modal| {
            let current = modal.current_index();
            let navigation = modal.has_navigation().then(|| {
                let dots = (0..modal.image_count())
                    .map(|i| {
                        let class = if i == current {
                            "w-1.5 sm:w-2 h-1.5 sm:h-2 rounded-full bg-white"
                        } else {
                            "w-1.5 sm:w-2 h-1.5 sm:h-2 rounded-full bg-white/40 hover:bg-white/60"
                        };
                        view! {
                            <button
                                class=class
                                aria-label=format!("Show image {}", i + 1)
                                on:click=move |_| {
                                    gallery.update(|g| {
                                        g.select_modal_index(i);
                                    })
                                }
                            />
                        }
                    })
                    .collect_view();
                view! {
                    <button
                        class="absolute left-2 sm:left-4 top-1/2 -translate-y-1/2 p-2 sm:p-3 rounded-full bg-black/60 text-white hover:scale-105 active:scale-95"
                        aria-label="Previous image"
                        on:click=move |_| step(Direction::Previous)
                    >
                        "‹"
                    </button>
                    <button
                        class="absolute right-2 sm:right-4 top-1/2 -translate-y-1/2 p-2 sm:p-3 rounded-full bg-black/60 text-white hover:scale-105 active:scale-95"
                        aria-label="Next image"
                        on:click=move |_| step(Direction::Next)
                    >
                        "›"
                    </button>
                    <div class="absolute bottom-4 left-1/2 -translate-x-1/2 bg-black/60 text-white px-3 sm:px-4 py-1 sm:py-2 rounded-full text-xs sm:text-sm">
                        {modal.counter()}
                    </div>
                    <div class="absolute bottom-12 sm:bottom-16 left-1/2 -translate-x-1/2 flex gap-2 bg-black/60 p-2 rounded-full">
                        {dots}
                    </div>
                }
            });
            view! {
                <div
                    class="fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-2 sm:p-4"
                    on:click=move |_| close()
                >
                    <div
                        class="relative max-w-7xl w-full aspect-video"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <img
                            src=modal.current_image().to_string()
                            alt="Preview"
                            class="w-full h-full object-contain"
                        />
                        <button
                            class="absolute top-2 sm:top-4 right-2 sm:right-4 p-2 border border-white/10 rounded-full bg-white/10 hover:bg-white/20 text-white transition-colors"
                            aria-label="Close preview"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                        {navigation}
                    </div>
                </div>
            }
        })
    }
}
