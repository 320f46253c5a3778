use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{self, ContactForm, Notice};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl border border-gray-200 dark:border-gray-700 bg-white/90 dark:bg-gray-700/90 focus:ring-2 focus:ring-blue-500 dark:focus:ring-blue-400 transition-all duration-200";
const LABEL_CLASS: &str = "block text-sm font-semibold mb-2 text-gray-800 dark:text-gray-200";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (notice, set_notice) = signal(None::<Notice>);
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        set_sending(true);
        set_notice(None);
        spawn_local(async move {
            let outcome = contact::submit(&snapshot).await;
            let settled = form
                .try_update(|f| f.settle(&outcome))
                .unwrap_or(Notice::Failed);
            set_notice(Some(settled));
            set_sending(false);
        });
    };

    view! {
        <section id="contact" class="py-20 px-4 md:px-8">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl sm:text-5xl font-bold mb-6 bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent">
                        "Let's Connect"
                    </h2>
                    <p class="text-xl text-gray-700 dark:text-gray-300 max-w-2xl mx-auto">
                        "Ready to bring your ideas to life? Drop me a message and let's create something amazing together."
                    </p>
                </div>
                <form
                    on:submit=on_submit
                    class="space-y-6 bg-white/80 dark:bg-gray-800/80 backdrop-blur-lg p-8 rounded-3xl shadow-xl"
                >
                    <div class="space-y-4">
                        <div>
                            <label for="name" class=LABEL_CLASS>
                                "Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                required
                                placeholder="Your name"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="email" class=LABEL_CLASS>
                                "Email"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                required
                                placeholder="your.email@example.com"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="message" class=LABEL_CLASS>
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                required
                                placeholder="Your message here..."
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.message = event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>
                    <button
                        type="submit"
                        disabled=sending
                        class="w-full py-4 px-6 text-white font-medium text-lg bg-gradient-to-r from-blue-500 via-indigo-500 to-purple-500 hover:from-blue-600 hover:via-indigo-600 hover:to-purple-600 rounded-xl transition-all duration-300 shadow-lg disabled:opacity-60 disabled:cursor-wait"
                    >
                        {move || if sending() { "Sending..." } else { "Send Message" }}
                    </button>
                    {move || {
                        notice
                            .get()
                            .map(|n| {
                                let class = if n.is_error() {
                                    "flex items-center justify-between p-4 rounded-xl bg-red-500/10 border border-red-500/40 text-red-600 dark:text-red-400"
                                } else {
                                    "flex items-center justify-between p-4 rounded-xl bg-green-500/10 border border-green-500/40 text-green-600 dark:text-green-400"
                                };
                                view! {
                                    <div role="status" class=class>
                                        <span>{n.text()}</span>
                                        <button
                                            type="button"
                                            aria-label="Dismiss"
                                            on:click=move |_| set_notice(None)
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </section>
    }
}
