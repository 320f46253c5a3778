use leptos::prelude::*;

#[component]
pub fn Avatar(src: &'static str, alt: &'static str, #[prop(optional)] ring: bool) -> impl IntoView {
    let frame = if ring {
        "relative w-64 h-64 sm:w-80 sm:h-80 lg:w-96 lg:h-96 rounded-full overflow-hidden ring-4 ring-purple-500/30 shadow-2xl"
    } else {
        "relative w-full max-w-md aspect-square rounded-3xl overflow-hidden shadow-2xl"
    };
    view! {
        <div class=frame>
            <img src=src alt=alt width="500" height="500" class="w-full h-full object-cover" />
        </div>
    }
}
