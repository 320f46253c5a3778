use leptos::prelude::*;

use crate::content::Skill;

#[component]
pub fn Skills(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id="skills" class="py-20 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-16">
                <h2 class="text-4xl sm:text-5xl font-bold mb-4">"Skills & Expertise"</h2>
                <p class="text-lg text-gray-600 dark:text-gray-400">
                    "Technologies I work with to bring ideas to life"
                </p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {skills.iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-white/80 dark:bg-gray-800/80 shadow-lg border border-gray-200 dark:border-gray-700 hover:-translate-y-1 transition-transform">
            <div class="flex items-center gap-4 mb-4">
                <span class="text-3xl">{skill.icon.as_str()}</span>
                <div>
                    <h3 class="text-lg font-semibold">{skill.name.as_str()}</h3>
                    <span class="text-sm text-gray-500 dark:text-gray-400">
                        {skill.category.as_str()}
                    </span>
                </div>
                <span class="ml-auto text-sm font-medium text-purple-600 dark:text-purple-400">
                    {format!("{}%", skill.level)}
                </span>
            </div>
            <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                <div
                    class="h-full rounded-full bg-gradient-to-r from-purple-500 to-pink-500"
                    style=format!("width: {}%", skill.level)
                />
            </div>
        </div>
    }
}
