use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactForm;
use crate::portfolio::{toggle_expanded, PROJECTS, SKILL_CATEGORIES, STATS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <HireMe />
        <section id="contact" class="py-20 px-4">
            <div class="text-center mb-16">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get In Touch"</h2>
                <p class="max-w-2xl mx-auto mt-6 text-gray-400">
                    "Have a project in mind or want to chat? Feel free to reach out!"
                </p>
            </div>
            <ContactForm />
        </section>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-[80vh] flex flex-col justify-center items-center text-center px-4 py-24"
        >
            <h1 class="text-4xl md:text-6xl font-bold mb-6 text-purple-300">
                "Hi, I'm " <span class="text-white">"Nightcrawler"</span>
            </h1>
            <p class="text-xl md:text-2xl text-gray-400 mb-8 max-w-2xl">
                "I'm a " <span class="font-medium text-white">"Full Stack Developer"</span>
                " creating beautiful and functional web experiences."
            </p>
            <div class="flex flex-wrap gap-4 justify-center">
                <a
                    href="#projects"
                    class="px-6 py-3 rounded-full font-medium bg-gradient-to-r from-purple-500 to-blue-500 hover:opacity-90 transition-all"
                >
                    "View My Work →"
                </a>
                <a
                    href="#contact"
                    class="px-6 py-3 rounded-full font-medium border-2 border-gray-600 hover:bg-purple-500/10 transition-colors"
                >
                    "Contact Me"
                </a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4">
            <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">"About Me"</h2>
            <div class="grid md:grid-cols-2 gap-12 items-center mb-12">
                <div class="bg-gray-900/50 border border-gray-800 rounded-xl p-6">
                    <h3 class="text-2xl font-bold mb-4">"Who am I?"</h3>
                    <p class="text-gray-400 mb-4">
                        "My journey into tech started in high school with HTML and CSS. What began as curiosity quickly became a full-on passion."
                    </p>
                    <p class="text-gray-400">
                        "These days I build full-stack applications that are both functional and thoughtfully designed, from the database to the last pixel."
                    </p>
                </div>
                <div class="space-y-6">
                    <div class="p-6 bg-gray-900/50 border border-gray-800 rounded-xl">
                        <h3 class="text-xl font-semibold mb-3 text-purple-300">"Experience"</h3>
                        <h4 class="font-medium">"Freelance Web Developer"</h4>
                        <p class="text-sm text-gray-400">"Remote • 2022 – Present"</p>
                    </div>
                    <div class="p-6 bg-gray-900/50 border border-gray-800 rounded-xl">
                        <h3 class="text-xl font-semibold mb-3 text-purple-300">"Education"</h3>
                        <h4 class="font-medium">"B.Sc. Software Engineering (In Progress)"</h4>
                    </div>
                </div>
            </div>
            <Stats />
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <div class="bg-gray-900/50 border border-gray-800 rounded-2xl p-8">
            <div class="grid grid-cols-2 gap-6 md:grid-cols-4">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="text-center">
                                <h3 class="text-3xl font-bold mb-1">{stat.value}</h3>
                                <p class="text-gray-400">{stat.name}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="text-center mb-12">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">"My Skills"</h2>
                <p class="max-w-2xl mx-auto text-gray-400">
                    "Here are the technologies and tools I work with, organized by category."
                </p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="rounded-xl bg-gray-900/50 border border-gray-800 p-6">
                                <h3 class="text-xl font-semibold mb-4 text-purple-300">
                                    {category.title}
                                </h3>
                                <ul class="space-y-4">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <li>
                                                    <div class="flex justify-between mb-1 text-sm">
                                                        <span>{skill.name}</span>
                                                        <span class="text-gray-400">
                                                            {format!("{}%", skill.level)}
                                                        </span>
                                                    </div>
                                                    <div class="h-2 rounded-full bg-gray-800">
                                                        <div
                                                            class="h-2 rounded-full bg-gradient-to-r from-purple-500 to-blue-500"
                                                            style=format!("width: {}%", skill.level)
                                                        ></div>
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    let expanded = RwSignal::new(None::<usize>);

    view! {
        <section id="projects" class="py-20 px-4">
            <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">"My Projects"</h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        let is_expanded = move || expanded.get() == Some(index);
                        view! {
                            <article class="rounded-xl bg-gray-900/50 border border-gray-800 p-6 hover:border-purple-500/50 transition-colors">
                                <h3 class="text-xl font-bold mb-3">{project.title}</h3>
                                <p class=move || {
                                    if is_expanded() {
                                        "text-gray-400 mb-2"
                                    } else {
                                        "text-gray-400 mb-2 line-clamp-2"
                                    }
                                }>{project.description}</p>
                                <button
                                    class="text-xs text-purple-300 underline mb-4"
                                    on:click=move |_| {
                                        expanded.update(|e| *e = toggle_expanded(*e, index))
                                    }
                                >
                                    {move || if is_expanded() { "Show less" } else { "Show more" }}
                                </button>
                                <div class="flex flex-wrap gap-2 mb-4">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! {
                                                <span class="px-2 py-1 text-xs font-medium rounded-full bg-purple-500/20 text-purple-300">
                                                    {*tag}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HireMe() -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <div class="rounded-2xl bg-gradient-to-r from-purple-500/20 to-blue-500/20 border border-purple-500/30 p-10 text-center">
                <h2 class="text-3xl font-bold mb-4">"Let's Work Together"</h2>
                <p class="max-w-2xl mx-auto text-gray-400 mb-8">
                    "I'm currently available for freelance work. If you're looking for a developer who can bring your ideas to life, let's chat!"
                </p>
                <div class="flex flex-wrap gap-4 justify-center">
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-full font-medium bg-gradient-to-r from-purple-500 to-blue-500 hover:opacity-90 transition-all"
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-full font-medium border-2 border-gray-600 hover:bg-purple-500/10 transition-colors"
                    >
                        "View My Work"
                    </a>
                </div>
            </div>
        </section>
    }
}
