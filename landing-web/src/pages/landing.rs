//! Landing Page
//!
//! Hero with the live demo, then alternating feature sections. Every
//! orientation is resolved here from the viewport context; the sections
//! themselves only see a boolean.

use leptos::prelude::*;
use lib_core::layout::{swap_unless_mobile, swap_when};

use crate::components::icons::{GlobeIcon, LockIcon, TextIcon};
use crate::components::{BenchmarkGraph, Footer, InteractiveDemo, Section};
use crate::state::viewport::use_viewport_context;
use crate::utils::constants::{DOCS_URL, GITHUB_URL};

#[component]
pub fn LandingPage() -> impl IntoView {
    let viewport = use_viewport_context();
    let mobile = viewport.mobile;
    let show_demo = viewport.show_demo;

    // swapped={!mobile}
    let alternate = Signal::derive(move || swap_unless_mobile(mobile.get()));
    // The graph only moves left when the demo column is on screen too.
    let graph_left = Signal::derive(move || swap_when(show_demo.get(), mobile.get()));

    view! {
        <main class="landing">
            <header class="hero">
                <div class="hero-text">
                    <h1>"Hi. I'm Harper."</h1>
                    <p class="hero-subtitle">
                        "The grammar checker for developers. Private, fast, and everywhere you write."
                    </p>
                    <div class="hero-actions">
                        <a class="btn" href=DOCS_URL>"Get Started"</a>
                        <a class="btn btn-secondary" href=GITHUB_URL>"GitHub"</a>
                    </div>
                </div>
                <div class="hero-demo">
                    <InteractiveDemo/>
                </div>
            </header>

            <Section
                title="What is it?"
                subtitle="Harper is a free English grammar checker designed to be just right. \
                          It catches the mistakes that matter without drowning your writing in \
                          style advice, and it understands Markdown, code comments, and commit messages."
            >
                <TextIcon/>
            </Section>

            <Section
                title="Private"
                subtitle="Harper runs on your devices. Your writing never goes somewhere you don't want it to: \
                          no accounts, no telemetry, no servers."
                swapped=alternate
            >
                <LockIcon/>
            </Section>

            <Section
                title="Native Everywhere"
                subtitle="Harper ships as a language server, a WebAssembly module, and a Rust crate, \
                          so it works in Neovim, Helix, VS Code, Zed, Obsidian, and the browser."
            >
                <GlobeIcon/>
            </Section>

            <Section
                title="Wicked Fast"
                subtitle="Because it runs locally, Harper serves up suggestions in milliseconds \
                          instead of waiting on a round trip to someone else's computer."
                swapped=graph_left
            >
                <BenchmarkGraph/>
            </Section>

            <Section
                title="Open Source"
                subtitle="Harper is completely open source under the Apache-2.0 license. \
                          Come pay us a visit on GitHub."
                swapped=alternate
                no_child=true
            />

            <Footer/>
        </main>
    }
}
