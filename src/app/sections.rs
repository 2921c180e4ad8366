use leptos::prelude::*;

use crate::content::{
    cards, mailto, ABOUT, BRAND, CONTACT_EMAIL, PROJECTS, SOCIAL_LINKS, TECH_GROUPS, TILES,
};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <h2 class="section__title">"ABOUT"</h2>
            {ABOUT.iter().map(|p| view! { <p class="about__text">{*p}</p> }).collect_view()}
        </section>
    }
}

#[component]
pub fn TileGrid() -> impl IntoView {
    view! {
        <section class="grid" id="projects">
            <For each=|| cards(TILES) key=|card| card.key let:card>
                <article class=format!("grid__item grid__item--{}", card.index + 1)>
                    <div class="grid__item-media" aria-hidden="true" />
                    <footer class="grid__item-footer">
                        <span class="grid__item-tag">{card.tag}</span>
                        <h2 class="grid__item-title">{card.title}</h2>
                        <p class="grid__item-subtitle">{card.subtitle}</p>
                    </footer>
                </article>
            </For>
        </section>
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    view! {
        <section class="work" id="work">
            <h2 class="section__title">"SELECTED WORK"</h2>
            <ul class="work__list">
                <For each=|| cards(PROJECTS) key=|card| card.key let:card>
                    <li class="work__item">
                        <a
                            href=card.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="work__link"
                        >
                            <span class="work__year">{card.tag}</span>
                            <h3 class="work__name">{card.title}</h3>
                        </a>
                        <p class="work__summary">{card.subtitle}</p>
                        <ul class="work__tokens" aria-label="stack">
                            {card
                                .tokens
                                .iter()
                                .map(|token| view! { <li class="token">{*token}</li> })
                                .collect_view()}
                        </ul>
                    </li>
                </For>
            </ul>
        </section>
    }
}

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section class="tech" id="tech">
            <h2 class="section__title">"TECH"</h2>
            <div class="tech__groups">
                <For each=|| TECH_GROUPS.iter() key=|group| group.id let:group>
                    <div class="tech__group">
                        <h3 class="tech__group-name">{group.name}</h3>
                        <ul class="tech__tokens">
                            {group
                                .tokens
                                .iter()
                                .map(|token| view! { <li class="token">{*token}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </For>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="contact" id="contact">
            <h2 class="section__title">"CONTACT"</h2>
            <p class="contact__lead">"Open to internships, side projects and a good coffee chat."</p>
            <a href=mailto(CONTACT_EMAIL) class="contact__email">
                {CONTACT_EMAIL}
            </a>
            <ul class="contact__social">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=format!("{} profile", link.label)
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="frame__bottom">
            <span>{BRAND}</span>
            <span class="frame__build">"built " {BUILD_TIME}</span>
            <a href="#home" class="frame__top-link">
                "TOP ↑"
            </a>
        </footer>
    }
}
