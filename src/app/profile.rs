use leptos::prelude::*;

use crate::content::cards;
use crate::profile::ActiveProfile;

const PANEL_ID: &str = "profile-panel";

#[component]
pub fn ProfileTabs(#[prop(optional)] initial: ActiveProfile) -> impl IntoView {
    let active = RwSignal::new(initial);

    view! {
        <section class="profile" id="info">
            <div class="profile__tabs" role="tablist" aria-label="profile">
                {ActiveProfile::ALL
                    .into_iter()
                    .map(|profile| {
                        let selected = move || active.get() == profile;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                id=profile.tab_id()
                                aria-controls=PANEL_ID
                                aria-selected=move || selected().to_string()
                                class=move || {
                                    if selected() { "profile__tab is-active" } else { "profile__tab" }
                                }
                                on:click=move |_| active.maybe_update(|a| a.select(profile))
                            >
                                {profile.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="profile__panel"
                role="tabpanel"
                id=PANEL_ID
                aria-labelledby=move || active.get().tab_id()
            >
                <h3 class="profile__heading">{move || active.get().heading()}</h3>
                <ol class="profile__list">
                    <For
                        each=move || cards(active.get().entries())
                        key=|card| card.key
                        let:card
                    >
                        <li class="profile__entry">
                            <span class="profile__period">{card.tag}</span>
                            <h4 class="profile__title">{card.title}</h4>
                            <p class="profile__org">{card.subtitle}</p>
                            {card.detail.map(|detail| view! { <p class="profile__detail">{detail}</p> })}
                        </li>
                    </For>
                </ol>
            </div>
        </section>
    }
}
