use chrono::Utc;
use leptos::prelude::*;

use super::browser::{BrowserScheduler, ClientCell};
use super::interaction_config;
use crate::clock::{ClockState, ClockTicker};
use crate::config::CLOCK_PLACEHOLDER;
use crate::content::{BRAND, LOCATION, NAV_LINKS};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="frame__top">
            <span class="frame__brand">{BRAND}</span>
            <nav class="frame__nav" aria-label="principal">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="frame__nav-link">
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="frame__meta">
                <span>{LOCATION}</span>
                <Clock />
            </div>
        </header>
    }
}

#[component]
fn Clock() -> impl IntoView {
    let config = interaction_config();
    let (clock, set_clock) = signal(None::<ClockState>);
    let ticker = ClientCell::new(move || {
        ClockTicker::new(BrowserScheduler, config.tick_period, Utc::now, move |state| {
            set_clock.set(Some(state))
        })
    });

    // started after hydration so the server-rendered placeholder is what gets hydrated
    Effect::new(move |_| {
        ticker.update(|t| {
            if let Err(err) = t.start() {
                log::warn!("clock not started: {err}");
            }
        });
    });
    on_cleanup(move || ticker.update(|t| t.stop()));

    move || match clock.get() {
        Some(ClockState { label, iso }) => view! { <time datetime=iso>{label}</time> }.into_any(),
        None => view! { <span class="frame__time-placeholder">{CLOCK_PLACEHOLDER}</span> }
            .into_any(),
    }
}
