use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::browser::{BrowserScheduler, ClientCell};
use super::interaction_config;
use crate::config::OBSERVER_THRESHOLDS;
use crate::content::{CTA_HREF, CTA_LABEL, HERO_COPY, HERO_SUBTEXT};
use crate::tooltip::{CursorTooltip, PointerPosition, TooltipState};
use crate::visibility::VisibilityObserver;

fn cta_class(visible: bool) -> &'static str {
    if visible {
        "hero__cta is-visible"
    } else {
        "hero__cta"
    }
}

fn tooltip_class(leaving: bool) -> &'static str {
    if leaving {
        "cursor-tooltip leaving"
    } else {
        "cursor-tooltip"
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let config = interaction_config();
    let hero_ref = NodeRef::<html::Section>::new();

    let (tooltip, set_tooltip) = signal(TooltipState::default());
    let cursor = ClientCell::new(move || {
        CursorTooltip::new(BrowserScheduler, config.tooltip, move |state| {
            set_tooltip.set(state)
        })
    });
    on_cleanup(move || cursor.update(|c| c.teardown()));

    let (cta_visible, set_cta_visible) = signal(false);
    let cta = ClientCell::new(move || VisibilityObserver::<()>::new(config.cta_threshold));
    Effect::new(move |_| {
        let target = hero_ref.get().map(|_| ());
        cta.update(|observer| {
            if observer.attach(target) {
                log::debug!("observing hero visibility");
            }
        });
    });
    use_intersection_observer_with_options(
        hero_ref,
        move |entries, _| {
            for entry in entries {
                let ratio = entry.intersection_ratio();
                cta.update(|observer| {
                    if let Some(visible) = observer.observe(ratio) {
                        set_cta_visible.set(visible);
                    }
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(OBSERVER_THRESHOLDS.to_vec()),
    );
    on_cleanup(move || {
        cta.update(|observer| {
            observer.detach();
        })
    });

    let on_move = move |ev: MouseEvent| {
        let position = PointerPosition::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        cursor.update(|c| c.pointer_move(position));
    };

    view! {
        <section class="hero" id="home" node_ref=hero_ref>
            <div class="hero__content">
                <h1 class="hero__headline">
                    <span class="hero__glow">{HERO_COPY.prefix}</span>
                    {HERO_COPY.text}
                    <span
                        class="hero__highlight"
                        on:mouseenter=move |_| cursor.update(|c| c.pointer_enter())
                        on:mouseleave=move |_| cursor.update(|c| c.pointer_leave())
                        on:mousemove=on_move
                    >
                        {HERO_COPY.highlight}
                    </span>
                    {HERO_COPY.rest}
                    <span class="hero__dotted">{HERO_COPY.highlight2}</span>
                    {HERO_COPY.rest2}
                </h1>
                <p class="hero__subtext">{HERO_SUBTEXT}</p>
            </div>
            <a
                href=CTA_HREF
                class=move || cta_class(cta_visible.get())
            >
                {CTA_LABEL}
            </a>
            {move || {
                let state = tooltip.get();
                let flags = state.visibility();
                flags
                    .visible
                    .then(|| {
                        view! {
                            <div
                                class=tooltip_class(flags.leaving)
                                style:left=format!("{}px", state.position.x)
                                style:top=format!("{}px", state.position.y)
                            />
                        }
                    })
            }}
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_classes_follow_flags() {
        assert_eq!(cta_class(false), "hero__cta");
        assert_eq!(cta_class(true), "hero__cta is-visible");
        assert_eq!(tooltip_class(false), "cursor-tooltip");
        assert_eq!(tooltip_class(true), "cursor-tooltip leaving");
    }

    #[test]
    fn test_server_render_starts_hidden() {
        Owner::new().set();
        let html = view! { <Hero /> }.to_html();
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains(r#"class="hero__cta""#));
        assert!(html.contains(&format!(r#"href="{CTA_HREF}""#)));
        assert!(!html.contains("is-visible"));
        assert!(!html.contains("cursor-tooltip"));
        assert!(html.contains(HERO_COPY.highlight));
    }
}
