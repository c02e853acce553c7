#![cfg(feature = "ssr")]

use std::sync::Arc;

use chronopolis::components::{ChronoOrb, EnergyBeam, HeroSection, Intensity, Navigation};
use chronopolis::models::{NAV_ITEMS, TIMELINE_EVENTS};
use chronopolis::motion::AMBIENT_PARTICLES;
use hydration_context::SsrSharedContext;
use leptos::prelude::*;

/// Renders under a server context, the way the Axum integration does, so
/// window listeners stay inert.
fn render<V: IntoView>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new_root(Some(Arc::new(SsrSharedContext::new())));
    owner.with(|| build().to_html())
}

#[test]
fn hero_renders_one_orb_per_timeline_event() {
    let html = render(|| view! { <HeroSection/> });

    assert_eq!(html.matches("data-orb=").count(), TIMELINE_EVENTS.len());
    for event in TIMELINE_EVENTS {
        assert_eq!(html.matches(&format!("data-orb=\"{}\"", event.title)).count(), 1);
        assert!(html.contains(event.era), "missing era {}", event.era);
        assert!(html.contains(event.description), "missing description for {}", event.title);
    }
}

#[test]
fn hero_scatters_ambient_particles() {
    let html = render(|| view! { <HeroSection/> });
    assert_eq!(html.matches("ambient-particle").count(), AMBIENT_PARTICLES);
}

#[test]
fn hero_starts_untilted_and_unscrolled() {
    let html = render(|| view! { <HeroSection/> });
    assert!(html.contains("perspective(1000px) rotateX(0.000deg) rotateY(0.000deg)"));
    assert!(html.contains("transform: scale(1.0000)"));
    assert!(html.contains("opacity: 1.000"));
}

#[test]
fn navigation_renders_each_item_in_both_menus() {
    let html = render(|| view! { <Navigation/> });

    assert_eq!(html.matches("data-nav=\"desktop\"").count(), NAV_ITEMS.len());
    assert_eq!(html.matches("data-nav=\"mobile\"").count(), NAV_ITEMS.len());
    for item in NAV_ITEMS {
        assert_eq!(html.matches(&format!("href=\"{}\"", item.href)).count(), 2);
        assert_eq!(html.matches(item.name).count(), 2, "label {}", item.name);
    }
}

#[test]
fn navigation_starts_closed() {
    let html = render(|| view! { <Navigation/> });
    assert!(html.contains("grid-template-rows: 0fr"));
    assert!(html.contains("aria-expanded=\"false\""));
}

#[test]
fn resting_orb_hides_sparks() {
    let html = render(|| {
        view! { <ChronoOrb title="Quantum Future" era="2500 CE" description="Reality bends"/> }
    });
    assert!(html.contains("Quantum Future"));
    assert!(!html.contains("orb-sparks"));
}

#[test]
fn still_beam_has_no_pulses() {
    let html = render(|| view! { <EnergyBeam intensity=Intensity::Low animated=false/> });
    assert!(html.contains("opacity: 0.6"));
    assert!(html.contains("height: 400px"));
    assert!(!html.contains("beam-pulse\""));
    assert_eq!(html.matches("beam-spoke\"").count(), 8);
}
