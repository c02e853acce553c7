use leptos::logging::log;
use leptos::prelude::*;

use crate::assets::HERO_CITYSCAPE;
use crate::components::{
    Button, ButtonSize, ButtonVariant, ChronoOrb, EnergyBeam, Intensity,
};
use crate::models::TIMELINE_EVENTS;
#[cfg(feature = "hydrate")]
use crate::motion::ViewportEvents;
use crate::motion::{
    ambient_field, stagger, track_pointer, track_scroll, Drift, Ease, EventSource, PointerOffset,
    Tilt, Timing, AMBIENT_PARTICLES, AMBIENT_SEED, BEAM_OPACITY, CITY_SCALE, TEXT_LIFT,
};

const TITLE: Timing = Timing::secs(1.0).delay(0.5);
const SUBTITLE: Timing = Timing::secs(1.0).delay(0.8);
const ACTIONS: Timing = Timing::secs(1.0).delay(1.1);
const ORB_ROW: Timing = Timing::secs(1.0).delay(1.5);
const ORB_FIRST_DELAY: f64 = 1.8;
const ORB_STAGGER: f64 = 0.2;
const INDICATOR: Timing = Timing::secs(2.0).forever();

fn drift_style(drift: &Drift) -> String {
    let bob = Timing::secs(drift.duration)
        .delay(drift.delay)
        .ease(Ease::EaseInOut)
        .forever();
    format!(
        "left: {:.3}%; top: {:.3}%; animation: {}",
        drift.left,
        drift.top,
        bob.animation("particle-drift")
    )
}

/// Entrance delay of the `index`th timeline orb.
pub fn orb_delay(index: usize) -> f64 {
    stagger(ORB_FIRST_DELAY, ORB_STAGGER, index)
}

/// The full-viewport opening section: parallax city, beam, and timeline orbs.
#[component]
pub fn HeroSection(
    /// Where pointer and scroll input comes from. The browser window when omitted.
    #[prop(optional, into)]
    events: Option<EventSource>,
) -> impl IntoView {
    let (pointer, set_pointer) = signal(PointerOffset::CENTER);
    let (scroll_y, set_scroll_y) = signal(0.0_f64);
    let events = events.unwrap_or_default();

    // Both listeners are released when this section's owner is cleaned up.
    track_pointer(&events, move |offset| set_pointer.set(offset));
    track_scroll(&events, move |y| set_scroll_y.set(y));

    // A page restored mid-scroll has no scroll event yet. Read the offset once
    // hydration is done so the server markup still matches.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| set_scroll_y.set(events.scroll_y()));

    let beam_opacity = Memo::new(move |_| BEAM_OPACITY.sample(scroll_y.get()));
    let city_scale = Memo::new(move |_| CITY_SCALE.sample(scroll_y.get()));
    let text_lift = Memo::new(move |_| TEXT_LIFT.sample(scroll_y.get()));
    let tilt = Memo::new(move |_| Tilt::from_offset(pointer.get()));

    let particles = ambient_field(AMBIENT_SEED, AMBIENT_PARTICLES);

    view! {
        <section class="hero">
            <div class="hero-backdrop bg-gradient-cosmic"></div>

            <div class="hero-particles">
                {particles
                    .iter()
                    .map(|drift| {
                        view! {
                            <span class="floating-particle ambient-particle" style=drift_style(drift)></span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="hero-city" style=move || format!("transform: scale({:.4})", city_scale.get())>
                <div
                    class="city-dome dome-effect"
                    style=move || {
                        format!(
                            "background-image: url({HERO_CITYSCAPE}); transform: {}",
                            tilt.get().to_css(),
                        )
                    }
                >
                    <div class="dome-shimmer bg-gradient-dome"></div>
                    <div class="dome-beam" style=move || format!("opacity: {:.3}", beam_opacity.get())>
                        <EnergyBeam height="600px" intensity=Intensity::High/>
                    </div>
                </div>
            </div>

            <div
                class="hero-content"
                style=move || format!("transform: translateY({:.2}px)", text_lift.get())
            >
                <h1
                    class="mythical-heading hero-title"
                    style=format!("animation: {}", TITLE.animation("rise-far"))
                >
                    "CHRONOPOLIS"
                </h1>

                <p
                    class="futuristic-text hero-subtitle"
                    style=format!("animation: {}", SUBTITLE.animation("rise-near"))
                >
                    "Where Time and Eternity Converge"
                </p>

                <div class="hero-actions" style=format!("animation: {}", ACTIONS.animation("rise-near"))>
                    <Button variant=ButtonVariant::Chronos size=ButtonSize::Xl>
                        "Enter the City"
                    </Button>
                    <Button variant=ButtonVariant::Ethereal size=ButtonSize::Xl>
                        "Explore Timelines"
                    </Button>
                </div>

                <div class="hero-orbs" style=format!("animation: {}", ORB_ROW.animation("fade-in"))>
                    {TIMELINE_EVENTS
                        .iter()
                        .enumerate()
                        .map(|(index, event)| {
                            let title = event.title;
                            view! {
                                <ChronoOrb
                                    title=event.title
                                    era=event.era
                                    description=event.description
                                    delay=orb_delay(index)
                                    on_click=Callback::new(move |_: ()| log!("Exploring {title}"))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="scroll-indicator" style=format!("animation: {}", INDICATOR.animation("bob-wide"))>
                <p class="scroll-label">"Discover More"</p>
                <div class="scroll-mouse">
                    <div class="scroll-dot" style=format!("animation: {}", INDICATOR.animation("bob-deep"))></div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::motion::listener::testing::FakeWindow;
    use crate::motion::Viewport;

    #[test]
    fn unmounting_releases_window_listeners() {
        let window = FakeWindow::default();
        let owner = Owner::new();

        let events = EventSource::new(window.clone());
        let html = owner.with(|| view! { <HeroSection events=events/> }.to_html());
        assert!(html.contains("hero-city"));
        assert_eq!(window.pointer_listeners(), 1);
        assert_eq!(window.scroll_listeners(), 1);

        owner.cleanup();
        assert_eq!(window.pointer_listeners(), 0);
        assert_eq!(window.scroll_listeners(), 0);

        // Nothing is left to hear these.
        window.move_pointer(0.0, 0.0, Viewport::new(800.0, 600.0));
        window.scroll_to(300.0);
        assert_eq!(window.pointer_listeners(), 0);
    }

    #[test]
    fn orbs_enter_one_after_another() {
        let delays: Vec<_> = (0..TIMELINE_EVENTS.len())
            .map(|i| (orb_delay(i) * 10.0).round() as u32)
            .collect();
        assert_eq!(delays, vec![18, 20, 22, 24, 26]);
    }

    #[test]
    fn drift_style_uses_particle_timing() {
        let drift = Drift {
            left: 12.5,
            top: 80.0,
            duration: 3.25,
            delay: 1.5,
        };
        assert_eq!(
            drift_style(&drift),
            "left: 12.500%; top: 80.000%; animation: particle-drift 3250ms ease-in-out 1500ms infinite both"
        );
    }
}
