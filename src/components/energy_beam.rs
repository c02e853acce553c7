use leptos::prelude::*;

use crate::assets::BEAM_TEXTURE;
use crate::motion::{stagger, Ease, Timing};

const RISE: Timing = Timing::secs(1.5).ease(Ease::EaseOut);
const FADE_IN: Timing = Timing::secs(1.0).delay(0.5);
const FLOW: Timing = Timing::secs(3.0).ease(Ease::Linear).forever();
const PULSE: Timing = Timing::secs(2.0).ease(Ease::Linear).forever();
const SPOKE_PULSE: Timing = Timing::secs(3.0).ease(Ease::EaseInOut).forever();

const PULSE_BANDS: usize = 3;
const PULSE_STAGGER: f64 = 0.7;
const SPOKES: usize = 8;
const SPOKE_STAGGER: f64 = 0.2;

/// Opacity preset for the beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub fn opacity(self) -> f64 {
        match self {
            Intensity::Low => 0.6,
            Intensity::Medium => 0.8,
            Intensity::High => 1.0,
        }
    }
}

/// `animation` value of the column itself: the entrance, plus the texture
/// scroll when animated.
fn column_animation(animated: bool) -> String {
    let mut layers = vec![RISE.animation("beam-rise"), FADE_IN.animation("beam-fade")];
    if animated {
        layers.push(FLOW.animation("beam-flow"));
    }
    layers.join(", ")
}

fn pulse_style(index: usize) -> String {
    format!(
        "animation: {}",
        PULSE.delay(stagger(0.0, PULSE_STAGGER, index)).animation("beam-pulse")
    )
}

fn spoke_style(index: usize, animated: bool) -> String {
    let angle = index as f64 * (360.0 / SPOKES as f64);
    let motion = if animated {
        format!(
            "animation: {}",
            SPOKE_PULSE
                .delay(stagger(0.0, SPOKE_STAGGER, index))
                .animation("spoke-pulse")
        )
    } else {
        "opacity: 0.5".to_string()
    };
    format!("--spoke-angle: {angle}deg; {motion}")
}

/// A vertical light column with radiating spokes.
#[component]
pub fn EnergyBeam(
    /// CSS length of the column.
    #[prop(into, default = "400px".to_string())]
    height: String,
    #[prop(optional)] intensity: Intensity,
    #[prop(default = true)] animated: bool,
) -> impl IntoView {
    view! {
        <div class="energy-beam-wrap" style=format!("opacity: {}", intensity.opacity())>
            <div
                class="energy-beam"
                style=format!(
                    "--beam-height: {height}; height: {height}; background-image: url({BEAM_TEXTURE}); animation: {}",
                    column_animation(animated),
                )
            >
                <div class="beam-core"></div>
                {animated
                    .then(|| {
                        (0..PULSE_BANDS)
                            .map(|i| view! { <div class="beam-pulse" style=pulse_style(i)></div> })
                            .collect_view()
                    })}
            </div>

            <div class="beam-spokes">
                {(0..SPOKES)
                    .map(|i| view! { <div class="beam-spoke" style=spoke_style(i, animated)></div> })
                    .collect_view()}
            </div>
        </div>
    }
}
