use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::assets::ORB_TEXTURE;
use crate::motion::{sparks, Ease, Spark, Timing};

pub const SPARK_COUNT: usize = 6;

const ENTER: Timing = Timing::secs(0.6).ease(Ease::EaseOut);
const SPIN: Timing = Timing::secs(0.6).ease(Ease::EaseOut);
const RING_PULSE: Timing = Timing::secs(2.0).ease(Ease::EaseInOut).forever();
const SPARK_LOOP: Timing = Timing::secs(2.0).ease(Ease::EaseOut).forever();
const TOOLTIP: Timing = Timing::secs(0.3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl OrbSize {
    pub fn class(self) -> &'static str {
        match self {
            OrbSize::Sm => "orb-sm",
            OrbSize::Md => "orb-md",
            OrbSize::Lg => "orb-lg",
        }
    }

    /// Diameter in rem.
    pub fn diameter(self) -> f64 {
        match self {
            OrbSize::Sm => 4.0,
            OrbSize::Md => 6.0,
            OrbSize::Lg => 8.0,
        }
    }
}

/// Where the badge and its tooltip rest for a given hover state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbPose {
    pub scale: f64,
    pub rotate: f64,
    pub ring_opacity: f64,
    pub tooltip_opacity: f64,
    pub tooltip_y: f64,
    pub tooltip_scale: f64,
}

impl OrbPose {
    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            Self {
                scale: 1.1,
                rotate: 360.0,
                ring_opacity: 1.0,
                tooltip_opacity: 1.0,
                tooltip_y: 0.0,
                tooltip_scale: 1.0,
            }
        } else {
            Self {
                scale: 1.0,
                rotate: 0.0,
                ring_opacity: 0.7,
                tooltip_opacity: 0.0,
                tooltip_y: 10.0,
                tooltip_scale: 0.9,
            }
        }
    }

    fn badge_style(&self) -> String {
        format!(
            "background-image: url({ORB_TEXTURE}); transform: scale({}) rotate({}deg); transition: {}",
            self.scale,
            self.rotate,
            SPIN.transition("transform"),
        )
    }

    fn ring_style(&self, hovered: bool) -> String {
        if hovered {
            format!("animation: {}", RING_PULSE.animation("ring-pulse"))
        } else {
            format!("opacity: {}", self.ring_opacity)
        }
    }

    fn tooltip_style(&self) -> String {
        format!(
            "opacity: {}; transform: translate(-50%, {}px) scale({}); transition: {}, {}",
            self.tooltip_opacity,
            self.tooltip_y,
            self.tooltip_scale,
            TOOLTIP.transition("opacity"),
            TOOLTIP.transition("transform"),
        )
    }
}

fn spark_style(spark: &Spark) -> String {
    format!(
        "--from-x: {:.1}px; --from-y: {:.1}px; --to-x: {:.1}px; --to-y: {:.1}px; animation: {}",
        spark.from.0,
        spark.from.1,
        spark.to.0,
        spark.to.1,
        SPARK_LOOP.delay(spark.delay).animation("spark-flight"),
    )
}

/// A timeline badge that reveals its era on hover.
#[component]
pub fn ChronoOrb(
    #[prop(into)] title: String,
    #[prop(into)] era: String,
    #[prop(into)] description: String,
    /// Fired on click. The orb itself does nothing else.
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    #[prop(optional)] size: OrbSize,
    /// Seconds before the entrance animation starts.
    #[prop(optional)]
    delay: f64,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let pose = move || OrbPose::for_hover(hovered.get());
    let orb_key = title.clone();

    view! {
        <div
            class="chrono-orb"
            data-orb=orb_key
            style=format!("animation: {}", ENTER.delay(delay).animation("orb-enter"))
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            <div
                class=format!("cosmic-orb {}", size.class())
                style=move || {
                    let diameter = size.diameter();
                    format!("width: {diameter}rem; height: {diameter}rem; {}", pose().badge_style())
                }
            >
                <div class="orb-ring" style=move || pose().ring_style(hovered.get())></div>
                <div class="orb-shimmer"></div>
            </div>

            {move || hovered.get().then(|| view! { <OrbSparks/> })}

            <div class="orb-tooltip" style=move || pose().tooltip_style()>
                <h4 class="futuristic-text orb-title">{title}</h4>
                <p class="mythical-text orb-era">{era}</p>
                <p class="orb-description">{description}</p>
            </div>
        </div>
    }
}

/// Particles thrown off while the pointer rests on an orb. Every hover
/// scatters a fresh set.
#[component]
fn OrbSparks() -> impl IntoView {
    let mut rng = SmallRng::from_entropy();
    let sparks = sparks(&mut rng, SPARK_COUNT);

    view! {
        <div class="orb-sparks">
            {sparks
                .iter()
                .map(|spark| view! { <span class="floating-particle spark" style=spark_style(spark)></span> })
                .collect_view()}
        </div>
    }
}
