//! Declarative motion primitives shared by the page components.
//!
//! Nothing here schedules frames. Timing values are rendered into CSS and the
//! browser's compositor runs them; the rest is arithmetic over pointer and
//! scroll input.

pub mod curve;
pub mod listener;
pub mod particles;
pub mod pointer;
pub mod timing;

pub use curve::{Curve, BEAM_OPACITY, CITY_SCALE, TEXT_LIFT};
pub use listener::{
    track_pointer, track_scroll, EventSource, PointerHandler, PointerSample, ScrollHandler,
    Subscription, ViewportEvents, WindowEvents,
};
pub use particles::{ambient_field, sparks, Drift, Spark, AMBIENT_PARTICLES, AMBIENT_SEED};
pub use pointer::{PointerOffset, Tilt, Viewport};
pub use timing::{stagger, Ease, Timing};
