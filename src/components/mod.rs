mod button;
mod chrono_orb;
mod energy_beam;
mod hero_section;
mod navigation;

pub use button::{button_class, Button, ButtonSize, ButtonVariant};
pub use chrono_orb::{ChronoOrb, OrbPose, OrbSize, SPARK_COUNT};
pub use energy_beam::{EnergyBeam, Intensity};
pub use hero_section::{orb_delay, HeroSection};
pub use navigation::{BarPose, LinkPose, MenuPose, MenuState, Navigation};
