//! Paths of the static images served from `public/`.

pub const HERO_CITYSCAPE: &str = "/assets/chronopolis-hero.svg";
pub const ORB_TEXTURE: &str = "/assets/chrono-orb.svg";
pub const BEAM_TEXTURE: &str = "/assets/energy-beam.svg";
