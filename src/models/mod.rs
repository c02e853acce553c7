mod nav;
mod timeline;

pub use nav::{NavItem, NAV_ITEMS};
pub use timeline::{TimelineEvent, TIMELINE_EVENTS};
