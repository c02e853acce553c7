/// An in-page anchor in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "The Dome", href: "#dome" },
    NavItem { name: "Landmarks", href: "#landmarks" },
    NavItem { name: "Chrono Orbs", href: "#orbs" },
    NavItem { name: "Chrono-Forge", href: "#forge" },
    NavItem { name: "About", href: "#about" },
];
