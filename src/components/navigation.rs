use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::models::NAV_ITEMS;
use crate::motion::{stagger, Ease, Timing};

const DROP_IN: Timing = Timing::secs(0.8).ease(Ease::EaseOut);
const PANEL: Timing = Timing::secs(0.3);
const BAR: Timing = Timing::secs(0.3);
const LINK_STAGGER: f64 = 0.1;

/// One hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPose {
    pub shift_y: f64,
    pub rotate: f64,
    pub opacity: f64,
}

impl BarPose {
    fn to_css(self) -> String {
        format!(
            "transform: translateY({}px) rotate({}deg); opacity: {}; transition: {}, {}",
            self.shift_y,
            self.rotate,
            self.opacity,
            BAR.transition("transform"),
            BAR.transition("opacity"),
        )
    }
}

/// One entry of the mobile panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkPose {
    pub opacity: f64,
    pub offset_x: f64,
    pub delay: f64,
}

impl LinkPose {
    fn to_css(self) -> String {
        let timing = PANEL.delay(self.delay);
        format!(
            "opacity: {}; transform: translateX({}px); transition: {}, {}",
            self.opacity,
            self.offset_x,
            timing.transition("opacity"),
            timing.transition("transform"),
        )
    }
}

/// Everything the mobile menu shows for one value of `open`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuPose {
    /// Grid row fraction of the panel: 0 collapsed, 1 natural height.
    pub panel: f64,
    pub bars: [BarPose; 3],
    pub links: Vec<LinkPose>,
    /// The call to action trailing the links.
    pub cta: LinkPose,
}

impl MenuPose {
    pub fn new(open: bool, items: usize) -> Self {
        let entry = |index: usize| LinkPose {
            opacity: if open { 1.0 } else { 0.0 },
            offset_x: if open { 0.0 } else { -20.0 },
            delay: stagger(0.0, LINK_STAGGER, index),
        };
        let bars = if open {
            [
                BarPose { shift_y: 8.0, rotate: 45.0, opacity: 1.0 },
                BarPose { shift_y: 0.0, rotate: 0.0, opacity: 0.0 },
                BarPose { shift_y: -8.0, rotate: -45.0, opacity: 1.0 },
            ]
        } else {
            [BarPose { shift_y: 0.0, rotate: 0.0, opacity: 1.0 }; 3]
        };

        Self {
            panel: if open { 1.0 } else { 0.0 },
            bars,
            links: (0..items).map(entry).collect(),
            cta: entry(items),
        }
    }

    fn panel_css(&self) -> String {
        format!(
            "grid-template-rows: {}fr; transition: {}",
            self.panel,
            PANEL.transition("grid-template-rows"),
        )
    }
}

/// Whether the mobile menu is open, and the pose that follows from it.
#[derive(Clone, Copy)]
pub struct MenuState {
    open: RwSignal<bool>,
    pub pose: Memo<MenuPose>,
}

impl MenuState {
    /// A closed menu over `items` links.
    pub fn new(items: usize) -> Self {
        let open = RwSignal::new(false);
        let pose = Memo::new(move |_| MenuPose::new(open.get(), items));
        Self { open, pose }
    }

    pub fn is_open(self) -> bool {
        self.open.get()
    }

    pub fn toggle(self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(self) {
        self.open.set(false);
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let menu = MenuState::new(NAV_ITEMS.len());
    let pose = menu.pose;

    view! {
        <nav class="site-nav" style=format!("animation: {}", DROP_IN.animation("nav-drop"))>
            <div class="nav-bar">
                <div class="nav-logo">
                    <span class="mythical-heading">"CHRONOPOLIS"</span>
                </div>

                <div class="nav-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=item.href class="nav-link futuristic-text" data-nav="desktop">
                                    {item.name}
                                    <span class="nav-underline"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav-cta">
                    <Button variant=ButtonVariant::Energy size=ButtonSize::Sm>
                        "Enter the Forge"
                    </Button>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.is_open().to_string()
                    on:click=move |_| menu.toggle()
                >
                    <div class="hamburger">
                        {(0..3)
                            .map(|i| {
                                view! {
                                    <span
                                        class="hamburger-bar"
                                        style=move || pose.with(|p| p.bars[i].to_css())
                                    ></span>
                                }
                            })
                            .collect_view()}
                    </div>
                </button>
            </div>

            <div class="nav-mobile" style=move || pose.with(|p| p.panel_css())>
                <div class="nav-mobile-inner">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <a
                                    href=item.href
                                    class="nav-mobile-link futuristic-text"
                                    data-nav="mobile"
                                    style=move || pose.with(|p| p.links[i].to_css())
                                    on:click=move |_| menu.close()
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="nav-mobile-cta" style=move || pose.with(|p| p.cta.to_css())>
                        <Button variant=ButtonVariant::Energy size=ButtonSize::Sm extra_class="w-full">
                            "Enter the Forge"
                        </Button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn opening_expands_panel_and_crosses_bars() {
        let pose = MenuPose::new(true, NAV_ITEMS.len());
        assert_eq!(pose.panel, 1.0);
        assert_eq!(pose.bars[0].rotate, 45.0);
        assert_eq!(pose.bars[1].opacity, 0.0);
        assert_eq!(pose.bars[2].rotate, -45.0);
        assert!(pose.links.iter().all(|l| l.opacity == 1.0 && l.offset_x == 0.0));
    }

    #[test]
    fn links_cascade_by_index() {
        let pose = MenuPose::new(true, NAV_ITEMS.len());
        let delays: Vec<_> = pose.links.iter().map(|l| (l.delay * 10.0).round() as u32).collect();
        assert_eq!(delays, vec![0, 1, 2, 3, 4]);
        assert!((pose.cta.delay - 0.5).abs() < 1e-9);
    }

    #[test]
    fn toggling_twice_collapses_everything() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuState::new(NAV_ITEMS.len());
            assert!(!menu.is_open());

            menu.toggle();
            assert!(menu.is_open());
            assert_eq!(menu.pose.get_untracked().panel, 1.0);

            menu.toggle();
            let closed = menu.pose.get_untracked();
            assert_eq!(closed.panel, 0.0);
            assert!(closed.links.iter().all(|l| l.opacity == 0.0));
            assert_eq!(closed.cta.opacity, 0.0);
            assert_eq!(closed, MenuPose::new(false, NAV_ITEMS.len()));
        });
    }

    #[test]
    fn choosing_a_link_closes_the_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuState::new(NAV_ITEMS.len());
            menu.toggle();
            menu.close();
            assert!(!menu.is_open());
            assert_eq!(menu.pose.get_untracked().bars, MenuPose::new(false, NAV_ITEMS.len()).bars);

            // Closing a closed menu leaves it closed.
            menu.close();
            assert!(!menu.is_open());
        });
    }

    #[test]
    fn closed_panel_css() {
        assert_eq!(
            MenuPose::new(false, 0).panel_css(),
            "grid-template-rows: 0fr; transition: grid-template-rows 300ms ease 0ms"
        );
    }
}
