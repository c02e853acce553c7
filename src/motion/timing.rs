/// CSS easing keywords used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Ease,
    Linear,
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub fn as_css(self) -> &'static str {
        match self {
            Ease::Ease => "ease",
            Ease::Linear => "linear",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration, delay, easing and repeat of one animated property.
///
/// Built with const combinators so component timings can live in constants:
///
/// ```
/// use chronopolis::motion::{Ease, Timing};
///
/// const ENTER: Timing = Timing::secs(0.6).ease(Ease::EaseOut);
/// assert_eq!(ENTER.delay(1.8).animation("orb-enter"), "orb-enter 600ms ease-out 1800ms 1 both");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub forever: bool,
}

impl Timing {
    pub const fn secs(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::Ease,
            forever: false,
        }
    }

    pub const fn delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub const fn ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    pub const fn forever(self) -> Self {
        Self {
            forever: true,
            ..self
        }
    }

    /// `animation` shorthand for the named keyframes. Fill mode is always
    /// `both` so delayed entrances hold their first frame until they start.
    pub fn animation(&self, keyframes: &str) -> String {
        let iterations = if self.forever { "infinite" } else { "1" };
        format!(
            "{keyframes} {} {} {} {iterations} both",
            millis(self.duration),
            self.ease.as_css(),
            millis(self.delay),
        )
    }

    /// `transition` shorthand for one property. Repeat has no meaning here.
    pub fn transition(&self, property: &str) -> String {
        format!(
            "{property} {} {} {}",
            millis(self.duration),
            self.ease.as_css(),
            millis(self.delay),
        )
    }
}

/// Cascading delay for the `index`th item of a list.
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

// Whole milliseconds, so 1.8 + 3 * 0.2 renders as 2400ms rather than a float tail.
fn millis(secs: f64) -> String {
    format!("{}ms", (secs * 1000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn animation_shorthand_for_looping_pulse() {
        let pulse = Timing::secs(2.0).ease(Ease::EaseInOut).forever();
        assert_eq!(pulse.animation("ring-pulse"), "ring-pulse 2000ms ease-in-out 0ms infinite both");
    }

    #[test]
    fn transition_shorthand_ignores_repeat() {
        let t = Timing::secs(0.3).delay(0.4).forever();
        assert_eq!(t.transition("opacity"), "opacity 300ms ease 400ms");
    }

    #[test]
    fn stagger_rounds_cleanly_in_css() {
        let delay = stagger(1.8, 0.2, 3);
        assert_eq!(Timing::secs(0.6).delay(delay).animation("x"), "x 600ms ease 2400ms 1 both");
    }

    #[test]
    fn stagger_first_item_is_base() {
        assert_eq!(stagger(0.0, 0.1, 0), 0.0);
        assert_eq!(stagger(1.8, 0.2, 0), 1.8);
    }
}
