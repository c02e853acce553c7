/// A linear mapping from an input domain to an output range, clamped at both
/// ends of the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

/// Beam opacity fades from 1 to 0.3 over the first 300px of scroll.
pub const BEAM_OPACITY: Curve = Curve::new((0.0, 300.0), (1.0, 0.3));
/// The city panel grows to 110% over the first 500px of scroll.
pub const CITY_SCALE: Curve = Curve::new((0.0, 500.0), (1.0, 1.1));
/// Hero copy rises 100px over the first 300px of scroll.
pub const TEXT_LIFT: Curve = Curve::new((0.0, 300.0), (0.0, -100.0));

impl Curve {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Evaluates the curve. Inputs outside the domain take the nearest
    /// endpoint's output; NaN and a zero-width domain take the start.
    pub fn sample(&self, value: f64) -> f64 {
        let (from, to) = self.input;
        let (start, end) = self.output;
        let span = to - from;
        if span == 0.0 || value.is_nan() {
            return start;
        }
        let t = ((value - from) / span).clamp(0.0, 1.0);
        // Weighted form hits both endpoints exactly.
        (start * (1.0 - t) + end * t).clamp(self.min_output(), self.max_output())
    }

    pub fn min_output(&self) -> f64 {
        self.output.0.min(self.output.1)
    }

    pub fn max_output(&self) -> f64 {
        self.output.0.max(self.output.1)
    }
}
