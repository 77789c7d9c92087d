//! Linear scale mapping a numeric domain onto a numeric range.
//!
//! Values outside the domain are extrapolated, never clamped.

/// A linear mapping from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Position of `x` within the domain, 0.0 at `domain[0]` and 1.0 at `domain[1]`.
    ///
    /// A zero-width domain puts every input at the midpoint; a NaN-width
    /// domain yields NaN.
    pub fn normalize(&self, x: f64) -> f64 {
        let [d0, d1] = self.domain;
        let span = d1 - d0;
        if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            0.5
        } else {
            (x - d0) / span
        }
    }

    /// Map `x` from the domain onto the range.
    pub fn apply(&self, x: f64) -> f64 {
        let [r0, r1] = self.range;
        let t = self.normalize(x);
        // Written as a weighted sum so t = 0 and t = 1 hit the endpoints exactly.
        r0 * (1.0 - t) + r1 * t
    }
}

/// One-shot form of [`LinearScale::apply`].
pub fn scale(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64, value: f64) -> f64 {
    LinearScale::new([domain_min, domain_max], [range_min, range_max]).apply(value)
}
