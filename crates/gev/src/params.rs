//! GEV parameter type with quantile, CDF, and log-density.

use crate::error::GevError;

/// Shape magnitudes below this are treated as the Gumbel limit.
pub(crate) const SHAPE_EPS: f64 = 1e-9;

/// Validated parameters of a Generalized Extreme Value distribution.
///
/// Hosking's sign convention for the shape `k`: positive `k` gives a
/// bounded upper tail (reverse-Weibull), negative `k` a heavy upper
/// tail (Fréchet), and `k = 0` the Gumbel limit. This matches the `c`
/// parameter of scipy's `genextreme`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GevParams {
    loc: f64,
    scale: f64,
    shape: f64,
}

impl GevParams {
    /// Create new GEV parameters after validating that `loc` and
    /// `shape` are finite and `scale` is finite and strictly positive.
    pub fn new(loc: f64, scale: f64, shape: f64) -> Option<Self> {
        if loc.is_finite() && shape.is_finite() && scale.is_finite() && scale > 0.0 {
            Some(Self { loc, scale, shape })
        } else {
            None
        }
    }

    /// Location parameter.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape parameter (Hosking convention, see type docs).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// `true` if the shape is within the Gumbel tolerance of zero.
    pub fn is_gumbel(&self) -> bool {
        self.shape.abs() < SHAPE_EPS
    }

    /// Inverse CDF: the value with cumulative probability `p`.
    ///
    /// # Errors
    ///
    /// Returns [`GevError::InvalidProbability`] unless `p` is in (0, 1).
    pub fn quantile(&self, p: f64) -> Result<f64, GevError> {
        if !(p > 0.0 && p < 1.0) {
            return Err(GevError::InvalidProbability { p });
        }
        let y = -p.ln(); // -ln(p), positive
        if self.is_gumbel() {
            Ok(self.loc - self.scale * y.ln())
        } else {
            Ok(self.loc + self.scale / self.shape * (1.0 - y.powf(self.shape)))
        }
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.is_gumbel() {
            return (-(-z).exp()).exp();
        }
        let t = 1.0 - self.shape * z;
        if t <= 0.0 {
            // Outside the support: above the upper bound for k > 0,
            // below the lower bound for k < 0.
            if self.shape > 0.0 { 1.0 } else { 0.0 }
        } else {
            (-t.powf(1.0 / self.shape)).exp()
        }
    }

    /// Natural log of the density, `-inf` outside the support.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.is_gumbel() {
            return -self.scale.ln() - z - (-z).exp();
        }
        let t = 1.0 - self.shape * z;
        if t <= 0.0 {
            return f64::NEG_INFINITY;
        }
        -self.scale.ln() + (1.0 / self.shape - 1.0) * t.ln() - t.powf(1.0 / self.shape)
    }
}
