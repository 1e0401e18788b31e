//! GEV fitting by maximum likelihood via Nelder-Mead.
//!
//! Minimizes the negative log-likelihood over (shape, loc, ln scale)
//! with the `argmin` simplex solver. The log-scale coordinate keeps
//! the scale positive without constraint handling.

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;

use crate::error::GevError;
use crate::lmom::fit_lmoments;
use crate::params::GevParams;

/// Euler-Mascheroni constant, for the Gumbel moment start.
const EULER: f64 = 0.577_215_664_901_532_9;

/// Penalty cost returned when a trial point leaves the support.
const PENALTY: f64 = 1e10;

const MIN_SAMPLE: usize = 3;

/// Fits a GEV distribution by maximum likelihood.
///
/// Starting point is the L-moment fit when it succeeds, otherwise a
/// Gumbel method-of-moments guess.
///
/// # Errors
///
/// Returns [`GevError::InsufficientData`] or
/// [`GevError::DegenerateSample`] for unusable samples,
/// [`GevError::OptimizationFailed`] when the solver does not reach a
/// finite optimum, and [`GevError::InvalidParams`] when the optimum
/// lies outside the valid domain.
pub fn fit_mle(data: &[f64]) -> Result<GevParams, GevError> {
    if data.len() < MIN_SAMPLE {
        return Err(GevError::InsufficientData {
            n: data.len(),
            min: MIN_SAMPLE,
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(GevError::DegenerateSample);
    }
    let min_val = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_val = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (max_val - min_val).abs() < f64::EPSILON {
        return Err(GevError::DegenerateSample);
    }

    let start = initial_guess(data);
    let x0 = vec![start.shape(), start.loc(), start.scale().ln()];

    // Simplex: start point plus one offset vertex per coordinate.
    let steps = [0.1, 0.5 * start.scale(), 0.2];
    let mut simplex = Vec::with_capacity(4);
    simplex.push(x0.clone());
    for (i, &step) in steps.iter().enumerate() {
        let mut vertex = x0.clone();
        vertex[i] += step;
        simplex.push(vertex);
    }

    let cost = GevNll { data };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(1e-8)
        .map_err(|_| GevError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(1000))
        .run()
        .map_err(|_| GevError::OptimizationFailed)?;

    let state = result.state();
    let best = state
        .best_param
        .as_ref()
        .ok_or(GevError::OptimizationFailed)?;
    if !state.best_cost.is_finite() || state.best_cost >= PENALTY {
        return Err(GevError::OptimizationFailed);
    }

    let (shape, loc, scale) = (best[0], best[1], best[2].exp());
    GevParams::new(loc, scale, shape).ok_or_else(|| GevError::InvalidParams {
        loc,
        scale,
        shape,
        reason: "optimum outside valid parameter domain".to_string(),
    })
}

/// L-moment start when available, else Gumbel method of moments.
fn initial_guess(data: &[f64]) -> GevParams {
    if let Ok(params) = fit_lmoments(data) {
        return params;
    }
    let mean = pluvio_stats::mean(data);
    let sd = pluvio_stats::sd(data).max(1e-6);
    let scale = sd * 6f64.sqrt() / std::f64::consts::PI;
    let loc = mean - EULER * scale;
    // Validated inputs above keep this constructor from failing.
    GevParams::new(loc, scale, 0.1).unwrap_or_else(|| panic!("initial guess out of domain"))
}

/// Cost function for argmin: negative log-likelihood over
/// `[shape, loc, ln_scale]`.
struct GevNll<'a> {
    data: &'a [f64],
}

impl CostFunction for GevNll<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let (shape, loc, ln_scale) = (param[0], param[1], param[2]);
        if !shape.is_finite() || !loc.is_finite() || !ln_scale.is_finite() {
            return Ok(PENALTY);
        }
        let scale = ln_scale.exp();
        let params = match GevParams::new(loc, scale, shape) {
            Some(p) => p,
            None => return Ok(PENALTY),
        };

        let mut nll = 0.0;
        for &x in self.data {
            let lp = params.ln_pdf(x);
            if !lp.is_finite() {
                return Ok(PENALTY);
            }
            nll -= lp;
        }
        if nll.is_finite() { Ok(nll) } else { Ok(PENALTY) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample_gev(params: &GevParams, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let u: f64 = rng.random();
                let u = u.clamp(1e-12, 1.0 - 1e-12);
                params.quantile(u).unwrap()
            })
            .collect()
    }

    #[test]
    fn recovers_known_parameters() {
        let truth = GevParams::new(10.0, 2.0, 0.1).unwrap();
        let data = sample_gev(&truth, 3000, 11);
        let fit = fit_mle(&data).unwrap();
        assert_relative_eq!(fit.loc(), truth.loc(), epsilon = 0.3);
        assert_relative_eq!(fit.scale(), truth.scale(), epsilon = 0.3);
        assert_relative_eq!(fit.shape(), truth.shape(), epsilon = 0.1);
    }

    #[test]
    fn tail_quantile_agreement() {
        let truth = GevParams::new(3.0, 0.8, -0.15).unwrap();
        let data = sample_gev(&truth, 3000, 23);
        let fit = fit_mle(&data).unwrap();
        let q_true = truth.quantile(0.99).unwrap();
        let q_fit = fit.quantile(0.99).unwrap();
        assert_relative_eq!(q_fit, q_true, epsilon = q_true.abs() * 0.2);
    }

    #[test]
    fn likelihood_not_worse_than_start() {
        let truth = GevParams::new(10.0, 2.0, 0.05).unwrap();
        let data = sample_gev(&truth, 500, 5);
        let fit = fit_mle(&data).unwrap();
        let start = initial_guess(&data);
        let nll = |p: &GevParams| -> f64 { data.iter().map(|&x| -p.ln_pdf(x)).sum() };
        assert!(nll(&fit) <= nll(&start) + 1e-6);
    }

    #[test]
    fn rejects_short_sample() {
        assert!(matches!(
            fit_mle(&[1.0, 2.0]),
            Err(GevError::InsufficientData { .. })
        ));
    }

    #[test]
    fn rejects_constant_sample() {
        assert!(matches!(
            fit_mle(&[2.0; 40]),
            Err(GevError::DegenerateSample)
        ));
    }

    #[test]
    fn rejects_nan_sample() {
        let data = [1.0, f64::NAN, 3.0, 4.0];
        assert!(matches!(fit_mle(&data), Err(GevError::DegenerateSample)));
    }
}
