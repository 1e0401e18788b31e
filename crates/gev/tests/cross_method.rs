//! Cross-method consistency between the L-moment and MLE fits.

use approx::assert_relative_eq;
use pluvio_gev::{GevParams, fit_lmoments, fit_mle};
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
fn methods_agree_on_design_quantiles() {
    let truth = GevParams::new(2.5, 0.6, 0.05).unwrap();
    let data = sample_gev(&truth, 2000, 314);

    let lmom = fit_lmoments(&data).unwrap();
    let mle = fit_mle(&data).unwrap();

    // The 1-1/R quantiles drive the IDF thresholds; the two estimators
    // should agree within sampling noise on a sample this large.
    for &p in &[0.5, 0.9, 0.98, 0.99] {
        let a = lmom.quantile(p).unwrap();
        let b = mle.quantile(p).unwrap();
        assert_relative_eq!(a, b, epsilon = a.abs() * 0.1);
    }
}

#[test]
fn both_methods_reject_degenerate_input() {
    let flat = vec![1.0; 60];
    assert!(fit_lmoments(&flat).is_err());
    assert!(fit_mle(&flat).is_err());
}

#[test]
fn short_record_behaves_like_real_use() {
    // 56 values, the length of a historical annual candidate set.
    let truth = GevParams::new(1.8, 0.4, -0.1).unwrap();
    let data = sample_gev(&truth, 56, 2024);

    let lmom = fit_lmoments(&data).unwrap();
    let q100 = lmom.quantile(1.0 - 1.0 / 100.0).unwrap();
    // Small-sample estimate is noisy but must stay in a sane range
    // around the true 100-year value.
    let truth_q100 = truth.quantile(0.99).unwrap();
    assert!(
        q100 > truth_q100 * 0.5 && q100 < truth_q100 * 2.0,
        "q100 {q100} too far from truth {truth_q100}"
    );
}
